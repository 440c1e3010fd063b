//! Attack card damage.
//!
//! ```text
//! magical:  MATK * power / 100 - RES * mitigation
//! physical: PATK * power / 100 - DEF * mitigation
//! ```
//!
//! The result is clamped at 0 before the critical multiplier, then rounded
//! to the nearest integer when it is subtracted from HP.

use serde::{Deserialize, Serialize};

use crate::cards::AttackCard;
use crate::core::CombatConfig;
use crate::monsters::Monster;

/// Which formula an attack used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageKind {
    Physical,
    Magical,
}

/// A computed hit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub kind: DamageKind,
    /// Damage before rounding. Never negative.
    pub amount: f64,
    pub critical: bool,
}

impl Hit {
    /// HP removed from the defender.
    #[must_use]
    pub fn dealt(&self) -> i64 {
        self.amount.round() as i64
    }
}

/// Damage before the critical roll. Never negative.
#[must_use]
pub fn base_damage(
    attacker: &Monster,
    defender: &Monster,
    card: &AttackCard,
    config: &CombatConfig,
) -> (DamageKind, f64) {
    let power = card.base_power as f64 / 100.0;

    let (kind, attack, defense) = if card.attack_type.is_magical_for(attacker.affinity) {
        (DamageKind::Magical, attacker.stats.matk, defender.stats.res)
    } else {
        (DamageKind::Physical, attacker.stats.patk, defender.stats.def)
    };

    let raw = attack as f64 * power - defense as f64 * config.mitigation_factor;
    (kind, raw.max(0.0))
}

/// Whether a roll in `[0, 100)` lands a critical hit for the attacker.
#[must_use]
pub fn is_critical(roll: f64, attacker: &Monster) -> bool {
    roll <= attacker.stats.skill as f64
}

/// Compute a full hit given the crit roll.
#[must_use]
pub fn compute_hit(
    attacker: &Monster,
    defender: &Monster,
    card: &AttackCard,
    roll: f64,
    config: &CombatConfig,
) -> Hit {
    let (kind, mut amount) = base_damage(attacker, defender, card, config);
    let critical = is_critical(roll, attacker);
    if critical {
        amount *= config.crit_multiplier;
    }
    Hit {
        kind,
        amount,
        critical,
    }
}
