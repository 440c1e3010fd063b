//! Monsters, their skills, and their type tags.
//!
//! A `Monster` is pure data. The behavior of its skills lives in the
//! [`BehaviorRegistry`](crate::effects::BehaviorRegistry), keyed by skill
//! name, so monsters can be cloned into round snapshots and serialized.

use serde::{Deserialize, Serialize};

use super::stats::StatBlock;
use crate::core::MonsterId;

/// Elemental category. An attack card whose attack type equals the
/// attacker's affinity is resolved as a magical attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Affinity {
    Fire,
    Water,
    Wind,
    Earth,
    Lightning,
}

/// Physical damage sub-category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Attribute {
    Slash,
    Blunt,
    Missile,
    Pierce,
}

/// A named monster skill.
///
/// Skills carry no executable code. Resolution looks up `name` in the
/// behavior registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
}

impl Skill {
    /// Create a skill.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The three skills every monster has.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillSet {
    /// Invocable in place of playing a card. Costs nothing.
    pub active: Skill,
    /// Not triggered by the engine; see `HookTiming` for the extension point.
    pub passive: Skill,
    /// Not triggered by the engine; see `HookTiming` for the extension point.
    pub reaction: Skill,
}

/// A monster on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub description: String,
    pub stats: StatBlock,
    pub affinity: Affinity,
    pub attribute: Attribute,
    pub skills: SkillSet,
}

impl Monster {
    /// The monster's active skill.
    #[must_use]
    pub fn active_skill(&self) -> &Skill {
        &self.skills.active
    }

    /// Whether the monster has been reduced to zero HP or below.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.stats.hp <= 0
    }
}
