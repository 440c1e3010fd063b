//! The scripted opponent.
//!
//! Per monster: with `skill_probability` use the active skill on the first
//! monster of the first human player. Otherwise play a uniformly chosen
//! card that still has uses: attacks hit that same human monster, support
//! cards go on the policy player's own first monster. With no playable
//! card the active skill is used on the policy player's own first monster.

use super::DecisionPolicy;
use crate::actions::{PendingAction, Target};
use crate::cards::Card;
use crate::core::{GameRng, MonsterId, PlayerId, PolicyConfig, Roster};

/// Fixed-probability opponent.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedOpponent {
    skill_probability: f64,
}

impl Default for ScriptedOpponent {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}

impl ScriptedOpponent {
    /// Create an opponent with the given active-skill probability.
    #[must_use]
    pub fn new(skill_probability: f64) -> Self {
        Self { skill_probability }
    }

    /// Create an opponent from policy configuration.
    #[must_use]
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self::new(config.skill_probability)
    }

    /// Probability of preferring the active skill.
    #[must_use]
    pub fn skill_probability(&self) -> f64 {
        self.skill_probability
    }
}

impl DecisionPolicy for ScriptedOpponent {
    fn choose_actions(
        &self,
        roster: &Roster,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Vec<PendingAction> {
        let Some(me) = roster.player(player) else {
            return Vec::new();
        };

        let opponent = roster
            .iter()
            .find(|p| p.id != player && !p.policy_controlled)
            .and_then(|p| p.first_monster().map(|m| Target::new(p.id, m.id)));
        let Some(enemy) = opponent else {
            return Vec::new();
        };

        let playable: Vec<&Card> = me.playable_cards().collect();
        let own = |fallback: MonsterId| {
            let monster = me.first_monster().map_or(fallback, |m| m.id);
            Target::new(player, monster)
        };

        me.monsters
            .iter()
            .map(|monster| {
                if rng.gen_bool(self.skill_probability) {
                    return PendingAction::skill(player, monster.id, enemy);
                }

                match rng.choose(&playable).copied() {
                    Some(card) if card.is_attack() => {
                        PendingAction::play(player, monster.id, card.id(), enemy)
                    }
                    Some(card) => PendingAction::play(player, monster.id, card.id(), own(monster.id)),
                    // Nothing playable: the skill goes where a support card would.
                    None => PendingAction::skill(player, monster.id, own(monster.id)),
                }
            })
            .collect()
    }
}
