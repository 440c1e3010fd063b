//! Pending actions for the current round.
//!
//! The registry holds at most one `PendingAction` per (player, monster).
//! Registering again for the same pair replaces the earlier choice and
//! moves it to the end of registration order, which is the tie-break order
//! the resolver uses for monsters with equal agility.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, MonsterId, PlayerId, Roster};

/// The monster an action is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub player: PlayerId,
    pub monster: MonsterId,
}

impl Target {
    /// Create a target.
    #[must_use]
    pub const fn new(player: PlayerId, monster: MonsterId) -> Self {
        Self { player, monster }
    }
}

/// One monster's committed choice for the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingAction {
    /// The acting player.
    pub player: PlayerId,

    /// The acting monster.
    pub monster: MonsterId,

    /// Card to play from the acting player's hand. `None` invokes the
    /// monster's active skill.
    pub card: Option<CardId>,

    pub target: Target,
}

impl PendingAction {
    /// Play a card.
    #[must_use]
    pub const fn play(player: PlayerId, monster: MonsterId, card: CardId, target: Target) -> Self {
        Self {
            player,
            monster,
            card: Some(card),
            target,
        }
    }

    /// Invoke the acting monster's active skill.
    #[must_use]
    pub const fn skill(player: PlayerId, monster: MonsterId, target: Target) -> Self {
        Self {
            player,
            monster,
            card: None,
            target,
        }
    }

    /// The (player, monster) pair this action belongs to.
    #[must_use]
    pub const fn actor(&self) -> (PlayerId, MonsterId) {
        (self.player, self.monster)
    }

    /// Human-readable selection line.
    ///
    /// Unresolvable targets are named "unknown"; lookups never fail.
    #[must_use]
    pub fn describe(&self, roster: &Roster) -> String {
        let target = roster
            .monster(self.target.player, self.target.monster)
            .map_or("unknown", |m| m.name.as_str());

        let choice = match self.card {
            Some(card) => roster
                .player(self.player)
                .and_then(|p| p.hand_card(card))
                .map_or_else(|| card.to_string(), |c| c.name().to_string()),
            None => roster
                .monster(self.player, self.monster)
                .map_or_else(|| "Active Skill".to_string(), |m| m.active_skill().name.clone()),
        };

        format!("{} selected {} targeting {}", self.player, choice, target)
    }
}

/// Pending actions in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRegistry {
    actions: Vec<PendingAction>,
}

impl ActionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action, replacing any earlier one for the same actor.
    pub fn register(&mut self, action: PendingAction) {
        self.actions.retain(|a| a.actor() != action.actor());
        self.actions.push(action);
    }

    /// The pending action for an actor, if any.
    #[must_use]
    pub fn get(&self, player: PlayerId, monster: MonsterId) -> Option<&PendingAction> {
        self.actions
            .iter()
            .find(|a| a.player == player && a.monster == monster)
    }

    /// Whether every monster on the board has a pending action.
    #[must_use]
    pub fn is_complete(&self, roster: &Roster) -> bool {
        roster
            .monsters()
            .all(|(owner, monster)| self.get(owner, monster.id).is_some())
    }

    /// Monsters on the board that still need an action.
    #[must_use]
    pub fn missing(&self, roster: &Roster) -> Vec<(PlayerId, MonsterId)> {
        roster
            .monsters()
            .filter(|(owner, monster)| self.get(*owner, monster.id).is_none())
            .map(|(owner, monster)| (owner, monster.id))
            .collect()
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Pending actions in registration order.
    #[must_use]
    pub fn as_slice(&self) -> &[PendingAction] {
        &self.actions
    }

    /// Drop every pending action.
    pub fn clear(&mut self) {
        self.actions.clear();
    }
}
