//! Decision policies for computer-controlled players.
//!
//! A policy only proposes `PendingAction`s. The controller registers them
//! through the same path as a human selection, so the resolver never
//! knows who chose an action.

mod scripted;

pub use scripted::ScriptedOpponent;

use crate::actions::PendingAction;
use crate::core::{GameRng, PlayerId, Roster};

/// Chooses actions for one policy-controlled player.
pub trait DecisionPolicy: Send + Sync {
    /// Propose at most one action per monster `player` controls.
    ///
    /// Returns an empty list when there is nothing sensible to do, for
    /// example when no opponent monster is left to target.
    fn choose_actions(
        &self,
        roster: &Roster,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Vec<PendingAction>;
}
