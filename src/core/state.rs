//! Round state owned by the turn controller.
//!
//! ## RoundState
//!
//! - Round number (starts at 1)
//! - Pending actions for the round
//! - Resolving flag
//! - Winner (set once, never replaced)
//! - Action log

use serde::{Deserialize, Serialize};

use super::log::ActionLog;
use super::player::PlayerId;
use crate::actions::ActionRegistry;

/// Everything about the game except the board itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Current round (starts at 1).
    pub round: u32,

    /// Actions committed for the current round.
    pub pending: ActionRegistry,

    /// True only while a round is being resolved.
    pub resolving: bool,

    /// Winner, once a player's board has been emptied.
    pub winner: Option<PlayerId>,

    pub log: ActionLog,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            round: 1,
            pending: ActionRegistry::new(),
            resolving: false,
            winner: None,
            log: ActionLog::new(),
        }
    }
}

impl RoundState {
    /// Fresh state for round 1 with a log holding a single line.
    #[must_use]
    pub fn seeded(line: impl Into<String>) -> Self {
        Self {
            log: ActionLog::seeded(line),
            ..Self::default()
        }
    }

    /// Record the winner unless one is already set.
    ///
    /// Returns true if this call set it.
    pub fn declare_winner(&mut self, player: PlayerId) -> bool {
        if self.winner.is_some() {
            return false;
        }
        self.winner = Some(player);
        true
    }

    /// Whether the game has been decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
