//! Engine error types.
//!
//! The round loop itself never fails: anomalies during resolution are
//! written to the action log and the offending action is skipped. These
//! errors only surface from the strict validation entry point
//! (`TurnController::try_register_action`) and from setup code.

use thiserror::Error;

use crate::core::{CardId, MonsterId, PlayerId};

/// Errors raised by validation and setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("game has not been started")]
    NotStarted,

    #[error("game is over, {0} already won")]
    GameOver(PlayerId),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("{player} has no monster {monster}")]
    UnknownMonster { player: PlayerId, monster: MonsterId },

    #[error("{player} has no card {card} in hand")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("card {0} has no uses left")]
    CardExhausted(CardId),

    #[error("unknown template '{0}'")]
    UnknownTemplate(String),
}
