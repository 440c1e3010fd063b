//! Core engine types: ids, players, round state, RNG, configuration, log.
//!
//! This module contains the building blocks every other module shares.
//! Games configure the engine through `EngineConfig` rather than by
//! modifying the core.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod log;
pub mod state;

pub use entity::{CardId, IdAllocator, MonsterId};
pub use player::{Player, PlayerId, Roster};
pub use rng::GameRng;
pub use config::{CombatConfig, EngineConfig, PolicyConfig};
pub use log::ActionLog;
pub use state::RoundState;
