//! Round lifecycle.
//!
//! ```text
//! Idle -> CollectingActions -> Resolving -> RoundComplete -> CollectingActions ...
//!                                                         \-> GameOver
//! ```
//!
//! - `TurnController`: Owns the board and round state, runs the loop
//! - `PolicyTimer`: Cancellable delay before the scripted opponent acts

mod timer;
mod turn;

pub use timer::{PolicyTimer, ScheduledPolicy};
pub use turn::{PolicyTick, ResolutionStatus, TurnController, TurnPhase};
