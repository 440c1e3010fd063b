//! Combat resolution.
//!
//! - `execution_order`: Stable agility-descending action order
//! - `damage`: Attack card damage formula and critical rolls
//! - `CombatResolver`: Runs a round's actions against a board snapshot
//!
//! ## Round Algorithm
//!
//! 1. Snapshot the board.
//! 2. Order actions by the actor's AGI, highest first. Ties keep
//!    registration order.
//! 3. For each action: look up actor, target and card (skip with an
//!    error line if any is gone), run `BeforeAction` hooks, resolve the card
//!    or active skill, run `AfterAction` hooks, then remove the target if
//!    its HP dropped to 0 or below.
//! 4. The first player whose board is emptied hands the win to the
//!    player whose action did it.

pub mod damage;
mod order;
mod resolver;

pub use damage::{DamageKind, Hit};
pub use order::execution_order;
pub use resolver::{CombatResolver, Resolution, RoundReport, SkipReason, SkippedAction};
