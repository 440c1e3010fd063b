//! Action registration.
//!
//! Every round, each monster on the board commits one `PendingAction`:
//! play a card from its owner's hand, or invoke its active skill. The
//! `ActionRegistry` collects them and reports when the round is ready to
//! resolve.

mod registry;

pub use registry::{ActionRegistry, PendingAction, Target};
