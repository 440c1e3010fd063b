//! Cancellable timer for the scripted opponent's decision.
//!
//! Time is a logical millisecond clock advanced by the caller, so games
//! and tests drive it explicitly. Every cancellation bumps the epoch; a
//! fire whose epoch or round no longer matches the controller's is stale
//! and must be discarded.

use serde::{Deserialize, Serialize};

/// A single armed decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPolicy {
    /// Epoch the timer was armed in.
    pub epoch: u64,
    /// Round the timer was armed for.
    pub round: u32,
    /// Clock time at which it fires.
    pub due_at: u64,
}

/// At most one pending policy invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTimer {
    epoch: u64,
    pending: Option<ScheduledPolicy>,
}

impl PolicyTimer {
    /// Create an idle timer at epoch 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current epoch.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The armed invocation, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&ScheduledPolicy> {
        self.pending.as_ref()
    }

    /// Whether an invocation is armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Arm the timer, replacing any earlier invocation.
    pub fn schedule(&mut self, now: u64, delay_ms: u64, round: u32) -> ScheduledPolicy {
        let scheduled = ScheduledPolicy {
            epoch: self.epoch,
            round,
            due_at: now.saturating_add(delay_ms),
        };
        self.pending = Some(scheduled);
        scheduled
    }

    /// Drop any armed invocation and start a new epoch.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.epoch += 1;
    }

    /// Take the armed invocation if it is due at `now`.
    pub fn take_due(&mut self, now: u64) -> Option<ScheduledPolicy> {
        match self.pending {
            Some(scheduled) if scheduled.due_at <= now => self.pending.take(),
            _ => None,
        }
    }
}
