//! Action hooks.
//!
//! Passive and reaction skills exist on every monster but the engine never
//! triggers them. Hooks are where a game plugs that behavior in: each
//! registered hook sees every action the resolver executes and may return
//! an [`Outcome`] to apply.
//!
//! - `BeforeAction` hooks run after the actor and target are found and
//!   before the card or skill resolves.
//! - `AfterAction` hooks run after the card or skill resolves and before
//!   the defeat check.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::behavior::Outcome;
use crate::actions::PendingAction;
use crate::monsters::Monster;

/// When a hook runs relative to the action it observes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookTiming {
    BeforeAction,
    AfterAction,
}

/// What a hook can see.
#[derive(Clone, Copy, Debug)]
pub struct HookContext<'a> {
    pub timing: HookTiming,
    pub round: u32,
    pub action: &'a PendingAction,
    pub actor: &'a Monster,
    pub target: &'a Monster,
}

/// A hook implementation.
pub type Hook = Arc<dyn Fn(&HookContext<'_>) -> Option<Outcome> + Send + Sync>;
