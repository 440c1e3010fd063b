//! Behavior system for skills, effects, and action hooks.
//!
//! - `BehaviorRegistry`: Name -> pure function lookup for skills and effects
//! - `Outcome` / `StatDelta`: What a behavior asks the resolver to change
//! - `HookTiming` / `HookContext`: Extension point around every action
//!
//! ## Design Philosophy
//!
//! Entities stay free of code. A skill or effect is a name plus metadata;
//! the registry maps the name to a function that inspects the actor and
//! target and returns the stat changes. The resolver applies them. Content
//! is serializable and every behavior is testable in isolation.

mod behavior;
mod hooks;

pub use behavior::{Behavior, BehaviorContext, BehaviorRegistry, Outcome, StatDelta};
pub use hooks::{Hook, HookContext, HookTiming};
