//! Behavior registry: named pure functions for skills and effects.
//!
//! Skills and effects on monsters and cards are plain data. What they *do*
//! is looked up here by name at resolution time. A behavior receives the
//! acting monster, the target monster and a read-only context, and returns
//! an [`Outcome`]: the stat changes to apply to each side plus an optional
//! extra log line. Behaviors never mutate state themselves.
//!
//! A name with no registered behavior resolves to an empty outcome, so
//! content can name skills the engine does not implement yet.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::hooks::{Hook, HookContext, HookTiming};
use crate::core::PlayerId;
use crate::monsters::{Monster, Stat, StatBlock};

/// A list of stat adjustments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDelta {
    changes: SmallVec<[(Stat, i64); 4]>,
}

impl StatDelta {
    /// No change.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A single adjustment.
    #[must_use]
    pub fn single(stat: Stat, amount: i64) -> Self {
        Self::none().and(stat, amount)
    }

    /// Add another adjustment (builder pattern).
    #[must_use]
    pub fn and(mut self, stat: Stat, amount: i64) -> Self {
        self.changes.push((stat, amount));
        self
    }

    /// Whether this delta changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.iter().all(|(_, amount)| *amount == 0)
    }

    /// Iterate over `(stat, amount)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i64)> + '_ {
        self.changes.iter().copied()
    }

    /// Apply to a stat block.
    pub fn apply_to(&self, stats: &mut StatBlock) {
        for (stat, amount) in self.iter() {
            stats.adjust(stat, amount);
        }
    }
}

/// Result of running a behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Changes to the acting monster.
    pub actor: StatDelta,
    /// Changes to the target monster.
    pub target: StatDelta,
    /// Extra log line, written after the resolver's own line.
    pub line: Option<String>,
}

impl Outcome {
    /// An outcome that changes nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// An outcome that only changes the target.
    #[must_use]
    pub fn on_target(delta: StatDelta) -> Self {
        Self {
            target: delta,
            ..Self::default()
        }
    }

    /// An outcome that only changes the actor.
    #[must_use]
    pub fn on_actor(delta: StatDelta) -> Self {
        Self {
            actor: delta,
            ..Self::default()
        }
    }

    /// Attach a log line (builder pattern).
    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }
}

/// Read-only facts about the action a behavior runs for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BehaviorContext {
    pub round: u32,
    pub actor_player: PlayerId,
    pub target_player: PlayerId,
}

/// A skill or effect implementation.
pub type Behavior = Arc<dyn Fn(&Monster, &Monster, &BehaviorContext) -> Outcome + Send + Sync>;

/// Skill, effect and hook implementations, keyed by name.
///
/// ## Example
///
/// ```
/// use monster_duel::effects::BehaviorRegistry;
/// use monster_duel::monsters::Stat;
///
/// let mut behaviors = BehaviorRegistry::new();
/// behaviors.register_effect("Burn", BehaviorRegistry::stat_shift(Stat::Hp, -5));
///
/// assert!(behaviors.has_effect("Burn"));
/// assert!(!behaviors.has_effect("Freeze"));
/// ```
#[derive(Clone, Default)]
pub struct BehaviorRegistry {
    skills: FxHashMap<String, Behavior>,
    effects: FxHashMap<String, Behavior>,
    hooks: Vec<(HookTiming, Hook)>,
}

impl std::fmt::Debug for BehaviorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut skills: Vec<_> = self.skills.keys().collect();
        skills.sort();
        let mut effects: Vec<_> = self.effects.keys().collect();
        effects.sort();
        f.debug_struct("BehaviorRegistry")
            .field("skills", &skills)
            .field("effects", &effects)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl BehaviorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A behavior that shifts one stat of the target by a fixed amount.
    #[must_use]
    pub fn stat_shift(
        stat: Stat,
        amount: i64,
    ) -> impl Fn(&Monster, &Monster, &BehaviorContext) -> Outcome + Clone + Send + Sync + 'static {
        move |_, _, _| Outcome::on_target(StatDelta::single(stat, amount))
    }

    /// Register a skill implementation, replacing any previous one.
    pub fn register_skill(
        &mut self,
        name: impl Into<String>,
        behavior: impl Fn(&Monster, &Monster, &BehaviorContext) -> Outcome + Send + Sync + 'static,
    ) {
        self.skills.insert(name.into(), Arc::new(behavior));
    }

    /// Register an effect implementation, replacing any previous one.
    pub fn register_effect(
        &mut self,
        name: impl Into<String>,
        behavior: impl Fn(&Monster, &Monster, &BehaviorContext) -> Outcome + Send + Sync + 'static,
    ) {
        self.effects.insert(name.into(), Arc::new(behavior));
    }

    /// Register a hook that runs around every resolved action.
    pub fn register_hook(
        &mut self,
        timing: HookTiming,
        hook: impl Fn(&HookContext<'_>) -> Option<Outcome> + Send + Sync + 'static,
    ) {
        self.hooks.push((timing, Arc::new(hook)));
    }

    /// Whether a skill implementation exists.
    #[must_use]
    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    /// Whether an effect implementation exists.
    #[must_use]
    pub fn has_effect(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    /// Run a skill. Unknown skills change nothing.
    #[must_use]
    pub fn run_skill(
        &self,
        name: &str,
        actor: &Monster,
        target: &Monster,
        ctx: &BehaviorContext,
    ) -> Outcome {
        self.skills
            .get(name)
            .map(|behavior| behavior(actor, target, ctx))
            .unwrap_or_default()
    }

    /// Run an effect. Unknown effects change nothing.
    #[must_use]
    pub fn run_effect(
        &self,
        name: &str,
        actor: &Monster,
        target: &Monster,
        ctx: &BehaviorContext,
    ) -> Outcome {
        self.effects
            .get(name)
            .map(|behavior| behavior(actor, target, ctx))
            .unwrap_or_default()
    }

    /// Hooks registered for a timing, in registration order.
    pub fn hooks(&self, timing: HookTiming) -> impl Iterator<Item = &Hook> {
        self.hooks
            .iter()
            .filter(move |(t, _)| *t == timing)
            .map(|(_, hook)| hook)
    }
}
