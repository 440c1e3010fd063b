//! # monster-duel
//!
//! A turn-resolution engine for monster card battles.
//!
//! ## Design Principles
//!
//! 1. **Data, Not Code**: Monsters, cards, skills and effects are plain
//!    serializable data. What a skill or effect does lives in a
//!    `BehaviorRegistry` keyed by name.
//!
//! 2. **Owned State**: The `TurnController` owns the board and round state.
//!    Everyone else submits `PendingAction`s and reads observers.
//!
//! 3. **Deterministic**: Every random decision flows from one seed, so a
//!    game replays exactly from the same inputs.
//!
//! ## Architecture
//!
//! - **Snapshot Resolution**: A round resolves against an O(1) `im-rs`
//!   clone of the board and is swapped in only once complete.
//!
//! - **Log As Output**: Resolution never fails. Anomalies become lines in
//!   the append-only `ActionLog`; a typed `RoundReport` mirrors them.
//!
//! ## Modules
//!
//! - `core`: Ids, players, round state, RNG, configuration, log
//! - `monsters`: Stat blocks, skills, type tags
//! - `cards`: Attack and support cards, templates
//! - `effects`: Behavior registry and action hooks
//! - `actions`: Pending actions and the action registry
//! - `combat`: Turn order, damage, round resolution
//! - `zones`: Hand refresh between rounds
//! - `policy`: Decision policies for computer players
//! - `controller`: The round state machine and policy timer
//! - `games`: Starter content

pub mod core;
pub mod monsters;
pub mod cards;
pub mod effects;
pub mod actions;
pub mod combat;
pub mod zones;
pub mod policy;
pub mod controller;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    ActionLog, CardId, CombatConfig, EngineConfig, GameRng, IdAllocator, MonsterId,
    Player, PlayerId, PolicyConfig, Roster, RoundState,
};

pub use crate::monsters::{Affinity, Attribute, Monster, Skill, SkillSet, Stat, StatBlock};

pub use crate::cards::{
    AttackCard, AttackType, Card, CardTemplate, Effect, MonsterTemplate, SupportCard,
    TemplateRegistry,
};

pub use crate::effects::{
    BehaviorContext, BehaviorRegistry, HookContext, HookTiming, Outcome, StatDelta,
};

pub use crate::actions::{ActionRegistry, PendingAction, Target};

pub use crate::combat::{CombatResolver, Resolution, RoundReport, SkipReason, SkippedAction};

pub use crate::zones::{draw_cards, DrawReport};

pub use crate::policy::{DecisionPolicy, ScriptedOpponent};

pub use crate::controller::{PolicyTick, PolicyTimer, ResolutionStatus, TurnController, TurnPhase};

pub use crate::games::starter::StarterGameBuilder;

pub use crate::error::EngineError;
