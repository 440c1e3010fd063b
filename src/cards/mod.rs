//! Card system: playable cards, effects, and templates.
//!
//! ## Key Types
//!
//! - `Card`: Closed enum over `AttackCard` and `SupportCard`
//! - `Effect`: Named one-shot effect carried by a card
//! - `AttackType`: Elemental or physical damage category
//! - `TemplateRegistry`: Immutable monster/card definitions by name

pub mod card;
pub mod registry;

pub use card::{AttackCard, AttackType, Card, Effect, EffectList, SupportCard};
pub use registry::{CardTemplate, MonsterTemplate, TemplateRegistry};
