//! Monster data: stat blocks, skills, and type tags.

pub mod monster;
pub mod stats;

pub use monster::{Affinity, Attribute, Monster, Skill, SkillSet};
pub use stats::{Stat, StatBlock};
