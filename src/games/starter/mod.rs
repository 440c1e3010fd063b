//! Starter content: one monster, four cards.
//!
//! - "Rookie Warrior": FIRE / SLASH, active skill "Basic Strike"
//! - "Flame Slash" and "Quick Strike": attack cards
//! - "Battle Focus" and "Grit": support cards
//!
//! Each player gets the same monster and hand. The second player is
//! driven by the scripted opponent.

mod content;
mod game;

pub use content::{
    rookie_warrior, starter_behaviors, starter_cards, starter_templates, BATTLE_FOCUS,
    FLAME_SLASH, GRIT, QUICK_STRIKE, ROOKIE_WARRIOR, STARTER_CARDS,
};
pub use game::StarterGameBuilder;
