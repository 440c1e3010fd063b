//! Card lifecycle between rounds.
//!
//! A card's uses are spent by the resolver. Once a round has resolved,
//! `draw_cards` clears spent cards out of a player's hand and draws
//! replacements from the deck.

mod lifecycle;

pub use lifecycle::{draw_cards, refresh_hands, DrawReport};
