//! Hand maintenance after a round.
//!
//! Exhausted cards leave the hand and are replaced one for one from the
//! deck. Draws pick a uniformly random deck index, so the deck behaves as
//! an unordered reserve.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player, PlayerId, Roster};

/// What a draw step did for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReport {
    pub player: PlayerId,
    /// Exhausted cards removed from the hand.
    pub removed: usize,
    /// Replacement cards moved from the deck into the hand.
    pub drawn: usize,
}

impl std::fmt::Display for DrawReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} drew {} new card(s)", self.player, self.drawn)
    }
}

/// Replace a player's exhausted hand cards from their deck.
///
/// Does nothing and returns `None` when no hand card is exhausted or the
/// deck is empty; exhausted cards then stay in hand until a card can be
/// drawn for them. Otherwise every exhausted card is removed (the rest of
/// the hand keeps its order) and up to that many cards are drawn,
/// stopping early if the deck runs out.
pub fn draw_cards(player: &mut Player, rng: &mut GameRng) -> Option<DrawReport> {
    let removed = player.hand.iter().filter(|c| c.is_exhausted()).count();
    if removed == 0 || player.deck.is_empty() {
        return None;
    }

    player.hand.retain(|c| !c.is_exhausted());

    let mut drawn = 0;
    while drawn < removed && !player.deck.is_empty() {
        let idx = rng.gen_index(player.deck.len());
        let card = player.deck.remove(idx);
        player.hand.push_back(card);
        drawn += 1;
    }

    Some(DrawReport {
        player: player.id,
        removed,
        drawn,
    })
}

/// Run [`draw_cards`] for every player in seating order.
pub fn refresh_hands(roster: &mut Roster, rng: &mut GameRng) -> Vec<DrawReport> {
    roster
        .iter_mut()
        .filter_map(|player| draw_cards(player, rng))
        .collect()
}
