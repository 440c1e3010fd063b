//! Player identification and per-player board state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Player / Roster
//!
//! A player's monsters, hand, and deck, and the seating-ordered set of
//! players in a game. Collections are `im` persistent
//! vectors so the resolver can snapshot the whole board in O(1) and
//! mutate the copy without disturbing the state observers still see.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::entity::{CardId, MonsterId};
use crate::cards::Card;
use crate::monsters::Monster;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player and everything they control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    /// Monsters still on the board, in play order.
    pub monsters: Vector<Monster>,

    /// Cards available to play, in hand order.
    pub hand: Vector<Card>,

    /// Reserve cards. Draws pick a uniformly random index, so order is
    /// not significant.
    pub deck: Vector<Card>,

    /// Whether the scripted opponent picks this player's actions.
    #[serde(default)]
    pub policy_controlled: bool,
}

impl Player {
    /// Create a player with no monsters or cards.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            monsters: Vector::new(),
            hand: Vector::new(),
            deck: Vector::new(),
            policy_controlled: false,
        }
    }

    /// Add a monster (builder pattern).
    #[must_use]
    pub fn with_monster(mut self, monster: Monster) -> Self {
        self.monsters.push_back(monster);
        self
    }

    /// Add cards to the hand (builder pattern).
    #[must_use]
    pub fn with_hand(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hand.extend(cards);
        self
    }

    /// Add cards to the deck (builder pattern).
    #[must_use]
    pub fn with_deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck.extend(cards);
        self
    }

    /// Mark the player as driven by the scripted opponent (builder pattern).
    #[must_use]
    pub fn policy_controlled(mut self, controlled: bool) -> Self {
        self.policy_controlled = controlled;
        self
    }

    /// Find a monster by id.
    #[must_use]
    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    /// Find a monster by id, mutably.
    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|m| m.id == id)
    }

    /// Remove a monster from the board.
    ///
    /// Returns the removed monster, or `None` if it was not present.
    pub fn remove_monster(&mut self, id: MonsterId) -> Option<Monster> {
        let pos = self.monsters.iter().position(|m| m.id == id)?;
        Some(self.monsters.remove(pos))
    }

    /// First monster in play order.
    #[must_use]
    pub fn first_monster(&self) -> Option<&Monster> {
        self.monsters.front()
    }

    /// Whether the player still has anything on the board.
    #[must_use]
    pub fn has_monsters(&self) -> bool {
        !self.monsters.is_empty()
    }

    /// Find a hand card by id.
    #[must_use]
    pub fn hand_card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id() == id)
    }

    /// Find a hand card by id, mutably.
    pub fn hand_card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.hand.iter_mut().find(|c| c.id() == id)
    }

    /// Hand cards that can still be played.
    pub fn playable_cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter().filter(|c| !c.is_exhausted())
    }
}

/// All players in a game, in seating order.
///
/// Cloning a roster is O(1); the resolver works on a clone and hands the
/// result back only once the whole round has resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vector<Player>,
}

impl Roster {
    /// Create a roster from players in seating order.
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            players: players.into_iter().collect(),
        }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether there are no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Find a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Find a player by id, mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Find a monster on a given player's board.
    #[must_use]
    pub fn monster(&self, player: PlayerId, monster: MonsterId) -> Option<&Monster> {
        self.player(player)?.monster(monster)
    }

    /// Find a monster on a given player's board, mutably.
    pub fn monster_mut(&mut self, player: PlayerId, monster: MonsterId) -> Option<&mut Monster> {
        self.player_mut(player)?.monster_mut(monster)
    }

    /// Total monsters on the board across all players.
    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.players.iter().map(|p| p.monsters.len()).sum()
    }

    /// Iterate over `(owner, monster)` for every monster on the board.
    pub fn monsters(&self) -> impl Iterator<Item = (PlayerId, &Monster)> {
        self.players
            .iter()
            .flat_map(|p| p.monsters.iter().map(move |m| (p.id, m)))
    }

    /// Iterate over players in seating order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate mutably over players in seating order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Player ids in seating order.
    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }
}

impl FromIterator<Player> for Roster {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self::new(iter)
    }
}
