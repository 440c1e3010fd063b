//! Entity identification for monsters and card instances.
//!
//! Every monster on a board and every card in a hand or deck carries a
//! unique id, allocated once at game start by an [`IdAllocator`].
//!
//! ## Usage
//!
//! ```
//! use monster_duel::core::{IdAllocator, MonsterId, CardId};
//!
//! let mut ids = IdAllocator::new();
//!
//! let warrior = ids.monster();
//! let strike = ids.card();
//!
//! assert_eq!(warrior, MonsterId::new(1));
//! assert_eq!(strike, CardId::new(2));
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for a monster instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    /// Create a new monster ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Monster({})", self.0)
    }
}

/// Identifier for a card instance.
///
/// Two copies of "Quick Strike" in the same deck have different `CardId`s,
/// so their use counters are tracked independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic id source shared by monsters and cards.
///
/// Ids start at 1 and are never reused within a game.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create a new allocator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u32 {
        self.next += 1;
        self.next
    }

    /// Allocate a monster id.
    pub fn monster(&mut self) -> MonsterId {
        MonsterId(self.bump())
    }

    /// Allocate a card id.
    pub fn card(&mut self) -> CardId {
        CardId(self.bump())
    }
}
