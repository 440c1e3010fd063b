//! Playable cards.
//!
//! `Card` is a closed enum over the two playable variants. The resolver
//! matches on it exhaustively, so adding a variant is a compile error at
//! every place that needs to handle it.
//!
//! Cards are not owned by a monster. They sit in a player's hand or deck
//! and may target any monster on the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;
use crate::monsters::{Affinity, Attribute};

/// Ordered effects attached to a card. Most cards carry one or two.
pub type EffectList = SmallVec<[Effect; 2]>;

/// A named one-shot effect.
///
/// `duration` is advisory metadata: effects are applied exactly once when
/// their card resolves and are never tracked or expired afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    pub name: String,
    pub description: String,
    pub duration: u32,
}

impl Effect {
    /// Create an effect.
    pub fn new(name: impl Into<String>, description: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            duration,
        }
    }
}

/// The damage category of an attack card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttackType {
    /// Elemental. Magical when it matches the attacker's affinity.
    Element(Affinity),
    /// Physical.
    Physical(Attribute),
}

impl AttackType {
    /// Whether this attack type uses the magical damage formula for an
    /// attacker with the given affinity.
    #[must_use]
    pub fn is_magical_for(self, affinity: Affinity) -> bool {
        matches!(self, AttackType::Element(element) if element == affinity)
    }
}

impl From<Affinity> for AttackType {
    fn from(affinity: Affinity) -> Self {
        AttackType::Element(affinity)
    }
}

impl From<Attribute> for AttackType {
    fn from(attribute: Attribute) -> Self {
        AttackType::Physical(attribute)
    }
}

/// A damage-dealing card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackCard {
    pub id: CardId,
    pub name: String,
    pub description: String,
    pub attack_type: AttackType,
    /// Percentage of the attacker's attack stat.
    pub base_power: i64,
    #[serde(default)]
    pub effects: EffectList,
    pub uses: u32,
}

/// A card that applies effects to its target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupportCard {
    pub id: CardId,
    pub name: String,
    pub description: String,
    pub effects: EffectList,
    pub uses: u32,
}

impl SupportCard {
    /// Create a support card.
    ///
    /// Panics if `effects` is empty.
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        description: impl Into<String>,
        effects: impl IntoIterator<Item = Effect>,
        uses: u32,
    ) -> Self {
        let effects: EffectList = effects.into_iter().collect();
        assert!(!effects.is_empty(), "Support card needs at least one effect");
        Self {
            id,
            name: name.into(),
            description: description.into(),
            effects,
            uses,
        }
    }
}

/// A playable card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Card {
    Attack(AttackCard),
    Support(SupportCard),
}

impl Card {
    /// The card's instance id.
    #[must_use]
    pub fn id(&self) -> CardId {
        match self {
            Card::Attack(card) => card.id,
            Card::Support(card) => card.id,
        }
    }

    /// The card's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Card::Attack(card) => &card.name,
            Card::Support(card) => &card.name,
        }
    }

    /// Remaining uses.
    #[must_use]
    pub fn uses(&self) -> u32 {
        match self {
            Card::Attack(card) => card.uses,
            Card::Support(card) => card.uses,
        }
    }

    /// Effects applied when the card resolves.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        match self {
            Card::Attack(card) => &card.effects,
            Card::Support(card) => &card.effects,
        }
    }

    /// A card with no uses left cannot be selected.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.uses() == 0
    }

    /// Whether this is an attack card.
    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(self, Card::Attack(_))
    }

    /// Spend one use. Never goes below zero.
    pub fn consume_use(&mut self) {
        let uses = match self {
            Card::Attack(card) => &mut card.uses,
            Card::Support(card) => &mut card.uses,
        };
        *uses = uses.saturating_sub(1);
    }
}

impl From<AttackCard> for Card {
    fn from(card: AttackCard) -> Self {
        Card::Attack(card)
    }
}

impl From<SupportCard> for Card {
    fn from(card: SupportCard) -> Self {
        Card::Support(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn quick_strike(uses: u32) -> Card {
        Card::Attack(AttackCard {
            id: CardId::new(1),
            name: "Quick Strike".to_string(),
            description: "A swift physical attack".to_string(),
            attack_type: Attribute::Slash.into(),
            base_power: 70,
            effects: smallvec![],
            uses,
        })
    }

    #[test]
    fn test_consume_use_saturates() {
        let mut card = quick_strike(1);
        card.consume_use();
        assert_eq!(card.uses(), 0);
        assert!(card.is_exhausted());

        card.consume_use();
        assert_eq!(card.uses(), 0);
    }

    #[test]
    fn test_magical_only_on_matching_element() {
        let fire: AttackType = Affinity::Fire.into();
        let slash: AttackType = Attribute::Slash.into();

        assert!(fire.is_magical_for(Affinity::Fire));
        assert!(!fire.is_magical_for(Affinity::Water));
        assert!(!slash.is_magical_for(Affinity::Fire));
    }

    #[test]
    #[should_panic(expected = "at least one effect")]
    fn test_support_card_requires_effects() {
        SupportCard::new(CardId::new(2), "Empty", "", Vec::new(), 1);
    }

    #[test]
    fn test_card_serialization_is_tagged() {
        let card = quick_strike(4);
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"type\":\"ATTACK\""));
        assert!(json.contains("\"attack_type\":\"SLASH\""));

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
