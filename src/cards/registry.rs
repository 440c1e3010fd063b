//! Template registry for monsters and cards.
//!
//! Templates are the immutable definitions content authors supply. The
//! registry stores them by name and stamps out instances with fresh ids
//! at game start.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{AttackCard, AttackType, Card, Effect, EffectList, SupportCard};
use crate::core::IdAllocator;
use crate::error::EngineError;
use crate::monsters::{Affinity, Attribute, Monster, SkillSet, StatBlock};

/// Static definition of a monster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub name: String,
    pub description: String,
    pub stats: StatBlock,
    pub affinity: Affinity,
    pub attribute: Attribute,
    pub skills: SkillSet,
}

impl MonsterTemplate {
    /// Create a monster instance with a fresh id.
    pub fn instantiate(&self, ids: &mut IdAllocator) -> Monster {
        Monster {
            id: ids.monster(),
            name: self.name.clone(),
            description: self.description.clone(),
            stats: self.stats,
            affinity: self.affinity,
            attribute: self.attribute,
            skills: self.skills.clone(),
        }
    }
}

/// Static definition of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum CardTemplate {
    Attack {
        name: String,
        description: String,
        attack_type: AttackType,
        base_power: i64,
        #[serde(default)]
        effects: Vec<Effect>,
        uses: u32,
    },
    Support {
        name: String,
        description: String,
        effects: Vec<Effect>,
        uses: u32,
    },
}

impl CardTemplate {
    /// The template's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            CardTemplate::Attack { name, .. } | CardTemplate::Support { name, .. } => name,
        }
    }

    /// Create a card instance with a fresh id.
    pub fn instantiate(&self, ids: &mut IdAllocator) -> Card {
        match self {
            CardTemplate::Attack {
                name,
                description,
                attack_type,
                base_power,
                effects,
                uses,
            } => Card::Attack(AttackCard {
                id: ids.card(),
                name: name.clone(),
                description: description.clone(),
                attack_type: *attack_type,
                base_power: *base_power,
                effects: effects.iter().cloned().collect::<EffectList>(),
                uses: *uses,
            }),
            CardTemplate::Support {
                name,
                description,
                effects,
                uses,
            } => Card::Support(SupportCard::new(
                ids.card(),
                name.clone(),
                description.clone(),
                effects.iter().cloned(),
                *uses,
            )),
        }
    }
}

/// Registry of monster and card templates, keyed by name.
///
/// ## Example
///
/// ```
/// use monster_duel::cards::{CardTemplate, TemplateRegistry};
/// use monster_duel::core::IdAllocator;
/// use monster_duel::monsters::Attribute;
///
/// let mut registry = TemplateRegistry::new();
/// registry.register_card(CardTemplate::Attack {
///     name: "Quick Strike".to_string(),
///     description: "A swift physical attack".to_string(),
///     attack_type: Attribute::Slash.into(),
///     base_power: 70,
///     effects: Vec::new(),
///     uses: 4,
/// });
///
/// let mut ids = IdAllocator::new();
/// let card = registry.card("Quick Strike", &mut ids).unwrap();
/// assert_eq!(card.uses(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TemplateRegistry {
    monsters: FxHashMap<String, MonsterTemplate>,
    cards: FxHashMap<String, CardTemplate>,
}

impl TemplateRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a monster template.
    ///
    /// Panics if a monster with the same name already exists.
    pub fn register_monster(&mut self, template: MonsterTemplate) {
        if self.monsters.contains_key(&template.name) {
            panic!("Monster '{}' already registered", template.name);
        }
        self.monsters.insert(template.name.clone(), template);
    }

    /// Register a card template.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register_card(&mut self, template: CardTemplate) {
        let name = template.name().to_string();
        if self.cards.contains_key(&name) {
            panic!("Card '{}' already registered", name);
        }
        self.cards.insert(name, template);
    }

    /// Look up a monster template.
    #[must_use]
    pub fn monster_template(&self, name: &str) -> Option<&MonsterTemplate> {
        self.monsters.get(name)
    }

    /// Look up a card template.
    #[must_use]
    pub fn card_template(&self, name: &str) -> Option<&CardTemplate> {
        self.cards.get(name)
    }

    /// Instantiate a monster by template name.
    pub fn monster(&self, name: &str, ids: &mut IdAllocator) -> Result<Monster, EngineError> {
        self.monsters
            .get(name)
            .map(|template| template.instantiate(ids))
            .ok_or_else(|| EngineError::UnknownTemplate(name.to_string()))
    }

    /// Instantiate a card by template name.
    pub fn card(&self, name: &str, ids: &mut IdAllocator) -> Result<Card, EngineError> {
        self.cards
            .get(name)
            .map(|template| template.instantiate(ids))
            .ok_or_else(|| EngineError::UnknownTemplate(name.to_string()))
    }

    /// Number of monster templates.
    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }

    /// Number of card templates.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Iterate over card templates.
    pub fn cards(&self) -> impl Iterator<Item = &CardTemplate> {
        self.cards.values()
    }
}
