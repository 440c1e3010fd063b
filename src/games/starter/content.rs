//! Starter monster, cards and behaviors.

use crate::cards::{CardTemplate, Effect, MonsterTemplate, TemplateRegistry};
use crate::effects::{BehaviorRegistry, Outcome, StatDelta};
use crate::monsters::{Affinity, Attribute, Skill, SkillSet, Stat, StatBlock};

pub const ROOKIE_WARRIOR: &str = "Rookie Warrior";
pub const FLAME_SLASH: &str = "Flame Slash";
pub const QUICK_STRIKE: &str = "Quick Strike";
pub const BATTLE_FOCUS: &str = "Battle Focus";
pub const GRIT: &str = "Grit";

/// Card names in starting-hand order.
pub const STARTER_CARDS: [&str; 4] = [FLAME_SLASH, QUICK_STRIKE, BATTLE_FOCUS, GRIT];

/// The starter monster.
#[must_use]
pub fn rookie_warrior() -> MonsterTemplate {
    MonsterTemplate {
        name: ROOKIE_WARRIOR.to_string(),
        description: "A rookie warrior looking to prove themselves".to_string(),
        stats: StatBlock {
            hp: 100,
            mp: 50,
            stm: 80,
            patk: 30,
            matk: 20,
            def: 25,
            res: 20,
            skill: 45,
            luck: 30,
            agi: 40,
        },
        affinity: Affinity::Fire,
        attribute: Attribute::Slash,
        skills: SkillSet {
            active: Skill::new("Basic Strike", "A simple attack that costs no resources"),
            passive: Skill::new("Endurance", "Recovers 1 STM per turn"),
            reaction: Skill::new("Counter Stance", "10% chance to counter physical attacks"),
        },
    }
}

/// The four starter cards.
#[must_use]
pub fn starter_cards() -> Vec<CardTemplate> {
    vec![
        CardTemplate::Attack {
            name: FLAME_SLASH.to_string(),
            description: "A powerful fire attack".to_string(),
            attack_type: Affinity::Fire.into(),
            base_power: 90,
            effects: vec![Effect::new("Burn", "Burns the target", 2)],
            uses: 3,
        },
        CardTemplate::Attack {
            name: QUICK_STRIKE.to_string(),
            description: "A swift physical attack".to_string(),
            attack_type: Attribute::Slash.into(),
            base_power: 70,
            effects: Vec::new(),
            uses: 4,
        },
        CardTemplate::Support {
            name: BATTLE_FOCUS.to_string(),
            description: "Boosts attack for a set number of turns".to_string(),
            effects: vec![Effect::new("Attack Up I", "Boosts attack for 3 turns", 3)],
            uses: 2,
        },
        CardTemplate::Support {
            name: GRIT.to_string(),
            description: "Steel yourself against the next blow".to_string(),
            effects: vec![Effect::new("Resolve", "Restores 10 HP", 1)],
            uses: 1,
        },
    ]
}

/// Registry holding the starter monster and cards.
#[must_use]
pub fn starter_templates() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    registry.register_monster(rookie_warrior());
    for card in starter_cards() {
        registry.register_card(card);
    }
    registry
}

/// Behaviors for the starter skill and effects.
#[must_use]
pub fn starter_behaviors() -> BehaviorRegistry {
    let mut behaviors = BehaviorRegistry::new();

    behaviors.register_skill("Basic Strike", |actor, _, _| {
        Outcome::on_target(StatDelta::single(Stat::Hp, -(actor.stats.patk / 10)))
    });

    behaviors.register_effect("Burn", BehaviorRegistry::stat_shift(Stat::Hp, -5));
    behaviors.register_effect("Attack Up I", BehaviorRegistry::stat_shift(Stat::Patk, 5));
    behaviors.register_effect("Resolve", BehaviorRegistry::stat_shift(Stat::Hp, 10));

    behaviors
}
