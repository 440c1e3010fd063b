//! Monster stat blocks.
//!
//! A `StatBlock` holds ten mutable integer attributes. Debuffs may push any
//! stat below zero; only HP has a floor, and that floor is enforced by the
//! defeat check rather than by the block itself (damage is subtracted raw so
//! the resolver can observe `HP <= 0`).

use serde::{Deserialize, Serialize};

/// Names of the ten stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    /// Hit points.
    #[serde(rename = "HP")]
    Hp,
    /// Mana.
    #[serde(rename = "MP")]
    Mp,
    /// Stamina.
    #[serde(rename = "STM")]
    Stm,
    /// Physical attack.
    #[serde(rename = "PATK")]
    Patk,
    /// Magical attack.
    #[serde(rename = "MATK")]
    Matk,
    /// Physical defense.
    #[serde(rename = "DEF")]
    Def,
    /// Magical resistance.
    #[serde(rename = "RES")]
    Res,
    /// Skill / critical rating.
    #[serde(rename = "SKILL")]
    Skill,
    /// Luck.
    #[serde(rename = "LUCK")]
    Luck,
    /// Agility. Higher acts first within a round.
    #[serde(rename = "AGI")]
    Agi,
}

impl Stat {
    /// Every stat, in stat-block order.
    pub const ALL: [Stat; 10] = [
        Stat::Hp,
        Stat::Mp,
        Stat::Stm,
        Stat::Patk,
        Stat::Matk,
        Stat::Def,
        Stat::Res,
        Stat::Skill,
        Stat::Luck,
        Stat::Agi,
    ];

    /// Short uppercase label used in log lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Mp => "MP",
            Stat::Stm => "STM",
            Stat::Patk => "PATK",
            Stat::Matk => "MATK",
            Stat::Def => "DEF",
            Stat::Res => "RES",
            Stat::Skill => "SKILL",
            Stat::Luck => "LUCK",
            Stat::Agi => "AGI",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The ten combat attributes of a monster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct StatBlock {
    pub hp: i64,
    pub mp: i64,
    pub stm: i64,
    pub patk: i64,
    pub matk: i64,
    pub def: i64,
    pub res: i64,
    pub skill: i64,
    pub luck: i64,
    pub agi: i64,
}

impl StatBlock {
    /// Read a stat by name.
    #[must_use]
    pub fn get(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Mp => self.mp,
            Stat::Stm => self.stm,
            Stat::Patk => self.patk,
            Stat::Matk => self.matk,
            Stat::Def => self.def,
            Stat::Res => self.res,
            Stat::Skill => self.skill,
            Stat::Luck => self.luck,
            Stat::Agi => self.agi,
        }
    }

    /// Mutable access to a stat by name.
    pub fn get_mut(&mut self, stat: Stat) -> &mut i64 {
        match stat {
            Stat::Hp => &mut self.hp,
            Stat::Mp => &mut self.mp,
            Stat::Stm => &mut self.stm,
            Stat::Patk => &mut self.patk,
            Stat::Matk => &mut self.matk,
            Stat::Def => &mut self.def,
            Stat::Res => &mut self.res,
            Stat::Skill => &mut self.skill,
            Stat::Luck => &mut self.luck,
            Stat::Agi => &mut self.agi,
        }
    }

    /// Set a stat directly.
    pub fn set(&mut self, stat: Stat, value: i64) {
        *self.get_mut(stat) = value;
    }

    /// Add `delta` to a stat.
    pub fn adjust(&mut self, stat: Stat, delta: i64) {
        let slot = self.get_mut(stat);
        *slot = slot.saturating_add(delta);
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, stat: Stat, value: i64) -> Self {
        self.set(stat, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_every_stat() {
        let mut stats = StatBlock::default();
        for (i, stat) in Stat::ALL.iter().enumerate() {
            stats.set(*stat, i as i64 * 10);
        }
        for (i, stat) in Stat::ALL.iter().enumerate() {
            assert_eq!(stats.get(*stat), i as i64 * 10);
        }
        assert_eq!(stats.agi, 90);
    }

    #[test]
    fn test_adjust_may_go_negative() {
        let mut stats = StatBlock::default().with(Stat::Def, 3);
        stats.adjust(Stat::Def, -5);
        assert_eq!(stats.def, -2);
    }

    #[test]
    fn test_serde_uses_uppercase_names() {
        let stats = StatBlock::default().with(Stat::Patk, 30);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"PATK\":30"));

        let back: StatBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
