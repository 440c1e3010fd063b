//! Engine configuration.
//!
//! Games configure the engine at startup by providing:
//! - `CombatConfig`: Damage formula constants
//! - `PolicyConfig`: Scripted opponent tuning
//! - `EngineConfig`: Combines all configuration plus the RNG seed

use serde::{Deserialize, Serialize};

/// Damage formula constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Damage multiplier on a critical hit.
    pub crit_multiplier: f64,

    /// Multiplier applied to DEF/RES before it is subtracted from raw damage.
    pub mitigation_factor: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            crit_multiplier: 1.5,
            mitigation_factor: 1.5,
        }
    }
}

/// Scripted opponent tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Probability of invoking the active skill instead of playing a card.
    pub skill_probability: f64,

    /// Delay between the start of a round and the scripted opponent's
    /// decision, in milliseconds.
    pub delay_ms: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            skill_probability: 0.3,
            delay_ms: 800,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for every random decision in a game.
    pub seed: u64,

    /// Resolve automatically once every monster has a pending action.
    /// When false only `trigger_resolution` starts resolution.
    pub auto_resolve: bool,

    pub combat: CombatConfig,

    pub policy: PolicyConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            auto_resolve: true,
            combat: CombatConfig::default(),
            policy: PolicyConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable automatic resolution.
    #[must_use]
    pub fn with_auto_resolve(mut self, auto: bool) -> Self {
        self.auto_resolve = auto;
        self
    }

    /// Set the scripted opponent's skill probability.
    #[must_use]
    pub fn with_skill_probability(mut self, probability: f64) -> Self {
        self.policy.skill_probability = probability;
        self
    }

    /// Set the scripted opponent's decision delay.
    #[must_use]
    pub fn with_policy_delay_ms(mut self, delay_ms: u64) -> Self {
        self.policy.delay_ms = delay_ms;
        self
    }

    /// Replace the combat constants.
    #[must_use]
    pub fn with_combat(mut self, combat: CombatConfig) -> Self {
        self.combat = combat;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.seed, 42);
        assert!(config.auto_resolve);
        assert_eq!(config.combat.crit_multiplier, 1.5);
        assert_eq!(config.combat.mitigation_factor, 1.5);
        assert_eq!(config.policy.skill_probability, 0.3);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_seed(7)
            .with_auto_resolve(false)
            .with_skill_probability(1.0)
            .with_policy_delay_ms(0);

        assert_eq!(config.seed, 7);
        assert!(!config.auto_resolve);
        assert_eq!(config.policy.skill_probability, 1.0);
        assert_eq!(config.policy.delay_ms, 0);
    }

    #[test]
    fn test_config_serde() {
        let config = EngineConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
