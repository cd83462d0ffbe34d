//! Game-balance constants for care actions and idle decay

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::pet::validate_color;

/// Tunable pet constants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetConstants {
    #[serde(default)]
    pub feed: FeedConstants,
    #[serde(default)]
    pub play: PlayConstants,
    #[serde(default)]
    pub rest: RestConstants,
    #[serde(default)]
    pub decay: DecayConstants,
    #[serde(default)]
    pub creation: CreationConstants,
    #[serde(default)]
    pub retry: RetryConstants,
}

impl PetConstants {
    /// Reject values that would break the engine or dispatcher
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decay.interval_minutes == 0 {
            return Err(ConfigError::ValidationError(
                "decay.interval_minutes must be at least 1".to_string(),
            ));
        }
        if self.creation.starting_level > 100 {
            return Err(ConfigError::ValidationError(format!(
                "creation.starting_level {} is outside 0..=100",
                self.creation.starting_level
            )));
        }
        if self.creation.min_name_length == 0
            || self.creation.min_name_length > self.creation.max_name_length
        {
            return Err(ConfigError::ValidationError(format!(
                "name length bounds {}..={} are invalid",
                self.creation.min_name_length, self.creation.max_name_length
            )));
        }
        let default_color = &self.creation.default_color;
        if let Err(err) = validate_color(Some(default_color), default_color) {
            return Err(ConfigError::ValidationError(format!("creation.default_color: {}", err)));
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::ValidationError(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConstants {
    #[serde(default = "default_feed_hunger_decrease")]
    pub hunger_decrease: u32,
    #[serde(default = "default_feed_energy_increase")]
    pub energy_increase: u32,
}

impl Default for FeedConstants {
    fn default() -> Self {
        FeedConstants {
            hunger_decrease: default_feed_hunger_decrease(),
            energy_increase: default_feed_energy_increase(),
        }
    }
}

fn default_feed_hunger_decrease() -> u32 {
    30
}
fn default_feed_energy_increase() -> u32 {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayConstants {
    #[serde(default = "default_play_happiness_increase")]
    pub happiness_increase: u32,
    #[serde(default = "default_play_hunger_increase")]
    pub hunger_increase: u32,
    #[serde(default = "default_play_energy_decrease")]
    pub energy_decrease: u32,
}

impl Default for PlayConstants {
    fn default() -> Self {
        PlayConstants {
            happiness_increase: default_play_happiness_increase(),
            hunger_increase: default_play_hunger_increase(),
            energy_decrease: default_play_energy_decrease(),
        }
    }
}

fn default_play_happiness_increase() -> u32 {
    25
}
fn default_play_hunger_increase() -> u32 {
    10
}
fn default_play_energy_decrease() -> u32 {
    15
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestConstants {
    #[serde(default = "default_rest_energy_increase")]
    pub energy_increase: u32,
    #[serde(default = "default_rest_hunger_increase")]
    pub hunger_increase: u32,
}

impl Default for RestConstants {
    fn default() -> Self {
        RestConstants {
            energy_increase: default_rest_energy_increase(),
            hunger_increase: default_rest_hunger_increase(),
        }
    }
}

fn default_rest_energy_increase() -> u32 {
    30
}
fn default_rest_hunger_increase() -> u32 {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayConstants {
    /// Length of one decay step in minutes
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
    /// Happiness lost per step
    #[serde(default = "default_decay_step")]
    pub happiness_per_interval: u32,
    /// Energy lost per step
    #[serde(default = "default_decay_step")]
    pub energy_per_interval: u32,
    /// Hunger gained per step
    #[serde(default = "default_decay_step")]
    pub hunger_per_interval: u32,
    /// Idle time after which a pet is flagged as needing attention
    #[serde(default = "default_attention_minutes")]
    pub attention_after_minutes: u64,
}

impl Default for DecayConstants {
    fn default() -> Self {
        DecayConstants {
            interval_minutes: default_interval_minutes(),
            happiness_per_interval: default_decay_step(),
            energy_per_interval: default_decay_step(),
            hunger_per_interval: default_decay_step(),
            attention_after_minutes: default_attention_minutes(),
        }
    }
}

fn default_interval_minutes() -> u64 {
    10
}
fn default_decay_step() -> u32 {
    1
}
fn default_attention_minutes() -> u64 {
    60
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationConstants {
    /// Initial value of all three stats
    #[serde(default = "default_starting_level")]
    pub starting_level: u32,
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    /// Used when a pet is created without a color
    #[serde(default = "default_color")]
    pub default_color: String,
}

impl Default for CreationConstants {
    fn default() -> Self {
        CreationConstants {
            starting_level: default_starting_level(),
            min_name_length: default_min_name_length(),
            max_name_length: default_max_name_length(),
            default_color: default_color(),
        }
    }
}

fn default_starting_level() -> u32 {
    50
}
fn default_min_name_length() -> usize {
    2
}
fn default_max_name_length() -> usize {
    50
}
fn default_color() -> String {
    "#FF6B6B".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConstants {
    /// Attempts at a read-modify-write before reporting a conflict
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for RetryConstants {
    fn default() -> Self {
        RetryConstants {
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = PetConstants::default();
        assert_eq!(constants.feed.hunger_decrease, 30);
        assert_eq!(constants.play.happiness_increase, 25);
        assert_eq!(constants.rest.energy_increase, 30);
        assert_eq!(constants.decay.interval_minutes, 10);
        assert_eq!(constants.creation.starting_level, 50);
        assert_eq!(constants.retry.max_attempts, 3);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_parse_constants() {
        let toml = r##"
[feed]
hunger_decrease = 20
energy_increase = 0

[play]
happiness_increase = 15

[decay]
interval_minutes = 5
attention_after_minutes = 30

[creation]
default_color = "#00FF00"
"##;

        let constants: PetConstants = toml::from_str(toml).unwrap();
        assert_eq!(constants.feed.hunger_decrease, 20);
        assert_eq!(constants.feed.energy_increase, 0);
        assert_eq!(constants.play.happiness_increase, 15);
        // Unset fields fall back to defaults
        assert_eq!(constants.play.energy_decrease, 15);
        assert_eq!(constants.rest, RestConstants::default());
        assert_eq!(constants.decay.interval_minutes, 5);
        assert_eq!(constants.decay.hunger_per_interval, 1);
        assert_eq!(constants.creation.default_color, "#00FF00");
        assert_eq!(constants.creation.max_name_length, 50);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let constants: PetConstants = toml::from_str("").unwrap();
        assert_eq!(constants, PetConstants::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut constants = PetConstants::default();
        constants.decay.interval_minutes = 0;
        assert!(constants.validate().is_err());

        let mut constants = PetConstants::default();
        constants.creation.starting_level = 101;
        assert!(constants.validate().is_err());

        let mut constants = PetConstants::default();
        constants.creation.min_name_length = 10;
        constants.creation.max_name_length = 5;
        assert!(constants.validate().is_err());

        let mut constants = PetConstants::default();
        constants.retry.max_attempts = 0;
        assert!(constants.validate().is_err());

        let mut constants = PetConstants::default();
        constants.creation.default_color = "red".to_string();
        let err = constants.validate().unwrap_err();
        assert!(err.to_string().contains("creation.default_color"));
    }
}
