//! Game configuration with documented defaults
//!
//! The character's fixed caps live here so they are set once at
//! construction and never mutated afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{BrewError, Result};
use crate::core::types::{Health, Weight};

/// Configuration for a single-character session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === CHARACTER ===
    /// Display name of the character
    pub character_name: String,

    /// Maximum (and starting) health
    ///
    /// `reset_health` always restores exactly this value.
    pub max_health: Health,

    /// Heaviest bag capacity the character can carry
    ///
    /// Bags whose capacity exceeds this are rejected on swap.
    pub max_bag_capacity: Weight,

    // === INVENTORY ===
    /// Capacity of the bag handed to the character at startup
    ///
    /// `None` starts the character without a bag.
    pub starting_bag_capacity: Option<Weight>,

    /// Whether the character starts with an empty cauldron
    pub starting_cauldron: bool,

    // === DATA ===
    /// Recipe catalog loaded by the binaries
    pub recipes_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            character_name: "Aria".into(),
            max_health: 100,
            max_bag_capacity: 50,
            starting_bag_capacity: Some(20),
            starting_cauldron: true,
            recipes_path: PathBuf::from("data/recipes.toml"),
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_health == 0 {
            return Err(BrewError::InvalidConfig("max_health must be positive".into()));
        }

        if self.max_bag_capacity == 0 {
            return Err(BrewError::InvalidConfig(
                "max_bag_capacity must be positive".into(),
            ));
        }

        if let Some(starting) = self.starting_bag_capacity {
            if starting > self.max_bag_capacity {
                return Err(BrewError::InvalidConfig(format!(
                    "starting_bag_capacity ({}) should be <= max_bag_capacity ({})",
                    starting, self.max_bag_capacity
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Load from `path`, falling back to defaults when the file can't be used
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_toml(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config, failed to load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_health_rejected() {
        let config = GameConfig {
            max_health: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(BrewError::InvalidConfig(_))));
    }

    #[test]
    fn test_starting_bag_larger_than_max_rejected() {
        let config = GameConfig {
            max_bag_capacity: 10,
            starting_bag_capacity: Some(11),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("starting_bag_capacity (11)"));
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let config = GameConfig::parse_toml(
            r#"
character_name = "Brom"
max_health = 80
"#,
        )
        .expect("Should parse");

        assert_eq!(config.character_name, "Brom");
        assert_eq!(config.max_health, 80);
        assert_eq!(config.max_bag_capacity, 50);
        assert_eq!(config.starting_bag_capacity, Some(20));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = GameConfig::parse_toml("max_health = \"lots\"");
        assert!(matches!(result, Err(BrewError::TomlError(_))));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = GameConfig::load_or_default(Path::new("does/not/exist.toml"));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_game_config_from_file() {
        let config = GameConfig::load_from_toml(Path::new("data/game.toml"))
            .expect("Should load data/game.toml");
        assert_eq!(config.character_name, "Aria");
        assert_eq!(config.max_bag_capacity, 50);
    }
}
