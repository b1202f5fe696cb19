//! Configuration loading and typed config structures for the Hatchway game.
//!
//! The configuration lives in `hatchway-config.yaml` in the working
//! directory. This module defines strongly-typed structs that mirror the
//! YAML structure, and a loader that reads the file and applies
//! environment overrides. Every field has a default, so a missing file or
//! an empty document yields a playable setup.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Player identity, experience threshold, and time budget.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Where the dungeon map is read from.
    #[serde(default)]
    pub map: MapConfig,

    /// Where the run history is written to.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for file locations:
    /// - `HATCHWAY_MAP` overrides `map.path`
    /// - `HATCHWAY_HISTORY` overrides `history.path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string (no environment overrides).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override file locations with environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HATCHWAY_MAP") {
            self.map.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("HATCHWAY_HISTORY") {
            self.history.path = PathBuf::from(val);
        }
    }
}

/// Player configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    #[serde(default = "default_player_name")]
    pub name: String,

    /// Experience needed before a hatch can be used.
    #[serde(default = "default_required_experience")]
    pub required_experience: u64,

    /// Initial time budget. Written as a quoted decimal string in YAML so
    /// no digit is lost to float parsing.
    #[serde(default = "default_time_budget")]
    pub time_budget: Decimal,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: default_player_name(),
            required_experience: default_required_experience(),
            time_budget: default_time_budget(),
        }
    }
}

/// Map source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MapConfig {
    /// Path to the JSON map document.
    #[serde(default = "default_map_path")]
    pub path: PathBuf,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: default_map_path(),
        }
    }
}

/// History export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryConfig {
    /// Path of the CSV file written at game end.
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_player_name() -> String {
    "R2D2".to_owned()
}

const fn default_required_experience() -> u64 {
    280
}

fn default_time_budget() -> Decimal {
    // 123456.0987654321
    Decimal::new(1_234_560_987_654_321, 10)
}

fn default_map_path() -> PathBuf {
    PathBuf::from("rpg.json")
}

fn default_history_path() -> PathBuf {
    PathBuf::from("dungeon.csv")
}

fn default_log_level() -> String {
    "warn".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.player.name, "R2D2");
        assert_eq!(config.player.required_experience, 280);
        assert_eq!(config.player.time_budget, dec!(123456.0987654321));
        assert_eq!(config.map.path, PathBuf::from("rpg.json"));
        assert_eq!(config.history.path, PathBuf::from("dungeon.csv"));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
player:
  name: "BB-8"
  required_experience: 100
  time_budget: "500.25"

map:
  path: "maps/small.json"

history:
  path: "out/run.csv"

logging:
  level: "debug"
"#;

        let config = GameConfig::parse(yaml).unwrap();
        assert_eq!(config.player.name, "BB-8");
        assert_eq!(config.player.required_experience, 100);
        assert_eq!(config.player.time_budget, dec!(500.25));
        assert_eq!(config.map.path, PathBuf::from("maps/small.json"));
        assert_eq!(config.history.path, PathBuf::from("out/run.csv"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = GameConfig::parse("player:\n  required_experience: 7\n").unwrap();

        // Threshold is overridden
        assert_eq!(config.player.required_experience, 7);
        // Everything else uses defaults
        assert_eq!(config.player.name, "R2D2");
        assert_eq!(config.player.time_budget, dec!(123456.0987654321));
        assert_eq!(config.map.path, PathBuf::from("rpg.json"));
    }

    #[test]
    fn parse_empty_yaml() {
        let config = GameConfig::parse("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let result = GameConfig::parse("player: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("hatchway-config.yaml");
        if path.exists() {
            let config = GameConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
