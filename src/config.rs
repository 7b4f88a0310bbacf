//! Game tuning configuration
//!
//! Physics constants, window size and the level path are read from a JSON file
//! (`assets/config/game.json`). Every field has a default, so a partial file only
//! overrides what it names and a missing file yields the stock tuning.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default location of the tuning file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of every tile and entity, in pixels.
    pub tile_size: f32,
    /// Added to vertical velocity every tick.
    pub gravity: f32,
    pub player_speed: f32,
    pub jump_power: f32,
    pub enemy_speed: f32,
    /// Terminal velocity. `None` lets entities accelerate without bound.
    pub max_fall_speed: Option<f32>,
    pub view_width: u32,
    pub view_height: u32,
    pub target_fps: u32,
    /// Text level file. `None` uses the built-in map.
    pub level_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tile_size: 32.0,
            gravity: 0.5,
            player_speed: 3.0,
            jump_power: 12.0,
            enemy_speed: 1.5,
            max_fall_speed: None,
            view_width: 800,
            view_height: 600,
            target_fps: 60,
            level_path: None,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the config, falling back to defaults when the file is missing or bad.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canvas_demo() {
        let config = GameConfig::default();
        assert_eq!(config.tile_size, 32.0);
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.player_speed, 3.0);
        assert_eq!(config.jump_power, 12.0);
        assert_eq!(config.enemy_speed, 1.5);
        assert_eq!(config.max_fall_speed, None);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "gravity": 0.8, "max_fall_speed": 12.0 }"#).unwrap();

        assert_eq!(config.gravity, 0.8);
        assert_eq!(config.max_fall_speed, Some(12.0));
        assert_eq!(config.tile_size, 32.0);
        assert_eq!(config.level_path, None);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = serde_json::from_str::<GameConfig>("{ gravity: }").unwrap_err();
        let err = ConfigError::from(err);
        assert!(err.to_string().starts_with("invalid config JSON"));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = GameConfig::load_or_default("does/not/exist.json");
        assert_eq!(config, GameConfig::default());
    }
}
