//! Optional `snake.json` settings: asset locations, volumes and log level.
//! Game rules are fixed and deliberately not part of it.

use std::fs;
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const SETTINGS_FILE: &str = "snake.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub assets: AssetPaths,
    pub volume: Volumes,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets: AssetPaths::default(),
            volume: Volumes::default(),
            log_level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub eat: String,
    pub game_over: String,
    pub background: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            eat: "assets/eat-food.wav".to_owned(),
            game_over: "assets/game-over.wav".to_owned(),
            background: "assets/background.ogg".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volumes {
    pub eat: f32,
    pub game_over: f32,
    pub music: f32,
}

impl Default for Volumes {
    fn default() -> Self {
        Self {
            eat: 0.1,
            game_over: 1.0,
            music: 0.1,
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = serde_json::from_str(text)?;
        settings.volume = settings.volume.clamped();
        Ok(settings)
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

impl Volumes {
    fn clamped(self) -> Self {
        Self {
            eat: self.eat.clamp(0.0, 1.0),
            game_over: self.game_over.clamp(0.0, 1.0),
            music: self.music.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("does/not/exist/snake.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "volume": { "music": 0.5 }, "log_level": "debug" }"#)
                .unwrap();

        assert_eq!(settings.volume.music, 0.5);
        assert_eq!(settings.volume.eat, 0.1);
        assert_eq!(settings.assets, AssetPaths::default());
        assert_eq!(settings.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_volumes_are_clamped() {
        let settings =
            Settings::from_json(r#"{ "volume": { "eat": 3.0, "game_over": -1.0 } }"#).unwrap();
        assert_eq!(settings.volume.eat, 1.0);
        assert_eq!(settings.volume.game_over, 0.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = Settings::from_json("{ volume: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let settings = Settings {
            log_level: "chatty".to_owned(),
            ..Settings::default()
        };
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }
}
