//! Gameplay tuning
//!
//! All numbers that shape a round live in [`GameConfig`]. The defaults are
//! the shipped game; `assets/config/game.json` can override any subset of
//! them, the same way sprite data is described by JSON under `assets/config/`.

use crate::error::GameError;
use crate::game::rendering::COOK_BUTTON_TEXT_SCALE;
use crate::game::update::BUTTON_BOTTOM_MARGIN;
use crate::text::text_height;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,

    /// Turkeys are square; sprites are scaled to this size
    pub turkey_size: u32,
    pub turkey_speed_min: i32,
    pub turkey_speed_max: i32,

    /// One-in-N chance per frame of a new turkey (0 disables spawning)
    pub spawn_rate: u32,

    /// One-in-N chance per frame of the cook button appearing (0 disables it)
    pub cook_button_chance: u32,
    pub cook_button_width: u32,
    pub cook_button_height: u32,
    pub cook_button_seconds: f32,
    pub cook_mode_seconds: f32,

    pub ground_height: u32,
    pub target_fps: u32,

    pub turkey_sprite: String,
    pub cooked_sprite: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 800,
            screen_height: 600,
            turkey_size: 60,
            turkey_speed_min: 1,
            turkey_speed_max: 3,
            spawn_rate: 60,
            cook_button_chance: 500,
            cook_button_width: 150,
            cook_button_height: 50,
            cook_button_seconds: 5.0,
            cook_mode_seconds: 10.0,
            ground_height: 20,
            target_fps: 60,
            turkey_sprite: "assets/sprites/turkey.png".to_string(),
            cooked_sprite: "assets/sprites/cooked.png".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads tuning from `path`, falling back to defaults when the file is absent.
    ///
    /// A file that exists but cannot be read, parsed or validated is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No tuning file at {}, using defaults", path.display());
            return Ok(GameConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&content, &path.display().to_string())?;

        log::info!("Loaded tuning from {}", path.display());
        Ok(config)
    }

    #[cfg(test)]
    pub fn from_json(content: &str) -> Result<Self, GameError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> Result<Self, GameError> {
        let config: GameConfig =
            serde_json::from_str(content).map_err(|source| GameError::ConfigParse {
                path: path.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.turkey_speed_min < 1 || self.turkey_speed_min > self.turkey_speed_max {
            return Err(GameError::InvalidConfig(format!(
                "turkey speed range {}..={} must be positive and ordered",
                self.turkey_speed_min, self.turkey_speed_max
            )));
        }
        if self.turkey_size == 0 || self.screen_width <= self.turkey_size {
            return Err(GameError::InvalidConfig(format!(
                "screen width {} must exceed turkey size {}",
                self.screen_width, self.turkey_size
            )));
        }
        if self.screen_height <= self.turkey_size {
            return Err(GameError::InvalidConfig(format!(
                "screen height {} must exceed turkey size {}",
                self.screen_height, self.turkey_size
            )));
        }
        let min_button_height = text_height(COOK_BUTTON_TEXT_SCALE);
        if !(min_button_height..=BUTTON_BOTTOM_MARGIN as u32).contains(&self.cook_button_height) {
            return Err(GameError::InvalidConfig(format!(
                "cook button height {} must be between {} and {}",
                self.cook_button_height, min_button_height, BUTTON_BOTTOM_MARGIN
            )));
        }
        // Buttons appear between y=50 and 100px above the bottom edge
        if self.screen_width <= self.cook_button_width || self.screen_height < 150 {
            return Err(GameError::InvalidConfig(format!(
                "cook button {}x{} does not fit on a {}x{} screen",
                self.cook_button_width,
                self.cook_button_height,
                self.screen_width,
                self.screen_height
            )));
        }
        if self.ground_height >= self.screen_height {
            return Err(GameError::InvalidConfig(format!(
                "ground height {} must be below screen height {}",
                self.ground_height, self.screen_height
            )));
        }
        for (name, seconds) in [
            ("cook_mode_seconds", self.cook_mode_seconds),
            ("cook_button_seconds", self.cook_button_seconds),
        ] {
            if Duration::try_from_secs_f32(seconds.max(0.0)).is_err() {
                return Err(GameError::InvalidConfig(format!(
                    "{} = {} is not a usable duration",
                    name, seconds
                )));
            }
        }
        if self.target_fps == 0 {
            return Err(GameError::InvalidConfig("target_fps must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn cook_mode_duration(&self) -> Duration {
        Duration::from_secs_f32(self.cook_mode_seconds.max(0.0))
    }

    pub fn cook_button_duration(&self) -> Duration {
        Duration::from_secs_f32(self.cook_button_seconds.max(0.0))
    }
}
