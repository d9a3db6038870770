//! Runtime settings with defaults matching the built-in look, loadable from a
//! RON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::starfield::{FieldSettings, MOVING_STAR_COUNT, STAR_COUNT};

const MAX_FRAME_RATE: u32 = 240;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub field: FieldConfig,
    pub display: DisplayConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Stars in the field.
    pub star_count: usize,
    /// How many of the first stars drift.
    pub moving_star_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Frames per second.
    pub frame_rate: u32,
    /// Scales glow blur radii down to terminal-sized pixels.
    pub glow_scale: f32,
    /// Show a frames-per-second counter in the top-left corner.
    pub show_fps: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "starfield=debug").
    pub log_level: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            moving_star_count: MOVING_STAR_COUNT,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            glow_scale: 0.25,
            show_fps: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads and validates a RON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = &self.field;
        if field.star_count == 0 {
            return Err(ConfigError::Invalid("star_count must be at least 1".into()));
        }
        if field.moving_star_count > field.star_count {
            return Err(ConfigError::Invalid(format!(
                "moving_star_count ({}) exceeds star_count ({})",
                field.moving_star_count, field.star_count
            )));
        }

        let display = &self.display;
        if display.frame_rate == 0 || display.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::Invalid(format!(
                "frame_rate must be within 1..={MAX_FRAME_RATE}, got {}",
                display.frame_rate
            )));
        }
        if !display.glow_scale.is_finite() || display.glow_scale < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "glow_scale must be a non-negative number, got {}",
                display.glow_scale
            )));
        }

        Ok(())
    }

    pub fn field_settings(&self) -> FieldSettings {
        FieldSettings {
            star_count: self.field.star_count,
            moving_star_count: self.field.moving_star_count,
        }
    }
}
