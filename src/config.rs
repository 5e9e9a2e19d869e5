//! Engine configuration
//!
//! Replaces the untyped registration mapping with a fixed structure. Files use
//! the upper-case key names (`SCREEN_WIDTH`, `DEBUG`, ...) and may omit any of
//! them; omitted keys keep the values of the base configuration.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension { field: &'static str, value: i32 },
    #[error("{width}x{height} screen leaves no room for a ball of radius {radius}")]
    ArenaTooSmall { width: i32, height: i32, radius: f32 },
    #[error("window title must not be empty")]
    EmptyTitle,
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Window and engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Verbose lifecycle logging
    #[serde(rename = "DEBUG")]
    pub debug: bool,
    #[serde(rename = "SCREEN_WIDTH", deserialize_with = "pixels")]
    pub screen_width: i32,
    #[serde(rename = "SCREEN_HEIGHT", deserialize_with = "pixels")]
    pub screen_height: i32,
    #[serde(rename = "USE_FULLSCREEN")]
    pub use_fullscreen: bool,
    #[serde(rename = "WINDOW_TITLE")]
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: true,
            screen_width: 640,
            screen_height: 480,
            use_fullscreen: false,
            window_title: "Game Engine v1.0".to_string(),
        }
    }
}

/// Subset of keys present in a config file
#[derive(Debug, Default, Deserialize)]
struct Overrides {
    #[serde(rename = "DEBUG")]
    debug: Option<bool>,
    #[serde(rename = "SCREEN_WIDTH", default, deserialize_with = "opt_pixels")]
    screen_width: Option<i32>,
    #[serde(rename = "SCREEN_HEIGHT", default, deserialize_with = "opt_pixels")]
    screen_height: Option<i32>,
    #[serde(rename = "USE_FULLSCREEN")]
    use_fullscreen: Option<bool>,
    #[serde(rename = "WINDOW_TITLE")]
    window_title: Option<String>,
}

/// Accepts `960` as well as `960.0`, rejects fractional pixels
fn pixels<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    let v = f64::deserialize(d)?;
    if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
        return Err(de::Error::custom(format!("expected whole pixels, got {v}")));
    }
    Ok(v as i32)
}

fn opt_pixels<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    pixels(d).map(Some)
}

impl Config {
    /// Check the values the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 {
            return Err(ConfigError::NonPositiveDimension {
                field: "SCREEN_WIDTH",
                value: self.screen_width,
            });
        }
        if self.screen_height <= 0 {
            return Err(ConfigError::NonPositiveDimension {
                field: "SCREEN_HEIGHT",
                value: self.screen_height,
            });
        }
        if self.window_title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        Ok(())
    }

    /// Check that a circle of `radius` can move on this screen.
    ///
    /// The arena is the screen inset by `radius` on every side, so each
    /// dimension must exceed the diameter.
    pub fn validate_arena(&self, radius: f32) -> Result<(), ConfigError> {
        let diameter = 2.0 * radius;
        if self.screen_width as f32 <= diameter || self.screen_height as f32 <= diameter {
            return Err(ConfigError::ArenaTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                radius,
            });
        }
        Ok(())
    }

    /// Parse a JSON document over `base`, then validate the result
    pub fn from_json_str(json: &str, base: Config) -> Result<Self, ConfigError> {
        let overrides: Overrides = serde_json::from_str(json)?;
        let config = base.merge(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file over `base`
    pub fn load(path: impl AsRef<Path>, base: Config) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, base)
    }

    fn merge(mut self, o: Overrides) -> Self {
        if let Some(v) = o.debug {
            self.debug = v;
        }
        if let Some(v) = o.screen_width {
            self.screen_width = v;
        }
        if let Some(v) = o.screen_height {
            self.screen_height = v;
        }
        if let Some(v) = o.use_fullscreen {
            self.use_fullscreen = v;
        }
        if let Some(v) = o.window_title {
            self.window_title = v;
        }
        self
    }

    /// Dump every field at debug level
    pub fn log(&self) {
        log::debug!("Configuration:");
        log::debug!("SCREEN_WIDTH: {}", self.screen_width);
        log::debug!("SCREEN_HEIGHT: {}", self.screen_height);
        log::debug!("USE_FULLSCREEN: {}", self.use_fullscreen);
        log::debug!("DEBUG: {}", self.debug);
        log::debug!("WINDOW_TITLE: {}", self.window_title);
    }
}
