//! Editor configuration: drawing surface size and defaults for new blocks.
//!
//! The host page may pass a JSON object; every key is optional and falls back
//! to the constants in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::blocks::BlockDefaults;
use crate::consts::{DEFAULT_STROKE_COLOR, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};

/// Error returned by [`EditorConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not a JSON object with the expected field types.
    #[error("failed to parse editor config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Width or height is zero.
    #[error("surface size must be non-zero, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },
    /// `default_color` isn't a `#rrggbb` value the color input can show.
    #[error("default color must be #rrggbb, got {0:?}")]
    InvalidColor(String),
}

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas width in CSS pixels.
    pub surface_width: u32,
    /// Canvas height in CSS pixels.
    pub surface_height: u32,
    /// Stroke color for new blocks, as `#rrggbb`.
    pub default_color: String,
    /// Thickness text for new blocks. Empty renders at the minimum width.
    pub default_thickness: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            default_color: DEFAULT_STROKE_COLOR.to_owned(),
            default_thickness: String::new(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or wrong field types
    /// and [`ConfigError::EmptySurface`] when either dimension is zero.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde can't express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySurface`] when either dimension is zero and
    /// [`ConfigError::InvalidColor`] when `default_color` isn't `#rrggbb`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Err(ConfigError::EmptySurface { width: self.surface_width, height: self.surface_height });
        }
        if !is_hex_color(&self.default_color) {
            return Err(ConfigError::InvalidColor(self.default_color.clone()));
        }
        Ok(())
    }

    /// Initial field values for blocks added under this config.
    #[must_use]
    pub fn block_defaults(&self) -> BlockDefaults {
        BlockDefaults { color: self.default_color.clone(), thickness: self.default_thickness.clone() }
    }

    /// Surface size as floating-point CSS pixels.
    #[must_use]
    pub fn surface_size(&self) -> (f64, f64) {
        (f64::from(self.surface_width), f64::from(self.surface_height))
    }
}

/// `<input type="color">` only holds `#rrggbb`; anything else it resets to black.
fn is_hex_color(text: &str) -> bool {
    text.strip_prefix('#').is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
