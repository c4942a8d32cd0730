//! Render configuration: one validated record handed to the core.
//!
//! Defaults match the classic credit-roll settings (50px glyphs in a
//! 1280-wide canvas). Configs can be read from JSON; missing fields take
//! their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::style::Color;

pub const DEFAULT_FONT_PATH: &str = "fonts/NotoSansJP-Medium.ttf";
pub const DEFAULT_FONT_SIZE: f64 = 50.0;
pub const DEFAULT_FONT_SPACE: f64 = 2.0;
pub const DEFAULT_MIN_SCALE: f64 = 0.55;
pub const DEFAULT_FONT_COLOR: &str = "#000000";
pub const DEFAULT_LINE_HEIGHT: f64 = 80.0;
pub const DEFAULT_SPACE_LINE_HEIGHT: f64 = 40.0;
pub const DEFAULT_WIDTH: f64 = 1280.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// TrueType/OpenType font file
    pub font_path: PathBuf,
    pub font_size: f64,
    /// Gap between the reference characters of the slot
    pub font_space: f64,
    /// Floor for horizontal compression of long lines
    pub min_scale: f64,
    pub line_height: f64,
    /// Height of rows that are blank after trimming
    pub space_line_height: f64,
    /// Canvas width
    pub width: f64,
    /// `#RRGGBB` or `rgba(r, g, b, a)`
    pub font_color: String,
    /// Draw guide lines at the center, slot edges and canvas edges
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
            font_space: DEFAULT_FONT_SPACE,
            min_scale: DEFAULT_MIN_SCALE,
            line_height: DEFAULT_LINE_HEIGHT,
            space_line_height: DEFAULT_SPACE_LINE_HEIGHT,
            width: DEFAULT_WIDTH,
            font_color: DEFAULT_FONT_COLOR.to_string(),
            debug: false,
        }
    }
}

impl RenderConfig {
    /// Read a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&data)
    }

    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the geometry that does not depend on the font. The slot-width
    /// check happens once the font is measured.
    pub fn validate(&self) -> Result<(), RenderError> {
        let positive = [
            ("font_size", self.font_size),
            ("line_height", self.line_height),
            ("space_line_height", self.space_line_height),
            ("width", self.width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(RenderError::MalformedConfiguration(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.font_space.is_finite() && self.font_space >= 0.0) {
            return Err(RenderError::MalformedConfiguration(format!(
                "font_space must not be negative, got {}",
                self.font_space
            )));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= 1.0) {
            return Err(RenderError::MalformedConfiguration(format!(
                "min_scale must be in (0, 1], got {}",
                self.min_scale
            )));
        }
        Ok(())
    }

    /// Text color with the black fallback applied.
    pub fn color(&self) -> Color {
        Color::normalize(&self.font_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 1280.0);
        assert_eq!(config.min_scale, 0.55);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RenderConfig::from_json(r#"{ "font_size": 64, "debug": true }"#).unwrap();
        assert_eq!(
            config,
            RenderConfig { font_size: 64.0, debug: true, ..RenderConfig::default() }
        );
    }

    #[test]
    fn rejects_non_positive_sizes() {
        for config in [
            RenderConfig { font_size: 0.0, ..Default::default() },
            RenderConfig { line_height: -1.0, ..Default::default() },
            RenderConfig { width: f64::NAN, ..Default::default() },
            RenderConfig { min_scale: 0.0, ..Default::default() },
            RenderConfig { min_scale: 1.5, ..Default::default() },
            RenderConfig { font_space: -2.0, ..Default::default() },
        ] {
            assert!(
                matches!(config.validate(), Err(RenderError::MalformedConfiguration(_))),
                "should reject {config:?}"
            );
        }
    }

    #[test]
    fn bad_json_is_a_config_error() {
        assert!(matches!(RenderConfig::from_json("{ font_size: }"), Err(RenderError::Config(_))));
    }
}
