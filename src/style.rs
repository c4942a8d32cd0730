//! Style normalization: font weight from a subfamily name, and text color
//! from `#RRGGBB` or `rgba(r, g, b, a)` input.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════
// Font weight
// ═══════════════════════════════════════════════════════════════════════

/// Coarse weight written to the SVG `font-weight` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Map a font subfamily name ("Bold", "Regular", ...) to a weight.
    /// Unknown names are treated as normal.
    pub fn from_subfamily(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bold" | "semibold" | "extrabold" | "black" => FontWeight::Bold,
            "regular" | "medium" => FontWeight::Normal,
            _ => FontWeight::Normal,
        }
    }

    pub fn as_svg(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Color
// ═══════════════════════════════════════════════════════════════════════

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("invalid color format: '{0}' (expected #RRGGBB or rgba(r, g, b, a))")]
    InvalidColorFormat(String),
}

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Strict parse of `#RRGGBB` or an `rgba(...)`-shaped string.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        let invalid = || ColorParseError::InvalidColorFormat(input.to_string());
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }
        if s.starts_with("rgba") {
            return parse_rgba(s).ok_or_else(invalid);
        }
        Err(invalid())
    }

    /// Parse with recovery: anything unparseable becomes black.
    pub fn normalize(input: &str) -> Self {
        match Self::parse(input) {
            Ok(color) => color,
            Err(e) => {
                warn!("{e}; falling back to black");
                Self::BLACK
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// `rgba(200.73, 39.6, 39.6, 1)` as produced by color pickers. Channels may
/// be fractional; they are truncated and clamped. Alpha must be numeric but
/// is dropped.
fn parse_rgba(s: &str) -> Option<Color> {
    let body = s.strip_prefix("rgba")?.trim_start().strip_prefix('(')?.strip_suffix(')')?;
    let fields: Vec<f64> = body
        .split(',')
        .map(|f| f.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;
    let [r, g, b, _alpha] = fields.as_slice() else {
        return None;
    };
    Some(Color::rgb(channel_byte(*r)?, channel_byte(*g)?, channel_byte(*b)?))
}

fn channel_byte(v: f64) -> Option<u8> {
    if v.is_finite() {
        Some(v.clamp(0.0, 255.0) as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_table() {
        assert_eq!(FontWeight::from_subfamily("Bold"), FontWeight::Bold);
        assert_eq!(FontWeight::from_subfamily("SemiBold"), FontWeight::Bold);
        assert_eq!(FontWeight::from_subfamily("ExtraBold"), FontWeight::Bold);
        assert_eq!(FontWeight::from_subfamily("BLACK"), FontWeight::Bold);
        assert_eq!(FontWeight::from_subfamily("Medium"), FontWeight::Normal);
        assert_eq!(FontWeight::from_subfamily("Regular"), FontWeight::Normal);
        // not in the table
        assert_eq!(FontWeight::from_subfamily("Bold Italic"), FontWeight::Normal);
        assert_eq!(FontWeight::from_subfamily(""), FontWeight::Normal);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(Color::parse("#000000"), Ok(Color::BLACK));
        assert_eq!(Color::parse("#FF8000"), Ok(Color::rgb(255, 128, 0)));
        assert_eq!(Color::parse("#ff8000").map(|c| c.to_string()), Ok("#ff8000".to_string()));
        assert!(Color::parse("#FFF").is_err());
        assert!(Color::parse("#GG0000").is_err());
    }

    #[test]
    fn rgba_colors() {
        let c = Color::parse("rgba(200.73281250000002, 39.618318256578945, 39.618318256578945, 1)");
        assert_eq!(c, Ok(Color::rgb(200, 39, 39)));
        assert_eq!(Color::parse("rgba(0,0,255,0.5)"), Ok(Color::rgb(0, 0, 255)));
        assert_eq!(Color::parse("rgba(300, -4, 10, 1)"), Ok(Color::rgb(255, 0, 10)));
    }

    #[test]
    fn malformed_colors_fall_back_to_black() {
        assert_eq!(Color::normalize("rgba(broken"), Color::BLACK);
        assert_eq!(Color::normalize("rgba(1, 2, 3)"), Color::BLACK);
        assert_eq!(Color::normalize("rgba(a, b, c, d)"), Color::BLACK);
        assert_eq!(Color::normalize("red"), Color::BLACK);
        assert_eq!(Color::normalize("#12345"), Color::BLACK);
        assert_eq!(Color::normalize("#336699"), Color::rgb(0x33, 0x66, 0x99));
    }
}
