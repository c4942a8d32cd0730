//! Data model for a typeset staff roll.
//!
//! These structures carry the result of layout: which lines are content and
//! which are spacers, where each glyph goes, and the shared slot geometry.
//! They are plain values, serializable for export across FFI or to JSON.

use serde::{Deserialize, Serialize};

/// Full-width space inserted between the parts of an unevenly split
/// four-character name.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Placeable character that renders as a blank but keeps its width.
pub const BLANK_PLACEHOLDER: char = '_';

/// Horizontal alignment of a glyph relative to its x position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// Value of the SVG `text-anchor` attribute.
    pub fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Whether an input row carries text or only vertical space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Content,
    Spacer,
}

/// One classified input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Row as it appeared in the input (without the `\n`)
    pub raw: String,
    /// Row with leading and trailing whitespace removed
    pub text: String,
    pub kind: LineKind,
    /// Vertical space this row consumes
    pub height: f64,
}

/// Geometry of the five-character slot shared by every line of a render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotMetrics {
    /// Width of five reference full-width glyphs plus four gaps
    pub base_area_width: f64,
    /// Left edge of the slot, centering it in the canvas
    pub area_x: f64,
}

impl SlotMetrics {
    /// Slot left edge.
    pub fn left(&self) -> f64 {
        self.area_x
    }

    /// Slot right edge.
    pub fn right(&self) -> f64 {
        self.area_x + self.base_area_width
    }

    /// Slot center.
    pub fn center(&self) -> f64 {
        self.area_x + self.base_area_width * 0.5
    }
}

/// A content line split on literal U+0020 spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTokens {
    /// Substrings between spaces, possibly empty when spaces repeat
    pub parts: Vec<String>,
    /// Parts joined back together without the spaces
    pub merged: Vec<char>,
}

impl NameTokens {
    pub fn split(text: &str) -> Self {
        let parts: Vec<String> = text.split(' ').map(str::to_owned).collect();
        let merged = parts.iter().flat_map(|p| p.chars()).collect();
        Self { parts, merged }
    }

    pub fn num_spaces(&self) -> usize {
        self.parts.len().saturating_sub(1)
    }

    pub fn char_count(&self) -> usize {
        self.merged.len()
    }

    /// Character lengths of the two parts when the line has exactly one space.
    pub fn halves(&self) -> Option<(usize, usize)> {
        match self.parts.as_slice() {
            [first, second] => Some((first.chars().count(), second.chars().count())),
            _ => None,
        }
    }
}

/// Where and how to draw one glyph of a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementInstruction {
    /// Glyph to draw (`_` already replaced by a space)
    pub glyph: char,
    pub x: f64,
    pub anchor: Anchor,
    /// Horizontal compression; 1.0 means none
    pub horizontal_scale: f64,
}

impl PlacementInstruction {
    pub fn new(source: char, x: f64, anchor: Anchor) -> Self {
        let glyph = if source == BLANK_PLACEHOLDER { ' ' } else { source };
        Self { glyph, x, anchor, horizontal_scale: 1.0 }
    }

    pub fn scaled(source: char, x: f64, anchor: Anchor, horizontal_scale: f64) -> Self {
        Self { horizontal_scale, ..Self::new(source, x, anchor) }
    }

    /// The compression transform for this glyph drawn at baseline `y`, if any.
    pub fn transform_at(&self, y: f64) -> Option<AffineTransform> {
        if self.horizontal_scale == 1.0 {
            None
        } else {
            Some(AffineTransform::horizontal_scale_about(self.x, y, self.horizontal_scale))
        }
    }
}

/// Horizontal scale about a fixed point: `translate(x, y) scale(sx, 1)
/// translate(-x, -y)`. The point itself and all vertical extents stay put.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale_x: f64,
}

impl AffineTransform {
    pub fn horizontal_scale_about(origin_x: f64, origin_y: f64, scale_x: f64) -> Self {
        Self { origin_x, origin_y, scale_x }
    }

    /// Map a point through the transform.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.origin_x + (x - self.origin_x) * self.scale_x, y)
    }

    /// Value of the SVG `transform` attribute.
    pub fn to_svg(&self) -> String {
        format!(
            "translate({:.2},{:.2}) scale({:.4},1) translate({:.2},{:.2})",
            self.origin_x, self.origin_y, self.scale_x, -self.origin_x, -self.origin_y
        )
    }
}

/// One row of the finished layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutLine {
    pub line: Line,
    /// Top of the row
    pub y: f64,
    /// Text baseline (top + font size)
    pub baseline: f64,
    /// Name of the placement rule that handled the row
    pub rule: Option<String>,
    pub placements: Vec<PlacementInstruction>,
}

/// The complete, renderer-independent result of typesetting a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRollLayout {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub slot: SlotMetrics,
    pub lines: Vec<LaidOutLine>,
}

impl StaffRollLayout {
    /// Total number of glyph placements across all lines.
    pub fn placement_count(&self) -> usize {
        self.lines.iter().map(|l| l.placements.len()).sum()
    }
}
