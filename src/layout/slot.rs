//! Slot metrics — the five-character column every line is fitted into.

use crate::font::FontMetrics;
use crate::model::SlotMetrics;

/// Reference glyphs whose combined advance defines the slot width.
pub const REFERENCE_CHARS: &str = "あいうえお";

/// Measure the slot for a font, size and inter-character gap, and center it
/// in a canvas of `canvas_width`.
pub fn compute_slot_metrics(
    metrics: &dyn FontMetrics,
    font_size: f64,
    font_space: f64,
    canvas_width: f64,
) -> SlotMetrics {
    let glyphs: f64 = REFERENCE_CHARS
        .chars()
        .map(|c| metrics.advance_width(c, font_size))
        .sum();
    let gaps = (REFERENCE_CHARS.chars().count() - 1) as f64;
    let base_area_width = glyphs + font_space * gaps;
    SlotMetrics {
        base_area_width,
        area_x: (canvas_width - base_area_width) / 2.0,
    }
}
