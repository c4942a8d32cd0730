//! Staff-roll renderer — draws a computed layout as SVG.
//!
//! Layout and drawing are separate: [`crate::layout`] decides where every
//! glyph goes, this module only writes the result through a
//! [`DrawingSurface`]. Compressed glyphs each get their own transformed
//! group, so no drawing state carries from one glyph or line to the next.

mod constants;
mod svg_builder;

use log::info;
use serde::Serialize;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::font::FontMetrics;
use crate::layout::layout_text;
use crate::model::StaffRollLayout;
use crate::style::{Color, FontWeight};
use constants::*;

pub use svg_builder::{DrawingSurface, SvgBuilder, SvgLayer, TextStyle};

// ═══════════════════════════════════════════════════════════════════════
// Per-render style
// ═══════════════════════════════════════════════════════════════════════

/// Text attributes shared by every glyph of one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderStyle {
    pub font_family: String,
    pub font_weight: FontWeight,
    pub color: Color,
}

impl RenderStyle {
    /// Resolve family and weight from the font, color from the config.
    pub fn resolve(config: &RenderConfig, metrics: &dyn FontMetrics) -> Self {
        let font_weight = metrics
            .subfamily_name()
            .map(|name| FontWeight::from_subfamily(&name))
            .unwrap_or_default();
        Self {
            font_family: metrics
                .family_name()
                .unwrap_or_else(|| FALLBACK_FONT_FAMILY.to_string()),
            font_weight,
            color: config.color(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Typeset `text` and render it into a complete SVG string.
pub fn render_text_to_svg(
    text: &str,
    config: &RenderConfig,
    metrics: &dyn FontMetrics,
) -> Result<String, RenderError> {
    let layout = layout_text(text, config, metrics)?;
    let style = RenderStyle::resolve(config, metrics);
    let svg = layout_to_svg(&layout, &style, config.debug);
    info!(
        "rendered {} lines ({} glyphs) into {}x{} SVG, {} bytes",
        layout.lines.len(),
        layout.placement_count(),
        layout.width,
        layout.height,
        svg.len()
    );
    Ok(svg)
}

/// Serialize a finished layout to an SVG document.
pub fn layout_to_svg(layout: &StaffRollLayout, style: &RenderStyle, debug: bool) -> String {
    let mut svg = SvgBuilder::new(layout.width, layout.height);
    draw_layout(&mut svg, layout, style, debug);
    svg.build()
}

/// Draw a layout onto any surface: optional guides first, then every glyph
/// at its line's baseline.
pub fn draw_layout(
    surface: &mut dyn DrawingSurface,
    layout: &StaffRollLayout,
    style: &RenderStyle,
    debug: bool,
) {
    if debug {
        draw_guides(surface, layout);
    }

    let fill = style.color.to_string();
    let text_style = TextStyle {
        font_size: layout.font_size,
        font_family: &style.font_family,
        font_weight: style.font_weight.as_svg(),
        fill: &fill,
    };

    for row in &layout.lines {
        let y = row.baseline;
        for inst in &row.placements {
            let glyph = inst.glyph.to_string();
            match inst.transform_at(y) {
                Some(transform) => {
                    surface
                        .add_group(&transform)
                        .add_text(&glyph, inst.x, y, inst.anchor, &text_style);
                }
                None => surface.add_text(&glyph, inst.x, y, inst.anchor, &text_style),
            }
        }
    }
}

/// Diagnostic lines: canvas center (dashed), slot edges, canvas edges.
fn draw_guides(surface: &mut dyn DrawingSurface, layout: &StaffRollLayout) {
    let h = layout.height;
    let w = layout.width;
    let center = w / 2.0;
    surface.add_line((center, 0.0), (center, h), GUIDE_COLOR, Some(GUIDE_CENTER_DASH));
    for x in [layout.slot.left(), layout.slot.right(), 0.0, w] {
        surface.add_line((x, 0.0), (x, h), GUIDE_COLOR, None);
    }
}
