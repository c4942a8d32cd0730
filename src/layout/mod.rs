//! Layout — turns credit text into positioned glyphs.
//!
//! The pipeline is one-way: classify lines, measure the slot once, then
//! place every content line independently and stack the rows top to
//! bottom. Nothing here touches SVG; see [`crate::renderer`] for that.

pub mod lines;
pub mod rules;
pub mod slot;

use log::info;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::font::FontMetrics;
use crate::model::{LaidOutLine, LineKind, StaffRollLayout};

pub use lines::{classify_lines, total_height};
pub use rules::{LinePlacement, MiddleBias, PlacementRule, Typesetter, SPACER_UNIT};
pub use slot::{compute_slot_metrics, REFERENCE_CHARS};

/// Typeset `text` with the given metrics.
///
/// Fails only on configuration problems: invalid sizes, or a canvas too
/// narrow for the measured slot.
pub fn layout_text(
    text: &str,
    config: &RenderConfig,
    metrics: &dyn FontMetrics,
) -> Result<StaffRollLayout, RenderError> {
    config.validate()?;

    let slot = compute_slot_metrics(metrics, config.font_size, config.font_space, config.width);
    if slot.base_area_width > config.width {
        return Err(RenderError::MalformedConfiguration(format!(
            "canvas width {} is narrower than the five-character slot ({:.1})",
            config.width, slot.base_area_width
        )));
    }
    info!("slot width {:.2} at x={:.2}", slot.base_area_width, slot.area_x);

    let typesetter = Typesetter::new(metrics, slot, config.font_size, config.min_scale);
    let lines = classify_lines(text, config.line_height, config.space_line_height);
    let height = total_height(&lines);

    let mut y = 0.0;
    let mut laid_out = Vec::with_capacity(lines.len());
    for line in lines {
        let (rule, placements) = match line.kind {
            LineKind::Content => {
                let placed = typesetter.place(&line.text);
                (Some(placed.rule.name().to_string()), placed.instructions)
            }
            LineKind::Spacer => (None, Vec::new()),
        };
        let row_height = line.height;
        laid_out.push(LaidOutLine {
            line,
            y,
            baseline: y + config.font_size,
            rule,
            placements,
        });
        y += row_height;
    }

    Ok(StaffRollLayout {
        width: config.width,
        height,
        font_size: config.font_size,
        slot,
        lines: laid_out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::EstimatedMetrics;
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_stack_by_height() {
        let config = RenderConfig::default();
        let layout = layout_text("田中 一郎\n\n鈴木次郎", &config, &EstimatedMetrics::default()).unwrap();

        let rows: Vec<(f64, f64, usize)> =
            layout.lines.iter().map(|l| (l.y, l.baseline, l.placements.len())).collect();
        assert_eq!(rows, vec![(0.0, 50.0, 4), (80.0, 130.0, 0), (120.0, 170.0, 4)]);
        assert_eq!(layout.height, 200.0);
        assert_eq!(layout.lines[0].rule.as_deref(), Some("even-halves"));
        assert_eq!(layout.lines[1].rule, None);
    }

    #[test]
    fn canvas_narrower_than_slot_is_rejected() {
        let config = RenderConfig { width: 200.0, ..RenderConfig::default() };
        let result = layout_text("力", &config, &EstimatedMetrics::default());
        assert!(matches!(result, Err(RenderError::MalformedConfiguration(_))));
    }

    #[test]
    fn layout_is_deterministic() {
        let config = RenderConfig::default();
        let metrics = EstimatedMetrics::default();
        let a = layout_text(crate::SAMPLE_CREDITS, &config, &metrics).unwrap();
        let b = layout_text(crate::SAMPLE_CREDITS, &config, &metrics).unwrap();
        assert_eq!(a, b);
    }
}
