//! Line classification: content rows versus blank spacer rows.

use log::debug;

use crate::model::{Line, LineKind};

/// Split `text` on `\n` and classify every row.
///
/// Rows are trimmed at both ends (Unicode whitespace, so `\r` and U+3000
/// go too). A row that is empty after trimming becomes a spacer with
/// `space_line_height`; every other row is content with `line_height`.
pub fn classify_lines(text: &str, line_height: f64, space_line_height: f64) -> Vec<Line> {
    text.split('\n')
        .map(|raw| {
            let trimmed = raw.trim();
            let (kind, height) = if trimmed.is_empty() {
                (LineKind::Spacer, space_line_height)
            } else {
                (LineKind::Content, line_height)
            };
            debug!("{kind:?} line ({height}): {trimmed:?}");
            Line {
                raw: raw.to_string(),
                text: trimmed.to_string(),
                kind,
                height,
            }
        })
        .collect()
}

/// Canvas height needed for a set of classified lines.
pub fn total_height(lines: &[Line]) -> f64 {
    lines.iter().map(|l| l.height).sum()
}
