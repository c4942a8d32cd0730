//! Font metrics providers.
//!
//! The layout engine never rasterizes: it only needs the advance width of
//! each character at a given size, plus the family and subfamily names for
//! the SVG text attributes.

use std::path::{Path, PathBuf};

use log::debug;
use skrifa::instance::{LocationRef, Size};
use skrifa::string::StringId;
use skrifa::{FontRef, GlyphId, MetadataProvider};
use unicode_width::UnicodeWidthChar;

use crate::error::RenderError;

/// Source of per-character advance widths.
pub trait FontMetrics {
    /// Advance width of `ch` at `size` pixels per em.
    fn advance_width(&self, ch: char, size: f64) -> f64;

    /// Family name for the `font-family` attribute.
    fn family_name(&self) -> Option<String> {
        None
    }

    /// Subfamily name (name ID 2), e.g. "Bold" or "Regular".
    fn subfamily_name(&self) -> Option<String> {
        None
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FontFile — metrics read from a TrueType/OpenType file
// ═══════════════════════════════════════════════════════════════════════

/// A font file held in memory. Collections use their first face.
pub struct FontFile {
    path: PathBuf,
    data: Vec<u8>,
}

impl FontFile {
    /// Read and validate a font file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(RenderError::FontNotFound(path.to_path_buf()));
        }
        let data = std::fs::read(path)?;
        Self::from_bytes(path, data)
    }

    /// Wrap font bytes; `path` is only used for messages and the family
    /// name fallback.
    pub fn from_bytes<P: AsRef<Path>>(path: P, data: Vec<u8>) -> Result<Self, RenderError> {
        let path = path.as_ref().to_path_buf();
        if let Err(e) = FontRef::from_index(&data, 0) {
            return Err(RenderError::InvalidFont { path, reason: e.to_string() });
        }
        debug!("loaded font {} ({} bytes)", path.display(), data.len());
        Ok(Self { path, data })
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, 0).ok()
    }

    fn name_string(&self, id: StringId) -> Option<String> {
        let font = self.font_ref()?;
        let name = font.localized_strings(id).english_or_first()?;
        let s: String = name.chars().collect();
        if s.is_empty() { None } else { Some(s) }
    }
}

impl FontMetrics for FontFile {
    fn advance_width(&self, ch: char, size: f64) -> f64 {
        let Some(font) = self.font_ref() else {
            return 0.0;
        };
        let gid = font.charmap().map(ch).unwrap_or(GlyphId::NOTDEF);
        font.glyph_metrics(Size::new(size as f32), LocationRef::default())
            .advance_width(gid)
            .map_or(0.0, f64::from)
    }

    fn family_name(&self) -> Option<String> {
        self.name_string(StringId::FAMILY_NAME)
            .or_else(|| family_from_file_name(&self.path))
    }

    fn subfamily_name(&self) -> Option<String> {
        self.name_string(StringId::SUBFAMILY_NAME)
    }
}

/// "fonts/NotoSansJP-Medium.ttf" -> "NotoSansJP-Medium"
fn family_from_file_name(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
}

// ═══════════════════════════════════════════════════════════════════════
// EstimatedMetrics — no font file needed
// ═══════════════════════════════════════════════════════════════════════

/// Width estimate from East Asian display width: one column is half an em,
/// so full-width characters measure exactly one em. Control characters and
/// other zero-width characters measure zero.
#[derive(Debug, Clone, Default)]
pub struct EstimatedMetrics {
    pub family: Option<String>,
}

impl EstimatedMetrics {
    pub fn with_family(family: &str) -> Self {
        Self { family: Some(family.to_string()) }
    }
}

impl FontMetrics for EstimatedMetrics {
    fn advance_width(&self, ch: char, size: f64) -> f64 {
        let columns = ch.width().unwrap_or(0);
        columns as f64 * size * 0.5
    }

    fn family_name(&self) -> Option<String> {
        self.family.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_widths() {
        let m = EstimatedMetrics::default();
        assert_eq!(m.advance_width('あ', 50.0), 50.0);
        assert_eq!(m.advance_width('力', 50.0), 50.0);
        assert_eq!(m.advance_width('\u{3000}', 50.0), 50.0);
        assert_eq!(m.advance_width('M', 50.0), 25.0);
        assert_eq!(m.advance_width('_', 40.0), 20.0);
        assert_eq!(m.advance_width('\u{200B}', 50.0), 0.0);
    }

    fn test_font(name: &str) -> FontFile {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fonts").join(name);
        FontFile::load(&path).expect("test font should load")
    }

    fn em(units: f64, size: f64) -> f64 {
        units / 2048.0 * size
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-3, "expected {expected}, got {actual}");
    }

    #[test]
    fn advances_come_from_hmtx() {
        let font = test_font("DejaVuSans-Bold.ttf");
        assert_close(font.advance_width('M', 50.0), em(2038.0, 50.0));
        assert_close(font.advance_width('i', 50.0), em(702.0, 50.0));
        assert_close(font.advance_width('_', 20.0), em(1024.0, 20.0));
        assert!(font.advance_width('M', 50.0) > font.advance_width('i', 50.0));
    }

    #[test]
    fn missing_glyphs_measure_as_notdef() {
        let font = test_font("DejaVuSans-Bold.ttf");
        let notdef = FontRef::from_index(&font.data, 0)
            .unwrap()
            .glyph_metrics(Size::new(50.0), LocationRef::default())
            .advance_width(GlyphId::NOTDEF)
            .map(f64::from)
            .unwrap();
        assert_close(notdef, em(1229.0, 50.0));
        // no CJK coverage in this font
        assert_eq!(font.advance_width('あ', 50.0), notdef);
        assert_eq!(font.advance_width('力', 50.0), notdef);
    }

    #[test]
    fn names_come_from_the_name_table() {
        let bold = test_font("DejaVuSans-Bold.ttf");
        assert_eq!(bold.family_name().as_deref(), Some("DejaVu Sans"));
        assert_eq!(bold.subfamily_name().as_deref(), Some("Bold"));

        let mono = test_font("DejaVuSansMono.ttf");
        assert_eq!(mono.family_name().as_deref(), Some("DejaVu Sans Mono"));
        assert_eq!(mono.subfamily_name().as_deref(), Some("Book"));
    }

    #[test]
    fn monospace_advances_are_uniform() {
        let mono = test_font("DejaVuSansMono.ttf");
        for ch in ['M', 'i', '_', 'あ'] {
            assert_close(mono.advance_width(ch, 50.0), em(1233.0, 50.0));
        }
    }

    #[test]
    fn family_falls_back_to_file_stem() {
        assert_eq!(
            family_from_file_name(Path::new("fonts/NotoSansJP-Medium.ttf")).as_deref(),
            Some("NotoSansJP-Medium")
        );
        assert_eq!(family_from_file_name(Path::new("")), None);
    }

    #[test]
    fn missing_font_file() {
        let err = FontFile::load("no/such/font.ttf").err();
        assert!(matches!(err, Some(RenderError::FontNotFound(_))));
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        let err = FontFile::from_bytes("junk.ttf", b"not a font at all".to_vec()).err();
        assert!(matches!(err, Some(RenderError::InvalidFont { .. })));
    }
}
