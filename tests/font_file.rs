//! Rendering with real font files from `tests/fonts/` (DejaVu, see the
//! license file there).

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use staffroll::{render_with_font_file, RenderConfig};

fn font_config(name: &str) -> RenderConfig {
    RenderConfig {
        font_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fonts").join(name),
        ..RenderConfig::default()
    }
}

/// (text, x, font-family, font-weight) for every `<text>`.
fn texts(svg: &str) -> Vec<(String, f64, String, String)> {
    let doc = roxmltree::Document::parse(svg).expect("output should be well-formed XML");
    doc.descendants()
        .filter(|n| n.has_tag_name("text"))
        .map(|n| {
            let attr = |name: &str| n.attribute(name).unwrap_or_default().to_string();
            (
                n.text().unwrap_or_default().to_string(),
                attr("x").parse().unwrap(),
                attr("font-family"),
                attr("font-weight"),
            )
        })
        .collect()
}

#[test]
fn bold_font_renders_bold_weight_and_its_family() {
    let svg = render_with_font_file("清六", &font_config("DejaVuSans-Bold.ttf")).unwrap();
    let placed = texts(&svg);
    assert_eq!(placed.len(), 2);
    for (_, _, family, weight) in &placed {
        assert_eq!(family, "DejaVu Sans");
        assert_eq!(weight, "bold");
    }
}

#[test]
fn book_subfamily_renders_normal_weight() {
    let svg = render_with_font_file("清六", &font_config("DejaVuSansMono.ttf")).unwrap();
    let placed = texts(&svg);
    assert_eq!(placed[0].2, "DejaVu Sans Mono");
    assert_eq!(placed[0].3, "normal");
}

#[test]
fn slot_is_measured_with_the_font() {
    // あいうえお are all missing from DejaVu Sans Bold, so each measures as
    // .notdef (1229 units of 2048).
    let glyph = 1229.0 / 2048.0 * 50.0;
    let slot = 5.0 * glyph + 4.0 * 2.0;
    let left = (1280.0 - slot) / 2.0;

    let svg = render_with_font_file("清六", &font_config("DejaVuSans-Bold.ttf")).unwrap();
    let placed = texts(&svg);
    assert!((placed[0].1 - left).abs() < 0.01, "{placed:?}");
    assert!((placed[1].1 - (left + slot)).abs() < 0.01, "{placed:?}");
}

#[test]
fn single_glyph_is_centered_whatever_the_font() {
    for font in ["DejaVuSans-Bold.ttf", "DejaVuSansMono.ttf"] {
        let svg = render_with_font_file("力", &font_config(font)).unwrap();
        assert_eq!(texts(&svg)[0].1, 640.0);
    }
}
