//! staffroll — five-character-take credit typesetting rendered to SVG.
//!
//! Every line of credit text is fitted into a fixed slot the width of five
//! full-width characters: short names are spread to the slot edges, long
//! lines are compressed horizontally, and blank lines become spacers.
//!
//! # Example
//! ```no_run
//! use staffroll::{render_with_font_file, RenderConfig};
//!
//! let config = RenderConfig {
//!     font_path: "fonts/NotoSansJP-Medium.ttf".into(),
//!     ..RenderConfig::default()
//! };
//! let svg = render_with_font_file("田中 一郎\n鈴木次郎", &config).unwrap();
//! std::fs::write("credits.svg", svg).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod font;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod style;

pub use config::RenderConfig;
pub use error::RenderError;
pub use font::{EstimatedMetrics, FontFile, FontMetrics};
pub use layout::{layout_text, PlacementRule, Typesetter};
pub use model::*;
pub use renderer::{layout_to_svg, render_text_to_svg, RenderStyle};
pub use style::{Color, FontWeight};

/// Credits rendered when no input is given; covers every placement rule.
pub const SAMPLE_CREDITS: &str = "田中 一郎\n鈴木次郎\n乾 三平\n\n四条 保\n吾郎丸\n清六\nnana\n\n\
八ノ戸 力\n万 久太郎\nⅩ\n一二三十一\n\n\
１２イエモン\n１３日の金曜日\n\
１４日の土曜午後\n１５日の日曜日深夜\n\n\
東京都渋谷区渋谷町渋谷\n\
Mac\nLinux\nWindows\n\n\
Famicom_Guy\n\
Michael_Lawson\n\
Seven_Seven_Seven\n\
May_the_force_be_with_you\n\
ブースケ・サマンサオバタ\n\
寿限無寿限無五劫の擦り切れ海砂利水魚の\n";

/// Load the configured font and render `text` to SVG.
///
/// The font is resolved before any layout work, so a missing font is
/// reported as [`RenderError::FontNotFound`] regardless of the text.
pub fn render_with_font_file(text: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let font = FontFile::load(&config.font_path)?;
    render_text_to_svg(text, config, &font)
}

/// Convert a layout to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn layout_to_json(layout: &StaffRollLayout) -> Result<String, String> {
    serde_json::to_string_pretty(layout).map_err(|e| format!("JSON serialization error: {e}"))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render credit text to SVG and return it as a C string.
/// The caller must free the returned string with `staffroll_free_string`.
///
/// `config_json` is a JSON [`RenderConfig`]; null means all defaults.
/// Returns null on any error.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string. `config_json` must
/// be null or a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn staffroll_render(
    text: *const c_char,
    config_json: *const c_char,
) -> *mut c_char {
    if text.is_null() {
        return std::ptr::null_mut();
    }
    let text = match unsafe { CStr::from_ptr(text) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let config = if config_json.is_null() {
        RenderConfig::default()
    } else {
        let json = match unsafe { CStr::from_ptr(config_json) }.to_str() {
            Ok(s) => s,
            Err(_) => return std::ptr::null_mut(),
        };
        match RenderConfig::from_json(json) {
            Ok(c) => c,
            Err(_) => return std::ptr::null_mut(),
        }
    };

    match render_with_font_file(text, &config) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by staffroll functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a staffroll function, or null.
#[no_mangle]
pub unsafe extern "C" fn staffroll_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
