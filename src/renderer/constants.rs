//! Shared constants for the SVG renderer.

// ── Debug guides ────────────────────────────────────────────────────
pub(super) const GUIDE_COLOR: &str = "lightblue";
pub(super) const GUIDE_CENTER_DASH: &str = "5,5";

// ── Fallbacks ───────────────────────────────────────────────────────
pub(super) const FALLBACK_FONT_FAMILY: &str = "sans-serif";
