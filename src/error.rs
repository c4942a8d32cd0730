//! Error types for configuration, font loading and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a render before any layout work is done.
///
/// Per-line anomalies (odd space counts, blank lines) never surface here:
/// the placement rules absorb them and always produce output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("font file not found: {}", .0.display())]
    FontNotFound(PathBuf),

    #[error("cannot read font '{}': {reason}", .path.display())]
    InvalidFont { path: PathBuf, reason: String },

    #[error("malformed configuration: {0}")]
    MalformedConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration file: {0}")]
    Config(#[from] serde_json::Error),
}
