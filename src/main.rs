//! `staffroll` — render credit text to a five-character-take SVG.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;

use staffroll::{layout_to_json, layout_to_svg, FontFile, RenderConfig, RenderStyle, SAMPLE_CREDITS};

/// Convert staff-roll text to SVG using the five-character-take rule.
#[derive(Parser, Debug)]
#[command(name = "staffroll", version, about)]
struct Args {
    /// JSON config file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file (ttf/otf)
    #[arg(short = 'f', long)]
    font: Option<PathBuf>,

    /// Font size
    #[arg(short = 's', long)]
    font_size: Option<f64>,

    /// Gap between the reference characters of the slot
    #[arg(long)]
    font_space: Option<f64>,

    /// Minimum horizontal scale for long lines
    #[arg(long)]
    min_scale: Option<f64>,

    /// Text color, #RRGGBB or rgba(r, g, b, a)
    #[arg(short = 'c', long)]
    font_color: Option<String>,

    /// Height of a text line
    #[arg(short = 'l', long)]
    line_height: Option<f64>,

    /// Height of a blank line
    #[arg(long)]
    space_line_height: Option<f64>,

    /// SVG width
    #[arg(short = 'w', long)]
    width: Option<f64>,

    /// Input text file (defaults to built-in sample credits)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output SVG file (defaults to the input name with .svg)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Draw guide lines (center, slot edges, canvas edges)
    #[arg(long)]
    debug: bool,

    /// Print the computed layout as JSON to stdout
    #[arg(long)]
    layout_json: bool,
}

impl Args {
    fn to_config(&self) -> anyhow::Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_file(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?,
            None => RenderConfig::default(),
        };
        if let Some(font) = &self.font {
            config.font_path = font.clone();
        }
        if let Some(v) = self.font_size {
            config.font_size = v;
        }
        if let Some(v) = self.font_space {
            config.font_space = v;
        }
        if let Some(v) = self.min_scale {
            config.min_scale = v;
        }
        if let Some(v) = &self.font_color {
            config.font_color = v.clone();
        }
        if let Some(v) = self.line_height {
            config.line_height = v;
        }
        if let Some(v) = self.space_line_height {
            config.space_line_height = v;
        }
        if let Some(v) = self.width {
            config.width = v;
        }
        config.debug |= self.debug;
        Ok(config)
    }

    fn output_path(&self) -> PathBuf {
        if let Some(out) = &self.output {
            return out.clone();
        }
        let stem = self
            .input
            .as_deref()
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "staffroll".to_string());
        PathBuf::from(format!("{stem}.svg"))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.to_config()?;

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input '{}'", path.display()))?,
        None => SAMPLE_CREDITS.to_string(),
    };

    let font = FontFile::load(&config.font_path)
        .with_context(|| format!("Cannot use font '{}'", config.font_path.display()))?;
    let layout = staffroll::layout_text(&text, &config, &font).context("Invalid layout settings")?;

    if args.layout_json {
        let json = layout_to_json(&layout).map_err(anyhow::Error::msg)?;
        println!("{json}");
    }

    let style = RenderStyle::resolve(&config, &font);
    let svg = layout_to_svg(&layout, &style, config.debug);
    let output = args.output_path();
    std::fs::write(&output, &svg)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    info!("wrote {} ({} bytes)", output.display(), svg.len());
    Ok(())
}
