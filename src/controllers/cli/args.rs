use std::path::{Path, PathBuf};

use clap::Parser;

pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 400;
pub const DEFAULT_OUTPUT: &str = "output/gradient.ppm";

/// Render the yellow-teal-blue transition as a gradient strip.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct GradientArgs {
    /// Strip width in pixels, at least 2.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Strip height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Output file; a `.png` extension writes PNG, anything else PPM.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Slider position to print the swatch readout for.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f64,

    /// Fill the strip with rayon.
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
}

impl OutputFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Ppm,
        }
    }
}
