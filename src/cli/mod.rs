pub mod completions;
pub mod html;
pub mod raster;

use clap::{Parser, Subcommand};

use crate::background::select_background;
use crate::colour::Colour;
use crate::error::Result;
use crate::output::Printer;
use crate::sampler::Sampler;
use crate::source::PixelSource;

/// pxgrid - pixel-art grid generator
#[derive(Parser, Debug)]
#[command(name = "pxgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an image as an HTML+CSS pixel grid
    Html(html::HtmlArgs),

    /// Render an image as a block-scaled raster file
    Raster(raster::RasterArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Use the override when given, otherwise select by frequency and report it.
pub(crate) fn resolve_background<S: PixelSource>(
    printer: &Printer,
    sampler: &Sampler<'_, S>,
    override_colour: Option<Colour>,
) -> Result<Colour> {
    if let Some(colour) = override_colour {
        return Ok(colour);
    }
    let summary = select_background(sampler.samples().map(|s| s.colour))?;
    printer.info(
        "Background",
        &format!(
            "{} ({}/{} samples)",
            summary.colour, summary.frequency, summary.total
        ),
    );
    Ok(summary.colour)
}
