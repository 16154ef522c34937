//! Html command implementation.
//!
//! Samples the input image and writes a self-contained HTML pixel grid.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::colour::Colour;
use crate::error::{PxGridError, Result};
use crate::output::{display_path, Printer};
use crate::render::render_html;
use crate::sampler::Sampler;
use crate::source::open_image;

use super::resolve_background;

/// Render an image as an HTML+CSS pixel grid
#[derive(Args, Debug)]
pub struct HtmlArgs {
    /// Input image path
    pub input: PathBuf,

    /// Output HTML path
    pub output: PathBuf,

    /// Display size of each cell, in CSS pixels
    #[arg(long, default_value = "10")]
    pub pixel_size: u32,

    /// Sample every nth source row
    #[arg(long, default_value = "1")]
    pub row_interval: u32,

    /// Sample every nth source column
    #[arg(long, default_value = "1")]
    pub col_interval: u32,

    /// Background colour override (hex); skips frequency selection
    #[arg(long)]
    pub background: Option<Colour>,
}

pub fn run(args: HtmlArgs) -> Result<()> {
    let printer = Printer::new();

    let image = open_image(&args.input)?;
    let sampler = Sampler::new(&image, args.row_interval, args.col_interval)?;
    printer.status(
        "Sampling",
        &format!(
            "{} ({}x{} -> {}x{} cells)",
            display_path(&args.input),
            image.width(),
            image.height(),
            sampler.sampled_width(),
            sampler.sampled_height()
        ),
    );

    let background = resolve_background(&printer, &sampler, args.background)?;
    let html = render_html(&sampler, args.pixel_size, background)?;

    fs::write(&args.output, html).map_err(|e| PxGridError::Io {
        path: args.output.clone(),
        message: format!("Failed to write output: {}", e),
    })?;

    printer.success("Finished", &display_path(&args.output));
    Ok(())
}
