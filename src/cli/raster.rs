//! Raster command implementation.
//!
//! Samples the input image and writes a block-scaled raster file; the
//! sampling interval applies to both axes.

use std::path::PathBuf;

use clap::Args;

use crate::colour::Colour;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{render_raster, write_raster};
use crate::sampler::Sampler;
use crate::source::open_image;

use super::resolve_background;

/// Render an image as a block-scaled raster file
#[derive(Args, Debug)]
pub struct RasterArgs {
    /// Input image path
    pub input: PathBuf,

    /// Output image path (format follows the extension)
    pub output: PathBuf,

    /// Size of each pixel block, in output pixels
    #[arg(long, default_value = "10")]
    pub pixel: u32,

    /// Sampling interval, applied to both axes
    #[arg(long, default_value = "1")]
    pub interval: u32,

    /// Background colour override (hex); skips frequency selection
    #[arg(long)]
    pub background: Option<Colour>,
}

pub fn run(args: RasterArgs) -> Result<()> {
    let printer = Printer::new();

    let image = open_image(&args.input)?;
    let sampler = Sampler::new(&image, args.interval, args.interval)?;
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
    let canvas = render_raster(&sampler, args.pixel, background)?;
    write_raster(&canvas, &args.output)?;

    printer.success(
        "Finished",
        &format!(
            "{} ({}x{})",
            display_path(&args.output),
            canvas.width(),
            canvas.height()
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PxGridError;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    fn write_input(dir: &std::path::Path) -> PathBuf {
        // Mostly red with a single blue pixel.
        let mut img = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 255]));
        let path = dir.join("input.png");
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_raster_command_writes_blocks() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let output = dir.path().join("out.png");

        let args = RasterArgs {
            input,
            output: output.clone(),
            pixel: 10,
            interval: 1,
            background: None,
        };

        run(args).unwrap();

        let result = image::open(&output).unwrap().to_rgb8();
        assert_eq!(result.dimensions(), (20, 20));
        // Blue block at the top-right cell; background fill elsewhere.
        assert_eq!(result.get_pixel(10, 0).0, [0, 0, 255]);
        assert_eq!(result.get_pixel(19, 9).0, [0, 0, 255]);
        assert_eq!(result.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(result.get_pixel(5, 15).0, [255, 0, 0]);
    }

    #[test]
    fn test_raster_command_interval_applies_to_both_axes() {
        let dir = tempdir().unwrap();
        let img = RgbImage::from_pixel(10, 6, Rgb([3, 3, 3]));
        let input = dir.path().join("input.png");
        img.save(&input).unwrap();
        let output = dir.path().join("out.png");

        let args = RasterArgs {
            input,
            output: output.clone(),
            pixel: 2,
            interval: 4,
            background: None,
        };

        run(args).unwrap();

        // ceil(10/4) x ceil(6/4) cells, 2px each.
        let result = image::open(&output).unwrap().to_rgb8();
        assert_eq!(result.dimensions(), (6, 4));
    }

    #[test]
    fn test_raster_command_background_override() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let output = dir.path().join("out.png");

        let args = RasterArgs {
            input,
            output: output.clone(),
            pixel: 1,
            interval: 1,
            background: Some(Colour::rgb(0, 0, 255)),
        };

        run(args).unwrap();

        // With blue forced as background, the red cells are painted over it.
        let result = image::open(&output).unwrap().to_rgb8();
        assert_eq!(result.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(result.get_pixel(1, 0).0, [0, 0, 255]);
    }

    #[test]
    fn test_raster_command_zero_pixel_fails_before_output() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let output = dir.path().join("out.png");

        let args = RasterArgs {
            input,
            output: output.clone(),
            pixel: 0,
            interval: 1,
            background: None,
        };

        let err = run(args).unwrap_err();
        assert!(matches!(err, PxGridError::InvalidPixelSize { value: 0 }));
        assert!(!output.exists());
    }
}
