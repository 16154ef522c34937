//! Raster block output.
//!
//! Reconstructs the sampled grid as an RGB canvas where every cell becomes a
//! `pixel_size` square. The canvas is pre-filled with the background colour;
//! only cells that differ get painted, fully opaque, no blending.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::colour::Colour;
use crate::error::{PxGridError, Result};
use crate::sampler::Sampler;
use crate::source::PixelSource;

/// Render the sampled grid as a block-scaled RGB canvas of
/// `(sampled_width * pixel_size, sampled_height * pixel_size)`.
///
/// # Errors
///
/// `InvalidPixelSize` if `pixel_size` is zero, `EmptyCanvas` if the sampled
/// grid has no cells. Both are validated before any painting.
pub fn render_raster<S: PixelSource>(
    sampler: &Sampler<'_, S>,
    pixel_size: u32,
    background: Colour,
) -> Result<RgbImage> {
    if pixel_size == 0 {
        return Err(PxGridError::InvalidPixelSize { value: pixel_size });
    }

    let sampled_width = sampler.sampled_width();
    let sampled_height = sampler.sampled_height();
    if sampled_width == 0 || sampled_height == 0 {
        return Err(PxGridError::EmptyCanvas {
            width: sampled_width,
            height: sampled_height,
        });
    }

    let mut canvas = RgbImage::from_pixel(
        sampled_width * pixel_size,
        sampled_height * pixel_size,
        Rgb(background.to_rgb()),
    );

    for sample in sampler.samples() {
        if sample.colour == background {
            continue;
        }
        let block = Rgb(sample.colour.to_rgb());
        let origin_x = sample.grid_col * pixel_size;
        let origin_y = sample.grid_row * pixel_size;

        // Blocks from distinct cells never overlap, so paint order is free.
        for dy in 0..pixel_size {
            for dx in 0..pixel_size {
                canvas.put_pixel(origin_x + dx, origin_y + dy, block);
            }
        }
    }

    Ok(canvas)
}

/// Write a rendered canvas to disk; the format follows the path extension.
///
/// # Errors
///
/// Encode failures from the image crate are surfaced unchanged in the
/// message.
pub fn write_raster(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas.save(path).map_err(|e| PxGridError::Image {
        path: path.to_path_buf(),
        message: format!("failed to encode: {}", e),
    })
}
