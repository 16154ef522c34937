//! Pixel access capability over decoded images.
//!
//! The sampling core reads through [`PixelSource`] so that file decoding
//! stays with the caller and tests can supply synthetic buffers.

use std::path::Path;

use image::RgbImage;

use crate::colour::Colour;
use crate::error::{PxGridError, Result};

/// Random-access view of a decoded RGB image.
///
/// Immutable for the duration of a run.
pub trait PixelSource {
    /// Width in source pixels.
    fn width(&self) -> u32;

    /// Height in source pixels.
    fn height(&self) -> u32;

    /// Colour at `(x, y)`, with `x < width()` and `y < height()`.
    fn pixel_at(&self, x: u32, y: u32) -> Colour;
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel_at(&self, x: u32, y: u32) -> Colour {
        let [r, g, b] = self.get_pixel(x, y).0;
        Colour::rgb(r, g, b)
    }
}

/// Decode an image file into an RGB buffer.
///
/// Any alpha or palette data is flattened to RGB; decode failures from the
/// image crate are surfaced unchanged in the message.
pub fn open_image(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|e| PxGridError::Image {
        path: path.to_path_buf(),
        message: format!("failed to decode: {}", e),
    })?;
    Ok(decoded.to_rgb8())
}
