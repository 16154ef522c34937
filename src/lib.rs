//! pxgrid - Pixel-art grid generator
//!
//! A library for re-rendering raster images as coarse pixel grids: sample
//! the source on a strided grid, pick the most frequent colour as the
//! background, and emit only the cells that differ — either as an HTML+CSS
//! grid or as a block-scaled raster image.

pub mod background;
pub mod cli;
pub mod colour;
pub mod error;
pub mod output;
pub mod render;
pub mod sampler;
pub mod source;

pub use background::{select_background, BackgroundSummary};
pub use colour::Colour;
pub use error::{PxGridError, Result};
pub use render::{render_html, render_raster, write_raster, ClassTable};
pub use sampler::{Sample, Sampler};
pub use source::{open_image, PixelSource};
