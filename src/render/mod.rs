//! Reconstruction targets for sampled grids.
//!
//! Both renderers consume a sampler plus the chosen background colour and
//! emit only the cells that differ from it; the background is encoded once
//! at the container/canvas level.

mod html;
mod raster;

pub use html::{render_html, ClassTable};
pub use raster::{render_raster, write_raster};
