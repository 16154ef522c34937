//! Strided grid sampling over a pixel source.

use crate::colour::Colour;
use crate::error::{PxGridError, Result};
use crate::source::PixelSource;

/// One sampled grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Output grid row (0-indexed).
    pub grid_row: u32,

    /// Output grid column (0-indexed).
    pub grid_col: u32,

    /// Source x coordinate the cell was read from.
    pub source_x: u32,

    /// Source y coordinate the cell was read from.
    pub source_y: u32,

    /// Sampled colour.
    pub colour: Colour,
}

/// Walks a pixel source on a strided grid in row-major order.
///
/// The cell at grid position `(i, j)` is read from source coordinate
/// `(j * col_stride, i * row_stride)`. Row-major order is load-bearing:
/// background selection breaks frequency ties by first occurrence, so the
/// walk must not be reordered.
pub struct Sampler<'a, S: PixelSource> {
    source: &'a S,
    row_stride: u32,
    col_stride: u32,
}

impl<'a, S: PixelSource> Sampler<'a, S> {
    /// Create a sampler over `source`. Strides are the number of source
    /// pixels between consecutive samples on each axis.
    ///
    /// # Errors
    ///
    /// `InvalidStride` if either stride is zero. Validated here, before any
    /// sampling happens.
    pub fn new(source: &'a S, row_stride: u32, col_stride: u32) -> Result<Self> {
        if row_stride == 0 {
            return Err(PxGridError::InvalidStride { value: row_stride });
        }
        if col_stride == 0 {
            return Err(PxGridError::InvalidStride { value: col_stride });
        }
        Ok(Self {
            source,
            row_stride,
            col_stride,
        })
    }

    /// Output grid width: `ceil(source width / col_stride)`.
    pub fn sampled_width(&self) -> u32 {
        self.source.width().div_ceil(self.col_stride)
    }

    /// Output grid height: `ceil(source height / row_stride)`.
    pub fn sampled_height(&self) -> u32 {
        self.source.height().div_ceil(self.row_stride)
    }

    /// Number of cells in the output grid.
    pub fn cell_count(&self) -> usize {
        self.sampled_width() as usize * self.sampled_height() as usize
    }

    /// Lazily yield every grid cell exactly once, row-major.
    ///
    /// Each call returns a fresh pass over the grid.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        let width = self.sampled_width();
        let height = self.sampled_height();

        (0..height).flat_map(move |grid_row| {
            (0..width).map(move |grid_col| {
                let source_x = grid_col * self.col_stride;
                let source_y = grid_row * self.row_stride;
                Sample {
                    grid_row,
                    grid_col,
                    source_x,
                    source_y,
                    colour: self.source.pixel_at(source_x, source_y),
                }
            })
        })
    }
}
