use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxgrid operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxGridError {
    #[error("invalid stride {value}: must be at least 1")]
    #[diagnostic(code(pxgrid::stride))]
    InvalidStride { value: u32 },

    #[error("invalid pixel size {value}: must be at least 1")]
    #[diagnostic(code(pxgrid::pixel_size))]
    InvalidPixelSize { value: u32 },

    #[error("sampling produced no cells")]
    #[diagnostic(
        code(pxgrid::empty_sample),
        help("the source image has zero area, so there is no colour to select")
    )]
    EmptySample,

    #[error("output canvas has zero area ({width}x{height} cells)")]
    #[diagnostic(code(pxgrid::empty_canvas))]
    EmptyCanvas { width: u32, height: u32 },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxgrid::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("image error with {path}: {message}")]
    #[diagnostic(code(pxgrid::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("parse error: {message}")]
    #[diagnostic(code(pxgrid::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PxGridError>;
