//! Error types for the software canvas.

use thiserror::Error;

/// Result type for canvas operations.
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Errors a [`PixmapSurface`](crate::PixmapSurface) reports.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// A style setter was given a string that is not a CSS color.
    #[error("invalid CSS color: {0:?}")]
    InvalidColor(String),

    /// `set_font` was given a string that is not a canvas font.
    #[error("invalid font: {0:?}")]
    InvalidFont(String),

    /// An arc or ellipse was given a negative radius.
    #[error("negative radius: {0}")]
    NegativeRadius(f64),

    /// The canvas cannot be allocated at this size.
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Encoding or writing the output image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
