//! Canvas configuration.

use easel_common::Rgba;

/// Size and background of a new canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasOptions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Color the canvas is cleared to before drawing.
    pub background: Rgba,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            background: Rgba::WHITE,
        }
    }
}
