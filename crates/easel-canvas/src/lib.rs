//! Software canvas for the Easel renderer.
//!
//! [`PixmapSurface`] implements [`easel_drawing::Surface`] on a tiny-skia
//! pixmap with HTML canvas semantics, so a [`Drawing`](easel_drawing::Drawing)
//! can be rendered straight to pixels and written out as an image.
//!
//! # Architecture
//!
//! ```text
//! Drawing → render() → PixmapSurface → Pixmap → PNG/JPEG
//!                          ↓
//!              arc (Béziers), font (fontdue)
//! ```
//!
//! Colors arrive as CSS strings and are parsed with
//! [`easel_common::Rgba::parse`]. Features the rasterizer approximates
//! (shadow blur, rotated text) are reported once through
//! [`easel_common::warning`].

pub mod arc;
pub mod error;
pub mod font;
pub mod options;
pub mod surface;

pub use error::{CanvasError, Result};
pub use font::{FontBook, FontSpec};
pub use options::CanvasOptions;
pub use surface::PixmapSurface;
