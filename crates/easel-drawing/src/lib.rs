//! Declarative 2D drawings and the interpreter that replays them.
//!
//! # Scope
//!
//! This crate implements:
//! - **Geometry** ([`Shape`]) - arcs, ellipses, rectangles, open/closed
//!   paths, and composites that share one surface path
//! - **Styles** ([`FillStyle`], [`OutlineStyle`], [`Shadow`]) - partial
//!   records whose fields combine left-biased ("first wins")
//! - **Drawings** ([`Drawing`]) - an immutable tree of fills, outlines,
//!   text, groups, transforms, clips, and shadows
//! - **Interpreter** ([`render`]) - lowers a drawing into an ordered,
//!   correctly nested sequence of [`Surface`] calls
//!
//! # Architecture
//!
//! ```text
//! Shape + Style → Drawing → render() → Surface calls → pixels
//!                                          ↓
//!                                  RecordingSurface (tests, traces)
//! ```
//!
//! Every subtree that changes ambient state (styles, transform, clip) is
//! bracketed by `save`/`restore`, so siblings never observe each other's
//! changes.

pub mod color;
pub mod combine;
pub mod drawing;
pub mod font;
pub mod recording;
pub mod render;
pub mod shape;
pub mod style;
pub mod surface;

pub use color::Color;
pub use combine::Combine;
pub use drawing::Drawing;
pub use font::{Font, FontOptions};
pub use recording::{RecordingSurface, SurfaceCall};
pub use render::{Render, render, render_shape};
pub use shape::{Arc, Ellipse, Path, Point, Rect, Shape};
pub use style::{FillStyle, OutlineStyle, Shadow};
pub use surface::{ContextGuard, Surface, with_context};
