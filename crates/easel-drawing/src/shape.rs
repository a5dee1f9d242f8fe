//! Drawable geometry.
//!
//! A [`Shape`] only describes geometry. Painting it (fill, stroke, clip) is
//! the job of a [`Drawing`](crate::Drawing).

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::combine::Combine;

/// A point on the two-dimensional plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// The x-axis coordinate.
    pub x: f64,
    /// The y-axis coordinate.
    pub y: f64,
}

impl Point {
    /// A point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A circular arc around (`x`, `y`) from `start` to `end` radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Radius.
    pub r: f64,
    /// Start angle in radians.
    pub start: f64,
    /// End angle in radians.
    pub end: f64,
    /// Sweep counter-clockwise instead of clockwise.
    #[serde(default)]
    pub anticlockwise: bool,
}

/// An elliptical arc with independent radii, rotated by `rotation` radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Radius along the (rotated) x-axis.
    pub rx: f64,
    /// Radius along the (rotated) y-axis.
    pub ry: f64,
    /// Rotation of the ellipse in radians.
    pub rotation: f64,
    /// Start angle in radians.
    pub start: f64,
    /// End angle in radians.
    pub end: f64,
    /// Sweep counter-clockwise instead of clockwise.
    #[serde(default)]
    pub anticlockwise: bool,
}

/// An axis-aligned rectangle from its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// A polyline. A closed path joins its last point back to the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Join the last point back to the first.
    #[serde(default)]
    pub closed: bool,
    /// The points, in drawing order.
    pub points: Vec<Point>,
}

/// Paths concatenate their points; the result is closed if either side is.
impl Combine for Path {
    fn empty() -> Self {
        Self::default()
    }

    fn combine(mut self, other: Self) -> Self {
        self.points.extend(other.points);
        Self {
            closed: self.closed || other.closed,
            points: self.points,
        }
    }
}

/// Geometry that can be filled, stroked, or used as a clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    /// A circular arc.
    Arc(Arc),
    /// An elliptical arc.
    Ellipse(Ellipse),
    /// A rectangle.
    Rect(Rect),
    /// An open or closed polyline.
    Path(Path),
    /// Several shapes accumulated into a single surface path, so one
    /// fill/stroke/clip acts on all of them at once.
    Composite {
        /// The sub-shapes, in drawing order.
        shapes: Vec<Shape>,
    },
}

impl Shape {
    /// A clockwise arc.
    #[must_use]
    pub const fn arc(x: f64, y: f64, r: f64, start: f64, end: f64) -> Self {
        Self::arc_with_direction(x, y, r, start, end, false)
    }

    /// An arc with an explicit winding direction.
    #[must_use]
    pub const fn arc_with_direction(
        x: f64,
        y: f64,
        r: f64,
        start: f64,
        end: f64,
        anticlockwise: bool,
    ) -> Self {
        Self::Arc(Arc {
            x,
            y,
            r,
            start,
            end,
            anticlockwise,
        })
    }

    /// A full circle, as an arc from `0` to `2π`.
    #[must_use]
    pub const fn circle(x: f64, y: f64, r: f64) -> Self {
        Self::arc(x, y, r, 0.0, TAU)
    }

    /// A clockwise elliptical arc.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn ellipse(
        x: f64,
        y: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start: f64,
        end: f64,
    ) -> Self {
        Self::Ellipse(Ellipse {
            x,
            y,
            rx,
            ry,
            rotation,
            start,
            end,
            anticlockwise: false,
        })
    }

    /// A rectangle.
    #[must_use]
    pub const fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Rect(Rect {
            x,
            y,
            width,
            height,
        })
    }

    /// An open path through `points`.
    #[must_use]
    pub fn path(points: impl IntoIterator<Item = Point>) -> Self {
        Self::Path(Path {
            closed: false,
            points: points.into_iter().collect(),
        })
    }

    /// A closed path through `points`.
    #[must_use]
    pub fn closed(points: impl IntoIterator<Item = Point>) -> Self {
        Self::Path(Path {
            closed: true,
            points: points.into_iter().collect(),
        })
    }

    /// Several shapes drawn into one surface path.
    #[must_use]
    pub fn composite(shapes: impl IntoIterator<Item = Self>) -> Self {
        Self::Composite {
            shapes: shapes.into_iter().collect(),
        }
    }
}
