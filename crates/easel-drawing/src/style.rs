//! Partial style records.
//!
//! Each record is a set of optional fields. Combining two records keeps,
//! field by field, the left value when present and the right one otherwise,
//! so `concat_all([a, b, c])` yields the leftmost value set for each field.
//! A field left empty at render time inherits whatever the surrounding scope
//! set on the surface.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::combine::Combine;
use crate::shape::Point;

/// How a filled shape or text is painted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillStyle {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl FillStyle {
    /// A fill style that only sets the color.
    #[must_use]
    pub const fn color(color: Color) -> Self {
        Self { color: Some(color) }
    }
}

impl Combine for FillStyle {
    fn empty() -> Self {
        Self::default()
    }

    fn combine(self, other: Self) -> Self {
        Self {
            color: self.color.or(other.color),
        }
    }
}

/// How an outlined shape is stroked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutlineStyle {
    /// Stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Stroke width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
}

impl OutlineStyle {
    /// An outline style that only sets the color.
    #[must_use]
    pub const fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            line_width: None,
        }
    }

    /// An outline style that only sets the line width.
    #[must_use]
    pub const fn line_width(line_width: f64) -> Self {
        Self {
            color: None,
            line_width: Some(line_width),
        }
    }
}

impl Combine for OutlineStyle {
    fn empty() -> Self {
        Self::default()
    }

    fn combine(self, other: Self) -> Self {
        Self {
            color: self.color.or(other.color),
            line_width: self.line_width.or(other.line_width),
        }
    }
}

/// A drop shadow applied to everything drawn inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadow {
    /// Shadow color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Blur radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    /// Offset of the shadow from the shape, applied as x then y.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Point>,
}

impl Shadow {
    /// A shadow that only sets the color.
    #[must_use]
    pub const fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            blur: None,
            offset: None,
        }
    }

    /// A shadow that only sets the blur radius.
    #[must_use]
    pub const fn blur(blur: f64) -> Self {
        Self {
            color: None,
            blur: Some(blur),
            offset: None,
        }
    }

    /// A shadow that only sets the offset.
    #[must_use]
    pub const fn offset(offset: Point) -> Self {
        Self {
            color: None,
            blur: None,
            offset: Some(offset),
        }
    }
}

impl Combine for Shadow {
    fn empty() -> Self {
        Self::default()
    }

    fn combine(self, other: Self) -> Self {
        Self {
            color: self.color.or(other.color),
            blur: self.blur.or(other.blur),
            offset: self.offset.or(other.offset),
        }
    }
}
