//! The drawing tree.
//!
//! A [`Drawing`] is an immutable description of a picture. Leaves paint
//! (fill, outline, text); [`Drawing::Many`] sequences independent drawings;
//! the remaining variants each wrap exactly one child and change the ambient
//! state (transform, clip, shadow) for that child only.

use serde::{Deserialize, Serialize};

use crate::combine::Combine;
use crate::font::Font;
use crate::shape::Shape;
use crate::style::{FillStyle, OutlineStyle, Shadow};

/// A picture, as a tree of drawing instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Drawing {
    /// Fill a shape.
    Fill {
        /// The geometry to fill.
        shape: Shape,
        /// Fill color; an empty style inherits the ambient fill.
        #[serde(default)]
        style: FillStyle,
    },
    /// Stroke the outline of a shape.
    Outline {
        /// The geometry to stroke.
        shape: Shape,
        /// Stroke color and width; empty fields inherit.
        #[serde(default)]
        style: OutlineStyle,
    },
    /// Fill a string of text with its baseline origin at (`x`, `y`).
    Text {
        /// The font to draw with.
        font: Font,
        /// Baseline origin x.
        x: f64,
        /// Baseline origin y.
        y: f64,
        /// Text color.
        #[serde(default)]
        style: FillStyle,
        /// The string to draw.
        text: String,
    },
    /// Independent drawings rendered in order.
    Many {
        /// The drawings, back to front.
        drawings: Vec<Drawing>,
    },
    /// Scale the child's coordinate system.
    Scale {
        /// Horizontal factor.
        scale_x: f64,
        /// Vertical factor.
        scale_y: f64,
        /// The scaled drawing.
        drawing: Box<Drawing>,
    },
    /// Translate the child's coordinate system.
    Translate {
        /// Horizontal offset.
        translate_x: f64,
        /// Vertical offset.
        translate_y: f64,
        /// The translated drawing.
        drawing: Box<Drawing>,
    },
    /// Rotate the child's coordinate system.
    Rotate {
        /// Angle in radians.
        angle: f64,
        /// The rotated drawing.
        drawing: Box<Drawing>,
    },
    /// Restrict the child to the inside of a shape.
    Clipped {
        /// The clip region.
        shape: Shape,
        /// The clipped drawing.
        drawing: Box<Drawing>,
    },
    /// Draw the child with a shadow.
    WithShadow {
        /// Shadow properties; empty fields inherit.
        shadow: Shadow,
        /// The shadowed drawing.
        drawing: Box<Drawing>,
    },
}

impl Drawing {
    /// Fill `shape` with `style`.
    #[must_use]
    pub const fn fill(shape: Shape, style: FillStyle) -> Self {
        Self::Fill { shape, style }
    }

    /// Stroke `shape` with `style`.
    #[must_use]
    pub const fn outline(shape: Shape, style: OutlineStyle) -> Self {
        Self::Outline { shape, style }
    }

    /// Draw `text` at (`x`, `y`).
    #[must_use]
    pub fn text(font: Font, x: f64, y: f64, style: FillStyle, text: impl Into<String>) -> Self {
        Self::Text {
            font,
            x,
            y,
            style,
            text: text.into(),
        }
    }

    /// A group of drawings, kept exactly as given.
    ///
    /// Use [`Combine::combine`] or `collect()` to build flat groups.
    #[must_use]
    pub fn many(drawings: impl IntoIterator<Item = Self>) -> Self {
        Self::Many {
            drawings: drawings.into_iter().collect(),
        }
    }

    /// Scale `drawing`.
    #[must_use]
    pub fn scale(scale_x: f64, scale_y: f64, drawing: Self) -> Self {
        Self::Scale {
            scale_x,
            scale_y,
            drawing: Box::new(drawing),
        }
    }

    /// Translate `drawing`.
    #[must_use]
    pub fn translate(translate_x: f64, translate_y: f64, drawing: Self) -> Self {
        Self::Translate {
            translate_x,
            translate_y,
            drawing: Box::new(drawing),
        }
    }

    /// Rotate `drawing` by `angle` radians.
    #[must_use]
    pub fn rotate(angle: f64, drawing: Self) -> Self {
        Self::Rotate {
            angle,
            drawing: Box::new(drawing),
        }
    }

    /// Clip `drawing` to `shape`.
    #[must_use]
    pub fn clipped(shape: Shape, drawing: Self) -> Self {
        Self::Clipped {
            shape,
            drawing: Box::new(drawing),
        }
    }

    /// Draw `drawing` with `shadow`.
    #[must_use]
    pub fn with_shadow(shadow: Shadow, drawing: Self) -> Self {
        Self::WithShadow {
            shadow,
            drawing: Box::new(drawing),
        }
    }

    /// The drawings this one contributes to a group: the children of a
    /// `Many`, or the drawing itself.
    fn into_members(self) -> Vec<Self> {
        match self {
            Self::Many { drawings } => drawings,
            other => vec![other],
        }
    }
}

/// Groups splice into each other instead of nesting, so repeated combination
/// always yields a single flat `Many`.
impl Combine for Drawing {
    fn empty() -> Self {
        Self::Many {
            drawings: Vec::new(),
        }
    }

    fn combine(self, other: Self) -> Self {
        let mut drawings = self.into_members();
        drawings.extend(other.into_members());
        Self::Many { drawings }
    }
}

impl FromIterator<Self> for Drawing {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::concat_all(iter)
    }
}
