//! Colors as they are handed to a drawing surface.
//!
//! A [`Color`] is either a literal CSS string or an HSLA quadruple; both
//! serialize to a CSS color string with [`Color::to_css`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fill, stroke, or shadow color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Color {
    /// A CSS color string passed to the surface verbatim (usually `#rrggbb`).
    Hex {
        /// The color string.
        value: String,
    },
    /// Hue, saturation, lightness and alpha.
    Hsla {
        /// Hue in degrees.
        h: f64,
        /// Saturation, `0.0..=1.0`.
        s: f64,
        /// Lightness, `0.0..=1.0`.
        l: f64,
        /// Alpha, `0.0..=1.0`.
        a: f64,
    },
}

impl Color {
    /// A literal CSS color string.
    #[must_use]
    pub fn hex(value: impl Into<String>) -> Self {
        Self::Hex {
            value: value.into(),
        }
    }

    /// A color from hue, saturation, lightness and alpha.
    #[must_use]
    pub const fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self::Hsla { h, s, l, a }
    }

    /// An opaque color from hue, saturation and lightness.
    #[must_use]
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::hsla(h, s, l, 1.0)
    }

    /// Opaque black, `hsl(0, 0%, 0%)`.
    #[must_use]
    pub const fn black() -> Self {
        Self::hsl(0.0, 0.0, 0.0)
    }

    /// Opaque white, `hsl(360, 100%, 100%)`.
    #[must_use]
    pub const fn white() -> Self {
        Self::hsl(360.0, 1.0, 1.0)
    }

    /// Render as a CSS color string.
    ///
    /// Hue, saturation and lightness are rounded to two decimals. The alpha
    /// component is only written (as `hsla(...)`) when it is not exactly 1.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex { value } => value.clone(),
            Self::Hsla { h, s, l, a } => {
                let hue = round2(*h);
                let saturation = round2(s * 100.0);
                let lightness = round2(l * 100.0);
                if *a == 1.0 {
                    format!("hsl({hue}, {saturation}%, {lightness}%)")
                } else {
                    format!("hsla({hue}, {saturation}%, {lightness}%, {a})")
                }
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}
