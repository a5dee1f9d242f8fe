//! CSS color strings
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! Drawing surfaces receive colors the way an HTML canvas does: as CSS color
//! strings. This module turns such a string into 8-bit RGBA components.

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Black (#000000)
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// An opaque color from its three channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Whether the alpha channel is zero.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Parse a CSS color string: hex notation, any of the
    /// [§ 6.1 named colors](https://www.w3.org/TR/css-color-4/#named-colors),
    /// `transparent`, or an `rgb[a]()`/`hsl[a]()`/`hwb()` function in either
    /// the legacy comma syntax or the space-and-slash syntax.
    ///
    /// Returns `None` for anything else, including empty input.
    #[must_use]
    pub fn parse(css: &str) -> Option<Self> {
        let [r, g, b, a] = csscolorparser::parse(css).ok()?.to_rgba8();
        Some(Self { r, g, b, a })
    }
}
