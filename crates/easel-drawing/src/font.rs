//! Font descriptors.
//!
//! [CSS Fonts § 3.7 'font' shorthand](https://www.w3.org/TR/css-fonts-4/#font-prop)
//!
//! A [`Font`] formats to the shorthand string a canvas expects in its
//! `font` property: `[style] [variant] [weight] <size>px <family>`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Optional style, variant, and weight keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOptions {
    /// `font-style`, e.g. `italic`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// `font-variant`, e.g. `small-caps`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// `font-weight`, e.g. `bold` or `700`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl FontOptions {
    /// Options with nothing set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: None,
            variant: None,
            weight: None,
        }
    }

    /// Set the style keyword.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the variant keyword.
    #[must_use]
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Set the weight keyword.
    #[must_use]
    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    /// Whether no option is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.style.is_none() && self.variant.is_none() && self.weight.is_none()
    }
}

/// Present options separated by single spaces, in declaration order.
impl fmt::Display for FontOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [&self.style, &self.variant, &self.weight]
            .into_iter()
            .filter_map(Option::as_deref)
            .collect();
        f.write_str(&parts.join(" "))
    }
}

/// A font family at a pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name, e.g. `serif`.
    pub family: String,
    /// Size in CSS pixels.
    pub size: f64,
    /// Style, variant, and weight.
    #[serde(default)]
    pub options: FontOptions,
}

impl Font {
    /// A font with no extra options.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self::with_options(family, size, FontOptions::new())
    }

    /// A font with explicit options.
    #[must_use]
    pub fn with_options(family: impl Into<String>, size: f64, options: FontOptions) -> Self {
        Self {
            family: family.into(),
            size,
            options,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.options.is_empty() {
            write!(f, "{} ", self.options)?;
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}
