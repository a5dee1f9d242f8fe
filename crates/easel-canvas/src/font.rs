//! Canvas font strings and the system fonts that draw them.
//!
//! [HTML § 4.12.5.1.9 Text styles](https://html.spec.whatwg.org/multipage/canvas.html#dom-context-2d-font)
//!
//! The `font` attribute takes the CSS `font` shorthand. Only the subset a
//! drawing can produce is understood: optional style, variant, and weight
//! keywords, then a pixel size, then the family.

use fontdue::{Font, FontSettings};

/// Common system font paths to search for a default (regular) font.
const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// System font paths for bold variants.
const FONT_BOLD_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// System font paths for italic variants.
const FONT_ITALIC_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Italic.ttf",
    "/Library/Fonts/Arial Italic.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Italic.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansOblique.ttf",
    // Windows
    "C:\\Windows\\Fonts\\ariali.ttf",
];

/// System font paths for bold-italic variants.
const FONT_BOLD_ITALIC_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Bold Italic.ttf",
    "/Library/Fonts/Arial Bold Italic.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-BoldOblique.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-BoldOblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-BoldItalic.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBoldOblique.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arialbi.ttf",
];

/// A parsed canvas font.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Size in CSS pixels.
    pub size: f64,
    /// Weight is `bold`, `bolder`, or numerically 700 or more.
    pub bold: bool,
    /// Style is `italic` or `oblique`.
    pub italic: bool,
    /// The family list as written, quotes removed.
    pub family: String,
}

impl Default for FontSpec {
    /// The canvas default, `10px sans-serif`.
    fn default() -> Self {
        Self {
            size: 10.0,
            bold: false,
            italic: false,
            family: "sans-serif".to_owned(),
        }
    }
}

impl FontSpec {
    /// Parse `"[style] [variant] [weight] <size>px <family>"`.
    ///
    /// Returns `None` when there is no pixel size, the size is negative
    /// or not a number, a keyword before the size is unknown, or the family
    /// is missing.
    #[must_use]
    pub fn parse(font: &str) -> Option<Self> {
        let mut spec = Self::default();
        let mut words = font.split_whitespace();

        let size = loop {
            let word = words.next()?;
            if let Some(size) = word.strip_suffix("px") {
                break size;
            }
            match word.to_ascii_lowercase().as_str() {
                "normal" | "small-caps" | "lighter" => {}
                "italic" | "oblique" => spec.italic = true,
                "bold" | "bolder" => spec.bold = true,
                weight => spec.bold = weight.parse::<u16>().ok()? >= 700,
            }
        };
        spec.size = size
            .parse()
            .ok()
            .filter(|size: &f64| size.is_finite() && *size >= 0.0)?;

        let family = words.collect::<Vec<_>>().join(" ");
        let family = family.trim_matches(['"', '\'']);
        if family.is_empty() {
            return None;
        }
        family.clone_into(&mut spec.family);
        Some(spec)
    }
}

/// The system fonts text is drawn with, one per style combination.
///
/// Families are not matched; every family draws with the first font found
/// on the search path for its weight and style.
pub struct FontBook {
    regular: Option<Font>,
    bold: Option<Font>,
    italic: Option<Font>,
    bold_italic: Option<Font>,
}

impl FontBook {
    /// Load whatever system fonts the search paths turn up.
    #[must_use]
    pub fn load() -> Self {
        Self {
            regular: load_font_from_paths(FONT_SEARCH_PATHS),
            bold: load_font_from_paths(FONT_BOLD_SEARCH_PATHS),
            italic: load_font_from_paths(FONT_ITALIC_SEARCH_PATHS),
            bold_italic: load_font_from_paths(FONT_BOLD_ITALIC_SEARCH_PATHS),
        }
    }

    /// A book with no fonts; text is skipped.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            regular: None,
            bold: None,
            italic: None,
            bold_italic: None,
        }
    }

    /// Whether any font was found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.regular.is_none()
    }

    /// The best available font for `spec`, falling back through exact
    /// match, partial match, then regular.
    #[must_use]
    pub fn select(&self, spec: &FontSpec) -> Option<&Font> {
        match (spec.bold, spec.italic) {
            (true, true) => self
                .bold_italic
                .as_ref()
                .or(self.bold.as_ref())
                .or(self.regular.as_ref()),
            (true, false) => self.bold.as_ref().or(self.regular.as_ref()),
            (false, true) => self.italic.as_ref().or(self.regular.as_ref()),
            (false, false) => self.regular.as_ref(),
        }
    }
}

fn load_font_from_paths(paths: &[&str]) -> Option<Font> {
    paths.iter().find_map(|path| {
        let data = std::fs::read(path).ok()?;
        Font::from_bytes(data, FontSettings::default()).ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_and_family() {
        let spec = FontSpec::parse("48px serif").unwrap();
        assert!((spec.size - 48.0).abs() < f64::EPSILON);
        assert!(!spec.bold && !spec.italic);
        assert_eq!(spec.family, "serif");
    }

    #[test]
    fn test_parse_keywords() {
        let spec = FontSpec::parse("italic small-caps bold 12.5px Helvetica Neue").unwrap();
        assert!(spec.bold && spec.italic);
        assert!((spec.size - 12.5).abs() < f64::EPSILON);
        assert_eq!(spec.family, "Helvetica Neue");
    }

    #[test]
    fn test_parse_numeric_weight() {
        assert!(FontSpec::parse("700 10px serif").unwrap().bold);
        assert!(!FontSpec::parse("400 10px serif").unwrap().bold);
    }

    #[test]
    fn test_parse_strips_quotes() {
        assert_eq!(
            FontSpec::parse("16px \"Fira Sans\"").unwrap().family,
            "Fira Sans"
        );
    }

    #[test]
    fn test_parse_accepts_zero_size() {
        let spec = FontSpec::parse("0px serif").unwrap();
        assert!(spec.size.abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(FontSpec::parse(""), None);
        assert_eq!(FontSpec::parse("serif"), None);
        assert_eq!(FontSpec::parse("12px"), None);
        assert_eq!(FontSpec::parse("wobbly 12px serif"), None);
        assert_eq!(FontSpec::parse("-3px serif"), None);
        assert_eq!(FontSpec::parse("bigpx serif"), None);
    }

    #[test]
    fn test_empty_book_selects_nothing() {
        let book = FontBook::empty();
        assert!(book.is_empty());
        assert!(book.select(&FontSpec::default()).is_none());
    }
}
