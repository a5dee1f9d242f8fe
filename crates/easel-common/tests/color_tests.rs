//! Integration tests for CSS color-string parsing.

use easel_common::Rgba;

// ========== hex ==========

#[test]
fn test_color_from_hex_6() {
    assert_eq!(Rgba::parse("#ff0000"), Some(Rgba::rgb(255, 0, 0)));
}

#[test]
fn test_color_from_hex_3() {
    assert_eq!(Rgba::parse("#f00"), Some(Rgba::rgb(255, 0, 0)));
}

#[test]
fn test_color_from_hex_8_keeps_alpha() {
    assert_eq!(
        Rgba::parse("#00ff0080"),
        Some(Rgba {
            r: 0,
            g: 255,
            b: 0,
            a: 128
        })
    );
}

#[test]
fn test_color_from_hex_rejects_bad_digits() {
    assert_eq!(Rgba::parse("#ggg"), None);
    assert_eq!(Rgba::parse("#12345"), None);
}

// ========== named ==========

#[test]
fn test_color_named_is_case_insensitive() {
    assert_eq!(Rgba::parse("Black"), Some(Rgba::BLACK));
    assert_eq!(Rgba::parse(" navy "), Some(Rgba::rgb(0, 0, 128)));
    assert_eq!(Rgba::parse("transparent"), Some(Rgba::TRANSPARENT));
}

#[test]
fn test_color_extended_names() {
    assert_eq!(Rgba::parse("rebeccapurple"), Some(Rgba::rgb(102, 51, 153)));
    assert_eq!(Rgba::parse("CornflowerBlue"), Some(Rgba::rgb(100, 149, 237)));
    assert_eq!(Rgba::parse("steelblue"), Some(Rgba::rgb(70, 130, 180)));
    assert_eq!(Rgba::parse("lightgray"), Some(Rgba::rgb(211, 211, 211)));
}

#[test]
fn test_color_unknown_name() {
    assert_eq!(Rgba::parse("blurple"), None);
    assert_eq!(Rgba::parse(""), None);
}

// ========== functions ==========

#[test]
fn test_color_rgb_function() {
    assert_eq!(Rgba::parse("rgb(255, 128, 0)"), Some(Rgba::rgb(255, 128, 0)));
    assert_eq!(
        Rgba::parse("rgba(0, 0, 0, 0.5)"),
        Some(Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 128
        })
    );
}

#[test]
fn test_color_hsl_as_written_by_drawings() {
    // hsl(0, 0%, 0%) is how `Color::BLACK` serializes
    assert_eq!(Rgba::parse("hsl(0, 0%, 0%)"), Some(Rgba::BLACK));
    assert_eq!(Rgba::parse("hsl(360, 100%, 100%)"), Some(Rgba::WHITE));
    assert_eq!(
        Rgba::parse("hsla(120, 100%, 50%, 0.2)"),
        Some(Rgba {
            r: 0,
            g: 255,
            b: 0,
            a: 51
        })
    );
}

#[test]
fn test_color_function_arity() {
    assert_eq!(Rgba::parse("rgb(1, 2)"), None);
    assert_eq!(Rgba::parse("rgb(1, 2, 3, 4, 5)"), None);
    assert_eq!(Rgba::parse("paint(1, 2, 3)"), None);
}
