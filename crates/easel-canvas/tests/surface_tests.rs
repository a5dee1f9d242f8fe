//! Integration tests for the software canvas: drawings rendered to pixels.

use std::f64::consts::FRAC_PI_2;

use easel_canvas::{CanvasError, CanvasOptions, FontBook, PixmapSurface};
use easel_common::Rgba;
use easel_common::warning::occurrences;
use easel_drawing::{
    Color, Combine, Drawing, FillStyle, Font, OutlineStyle, Point, Shadow, Shape, Surface,
};

const RED: Rgba = Rgba::rgb(255, 0, 0);
const BLUE: Rgba = Rgba::rgb(0, 0, 255);

fn canvas(width: u32, height: u32) -> PixmapSurface {
    PixmapSurface::with_options(&CanvasOptions {
        width,
        height,
        background: Rgba::WHITE,
    })
    .unwrap()
}

fn fill(color: &str) -> FillStyle {
    FillStyle::color(Color::hex(color))
}

fn draw(surface: &mut PixmapSurface, drawing: &Drawing) {
    drawing.render_to(surface).unwrap();
    assert_eq!(surface.depth(), 0);
}

// ========== Construction ==========

#[test]
fn test_zero_size_is_rejected() {
    assert!(matches!(
        PixmapSurface::new(0, 10),
        Err(CanvasError::InvalidSize {
            width: 0,
            height: 10
        })
    ));
}

#[test]
fn test_default_options() {
    let options = CanvasOptions::default();
    assert_eq!((options.width, options.height), (400, 400));
    let surface = PixmapSurface::with_options(&options).unwrap();
    assert_eq!(surface.pixel(0, 0), Some(Rgba::WHITE));
    assert_eq!(surface.pixel(399, 399), Some(Rgba::WHITE));
    assert_eq!(surface.pixel(400, 0), None);
}

#[test]
fn test_new_canvas_is_transparent() {
    let surface = PixmapSurface::new(4, 4).unwrap();
    assert_eq!(surface.pixel(1, 1), Some(Rgba::TRANSPARENT));
}

// ========== Fill and stroke ==========

#[test]
fn test_fill_rect() {
    let mut surface = canvas(50, 50);
    draw(
        &mut surface,
        &Drawing::fill(Shape::rect(10.0, 10.0, 20.0, 20.0), fill("#ff0000")),
    );
    assert_eq!(surface.pixel(20, 20), Some(RED));
    assert_eq!(surface.pixel(5, 5), Some(Rgba::WHITE));
    assert_eq!(surface.pixel(35, 35), Some(Rgba::WHITE));
}

#[test]
fn test_fill_uses_hsl_color() {
    let mut surface = canvas(20, 20);
    draw(
        &mut surface,
        &Drawing::fill(
            Shape::rect(0.0, 0.0, 20.0, 20.0),
            FillStyle::color(Color::hsl(120.0, 1.0, 0.5)),
        ),
    );
    assert_eq!(surface.pixel(10, 10), Some(Rgba::rgb(0, 255, 0)));
}

#[test]
fn test_fill_accepts_extended_named_colors() {
    let names = [
        ("rebeccapurple", Rgba::rgb(102, 51, 153)),
        ("cornflowerblue", Rgba::rgb(100, 149, 237)),
        ("darkgreen", Rgba::rgb(0, 100, 0)),
        ("lightgray", Rgba::rgb(211, 211, 211)),
        ("steelblue", Rgba::rgb(70, 130, 180)),
    ];
    for (name, expected) in names {
        let mut surface = canvas(4, 4);
        draw(
            &mut surface,
            &Drawing::fill(Shape::rect(0.0, 0.0, 4.0, 4.0), fill(name)),
        );
        assert_eq!(surface.pixel(2, 2), Some(expected), "{name}");
    }
}

#[test]
fn test_pixmap_holds_drawn_pixels() {
    let mut surface = canvas(6, 3);
    draw(
        &mut surface,
        &Drawing::fill(Shape::rect(0.0, 0.0, 6.0, 3.0), fill("rebeccapurple")),
    );
    let pixmap = surface.pixmap();
    assert_eq!((pixmap.width(), pixmap.height()), (6, 3));
    let pixel = pixmap.pixel(5, 2).unwrap();
    assert_eq!(
        (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()),
        (102, 51, 153, 255)
    );
}

#[test]
fn test_default_fill_is_black() {
    let mut surface = canvas(20, 20);
    draw(
        &mut surface,
        &Drawing::fill(Shape::rect(0.0, 0.0, 20.0, 20.0), FillStyle::empty()),
    );
    assert_eq!(surface.pixel(10, 10), Some(Rgba::BLACK));
}

#[test]
fn test_fill_circle() {
    let mut surface = canvas(50, 50);
    draw(
        &mut surface,
        &Drawing::fill(Shape::circle(25.0, 25.0, 10.0), fill("blue")),
    );
    assert_eq!(surface.pixel(25, 25), Some(BLUE));
    assert_eq!(surface.pixel(25, 18), Some(BLUE));
    assert_eq!(surface.pixel(25, 38), Some(Rgba::WHITE));
    assert_eq!(surface.pixel(33, 33), Some(Rgba::WHITE));
}

#[test]
fn test_fill_closed_path() {
    let triangle = Shape::closed([
        Point::new(0.0, 0.0),
        Point::new(40.0, 0.0),
        Point::new(0.0, 40.0),
    ]);
    let mut surface = canvas(40, 40);
    draw(&mut surface, &Drawing::fill(triangle, fill("red")));
    assert_eq!(surface.pixel(5, 5), Some(RED));
    assert_eq!(surface.pixel(35, 35), Some(Rgba::WHITE));
}

#[test]
fn test_outline_strokes_edges_only() {
    let style = OutlineStyle::color(Color::hex("#0000ff")).combine(OutlineStyle::line_width(4.0));
    let mut surface = canvas(40, 40);
    draw(
        &mut surface,
        &Drawing::outline(Shape::rect(10.0, 10.0, 20.0, 20.0), style),
    );
    assert_eq!(surface.pixel(10, 20), Some(BLUE));
    assert_eq!(surface.pixel(20, 20), Some(Rgba::WHITE));
}

// ========== Transforms ==========

#[test]
fn test_scale_does_not_leak_to_sibling() {
    let drawing = Drawing::many([
        Drawing::scale(
            2.0,
            2.0,
            Drawing::fill(Shape::rect(0.0, 0.0, 10.0, 10.0), fill("blue")),
        ),
        Drawing::fill(Shape::rect(30.0, 30.0, 5.0, 5.0), fill("red")),
    ]);
    let mut surface = canvas(80, 80);
    draw(&mut surface, &drawing);
    assert_eq!(surface.pixel(15, 15), Some(BLUE));
    assert_eq!(surface.pixel(25, 25), Some(Rgba::WHITE));
    assert_eq!(surface.pixel(32, 32), Some(RED));
    assert_eq!(surface.pixel(65, 65), Some(Rgba::WHITE));
}

#[test]
fn test_translate_then_rotate() {
    let drawing = Drawing::translate(
        25.0,
        25.0,
        Drawing::rotate(
            FRAC_PI_2,
            Drawing::fill(Shape::rect(0.0, 0.0, 10.0, 5.0), fill("red")),
        ),
    );
    let mut surface = canvas(50, 50);
    draw(&mut surface, &drawing);
    // A quarter turn maps (x, y) to (-y, x).
    assert_eq!(surface.pixel(22, 30), Some(RED));
    assert_eq!(surface.pixel(30, 27), Some(Rgba::WHITE));
}

// ========== Clipping ==========

#[test]
fn test_clip_bounds_child_and_is_restored() {
    let drawing = Drawing::many([
        Drawing::clipped(
            Shape::rect(0.0, 0.0, 10.0, 10.0),
            Drawing::fill(Shape::rect(0.0, 0.0, 50.0, 50.0), fill("red")),
        ),
        Drawing::fill(Shape::rect(30.0, 30.0, 10.0, 10.0), fill("blue")),
    ]);
    let mut surface = canvas(50, 50);
    draw(&mut surface, &drawing);
    assert_eq!(surface.pixel(5, 5), Some(RED));
    assert_eq!(surface.pixel(20, 20), Some(Rgba::WHITE));
    assert_eq!(surface.pixel(35, 35), Some(BLUE));
}

#[test]
fn test_nested_clips_intersect() {
    let drawing = Drawing::clipped(
        Shape::rect(0.0, 0.0, 20.0, 20.0),
        Drawing::clipped(
            Shape::rect(10.0, 10.0, 20.0, 20.0),
            Drawing::fill(Shape::rect(0.0, 0.0, 40.0, 40.0), fill("red")),
        ),
    );
    let mut surface = canvas(40, 40);
    draw(&mut surface, &drawing);
    assert_eq!(surface.pixel(15, 15), Some(RED));
    assert_eq!(surface.pixel(5, 5), Some(Rgba::WHITE));
    assert_eq!(surface.pixel(25, 25), Some(Rgba::WHITE));
}

#[test]
fn test_empty_clip_hides_everything() {
    let drawing = Drawing::clipped(
        Shape::closed([]),
        Drawing::fill(Shape::rect(0.0, 0.0, 10.0, 10.0), fill("red")),
    );
    let mut surface = canvas(10, 10);
    draw(&mut surface, &drawing);
    assert_eq!(surface.pixel(5, 5), Some(Rgba::WHITE));
}

// ========== Shadows ==========

#[test]
fn test_hard_shadow_is_offset_in_device_space() {
    let shadow = Shadow::color(Color::hex("black")).combine(Shadow::offset(Point::new(10.0, 10.0)));
    let drawing = Drawing::with_shadow(
        shadow,
        Drawing::scale(
            2.0,
            2.0,
            Drawing::fill(Shape::rect(2.5, 2.5, 5.0, 5.0), fill("red")),
        ),
    );
    let mut surface = canvas(40, 40);
    draw(&mut surface, &drawing);
    assert_eq!(surface.pixel(10, 10), Some(RED));
    assert_eq!(surface.pixel(22, 22), Some(Rgba::BLACK));
    assert_eq!(surface.pixel(2, 2), Some(Rgba::WHITE));
}

#[test]
fn test_shadow_blur_warns() {
    let shadow = Shadow::concat_all([
        Shadow::color(Color::hex("black")),
        Shadow::blur(4.0),
        Shadow::offset(Point::new(1.0, 1.0)),
    ]);
    let mut surface = canvas(10, 10);
    draw(
        &mut surface,
        &Drawing::with_shadow(
            shadow,
            Drawing::fill(Shape::rect(0.0, 0.0, 5.0, 5.0), fill("red")),
        ),
    );
    let message = "shadow blur is not rasterized; shadows are drawn hard-edged";
    assert!(occurrences("canvas", message) > 0);
}

// ========== Errors ==========

#[test]
fn test_invalid_color_propagates_and_restores() {
    let drawing = Drawing::translate(
        1.0,
        1.0,
        Drawing::fill(Shape::rect(0.0, 0.0, 5.0, 5.0), fill("not-a-color")),
    );
    let mut surface = canvas(10, 10);
    let error = drawing.render_to(&mut surface).unwrap_err();
    assert!(matches!(error, CanvasError::InvalidColor(ref color) if color == "not-a-color"));
    assert_eq!(surface.depth(), 0);
    assert_eq!(surface.pixel(3, 3), Some(Rgba::WHITE));
}

#[test]
fn test_invalid_font_is_an_error() {
    let mut surface = canvas(10, 10);
    assert!(matches!(
        surface.set_font("enormous"),
        Err(CanvasError::InvalidFont(_))
    ));
}

#[test]
fn test_negative_radius_is_an_error() {
    let mut surface = canvas(10, 10);
    let drawing = Drawing::fill(Shape::circle(5.0, 5.0, -1.0), FillStyle::empty());
    assert!(matches!(
        drawing.render_to(&mut surface),
        Err(CanvasError::NegativeRadius(_))
    ));
    assert_eq!(surface.depth(), 0);
}

#[test]
fn test_restore_on_empty_stack_is_noop() {
    let mut surface = canvas(10, 10);
    surface.restore().unwrap();
    assert_eq!(surface.depth(), 0);
}

// ========== Text ==========

#[test]
fn test_text_without_fonts_is_skipped() {
    let mut surface = canvas(20, 20).with_fonts(FontBook::empty());
    draw(
        &mut surface,
        &Drawing::text(Font::new("serif", 12.0), 2.0, 15.0, fill("red"), "hi"),
    );
    for y in 0..20 {
        for x in 0..20 {
            assert_eq!(surface.pixel(x, y), Some(Rgba::WHITE));
        }
    }
}

#[test]
fn test_zero_font_size_draws_nothing() {
    let mut surface = canvas(10, 10).with_fonts(FontBook::empty());
    draw(
        &mut surface,
        &Drawing::text(Font::new("serif", 0.0), 2.0, 8.0, fill("red"), "hi"),
    );
    assert_eq!(surface.pixel(3, 6), Some(Rgba::WHITE));
}

// ========== Output ==========

#[test]
fn test_rgba_image_matches_pixels() {
    let mut surface = canvas(8, 8);
    draw(
        &mut surface,
        &Drawing::fill(Shape::rect(0.0, 0.0, 4.0, 8.0), fill("red")),
    );
    let image = surface.to_rgba_image();
    assert_eq!(image.dimensions(), (8, 8));
    assert_eq!(image.get_pixel(1, 1).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(6, 1).0, [255, 255, 255, 255]);
}

#[test]
fn test_write_png() {
    let path = std::env::temp_dir().join(format!("easel-canvas-{}.png", std::process::id()));
    let mut surface = canvas(12, 6);
    draw(
        &mut surface,
        &Drawing::fill(Shape::rect(0.0, 0.0, 12.0, 6.0), fill("blue")),
    );
    surface.write_image(&path).unwrap();
    let image = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(image.dimensions(), (12, 6));
    assert_eq!(image.get_pixel(3, 3).0, [0, 0, 255, 255]);
}

#[test]
fn test_write_unknown_extension_fails() {
    let surface = canvas(2, 2);
    let path = std::env::temp_dir().join("easel-canvas-output.unknown-format");
    assert!(matches!(
        surface.write_image(path),
        Err(CanvasError::Image(_))
    ));
}
