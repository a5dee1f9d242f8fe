//! Integration tests for loading drawings from JSON.

use easel_drawing::{
    Color, Drawing, FillStyle, Font, FontOptions, OutlineStyle, Point, Shadow, Shape,
};

#[test]
fn test_scene_round_trips_through_json() {
    let scene = Drawing::many([
        Drawing::fill(
            Shape::closed([Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)]),
            FillStyle::color(Color::hsl(200.0, 0.5, 0.5)),
        ),
        Drawing::with_shadow(
            Shadow::offset(Point::new(2.0, 2.0)),
            Drawing::rotate(
                0.5,
                Drawing::outline(Shape::circle(1.0, 1.0, 1.0), OutlineStyle::line_width(2.0)),
            ),
        ),
        Drawing::clipped(
            Shape::composite([Shape::rect(0.0, 0.0, 5.0, 5.0)]),
            Drawing::text(
                Font::with_options("serif", 12.0, FontOptions::new().style("italic")),
                1.0,
                2.0,
                FillStyle::color(Color::hex("#333")),
                "caption",
            ),
        ),
    ]);
    let json = serde_json::to_string(&scene).unwrap();
    let back: Drawing = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
}

#[test]
fn test_hand_written_json() {
    let json = r##"{
        "type": "translate",
        "translateX": 10,
        "translateY": 20,
        "drawing": {
            "type": "outline",
            "shape": { "type": "rect", "x": 0, "y": 0, "width": 100, "height": 50 },
            "style": { "color": { "type": "hex", "value": "#000" }, "lineWidth": 3 }
        }
    }"##;
    let drawing: Drawing = serde_json::from_str(json).unwrap();
    assert_eq!(
        drawing,
        Drawing::translate(
            10.0,
            20.0,
            Drawing::outline(
                Shape::rect(0.0, 0.0, 100.0, 50.0),
                OutlineStyle {
                    color: Some(Color::hex("#000")),
                    line_width: Some(3.0),
                },
            ),
        )
    );
}

#[test]
fn test_missing_style_and_direction_default() {
    let json = r#"{
        "type": "fill",
        "shape": { "type": "arc", "x": 1, "y": 2, "r": 3, "start": 0, "end": 1 }
    }"#;
    let drawing: Drawing = serde_json::from_str(json).unwrap();
    assert_eq!(
        drawing,
        Drawing::fill(Shape::arc(1.0, 2.0, 3.0, 0.0, 1.0), FillStyle::default())
    );
}

#[test]
fn test_unknown_variant_is_rejected() {
    let json = r#"{ "type": "sparkle", "drawing": { "type": "many", "drawings": [] } }"#;
    assert!(serde_json::from_str::<Drawing>(json).is_err());
}
