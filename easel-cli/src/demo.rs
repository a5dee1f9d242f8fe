//! Built-in scenes.

use std::f64::consts::PI;

use clap::ValueEnum;
use easel_drawing::{Color, Combine, Drawing, FillStyle, Point, Shadow, Shape};

/// How much smaller each snowflake level is than its parent.
const SCALE: f64 = 0.375;

/// Snowflake fill colors, indexed by level.
const PALETTE: [Color; 7] = [
    Color::hsl(60.0, 0.6, 0.5),
    Color::hsl(55.0, 0.65, 0.55),
    Color::hsl(30.0, 1.0, 0.55),
    Color::hsl(345.0, 0.62, 0.45),
    Color::hsl(305.0, 0.7, 0.28),
    Color::hsl(268.0, 1.0, 0.18),
    Color::hsl(240.0, 1.0, 0.01),
];

/// A scene the CLI can draw without an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Recursive pentagons under a drop shadow.
    Snowflake,
    /// Two rectangles seen through a circular clip.
    Clipped,
}

impl Demo {
    /// The scene.
    #[must_use]
    pub fn drawing(self) -> Drawing {
        match self {
            Self::Snowflake => snowflake(),
            Self::Clipped => clipped(),
        }
    }

    /// Canvas size the scene is laid out for.
    #[must_use]
    pub const fn size(self) -> (u32, u32) {
        match self {
            Self::Snowflake => (600, 600),
            Self::Clipped => (300, 150),
        }
    }
}

/// A unit pentagon pointing down the y axis.
fn pentagon() -> Shape {
    Shape::closed((0..=5).map(|n| {
        let theta = PI / 2.5 * f64::from(n);
        Point::new(theta.sin(), theta.cos())
    }))
}

/// A pentagon ringed by five scaled copies of the level below.
fn level(n: usize) -> Drawing {
    if n == 0 {
        return Drawing::empty();
    }
    let first = Drawing::fill(pentagon(), FillStyle::color(PALETTE[n].clone()));
    let next = Drawing::scale(SCALE, SCALE, level(n - 1));
    let arms = (0..=4).map(|k| {
        Drawing::rotate(
            PI / 2.5 * (f64::from(k) + 0.5),
            Drawing::translate(0.0, (PI / 5.0).cos() * (1.0 + SCALE), next.clone()),
        )
    });
    std::iter::once(first).chain(arms).collect()
}

fn snowflake() -> Drawing {
    Drawing::with_shadow(
        Shadow::color(Color::black()).combine(Shadow::blur(10.0)),
        Drawing::translate(300.0, 300.0, Drawing::scale(150.0, 150.0, level(6))),
    )
}

fn clipped() -> Drawing {
    Drawing::clipped(
        Shape::circle(100.0, 75.0, 50.0),
        Drawing::many([
            Drawing::fill(
                Shape::rect(0.0, 0.0, 300.0, 150.0),
                FillStyle::color(Color::hsl(240.0, 1.0, 0.5)),
            ),
            Drawing::fill(
                Shape::rect(0.0, 0.0, 100.0, 100.0),
                FillStyle::color(Color::hsl(0.0, 1.0, 0.5)),
            ),
        ]),
    )
}
