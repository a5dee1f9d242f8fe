//! Elliptical arcs as cubic Bézier segments.
//!
//! [HTML § 4.12.5.1.11 Building paths: `ellipse()`](https://html.spec.whatwg.org/multipage/canvas.html#dom-context-2d-ellipse)
//!
//! The canvas arc model is an angular sweep around an ellipse. tiny-skia only
//! knows lines and Béziers, so a sweep is split into pieces of at most a
//! quarter turn and each piece is approximated by one cubic.

use std::f64::consts::{FRAC_PI_2, TAU};

use easel_drawing::{Arc, Ellipse, Point};

/// One cubic Bézier segment, starting at the previous segment's end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    /// First control point.
    pub ctrl1: Point,
    /// Second control point.
    pub ctrl2: Point,
    /// End point.
    pub to: Point,
}

/// An arc in user space: where it starts and the cubics that trace it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegments {
    /// The point at the start angle.
    pub start: Point,
    /// The curve pieces, in sweep order. Empty for a zero sweep.
    pub curves: Vec<Cubic>,
}

/// The signed angle an arc actually travels.
///
/// "If anticlockwise is false and endAngle-startAngle is equal to or greater
/// than 2π, or, if anticlockwise is true and startAngle-endAngle is equal to
/// or greater than 2π, then the arc is the whole circumference of this
/// ellipse." Otherwise the sweep is reduced modulo 2π in the requested
/// direction, so a clockwise arc from 1 to 0 goes the long way round.
#[must_use]
pub fn sweep_angle(start: f64, end: f64, anticlockwise: bool) -> f64 {
    let delta = end - start;
    if !anticlockwise && delta >= TAU {
        return TAU;
    }
    if anticlockwise && -delta >= TAU {
        return -TAU;
    }
    let sweep = delta.rem_euclid(TAU);
    if anticlockwise && sweep > 0.0 {
        sweep - TAU
    } else {
        sweep
    }
}

/// Split an ellipse arc into cubic segments.
#[must_use]
pub fn ellipse_segments(ellipse: &Ellipse) -> ArcSegments {
    let sweep = sweep_angle(ellipse.start, ellipse.end, ellipse.anticlockwise);
    let (sin_rot, cos_rot) = ellipse.rotation.sin_cos();
    // Unit-circle point (u, v) to user space.
    let place = |u: f64, v: f64| {
        let x = ellipse.rx * u;
        let y = ellipse.ry * v;
        Point::new(
            ellipse.x + x * cos_rot - y * sin_rot,
            ellipse.y + x * sin_rot + y * cos_rot,
        )
    };

    let (sin_start, cos_start) = ellipse.start.sin_cos();
    let start = place(cos_start, sin_start);
    if sweep == 0.0 {
        return ArcSegments {
            start,
            curves: Vec::new(),
        };
    }

    let pieces = segment_count(sweep);
    let step = sweep / f64::from(pieces);
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let mut curves = Vec::with_capacity(pieces as usize);
    let mut angle = ellipse.start;
    for _ in 0..pieces {
        let next = angle + step;
        let (s0, c0) = angle.sin_cos();
        let (s1, c1) = next.sin_cos();
        curves.push(Cubic {
            ctrl1: place(c0 - k * s0, s0 + k * c0),
            ctrl2: place(c1 + k * s1, s1 - k * c1),
            to: place(c1, s1),
        });
        angle = next;
    }
    ArcSegments { start, curves }
}

/// Split a circular arc into cubic segments.
#[must_use]
pub fn arc_segments(arc: &Arc) -> ArcSegments {
    ellipse_segments(&Ellipse {
        x: arc.x,
        y: arc.y,
        rx: arc.r,
        ry: arc.r,
        rotation: 0.0,
        start: arc.start,
        end: arc.end,
        anticlockwise: arc.anticlockwise,
    })
}

/// Quarter turns needed to cover `sweep`, at least one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn segment_count(sweep: f64) -> u32 {
    // Tolerance keeps an exact quarter turn from rounding up to two pieces.
    ((sweep.abs() / FRAC_PI_2) - 1e-9).ceil().max(1.0) as u32
}
