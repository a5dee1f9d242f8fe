//! A surface that records calls instead of drawing.
//!
//! [`RecordingSurface`] keeps one [`SurfaceCall`] per primitive, in the order
//! they were issued. Comparing the recorded sequence against an expected one
//! is how the interpreter's ordering rules are checked.

use std::convert::Infallible;

use strum_macros::Display;

use crate::shape::{Arc, Ellipse, Point, Rect};
use crate::surface::Surface;

/// One primitive surface call and its arguments.
///
/// `Display` writes the canvas operation name (`beginPath`, `setFillStyle`,
/// ...); [`SurfaceCall::describe`] adds the arguments.
#[derive(Debug, Clone, PartialEq, Display)]
#[strum(serialize_all = "camelCase")]
pub enum SurfaceCall {
    /// `beginPath()`
    BeginPath,
    /// `moveTo(x, y)`
    MoveTo(Point),
    /// `lineTo(x, y)`
    LineTo(Point),
    /// `closePath()`
    ClosePath,
    /// `arc(x, y, r, start, end, anticlockwise)`
    Arc(Arc),
    /// `ellipse(x, y, rx, ry, rotation, start, end, anticlockwise)`
    Ellipse(Ellipse),
    /// `rect(x, y, width, height)`
    Rect(Rect),
    /// `fill()`
    Fill,
    /// `stroke()`
    Stroke,
    /// `clip()`
    Clip,
    /// `fillStyle = color`
    SetFillStyle(String),
    /// `strokeStyle = color`
    SetStrokeStyle(String),
    /// `lineWidth = width`
    SetLineWidth(f64),
    /// `shadowColor = color`
    SetShadowColor(String),
    /// `shadowBlur = blur`
    SetShadowBlur(f64),
    /// `shadowOffsetX = offset`
    SetShadowOffsetX(f64),
    /// `shadowOffsetY = offset`
    SetShadowOffsetY(f64),
    /// `font = font`
    SetFont(String),
    /// `scale(x, y)`
    Scale {
        /// Horizontal factor.
        x: f64,
        /// Vertical factor.
        y: f64,
    },
    /// `rotate(angle)`
    Rotate(f64),
    /// `translate(x, y)`
    Translate {
        /// Horizontal offset.
        x: f64,
        /// Vertical offset.
        y: f64,
    },
    /// `save()`
    Save,
    /// `restore()`
    Restore,
    /// `fillText(text, x, y)`
    FillText {
        /// The string drawn.
        text: String,
        /// Baseline origin x.
        x: f64,
        /// Baseline origin y.
        y: f64,
    },
}

impl SurfaceCall {
    /// The call as it would be written against a canvas context, e.g.
    /// `rect(10, 20, 100, 200)` or `setFillStyle("red")`.
    #[must_use]
    pub fn describe(&self) -> String {
        let args = match self {
            Self::BeginPath
            | Self::ClosePath
            | Self::Fill
            | Self::Stroke
            | Self::Clip
            | Self::Save
            | Self::Restore => String::new(),
            Self::MoveTo(p) | Self::LineTo(p) => format!("{}, {}", p.x, p.y),
            Self::Arc(a) => format!(
                "{}, {}, {}, {}, {}, {}",
                a.x, a.y, a.r, a.start, a.end, a.anticlockwise
            ),
            Self::Ellipse(e) => format!(
                "{}, {}, {}, {}, {}, {}, {}, {}",
                e.x, e.y, e.rx, e.ry, e.rotation, e.start, e.end, e.anticlockwise
            ),
            Self::Rect(r) => format!("{}, {}, {}, {}", r.x, r.y, r.width, r.height),
            Self::SetFillStyle(s)
            | Self::SetStrokeStyle(s)
            | Self::SetShadowColor(s)
            | Self::SetFont(s) => format!("{s:?}"),
            Self::SetLineWidth(n)
            | Self::SetShadowBlur(n)
            | Self::SetShadowOffsetX(n)
            | Self::SetShadowOffsetY(n)
            | Self::Rotate(n) => n.to_string(),
            Self::Scale { x, y } | Self::Translate { x, y } => format!("{x}, {y}"),
            Self::FillText { text, x, y } => format!("{text:?}, {x}, {y}"),
        };
        format!("{self}({args})")
    }
}

/// A [`Surface`] that appends every call to a list and never fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// An empty recording.
    #[must_use]
    pub const fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// The calls recorded so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Consume the surface, returning its recording.
    #[must_use]
    pub fn into_calls(self) -> Vec<SurfaceCall> {
        self.calls
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn push(&mut self, call: SurfaceCall) {
        self.calls.push(call);
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn begin_path(&mut self) -> Result<(), Infallible> {
        self.push(SurfaceCall::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), Infallible> {
        self.push(SurfaceCall::MoveTo(Point::new(x, y)));
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), Infallible> {
        self.push(SurfaceCall::LineTo(Point::new(x, y)));
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), Infallible> {
        self.push(SurfaceCall::ClosePath);
        Ok(())
    }

    fn arc(&mut self, arc: &Arc) -> Result<(), Infallible> {
        self.push(SurfaceCall::Arc(*arc));
        Ok(())
    }

    fn ellipse(&mut self, ellipse: &Ellipse) -> Result<(), Infallible> {
        self.push(SurfaceCall::Ellipse(*ellipse));
        Ok(())
    }

    fn rect(&mut self, rect: &Rect) -> Result<(), Infallible> {
        self.push(SurfaceCall::Rect(*rect));
        Ok(())
    }

    fn fill(&mut self) -> Result<(), Infallible> {
        self.push(SurfaceCall::Fill);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Infallible> {
        self.push(SurfaceCall::Stroke);
        Ok(())
    }

    fn clip(&mut self) -> Result<(), Infallible> {
        self.push(SurfaceCall::Clip);
        Ok(())
    }

    fn set_fill_style(&mut self, color: &str) -> Result<(), Infallible> {
        self.push(SurfaceCall::SetFillStyle(color.to_owned()));
        Ok(())
    }

    fn set_stroke_style(&mut self, color: &str) -> Result<(), Infallible> {
        self.push(SurfaceCall::SetStrokeStyle(color.to_owned()));
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<(), Infallible> {
        self.push(SurfaceCall::SetLineWidth(width));
        Ok(())
    }

    fn set_shadow_color(&mut self, color: &str) -> Result<(), Infallible> {
        self.push(SurfaceCall::SetShadowColor(color.to_owned()));
        Ok(())
    }

    fn set_shadow_blur(&mut self, blur: f64) -> Result<(), Infallible> {
        self.push(SurfaceCall::SetShadowBlur(blur));
        Ok(())
    }

    fn set_shadow_offset_x(&mut self, offset: f64) -> Result<(), Infallible> {
        self.push(SurfaceCall::SetShadowOffsetX(offset));
        Ok(())
    }

    fn set_shadow_offset_y(&mut self, offset: f64) -> Result<(), Infallible> {
        self.push(SurfaceCall::SetShadowOffsetY(offset));
        Ok(())
    }

    fn set_font(&mut self, font: &str) -> Result<(), Infallible> {
        self.push(SurfaceCall::SetFont(font.to_owned()));
        Ok(())
    }

    fn scale(&mut self, x: f64, y: f64) -> Result<(), Infallible> {
        self.push(SurfaceCall::Scale { x, y });
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<(), Infallible> {
        self.push(SurfaceCall::Rotate(angle));
        Ok(())
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), Infallible> {
        self.push(SurfaceCall::Translate { x, y });
        Ok(())
    }

    fn save(&mut self) -> Result<(), Infallible> {
        self.push(SurfaceCall::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Infallible> {
        self.push(SurfaceCall::Restore);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Infallible> {
        self.push(SurfaceCall::FillText {
            text: text.to_owned(),
            x,
            y,
        });
        Ok(())
    }
}
