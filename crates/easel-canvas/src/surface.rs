//! A [`Surface`] that rasterizes into a tiny-skia pixmap.
//!
//! [HTML § 4.12.5 The canvas element](https://html.spec.whatwg.org/multipage/canvas.html#the-canvas-element)
//!
//! The state model follows `CanvasRenderingContext2D`: a current drawing
//! state (transform, paints, line width, shadow, font, clip) that `save`
//! pushes and `restore` pops, plus a current path that is *not* part of the
//! saved state. Points are mapped through the transform when they are added
//! to the path, so the path is kept in device space.

use std::path::Path as FsPath;

use easel_common::Rgba;
use easel_common::warning::warn_once;
use easel_drawing::{Arc, Ellipse, Rect, Surface};
use fontdue::Font;
use image::{DynamicImage, ImageBuffer, ImageFormat, RgbaImage};
use tiny_skia::{
    FillRule, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Point, PremultipliedColorU8, Stroke,
    Transform,
};

use crate::arc::{ArcSegments, arc_segments, ellipse_segments};
use crate::error::{CanvasError, Result};
use crate::font::{FontBook, FontSpec};
use crate::options::CanvasOptions;

const WARNING_COMPONENT: &str = "canvas";

/// Drawing state that `save` and `restore` push and pop.
#[derive(Debug, Clone)]
struct DrawingState {
    transform: Transform,
    fill: Rgba,
    stroke: Rgba,
    line_width: f64,
    shadow_color: Rgba,
    shadow_blur: f64,
    shadow_offset_x: f64,
    shadow_offset_y: f64,
    font: FontSpec,
    /// Coverage of the clip region; `None` means unclipped.
    clip: Option<Mask>,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            fill: Rgba::BLACK,
            stroke: Rgba::BLACK,
            line_width: 1.0,
            shadow_color: Rgba::TRANSPARENT,
            shadow_blur: 0.0,
            shadow_offset_x: 0.0,
            shadow_offset_y: 0.0,
            font: FontSpec::default(),
            clip: None,
        }
    }
}

impl DrawingState {
    fn has_shadow(&self) -> bool {
        !self.shadow_color.is_transparent()
            && (self.shadow_blur > 0.0 || self.shadow_offset_x != 0.0 || self.shadow_offset_y != 0.0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn shadow_offset(&self) -> Transform {
        Transform::from_translate(self.shadow_offset_x as f32, self.shadow_offset_y as f32)
    }

    /// How much the transform magnifies lengths, on average.
    fn scale_factor(&self) -> f64 {
        let t = self.transform;
        f64::from(t.sx.mul_add(t.sy, -(t.kx * t.ky))).abs().sqrt()
    }
}

/// One device-space path command.
#[derive(Debug, Clone, Copy)]
enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// A software canvas.
pub struct PixmapSurface {
    pixmap: Pixmap,
    state: DrawingState,
    state_stack: Vec<DrawingState>,
    path: Vec<PathOp>,
    /// Start of the current subpath, where `close_path` returns to.
    subpath_start: Option<Point>,
    /// The path's current point; `None` until a subpath exists.
    current: Option<Point>,
    /// Loaded on the first `fill_text`.
    fonts: Option<FontBook>,
}

impl PixmapSurface {
    /// A transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSize`] if either dimension is zero or
    /// the pixmap cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            state: DrawingState::default(),
            state_stack: Vec::new(),
            path: Vec::new(),
            subpath_start: None,
            current: None,
            fonts: None,
        })
    }

    /// A canvas of the configured size, cleared to the configured
    /// background.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSize`] as [`PixmapSurface::new`] does.
    pub fn with_options(options: &CanvasOptions) -> Result<Self> {
        let mut surface = Self::new(options.width, options.height)?;
        surface.clear(options.background);
        Ok(surface)
    }

    /// Use `fonts` for text instead of searching the system.
    #[must_use]
    pub fn with_fonts(mut self, fonts: FontBook) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Number of states `restore` can still pop.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.state_stack.len()
    }

    /// Replace every pixel with `color`, ignoring transform and clip.
    pub fn clear(&mut self, color: Rgba) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    /// The pixel at (`x`, `y`) with alpha unpremultiplied, or `None` outside
    /// the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba {
            r: color.red(),
            g: color.green(),
            b: color.blue(),
            a: color.alpha(),
        })
    }

    /// The underlying pixmap.
    #[must_use]
    pub const fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Copy the canvas into an `image` buffer with straight alpha.
    #[must_use]
    pub fn to_rgba_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            let color = self.pixel(x, y).unwrap_or(Rgba::TRANSPARENT);
            image::Rgba([color.r, color.g, color.b, color.a])
        })
    }

    /// Encode the canvas to `path`, choosing the format from the extension.
    ///
    /// Formats without an alpha channel (JPEG) get the color channels only.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Image`] if the extension is unknown or the
    /// image cannot be encoded or written.
    pub fn write_image(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        let image = DynamicImage::ImageRgba8(self.to_rgba_image());
        match ImageFormat::from_path(path)? {
            ImageFormat::Jpeg => image.to_rgb8().save(path)?,
            _ => image.save(path)?,
        }
        Ok(())
    }

    // --- Path helpers ---

    /// Map a user-space point through the current transform.
    #[allow(clippy::cast_possible_truncation)]
    fn device(&self, x: f64, y: f64) -> Point {
        let t = self.state.transform;
        let (sx, kx, ky, sy) = (
            f64::from(t.sx),
            f64::from(t.kx),
            f64::from(t.ky),
            f64::from(t.sy),
        );
        Point::from_xy(
            (sx * x + kx * y + f64::from(t.tx)) as f32,
            (ky * x + sy * y + f64::from(t.ty)) as f32,
        )
    }

    fn start_subpath(&mut self, point: Point) {
        self.path.push(PathOp::MoveTo(point));
        self.subpath_start = Some(point);
        self.current = Some(point);
    }

    fn extend_subpath(&mut self, point: Point) {
        if self.current.is_some() {
            self.path.push(PathOp::LineTo(point));
            self.current = Some(point);
        } else {
            self.start_subpath(point);
        }
    }

    /// Join the arc to the current subpath with a line, then trace it.
    fn trace_arc(&mut self, segments: &ArcSegments) {
        let start = self.device(segments.start.x, segments.start.y);
        self.extend_subpath(start);
        for curve in &segments.curves {
            let ctrl1 = self.device(curve.ctrl1.x, curve.ctrl1.y);
            let ctrl2 = self.device(curve.ctrl2.x, curve.ctrl2.y);
            let to = self.device(curve.to.x, curve.to.y);
            self.path.push(PathOp::CubicTo(ctrl1, ctrl2, to));
            self.current = Some(to);
        }
    }

    fn build_path(&self) -> Option<tiny_skia::Path> {
        let mut builder = PathBuilder::new();
        for op in &self.path {
            match *op {
                PathOp::MoveTo(p) => builder.move_to(p.x, p.y),
                PathOp::LineTo(p) => builder.line_to(p.x, p.y),
                PathOp::CubicTo(c1, c2, p) => builder.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
                PathOp::Close => builder.close(),
            }
        }
        builder.finish()
    }

    // --- Paint helpers ---

    fn paint(color: Rgba) -> Paint<'static> {
        let mut paint = Paint {
            anti_alias: true,
            ..Paint::default()
        };
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint
    }

    fn warn_if_blurred(&self) {
        if self.state.shadow_blur > 0.0 {
            warn_once(
                WARNING_COMPONENT,
                "shadow blur is not rasterized; shadows are drawn hard-edged",
            );
        }
    }
}

fn parse_color(color: &str) -> Result<Rgba> {
    Rgba::parse(color).ok_or_else(|| CanvasError::InvalidColor(color.to_owned()))
}

fn finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Multiply two coverage values in `0..=255`.
#[allow(clippy::cast_possible_truncation)]
fn mul_coverage(a: u8, b: u8) -> u8 {
    ((u16::from(a) * u16::from(b) + 127) / 255) as u8
}

fn premultiplied(color: Rgba, coverage: u8) -> PremultipliedColorU8 {
    let alpha = mul_coverage(color.a, coverage);
    PremultipliedColorU8::from_rgba(
        mul_coverage(color.r, alpha),
        mul_coverage(color.g, alpha),
        mul_coverage(color.b, alpha),
        alpha,
    )
    .unwrap_or(PremultipliedColorU8::TRANSPARENT)
}

/// Rasterize `text` with its alphabetic baseline starting at `origin`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]
fn draw_glyphs(
    pixmap: &mut Pixmap,
    font: &Font,
    text: &str,
    origin: Point,
    size: f32,
    color: Rgba,
    clip: Option<&Mask>,
) {
    let mut cursor_x = origin.x;
    for ch in text.chars().filter(|ch| !ch.is_control()) {
        let (metrics, bitmap) = font.rasterize(ch, size);
        let glyph_size = (u32::try_from(metrics.width), u32::try_from(metrics.height));
        if let (Ok(width), Ok(height)) = glyph_size
            && let Some(mut glyph) = Pixmap::new(width, height)
        {
            for (pixel, coverage) in glyph.pixels_mut().iter_mut().zip(&bitmap) {
                *pixel = premultiplied(color, *coverage);
            }
            // fontdue measures ymin upward from the baseline to the glyph's
            // bottom edge.
            let left = cursor_x + metrics.xmin as f32;
            let top = origin.y - metrics.ymin as f32 - metrics.height as f32;
            pixmap.draw_pixmap(
                left.round() as i32,
                top.round() as i32,
                glyph.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                clip,
            );
        }
        cursor_x += metrics.advance_width;
    }
}

impl Surface for PixmapSurface {
    type Error = CanvasError;

    fn begin_path(&mut self) -> Result<()> {
        self.path.clear();
        self.subpath_start = None;
        self.current = None;
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        if finite(&[x, y]) {
            let point = self.device(x, y);
            self.start_subpath(point);
        }
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        if finite(&[x, y]) {
            let point = self.device(x, y);
            self.extend_subpath(point);
        }
        Ok(())
    }

    fn close_path(&mut self) -> Result<()> {
        if let Some(start) = self.subpath_start {
            self.path.push(PathOp::Close);
            self.current = Some(start);
        }
        Ok(())
    }

    fn arc(&mut self, arc: &Arc) -> Result<()> {
        if !finite(&[arc.x, arc.y, arc.r, arc.start, arc.end]) {
            return Ok(());
        }
        if arc.r < 0.0 {
            return Err(CanvasError::NegativeRadius(arc.r));
        }
        self.trace_arc(&arc_segments(arc));
        Ok(())
    }

    fn ellipse(&mut self, ellipse: &Ellipse) -> Result<()> {
        let values = [
            ellipse.x,
            ellipse.y,
            ellipse.rx,
            ellipse.ry,
            ellipse.rotation,
            ellipse.start,
            ellipse.end,
        ];
        if !finite(&values) {
            return Ok(());
        }
        if ellipse.rx < 0.0 || ellipse.ry < 0.0 {
            return Err(CanvasError::NegativeRadius(ellipse.rx.min(ellipse.ry)));
        }
        self.trace_arc(&ellipse_segments(ellipse));
        Ok(())
    }

    fn rect(&mut self, rect: &Rect) -> Result<()> {
        let Rect {
            x,
            y,
            width,
            height,
        } = *rect;
        if !finite(&[x, y, width, height]) {
            return Ok(());
        }
        let corner = self.device(x, y);
        self.start_subpath(corner);
        for (px, py) in [(x + width, y), (x + width, y + height), (x, y + height)] {
            let point = self.device(px, py);
            self.path.push(PathOp::LineTo(point));
        }
        self.path.push(PathOp::Close);
        // A rectangle leaves a fresh subpath at its origin.
        self.start_subpath(corner);
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        let Some(path) = self.build_path() else {
            return Ok(());
        };
        let clip = self.state.clip.as_ref();
        if self.state.has_shadow() {
            self.warn_if_blurred();
            self.pixmap.fill_path(
                &path,
                &Self::paint(self.state.shadow_color),
                FillRule::Winding,
                self.state.shadow_offset(),
                clip,
            );
        }
        self.pixmap.fill_path(
            &path,
            &Self::paint(self.state.fill),
            FillRule::Winding,
            Transform::identity(),
            clip,
        );
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn stroke(&mut self) -> Result<()> {
        let Some(path) = self.build_path() else {
            return Ok(());
        };
        let stroke = Stroke {
            width: (self.state.line_width * self.state.scale_factor()) as f32,
            miter_limit: 10.0,
            ..Stroke::default()
        };
        let clip = self.state.clip.as_ref();
        if self.state.has_shadow() {
            self.warn_if_blurred();
            self.pixmap.stroke_path(
                &path,
                &Self::paint(self.state.shadow_color),
                &stroke,
                self.state.shadow_offset(),
                clip,
            );
        }
        self.pixmap.stroke_path(
            &path,
            &Self::paint(self.state.stroke),
            &stroke,
            Transform::identity(),
            clip,
        );
        Ok(())
    }

    fn clip(&mut self) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        let mut region =
            Mask::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        // An empty path leaves the region empty, so nothing stays drawable.
        if let Some(path) = self.build_path() {
            region.fill_path(&path, FillRule::Winding, true, Transform::identity());
        }
        if let Some(existing) = &self.state.clip {
            for (value, previous) in region.data_mut().iter_mut().zip(existing.data()) {
                *value = mul_coverage(*value, *previous);
            }
        }
        self.state.clip = Some(region);
        Ok(())
    }

    fn set_fill_style(&mut self, color: &str) -> Result<()> {
        self.state.fill = parse_color(color)?;
        Ok(())
    }

    fn set_stroke_style(&mut self, color: &str) -> Result<()> {
        self.state.stroke = parse_color(color)?;
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<()> {
        // Zero, negative, and non-finite widths are ignored.
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
        Ok(())
    }

    fn set_shadow_color(&mut self, color: &str) -> Result<()> {
        self.state.shadow_color = parse_color(color)?;
        Ok(())
    }

    fn set_shadow_blur(&mut self, blur: f64) -> Result<()> {
        if blur.is_finite() && blur >= 0.0 {
            self.state.shadow_blur = blur;
        }
        Ok(())
    }

    fn set_shadow_offset_x(&mut self, offset: f64) -> Result<()> {
        if offset.is_finite() {
            self.state.shadow_offset_x = offset;
        }
        Ok(())
    }

    fn set_shadow_offset_y(&mut self, offset: f64) -> Result<()> {
        if offset.is_finite() {
            self.state.shadow_offset_y = offset;
        }
        Ok(())
    }

    fn set_font(&mut self, font: &str) -> Result<()> {
        self.state.font =
            FontSpec::parse(font).ok_or_else(|| CanvasError::InvalidFont(font.to_owned()))?;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn scale(&mut self, x: f64, y: f64) -> Result<()> {
        if finite(&[x, y]) {
            self.state.transform = self.state.transform.pre_scale(x as f32, y as f32);
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn rotate(&mut self, angle: f64) -> Result<()> {
        if angle.is_finite() {
            let rotation = Transform::from_rotate(angle.to_degrees() as f32);
            self.state.transform = self.state.transform.pre_concat(rotation);
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        if finite(&[x, y]) {
            self.state.transform = self.state.transform.pre_translate(x as f32, y as f32);
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.state_stack.push(self.state.clone());
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        // Popping an empty stack does nothing, as in browsers.
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        if !finite(&[x, y]) {
            return Ok(());
        }
        let t = self.state.transform;
        if t.kx != 0.0 || t.ky != 0.0 {
            warn_once(WARNING_COMPONENT, "rotated or skewed text is drawn upright");
        }
        let origin = self.device(x, y);
        let size = (self.state.font.size * self.state.scale_factor()) as f32;
        if size <= 0.0 {
            return Ok(());
        }
        let shadow = self.state.has_shadow().then(|| {
            self.warn_if_blurred();
            (self.state.shadow_color, self.state.shadow_offset())
        });
        let fill = self.state.fill;
        let spec = self.state.font.clone();

        if self.fonts.is_none() {
            self.fonts = Some(FontBook::load());
        }
        // Fonts are read while the pixmap is written.
        let Self {
            pixmap,
            state,
            fonts,
            ..
        } = self;
        let Some(font) = fonts.as_ref().and_then(|book| book.select(&spec)) else {
            warn_once(WARNING_COMPONENT, "no system font found; text is skipped");
            return Ok(());
        };
        let clip = state.clip.as_ref();
        if let Some((color, offset)) = shadow {
            let shifted = Point::from_xy(origin.x + offset.tx, origin.y + offset.ty);
            draw_glyphs(pixmap, font, text, shifted, size, color, clip);
        }
        draw_glyphs(pixmap, font, text, origin, size, fill, clip);
        Ok(())
    }
}
