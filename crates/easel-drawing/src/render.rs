//! Lowering a [`Drawing`] into surface calls.
//!
//! [`render_shape`] emits path construction only. [`render`] walks a drawing
//! depth-first and wraps every leaf operation and every decorated child in a
//! save/restore scope (see [`with_context`]), so a style or transform set by
//! one subtree is never observed by its siblings.

use crate::drawing::Drawing;
use crate::shape::Shape;
use crate::style::{FillStyle, OutlineStyle, Shadow};
use crate::surface::{Surface, with_context};

/// Emit the path-construction calls for `shape` into the surface's current
/// path.
///
/// Never begins a path, never paints, never saves or restores. An empty
/// [`Path`](crate::Path) emits nothing. A composite emits each sub-shape
/// into the same open path.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn render_shape<S: Surface + ?Sized>(shape: &Shape, surface: &mut S) -> Result<(), S::Error> {
    match shape {
        Shape::Arc(arc) => surface.arc(arc),
        Shape::Ellipse(ellipse) => surface.ellipse(ellipse),
        Shape::Rect(rect) => surface.rect(rect),
        Shape::Path(path) => {
            let Some((first, rest)) = path.points.split_first() else {
                return Ok(());
            };
            surface.move_to(first.x, first.y)?;
            for point in rest {
                surface.line_to(point.x, point.y)?;
            }
            if path.closed {
                surface.close_path()?;
            }
            Ok(())
        }
        Shape::Composite { shapes } => shapes
            .iter()
            .try_for_each(|shape| render_shape(shape, surface)),
    }
}

/// A deferred rendering of one drawing.
///
/// Holding a `Render` performs nothing; [`Render::run`] issues the surface
/// calls. Running it twice issues the same sequence twice.
#[derive(Debug, Clone, Copy)]
pub struct Render<'d> {
    drawing: &'d Drawing,
}

/// Prepare `drawing` for rendering.
#[must_use]
pub const fn render(drawing: &Drawing) -> Render<'_> {
    Render { drawing }
}

impl Render<'_> {
    /// The drawing this procedure renders.
    #[must_use]
    pub const fn drawing(&self) -> &Drawing {
        self.drawing
    }

    /// Render the drawing onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the surface. Every `save` issued
    /// before the failure has been matched by a `restore` by the time this
    /// returns.
    pub fn run<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        draw(self.drawing, surface)
    }
}

impl Drawing {
    /// Render this drawing onto `surface`; shorthand for
    /// `render(self).run(surface)`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the surface.
    pub fn render_to<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        render(self).run(surface)
    }
}

fn draw<S: Surface + ?Sized>(drawing: &Drawing, surface: &mut S) -> Result<(), S::Error> {
    match drawing {
        Drawing::Fill { shape, style } => with_context(surface, |s| {
            apply_fill_style(style, s)?;
            s.begin_path()?;
            render_shape(shape, s)?;
            s.fill()
        }),
        Drawing::Outline { shape, style } => with_context(surface, |s| {
            apply_outline_style(style, s)?;
            s.begin_path()?;
            render_shape(shape, s)?;
            s.stroke()
        }),
        Drawing::Text {
            font,
            x,
            y,
            style,
            text,
        } => with_context(surface, |s| {
            s.set_font(&font.to_string())?;
            apply_fill_style(style, s)?;
            s.fill_text(text, *x, *y)
        }),
        // A group adds no scope of its own.
        Drawing::Many { drawings } => drawings.iter().try_for_each(|child| draw(child, surface)),
        Drawing::Scale {
            scale_x,
            scale_y,
            drawing,
        } => with_context(surface, |s| {
            s.scale(*scale_x, *scale_y)?;
            draw(drawing, s)
        }),
        Drawing::Translate {
            translate_x,
            translate_y,
            drawing,
        } => with_context(surface, |s| {
            s.translate(*translate_x, *translate_y)?;
            draw(drawing, s)
        }),
        Drawing::Rotate { angle, drawing } => with_context(surface, |s| {
            s.rotate(*angle)?;
            draw(drawing, s)
        }),
        Drawing::Clipped { shape, drawing } => with_context(surface, |s| {
            s.begin_path()?;
            render_shape(shape, s)?;
            s.clip()?;
            draw(drawing, s)
        }),
        Drawing::WithShadow { shadow, drawing } => with_context(surface, |s| {
            apply_shadow(shadow, s)?;
            draw(drawing, s)
        }),
    }
}

fn apply_fill_style<S: Surface + ?Sized>(style: &FillStyle, surface: &mut S) -> Result<(), S::Error> {
    if let Some(color) = &style.color {
        surface.set_fill_style(&color.to_css())?;
    }
    Ok(())
}

fn apply_outline_style<S: Surface + ?Sized>(
    style: &OutlineStyle,
    surface: &mut S,
) -> Result<(), S::Error> {
    if let Some(color) = &style.color {
        surface.set_stroke_style(&color.to_css())?;
    }
    if let Some(width) = style.line_width {
        surface.set_line_width(width)?;
    }
    Ok(())
}

fn apply_shadow<S: Surface + ?Sized>(shadow: &Shadow, surface: &mut S) -> Result<(), S::Error> {
    if let Some(color) = &shadow.color {
        surface.set_shadow_color(&color.to_css())?;
    }
    if let Some(blur) = shadow.blur {
        surface.set_shadow_blur(blur)?;
    }
    if let Some(offset) = shadow.offset {
        surface.set_shadow_offset_x(offset.x)?;
        surface.set_shadow_offset_y(offset.y)?;
    }
    Ok(())
}
