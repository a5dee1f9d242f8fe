//! The drawing-surface capability.
//!
//! [HTML § 4.12.5.1 The 2D rendering context](https://html.spec.whatwg.org/multipage/canvas.html#2dcontext)
//!
//! [`Surface`] is the set of primitive operations the interpreter drives. It
//! mirrors `CanvasRenderingContext2D`: path construction, painting, ambient
//! style setters, transforms, text, and the `save`/`restore` state stack.
//! Every operation may fail; errors are returned to whoever invoked the
//! render procedure.

use std::ops::{Deref, DerefMut};

use crate::shape::{Arc, Ellipse, Rect};

/// A stateful 2D drawing context.
///
/// # Errors
///
/// Every method returns `Err` when the backend rejects the call (for
/// example an unparseable color string). The interpreter never retries and
/// never swallows such errors.
#[allow(clippy::missing_errors_doc)]
pub trait Surface {
    /// The backend's error type.
    type Error: std::error::Error;

    // --- Path construction ---

    /// Start a new, empty path.
    fn begin_path(&mut self) -> Result<(), Self::Error>;
    /// Start a new sub-path at (`x`, `y`).
    fn move_to(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;
    /// Add a straight segment to (`x`, `y`).
    fn line_to(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;
    /// Join the current sub-path back to its start.
    fn close_path(&mut self) -> Result<(), Self::Error>;
    /// Add a circular arc.
    fn arc(&mut self, arc: &Arc) -> Result<(), Self::Error>;
    /// Add an elliptical arc.
    fn ellipse(&mut self, ellipse: &Ellipse) -> Result<(), Self::Error>;
    /// Add a closed rectangular sub-path.
    fn rect(&mut self, rect: &Rect) -> Result<(), Self::Error>;

    // --- Paint ---

    /// Fill the current path with the ambient fill style.
    fn fill(&mut self) -> Result<(), Self::Error>;
    /// Stroke the current path with the ambient stroke style and width.
    fn stroke(&mut self) -> Result<(), Self::Error>;
    /// Intersect the clip region with the current path.
    fn clip(&mut self) -> Result<(), Self::Error>;

    // --- Ambient style ---

    /// Set the fill color from a CSS color string.
    fn set_fill_style(&mut self, color: &str) -> Result<(), Self::Error>;
    /// Set the stroke color from a CSS color string.
    fn set_stroke_style(&mut self, color: &str) -> Result<(), Self::Error>;
    /// Set the stroke width.
    fn set_line_width(&mut self, width: f64) -> Result<(), Self::Error>;
    /// Set the shadow color from a CSS color string.
    fn set_shadow_color(&mut self, color: &str) -> Result<(), Self::Error>;
    /// Set the shadow blur radius.
    fn set_shadow_blur(&mut self, blur: f64) -> Result<(), Self::Error>;
    /// Set the horizontal shadow offset.
    fn set_shadow_offset_x(&mut self, offset: f64) -> Result<(), Self::Error>;
    /// Set the vertical shadow offset.
    fn set_shadow_offset_y(&mut self, offset: f64) -> Result<(), Self::Error>;
    /// Set the font from a CSS `font` shorthand string.
    fn set_font(&mut self, font: &str) -> Result<(), Self::Error>;

    // --- Transform ---

    /// Scale the current transform.
    fn scale(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;
    /// Rotate the current transform by `angle` radians.
    fn rotate(&mut self, angle: f64) -> Result<(), Self::Error>;
    /// Translate the current transform.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;

    // --- State stack ---

    /// Push transform, styles, and clip region as one unit.
    fn save(&mut self) -> Result<(), Self::Error>;
    /// Pop back to the most recently saved state.
    fn restore(&mut self) -> Result<(), Self::Error>;

    // --- Text ---

    /// Fill `text` with its baseline origin at (`x`, `y`).
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
}

/// A `save()` whose matching `restore()` is guaranteed.
///
/// [`ContextGuard::restore`] pops the state and reports the backend's
/// result. If the guard is dropped instead (an early `?` return or a panic
/// unwinding through the scope), `Drop` still issues the `restore`, and its
/// result is discarded because another error is already on its way out.
///
/// The guard dereferences to the surface, so the scope's body draws through
/// it.
pub struct ContextGuard<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
    armed: bool,
}

impl<'s, S: Surface + ?Sized> ContextGuard<'s, S> {
    /// Save the surface state and return the guard that restores it.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if `save` fails; nothing needs restoring
    /// in that case.
    pub fn new(surface: &'s mut S) -> Result<Self, S::Error> {
        surface.save()?;
        Ok(Self {
            surface,
            armed: true,
        })
    }

    /// Restore the saved state, consuming the guard.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if `restore` fails.
    pub fn restore(mut self) -> Result<(), S::Error> {
        self.armed = false;
        self.surface.restore()
    }
}

impl<S: Surface + ?Sized> Deref for ContextGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for ContextGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for ContextGuard<'_, S> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.surface.restore();
        }
    }
}

/// Run `body` between `save()` and `restore()`.
///
/// `restore` runs on every exit path out of `body`; see [`ContextGuard`].
///
/// # Errors
///
/// Returns the first error from `save`, `body`, or `restore`.
pub fn with_context<S, T, F>(surface: &mut S, body: F) -> Result<T, S::Error>
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S) -> Result<T, S::Error>,
{
    let mut guard = ContextGuard::new(surface)?;
    let value = body(&mut *guard)?;
    guard.restore()?;
    Ok(value)
}
