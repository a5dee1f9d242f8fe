//! Diagnostics for features a backend approximates or skips.
//!
//! A surface may hit the same limitation thousands of times in one scene
//! (every shadowed fill of a recursive drawing, say). Each distinct
//! `(component, message)` pair is printed the first time it occurs and
//! counted after that, so a caller can summarize the repeats once rendering
//! is done.

use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// A recorded diagnostic and how often it was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Which backend raised it, e.g. `"canvas"`.
    pub component: String,
    /// What was approximated or skipped.
    pub message: String,
    /// Times raised since the registry was last drained.
    pub count: usize,
}

/// Warnings in first-raised order.
static WARNINGS: Mutex<Vec<Warning>> = Mutex::new(Vec::new());

// A panic while holding the lock cannot leave the list half-updated.
fn registry() -> MutexGuard<'static, Vec<Warning>> {
    WARNINGS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Record a warning, printing it to stderr the first time it is raised.
///
/// # Example
/// ```ignore
/// warn_once("canvas", "shadow blur is not rasterized");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let mut warnings = registry();
    if let Some(warning) = warnings
        .iter_mut()
        .find(|w| w.component == component && w.message == message)
    {
        warning.count += 1;
        return;
    }
    warnings.push(Warning {
        component: component.to_owned(),
        message: message.to_owned(),
        count: 1,
    });
    drop(warnings);
    eprintln!("{} {message}", format!("warning[{component}]:").yellow().bold());
}

/// How many times this warning has been raised since the last drain.
#[must_use]
pub fn occurrences(component: &str, message: &str) -> usize {
    registry()
        .iter()
        .find(|w| w.component == component && w.message == message)
        .map_or(0, |w| w.count)
}

/// Remove and return every recorded warning, oldest first.
///
/// The next `warn_once` of a drained message prints again.
#[must_use]
pub fn take_warnings() -> Vec<Warning> {
    std::mem::take(&mut *registry())
}
