//! Printing a recorded call sequence.

use easel_drawing::SurfaceCall;
use owo_colors::OwoColorize;

/// Pair each call with its nesting depth.
///
/// A `save` sits at the depth it opens from and a `restore` at the depth it
/// returns to, so matching pairs line up.
#[must_use]
pub fn nest(calls: &[SurfaceCall]) -> Vec<(usize, &SurfaceCall)> {
    let mut depth = 0_usize;
    calls
        .iter()
        .map(|call| match call {
            SurfaceCall::Save => {
                depth += 1;
                (depth - 1, call)
            }
            SurfaceCall::Restore => {
                depth = depth.saturating_sub(1);
                (depth, call)
            }
            _ => (depth, call),
        })
        .collect()
}

/// Print one call per line, indented by save depth.
pub fn print_trace(calls: &[SurfaceCall]) {
    for (depth, call) in nest(calls) {
        let indent = "  ".repeat(depth);
        let text = call.describe();
        match call {
            SurfaceCall::Save | SurfaceCall::Restore => println!("{indent}{}", text.dimmed()),
            SurfaceCall::Fill
            | SurfaceCall::Stroke
            | SurfaceCall::Clip
            | SurfaceCall::FillText { .. } => println!("{indent}{}", text.green().bold()),
            SurfaceCall::SetFillStyle(_)
            | SurfaceCall::SetStrokeStyle(_)
            | SurfaceCall::SetLineWidth(_)
            | SurfaceCall::SetShadowColor(_)
            | SurfaceCall::SetShadowBlur(_)
            | SurfaceCall::SetShadowOffsetX(_)
            | SurfaceCall::SetShadowOffsetY(_)
            | SurfaceCall::SetFont(_) => println!("{indent}{}", text.cyan()),
            SurfaceCall::Scale { .. } | SurfaceCall::Rotate(_) | SurfaceCall::Translate { .. } => {
                println!("{indent}{}", text.yellow());
            }
            _ => println!("{indent}{text}"),
        }
    }
    println!("{}", format!("{} calls", calls.len()).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nest_aligns_save_and_restore() {
        let calls = [
            SurfaceCall::Save,
            SurfaceCall::Save,
            SurfaceCall::Fill,
            SurfaceCall::Restore,
            SurfaceCall::Restore,
            SurfaceCall::BeginPath,
        ];
        let depths: Vec<usize> = nest(&calls).into_iter().map(|(depth, _)| depth).collect();
        assert_eq!(depths, [0, 1, 2, 1, 0, 0]);
    }

    #[test]
    fn test_nest_tolerates_unbalanced_restore() {
        let depths: Vec<usize> = nest(&[SurfaceCall::Restore, SurfaceCall::Fill])
            .into_iter()
            .map(|(depth, _)| depth)
            .collect();
        assert_eq!(depths, [0, 0]);
    }
}
