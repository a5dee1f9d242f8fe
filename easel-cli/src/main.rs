//! Easel command line: render a drawing to an image, or inspect the
//! surface calls it lowers to.
//!
//! - `easel scene.json`            # Render to easel.png
//! - `easel --demo snowflake -o flake.png`
//! - `easel scene.json --trace`    # Print the call sequence

mod demo;
mod trace;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use easel_canvas::{CanvasOptions, PixmapSurface};
use easel_common::Rgba;
use easel_common::warning::{Warning, take_warnings};
use easel_drawing::{Drawing, RecordingSurface};
use owo_colors::OwoColorize;

use demo::Demo;

/// Easel - render declarative drawings
#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render a JSON drawing to easel.png
    easel scene.json

    # Render a built-in demo to a chosen file
    easel --demo snowflake -o snowflake.png

    # Custom canvas size and background
    easel scene.json --width 800 --height 600 --background '#202020'

    # Print the surface calls a drawing lowers to
    easel --demo clipped --trace

    # Export a demo as JSON for editing
    easel --demo snowflake --json > snowflake.json
"#)]
struct Cli {
    /// Path to a JSON drawing
    #[arg(value_name = "FILE", conflicts_with = "demo")]
    path: Option<PathBuf>,

    /// Draw a built-in scene instead of reading a file
    #[arg(long, value_enum)]
    demo: Option<Demo>,

    /// Output image; the format follows the extension
    #[arg(short, long, value_name = "FILE", default_value = "easel.png")]
    output: PathBuf,

    /// Print the recorded surface calls instead of rendering
    #[arg(long, conflicts_with = "json")]
    trace: bool,

    /// Print the drawing as JSON instead of rendering
    #[arg(long)]
    json: bool,

    /// Canvas width (default: the demo's width, otherwise 400)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height (default: the demo's height, otherwise 400)
    #[arg(long)]
    height: Option<u32>,

    /// Background color, any CSS color
    #[arg(long, default_value = "white")]
    background: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let drawing = load_drawing(&cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&drawing)?);
        return Ok(());
    }

    if cli.trace {
        let mut recording = RecordingSurface::new();
        let Ok(()) = drawing.render_to(&mut recording);
        trace::print_trace(recording.calls());
        return Ok(());
    }

    let options = canvas_options(&cli)?;
    let mut surface = PixmapSurface::with_options(&options)?;
    drawing
        .render_to(&mut surface)
        .context("Failed to render drawing")?;
    for note in repeat_notes(&take_warnings()) {
        eprintln!("{}", note.dimmed());
    }
    surface
        .write_image(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!(
        "{} {} ({}x{})",
        "Saved".green().bold(),
        cli.output.display(),
        options.width,
        options.height
    );
    Ok(())
}

fn load_drawing(cli: &Cli) -> anyhow::Result<Drawing> {
    if let Some(demo) = cli.demo {
        return Ok(demo.drawing());
    }
    let Some(path) = &cli.path else {
        anyhow::bail!("Nothing to draw: pass a JSON drawing or --demo <NAME>")
    };
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&source).with_context(|| format!("Invalid drawing in {}", path.display()))
}

fn canvas_options(cli: &Cli) -> anyhow::Result<CanvasOptions> {
    let defaults = CanvasOptions::default();
    let (width, height) = cli
        .demo
        .map_or((defaults.width, defaults.height), Demo::size);
    let Some(background) = Rgba::parse(&cli.background) else {
        anyhow::bail!("Invalid background color: {}", cli.background)
    };
    Ok(CanvasOptions {
        width: cli.width.unwrap_or(width),
        height: cli.height.unwrap_or(height),
        background,
    })
}

/// One line per warning that was raised more than once.
fn repeat_notes(warnings: &[Warning]) -> Vec<String> {
    warnings
        .iter()
        .filter(|w| w.count > 1)
        .map(|w| {
            format!(
                "warning[{}]: {} (repeated {} times)",
                w.component, w.message, w.count
            )
        })
        .collect()
}
