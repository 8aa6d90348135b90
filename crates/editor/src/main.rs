// Chunk: docs/chunks/editable_buffer - Input events + editable buffer
//!
//! parsec: headless editor driver.
//!
//! Reads a stream of keystrokes (one character per key; DEL/BS is Backspace),
//! feeds each one through the same command path the windowed front end uses,
//! and prints the resulting frame: every visible line with its gutter number,
//! followed by the caret position.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use parsec_buffer::{BufferError, TextBuffer};
use parsec_editor::{
    apply, key_from_char, resolve_key, Arena, BumpArena, EditorConfig, EditorView, Monospace,
};

#[derive(Parser, Debug)]
#[command(name = "parsec", version, about = "Replay keystrokes into a gap buffer and print the result")]
struct Cli {
    /// File of keystrokes to replay (reads stdin if omitted)
    input: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport height in pixels; all lines are shown if omitted
    #[arg(long)]
    height: Option<f32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EditorConfig::load_from(path)?,
        None => EditorConfig::load()?,
    };
    debug!(?config, "starting");

    let keystrokes = match &cli.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    let mut buffer = TextBuffer::with_config(config.gap);
    for ch in keystrokes.chars() {
        let Some(command) = resolve_key(key_from_char(ch)) else {
            continue;
        };
        match apply(&mut buffer, command) {
            Ok(()) => {}
            // A rejected edit is ignored, not fatal.
            Err(err @ BufferError::OutOfRange { .. }) => warn!(%err, ?command, "edit rejected"),
            Err(err) => return Err(err).context("edit failed"),
        }
    }

    let mut view = EditorView::new(&config, Monospace::from_config(&config));
    let height = cli
        .height
        .unwrap_or_else(|| (buffer.len() + 1) as f32 * config.line_height);
    view.set_viewport_height(height);

    let mut arena = BumpArena::with_capacity(config.frame_arena_bytes);
    let frame = view.layout(&buffer, &mut arena)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let width = config.gutter_columns.max(1);
    for line in &frame.lines {
        let text = buffer.slice(line.range.start, line.range.end)?;
        writeln!(out, "{:>width$} | {}", arena.str(line.label), text)?;
    }
    writeln!(
        out,
        "-- {} chars, {} lines, caret at {}:{}",
        buffer.len(),
        frame.line_count,
        frame.caret.position.line + 1,
        frame.caret.position.col + 1
    )?;

    let stats = buffer.stats();
    debug!(
        migrations = stats.migrations,
        chars_moved = stats.chars_moved,
        growths = stats.growths,
        "buffer stats"
    );
    Ok(())
}
