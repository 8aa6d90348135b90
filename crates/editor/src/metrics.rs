// Chunk: docs/chunks/caret_placement - Text measurement for caret placement
//!
//! Text measurement.
//!
//! Glyph rasterization is the font system's job; the editor only needs to
//! know how wide a run of text is so it can place the caret and map clicks
//! back to columns. For a monospace font, layout is trivial:
//! - x = column * advance
//! - y = row * line_height

use crate::config::EditorConfig;

/// Measures text for layout purposes.
pub trait TextMeasure {
    /// Width in pixels of `text` laid out on one line.
    fn measure(&self, text: &str) -> f32;

    fn line_height(&self) -> f32;

    /// Width of the first `columns` characters of `line`.
    fn column_x(&self, line: &str, columns: usize) -> f32 {
        let end = line
            .char_indices()
            .nth(columns)
            .map_or(line.len(), |(i, _)| i);
        self.measure(&line[..end])
    }

    /// Column whose left edge is nearest to `x` within `line`.
    fn column_at(&self, line: &str, x: f32) -> usize {
        if x <= 0.0 {
            return 0;
        }
        let mut prev_x = 0.0;
        for (col, (i, ch)) in line.char_indices().enumerate() {
            let next_x = self.measure(&line[..i + ch.len_utf8()]);
            if x < (prev_x + next_x) / 2.0 {
                return col;
            }
            prev_x = next_x;
        }
        line.chars().count()
    }
}

/// Metrics of a monospace font: every character has the same advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monospace {
    pub advance: f32,
    pub line_height: f32,
}

impl Monospace {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.glyph_advance, config.line_height)
    }
}

impl TextMeasure for Monospace {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn column_x(&self, _line: &str, columns: usize) -> f32 {
        columns as f32 * self.advance
    }

    fn column_at(&self, line: &str, x: f32) -> usize {
        // Float-to-int casts saturate; negative and NaN land on 0.
        ((x / self.advance).round() as usize).min(line.chars().count())
    }
}
