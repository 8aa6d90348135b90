// Chunk: docs/chunks/editor_view - Line layout, gutter and caret for the editor view
//!
//! The editor view maps a text buffer to screen coordinates.
//!
//! Each frame the view scans the buffer text for line breaks, lays out the
//! lines that fit in the viewport (each with a line-number label in the
//! gutter) and computes where the caret goes. The view holds no document
//! state; everything is derived from the buffer on demand.
//!
//! Vertical scrolling is tracked in pixels. The first visible line is
//! `floor(scroll_offset_px / line_height)`.

use std::ops::Range;

use parsec_buffer::{BufferError, LineIndex, Position, TextBuffer};

use crate::arena::{Arena, ArenaSlot};
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::metrics::TextMeasure;

/// One laid-out document line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    /// 0-indexed line number in the document.
    pub line: usize,
    /// Content range in visible-text offsets, terminator excluded.
    pub range: Range<usize>,
    /// Gutter label (1-based line number), allocated in the frame arena.
    pub label: ArenaSlot,
    /// Top of the line in viewport pixels.
    pub y: f32,
}

/// Where the caret is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caret {
    pub offset: usize,
    pub position: Position,
    pub x: f32,
    pub y: f32,
    pub height: f32,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub lines: Vec<LineLayout>,
    pub caret: Caret,
    pub line_count: usize,
}

#[derive(Debug, Clone)]
pub struct EditorView<M> {
    measure: M,
    text_origin_x: f32,
    viewport_height: f32,
    scroll_offset_px: f32,
}

impl<M: TextMeasure> EditorView<M> {
    pub fn new(config: &EditorConfig, measure: M) -> Self {
        Self {
            measure,
            text_origin_x: config.text_origin_x(),
            viewport_height: 0.0,
            scroll_offset_px: 0.0,
        }
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    fn line_height(&self) -> f32 {
        self.measure.line_height()
    }

    /// X coordinate where line text begins (right of the gutter).
    pub fn text_origin_x(&self) -> f32 {
        self.text_origin_x
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
    }

    pub fn scroll_offset_px(&self) -> f32 {
        self.scroll_offset_px
    }

    /// Scrolls by `dy` pixels, clamped so the last line can reach the top of
    /// the viewport but no further.
    pub fn scroll_by(&mut self, dy: f32, line_count: usize) {
        let max_offset = (line_count.saturating_sub(1) as f32 * self.line_height()).max(0.0);
        self.scroll_offset_px = (self.scroll_offset_px + dy).clamp(0.0, max_offset);
    }

    /// Returns the range of document lines that intersect the viewport.
    pub fn visible_lines(&self, line_count: usize) -> Range<usize> {
        let line_height = self.line_height();
        if line_height <= 0.0 {
            return 0..0;
        }
        let first = (self.scroll_offset_px / line_height).floor() as usize;
        let fraction = self.scroll_offset_px - first as f32 * line_height;
        let rows = ((self.viewport_height + fraction) / line_height).ceil() as usize;
        let first = first.min(line_count);
        first..first.saturating_add(rows).min(line_count)
    }

    fn line_y(&self, line: usize) -> f32 {
        line as f32 * self.line_height() - self.scroll_offset_px
    }

    /// Lays out the visible lines and the caret.
    ///
    /// Gutter labels are allocated from `arena`; reset the arena between
    /// frames.
    ///
    /// # Errors
    ///
    /// [`EditorError::Arena`] if the arena cannot hold the gutter labels.
    pub fn layout<A: Arena>(
        &self,
        buffer: &TextBuffer,
        arena: &mut A,
    ) -> Result<Frame, EditorError> {
        let index = line_index(buffer)?;

        let mut lines = Vec::new();
        for line in self.visible_lines(index.line_count()) {
            let Some(range) = index.line_range(line) else {
                break;
            };
            let label = arena.alloc_str(&(line + 1).to_string())?;
            lines.push(LineLayout {
                line,
                range,
                label,
                y: self.line_y(line),
            });
        }

        Ok(Frame {
            lines,
            caret: self.caret_with_index(buffer, &index)?,
            line_count: index.line_count(),
        })
    }

    /// Computes the caret for the buffer's cursor.
    pub fn caret(&self, buffer: &TextBuffer) -> Result<Caret, BufferError> {
        let index = line_index(buffer)?;
        self.caret_with_index(buffer, &index)
    }

    fn caret_with_index(&self, buffer: &TextBuffer, index: &LineIndex) -> Result<Caret, BufferError> {
        let offset = buffer.cursor();
        let position = index.position_of(offset);
        let line_text = line_text(buffer, index, position.line)?;

        Ok(Caret {
            offset,
            position,
            x: self.text_origin_x + self.measure.column_x(&line_text, position.col),
            y: self.line_y(position.line),
            height: self.line_height(),
        })
    }

    /// Maps a point in viewport pixels to the nearest visible-text offset.
    ///
    /// Points above the first line or below the last clamp to those lines;
    /// points left of the text area map to column 0.
    pub fn hit_test(&self, buffer: &TextBuffer, x: f32, y: f32) -> Result<usize, BufferError> {
        let index = line_index(buffer)?;
        let line_height = self.line_height();
        let doc_y = (y + self.scroll_offset_px).max(0.0);
        let line = if line_height > 0.0 {
            ((doc_y / line_height).floor() as usize).min(index.line_count() - 1)
        } else {
            0
        };

        let text = line_text(buffer, &index, line)?;
        let col = self.measure.column_at(&text, x - self.text_origin_x);
        // The line exists, so offset_of cannot miss; fall back to the end anyway.
        Ok(index
            .offset_of(Position::new(line, col))
            .unwrap_or(buffer.len()))
    }
}

fn line_index(buffer: &TextBuffer) -> Result<LineIndex, BufferError> {
    Ok(LineIndex::from_slice(&buffer.slice(0, buffer.len())?))
}

fn line_text(buffer: &TextBuffer, index: &LineIndex, line: usize) -> Result<String, BufferError> {
    match index.line_range(line) {
        Some(range) => Ok(buffer.slice(range.start, range.end)?.to_string()),
        None => Ok(String::new()),
    }
}
