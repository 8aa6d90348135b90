// Chunk: docs/chunks/line_splitting - Line boundaries for rendering

//! Line index for splitting document text into renderable lines.
//!
//! The buffer itself has no notion of lines. The rendering layer scans the
//! text for `'\n'` and builds a `LineIndex`, which records where each line
//! starts.
//!
//! Boundaries are defined as follows:
//! - The line terminator is *exclusive*: a line's range ends at its `'\n'`,
//!   and the next line starts right after it.
//! - The last line ends at the document length. A document that ends in
//!   `'\n'` therefore has an empty last line.
//! - An offset sitting right before a `'\n'` is at the end of that line; the
//!   offset right after it is column 0 of the next line.

use std::ops::Range;

use crate::text_slice::TextSlice;
use crate::types::Position;

/// Tracks line boundaries of a document snapshot.
///
/// A document always has at least one line, even when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Character offsets where each line starts. line_starts[0] = 0 always.
    line_starts: Vec<usize>,
    /// Length of the indexed text; the end of the last line.
    total_len: usize,
}

impl LineIndex {
    /// Creates a line index for an empty document.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
            total_len: 0,
        }
    }

    /// Builds an index from the given characters.
    pub fn from_chars<I>(content: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut index = Self::new();
        index.rebuild(content);
        index
    }

    /// Builds an index from a slice of buffer text.
    pub fn from_slice(slice: &TextSlice<'_>) -> Self {
        Self::from_chars(slice.chars())
    }

    /// Rebuilds the index from the given content.
    ///
    /// This is O(n) in the content length.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in content {
            offset += 1;
            if ch == '\n' {
                self.line_starts.push(offset);
            }
        }
        self.total_len = offset;
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Length of the text the index was built from.
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Returns the character offset where the given line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the offset one past the last character of the line, i.e. the
    /// offset of its `'\n'`, or the document length for the last line.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        match self.line_starts.get(line + 1) {
            Some(next_start) => Some(next_start - 1),
            None => Some(self.total_len),
        }
    }

    /// Returns the content range of the line, terminator excluded.
    pub fn line_range(&self, line: usize) -> Option<Range<usize>> {
        Some(self.line_start(line)?..self.line_end(line)?)
    }

    /// Returns the length of the line, terminator excluded.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        self.line_range(line).map(|range| range.len())
    }

    /// Returns the line containing `offset`.
    ///
    /// Offsets past the end resolve to the last line. Uses binary search.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Converts a document offset to a (line, column) position.
    ///
    /// Offsets past the end are clamped to the end of the document.
    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.total_len);
        let line = self.line_at_offset(offset);
        Position::new(line, offset - self.line_starts[line])
    }

    /// Converts a (line, column) position to a document offset.
    ///
    /// Returns `None` if the line does not exist. The column is clamped to
    /// the line length, so a position past the end of a line maps to the
    /// line's end rather than spilling into the next line.
    pub fn offset_of(&self, pos: Position) -> Option<usize> {
        let range = self.line_range(pos.line)?;
        Some(range.start + pos.col.min(range.len()))
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
