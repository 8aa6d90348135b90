// Chunk: docs/chunks/gap_buffer - Gap buffer data structure and cursor model

//! TextBuffer is the main public API for text editing operations.
//!
//! It pairs a gap buffer with a logical cursor. The cursor is an offset into
//! the visible text and moves independently of the gap: moving the cursor is
//! O(1), and the gap only catches up with the cursor on the next mutation.
//! After every insertion or deletion the gap sits at the edit point, so a run
//! of edits at the same place never moves content more than once.

use std::fmt;

use crate::error::BufferError;
use crate::gap_buffer::GapBuffer;
use crate::text_slice::TextSlice;
use crate::types::{GapConfig, GapLayout, GapStats};

/// A text buffer with a single cursor.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    buffer: GapBuffer,
    /// Insertion point in visible-text coordinates. Always `<= buffer.len()`.
    cursor: usize,
}

impl TextBuffer {
    /// Creates a new empty text buffer.
    pub fn new() -> Self {
        Self::with_config(GapConfig::default())
    }

    /// Creates a new empty text buffer with the given gap sizing.
    pub fn with_config(config: GapConfig) -> Self {
        Self {
            buffer: GapBuffer::with_config(config),
            cursor: 0,
        }
    }

    /// Creates a text buffer initialized with the given content.
    ///
    /// The cursor starts at offset 0; the gap starts after the content.
    ///
    /// Note: We don't implement `FromStr` because it requires returning `Result`,
    /// but building a TextBuffer from a string cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        Self::from_str_with_config(content, GapConfig::default())
    }

    pub fn from_str_with_config(content: &str, config: GapConfig) -> Self {
        Self {
            buffer: GapBuffer::from_str_with_config(content, config),
            cursor: 0,
        }
    }

    // ==================== Accessors ====================

    /// Returns the number of characters in the document (the gap excluded).
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Alias of [`len`](Self::len).
    pub fn length(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the cursor as an offset into the visible text.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer.char_at(offset)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.buffer.chars()
    }

    /// Returns the entire document as a String.
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// Returns the document text in `[start, end)`, reading around the gap.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] if `start > end` or `end > len()`.
    pub fn slice(&self, start: usize, end: usize) -> Result<TextSlice<'_>, BufferError> {
        self.buffer.slice(start, end)
    }

    /// Raw storage offsets, for diagnostics and invariant checks.
    pub fn layout(&self) -> GapLayout {
        self.buffer.layout()
    }

    pub fn stats(&self) -> GapStats {
        self.buffer.stats()
    }

    pub fn config(&self) -> GapConfig {
        self.buffer.config()
    }

    // ==================== Cursor Movement ====================

    /// Sets the cursor to `offset` in the visible text.
    ///
    /// The gap does not move; that is deferred to the next mutation, so any
    /// number of cursor moves between edits cost O(1) each.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] if `offset > len()`. The cursor is left
    /// where it was.
    pub fn move_cursor_to(&mut self, offset: usize) -> Result<(), BufferError> {
        let len = self.len();
        if offset > len {
            return Err(BufferError::offset_out_of_range(offset, len));
        }
        self.cursor = offset;
        Ok(())
    }

    // ==================== Mutations ====================

    /// Ensures the gap buffer's gap is at the cursor position.
    fn sync_gap_to_cursor(&mut self) {
        self.buffer.move_gap_to(self.cursor);
    }

    /// Inserts a character immediately before the cursor and advances the
    /// cursor past it.
    ///
    /// # Errors
    ///
    /// [`BufferError::AllocationFailure`] if the gap was full and could not
    /// be grown. The document and cursor are unchanged in that case.
    pub fn insert_char(&mut self, ch: char) -> Result<(), BufferError> {
        self.sync_gap_to_cursor();
        self.buffer.insert(ch)?;
        self.cursor += 1;
        self.debug_assert_invariants();
        Ok(())
    }

    /// Inserts a string at the cursor, leaving the cursor after it.
    ///
    /// # Errors
    ///
    /// [`BufferError::AllocationFailure`] if room for the string could not be
    /// made. Nothing is inserted in that case.
    pub fn insert_str(&mut self, s: &str) -> Result<(), BufferError> {
        if s.is_empty() {
            return Ok(());
        }
        self.sync_gap_to_cursor();
        let inserted = self.buffer.insert_str(s)?;
        self.cursor += inserted;
        self.debug_assert_invariants();
        Ok(())
    }

    /// Deletes the character before the cursor (Backspace).
    ///
    /// Returns the removed character, or `None` when the cursor is at the
    /// start of the document, in which case nothing changes.
    pub fn delete_char_before_cursor(&mut self) -> Option<char> {
        if self.cursor == 0 {
            return None;
        }

        self.sync_gap_to_cursor();
        let deleted = self.buffer.delete_backward()?;
        self.cursor -= 1;
        self.debug_assert_invariants();
        Some(deleted)
    }

    /// Deletes the character after the cursor (Delete key).
    ///
    /// The cursor does not move. Returns `None` at the end of the document.
    pub fn delete_char_after_cursor(&mut self) -> Option<char> {
        if self.cursor >= self.len() {
            return None;
        }

        self.sync_gap_to_cursor();
        let deleted = self.buffer.delete_forward()?;
        self.debug_assert_invariants();
        Some(deleted)
    }

    // ==================== Validation ====================

    /// Debug assertion: the raw offsets are ordered, the cursor is inside the
    /// document, and after an edit the gap sits at the cursor.
    ///
    /// All checks are O(1). Compiled out in release builds.
    fn debug_assert_invariants(&self) {
        let layout = self.buffer.layout();
        debug_assert!(layout.is_well_formed(), "malformed gap layout: {layout:?}");
        debug_assert!(
            self.cursor <= layout.visible_len(),
            "cursor {} past end of document ({})",
            self.cursor,
            layout.visible_len()
        );
        debug_assert_eq!(layout.gap_start, self.cursor, "gap does not follow the edit point");
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.buffer, f)
    }
}
