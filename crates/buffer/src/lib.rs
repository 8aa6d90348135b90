// Chunk: docs/chunks/gap_buffer - Gap buffer data structure and cursor model

//! parsec-buffer: the text storage behind the parsec editor.
//!
//! This crate provides a gap buffer-backed text buffer with a single cursor.
//! Edits at or near the cursor are cheap; the rendering layer reads the text
//! back through [`TextBuffer::slice`] without ever seeing the gap.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Character insertion and deletion at the cursor position
//! - O(1) cursor movement (the gap catches up on the next edit)
//! - Read access to any range of the document
//!
//! # Example
//!
//! ```
//! use parsec_buffer::TextBuffer;
//!
//! let mut buffer = TextBuffer::new();
//! buffer.insert_char('h').unwrap();
//! buffer.insert_char('i').unwrap();
//! assert_eq!(buffer.slice(0, 2).unwrap(), "hi");
//!
//! buffer.move_cursor_to(1).unwrap();
//! buffer.insert_char('X').unwrap();
//! assert_eq!(buffer.content(), "hXi");
//! assert_eq!(buffer.cursor(), 2);
//! ```
//!
//! # Lines
//!
//! Line splitting belongs to the renderer. [`LineIndex`] scans text for
//! `'\n'` and answers line/column questions; line terminators are excluded
//! from line ranges.

mod error;
mod gap_buffer;
mod line_index;
mod text_buffer;
mod text_slice;
mod types;

pub use error::BufferError;
pub use line_index::LineIndex;
pub use text_buffer::TextBuffer;
pub use text_slice::TextSlice;
pub use types::{
    GapConfig, GapLayout, GapStats, Position, DEFAULT_GAP_INCREMENT, DEFAULT_INITIAL_GAP,
    MAX_INITIAL_GAP,
};
