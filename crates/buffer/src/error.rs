// Chunk: docs/chunks/buffer_errors - Typed errors for buffer operations

//! Errors reported by buffer operations.
//!
//! Only two things can go wrong on a well-formed buffer: an offset argument
//! that lies outside the visible text, and a growth step that cannot obtain
//! memory. Neither leaves the buffer in a partially-applied state.

use thiserror::Error;

/// An error returned by a [`TextBuffer`](crate::TextBuffer) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The requested range `[start, end)` is not inside `[0, len]`, or is reversed.
    ///
    /// For single-offset operations such as `move_cursor_to`, `start == end`.
    #[error("range {start}..{end} is out of bounds for a buffer of length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },

    /// Growing the backing store by `requested` slots failed.
    #[error("failed to grow buffer storage by {requested} characters")]
    AllocationFailure { requested: usize },
}

impl BufferError {
    pub(crate) fn offset_out_of_range(offset: usize, len: usize) -> Self {
        BufferError::OutOfRange {
            start: offset,
            end: offset,
            len,
        }
    }
}
