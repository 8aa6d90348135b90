// Chunk: docs/chunks/buffer_errors - Typed errors for buffer operations

use thiserror::Error;

use parsec_buffer::BufferError;

use crate::arena::ArenaError;
use crate::config::ConfigError;

/// Any error the editor layer can report.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error(transparent)]
    Arena(#[from] ArenaError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
