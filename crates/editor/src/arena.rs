// Chunk: docs/chunks/frame_arena - Per-frame bump allocation for render data
//!
//! Frame-scoped bump allocation.
//!
//! Render data such as gutter labels lives for exactly one frame. A
//! [`BumpArena`] hands out byte ranges from a fixed block by advancing an
//! offset; nothing is freed individually, and the whole block is rewound with
//! [`BumpArena::reset`] before the next frame. Allocations are named by
//! [`ArenaSlot`] handles rather than references, so several allocations can be
//! alive at once while the arena itself stays mutably borrowable.

use thiserror::Error;
use tracing::warn;

/// A handle to bytes allocated from an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaSlot {
    pub start: usize,
    pub len: usize,
}

impl ArenaSlot {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    #[error("arena exhausted: requested {requested} bytes with {remaining} remaining")]
    Exhausted { requested: usize, remaining: usize },
}

/// An allocation capability.
///
/// Callers are generic over this trait; there is one implementation,
/// [`BumpArena`].
pub trait Arena {
    /// Allocates `size` zeroed bytes.
    fn alloc(&mut self, size: usize) -> Result<ArenaSlot, ArenaError>;

    /// Returns an allocation to the arena. Bump arenas ignore this.
    fn free(&mut self, _slot: ArenaSlot) {}

    fn bytes(&self, slot: ArenaSlot) -> &[u8];

    fn bytes_mut(&mut self, slot: ArenaSlot) -> &mut [u8];

    /// Copies `text` into a fresh allocation.
    fn alloc_str(&mut self, text: &str) -> Result<ArenaSlot, ArenaError> {
        let slot = self.alloc(text.len())?;
        self.bytes_mut(slot).copy_from_slice(text.as_bytes());
        Ok(slot)
    }

    /// Reads back a slot filled by [`alloc_str`](Arena::alloc_str).
    ///
    /// Returns an empty string if the bytes are not valid UTF-8.
    fn str(&self, slot: ArenaSlot) -> &str {
        std::str::from_utf8(self.bytes(slot)).unwrap_or_default()
    }
}

/// A fixed-capacity arena where all allocations share one lifetime.
///
/// The arena only tracks the offset of the next allocation. Its memory is
/// released when the arena is dropped.
#[derive(Debug)]
pub struct BumpArena {
    memory: Vec<u8>,
    offset: usize,
}

impl BumpArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            memory: vec![0; capacity],
            offset: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.memory.len()
    }

    /// Bytes handed out since creation or the last reset.
    pub fn used(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.offset
    }

    /// Rewinds the arena so its memory can be reused for the next frame.
    ///
    /// Takes `&mut self`, so no slot borrowed from a previous frame can still
    /// be read through the arena; stale slot handles read zeroed bytes.
    pub fn reset(&mut self) {
        self.memory[..self.offset].fill(0);
        self.offset = 0;
    }
}

impl Arena for BumpArena {
    fn alloc(&mut self, size: usize) -> Result<ArenaSlot, ArenaError> {
        if size > self.remaining() {
            warn!(
                requested = size,
                remaining = self.remaining(),
                "frame arena exhausted"
            );
            return Err(ArenaError::Exhausted {
                requested: size,
                remaining: self.remaining(),
            });
        }

        let slot = ArenaSlot {
            start: self.offset,
            len: size,
        };
        self.offset += size;
        Ok(slot)
    }

    fn bytes(&self, slot: ArenaSlot) -> &[u8] {
        &self.memory[slot.start..slot.end()]
    }

    fn bytes_mut(&mut self, slot: ArenaSlot) -> &mut [u8] {
        &mut self.memory[slot.start..slot.end()]
    }
}
