// Chunk: docs/chunks/gap_buffer - Gap buffer data structure and cursor model

//! Gap buffer implementation for efficient text editing.
//!
//! A gap buffer is a character array with a movable gap. Storage is always laid
//! out as `[before gap | gap | after gap]`; the gap holds no document content.
//! Insertions and deletions at the gap are O(1); moving the gap is O(distance)
//! but amortizes well for typical editing patterns (locality of edits).
//!
//! All bookkeeping is done with offsets into the owned `Vec<char>`, never with
//! addresses, so reallocating the vector during growth cannot leave a stale
//! reference behind.

use tracing::{debug, trace, warn};

use crate::error::BufferError;
use crate::text_slice::TextSlice;
use crate::types::{GapConfig, GapLayout, GapStats};

/// Value written into slots that are part of the gap.
const VACANT: char = '\0';

/// A gap buffer for text storage and manipulation.
///
/// The gap buffer knows nothing about a cursor; it only knows where its gap
/// is. [`TextBuffer`](crate::TextBuffer) decides when the gap should move.
#[derive(Debug, Clone)]
pub struct GapBuffer {
    /// The underlying storage. Contains [pre-gap content | gap | post-gap content].
    data: Vec<char>,
    /// Index where the gap starts (first unused slot).
    gap_start: usize,
    /// Index where the gap ends (first used slot after the gap).
    gap_end: usize,
    config: GapConfig,
    stats: GapStats,
}

impl GapBuffer {
    /// Creates a new empty gap buffer with the default gap sizing.
    pub fn new() -> Self {
        Self::with_config(GapConfig::default())
    }

    /// Creates a new empty gap buffer whose gap spans `config.initial_gap` slots.
    pub fn with_config(config: GapConfig) -> Self {
        let config = config.normalized();
        Self {
            data: vec![VACANT; config.initial_gap],
            gap_start: 0,
            gap_end: config.initial_gap,
            config,
            stats: GapStats::default(),
        }
    }

    /// Creates a gap buffer holding `text`, with the gap placed after it.
    pub fn from_str_with_config(text: &str, config: GapConfig) -> Self {
        let config = config.normalized();
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        data.resize(len + config.initial_gap, VACANT);

        Self {
            gap_end: data.len(),
            data,
            gap_start: len,
            config,
            stats: GapStats::default(),
        }
    }

    /// Returns the logical length of the buffer (excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Returns the gap position in logical coordinates.
    pub fn gap_position(&self) -> usize {
        self.gap_start
    }

    pub fn layout(&self) -> GapLayout {
        GapLayout {
            gap_start: self.gap_start,
            gap_end: self.gap_end,
            storage_len: self.data.len(),
        }
    }

    pub fn stats(&self) -> GapStats {
        self.stats
    }

    pub fn config(&self) -> GapConfig {
        self.config
    }

    /// Maps a logical position to its slot in storage.
    ///
    /// Positions before the gap map to themselves; positions at or after the
    /// gap are shifted past it.
    fn storage_offset(&self, pos: usize) -> usize {
        if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        }
    }

    /// Moves the gap so that it starts at logical position `pos`.
    ///
    /// `pos` is clamped to the buffer length. This is O(distance) where
    /// distance is the number of characters between the old and new gap
    /// position, and is the only operation that copies document content
    /// (apart from growth relocating the post-gap region).
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        // Covers both "target is gap_start" and "target is gap_end": the two
        // storage slots name the same logical position.
        if pos == self.gap_start {
            return;
        }

        let shift = if pos < self.gap_start {
            // Gap moves left: [pos, gap_start) slides right to end at gap_end.
            let shift = self.gap_start - pos;
            self.data
                .copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
            shift
        } else {
            // Gap moves right: [gap_end, target) slides left to start at gap_start.
            let target = self.storage_offset(pos);
            let shift = target - self.gap_end;
            self.data.copy_within(self.gap_end..target, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
            shift
        };

        self.stats.migrations += 1;
        self.stats.chars_moved += shift as u64;
        trace!(
            gap_start = self.gap_start,
            gap_end = self.gap_end,
            shift,
            "moved gap"
        );
    }

    /// Ensures the gap has room for at least `needed` characters.
    ///
    /// Grows by whole multiples of the configured increment. The gap position
    /// is preserved; callers rely on the gap staying where `move_gap_to` left
    /// it. Memory is reserved before any offset changes, so a failed
    /// allocation leaves the buffer untouched.
    fn ensure_gap(&mut self, needed: usize) -> Result<(), BufferError> {
        let current_gap = self.gap_len();
        if current_gap >= needed {
            return Ok(());
        }

        let shortfall = needed - current_gap;
        let increment = self.config.gap_increment;
        let growth = shortfall
            .div_ceil(increment)
            .checked_mul(increment)
            .ok_or(BufferError::AllocationFailure { requested: shortfall })?;

        if self.data.try_reserve(growth).is_err() {
            warn!(requested = growth, len = self.data.len(), "buffer growth failed");
            return Err(BufferError::AllocationFailure { requested: growth });
        }

        let old_len = self.data.len();
        let post_gap_len = old_len - self.gap_end;
        self.data.resize(old_len + growth, VACANT);

        // Relocate the post-gap content to the new end of storage.
        if post_gap_len > 0 {
            self.data
                .copy_within(self.gap_end..old_len, self.gap_end + growth);
        }
        let new_gap_end = self.gap_end + growth;
        self.data[self.gap_end..new_gap_end].fill(VACANT);
        self.gap_end = new_gap_end;

        self.stats.growths += 1;
        debug!(
            growth,
            storage_len = self.data.len(),
            gap_start = self.gap_start,
            gap_end = self.gap_end,
            "grew buffer storage"
        );
        Ok(())
    }

    /// Inserts a character at the current gap position.
    ///
    /// This is O(1) amortized (grows the storage when the gap is exhausted).
    pub fn insert(&mut self, ch: char) -> Result<(), BufferError> {
        self.ensure_gap(1)?;
        self.data[self.gap_start] = ch;
        self.gap_start += 1;
        Ok(())
    }

    /// Inserts a string at the current gap position.
    ///
    /// Room for the whole string is made before anything is written, so an
    /// allocation failure inserts nothing.
    pub fn insert_str(&mut self, s: &str) -> Result<usize, BufferError> {
        let count = s.chars().count();
        self.ensure_gap(count)?;
        for ch in s.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }
        Ok(count)
    }

    /// Deletes the character before the gap (backspace).
    ///
    /// Returns the deleted character, or None if the gap is at the beginning.
    pub fn delete_backward(&mut self) -> Option<char> {
        if self.gap_start == 0 {
            return None;
        }
        self.gap_start -= 1;
        let ch = std::mem::replace(&mut self.data[self.gap_start], VACANT);
        Some(ch)
    }

    /// Deletes the character after the gap (delete key).
    ///
    /// Returns the deleted character, or None if the gap is at the end.
    pub fn delete_forward(&mut self) -> Option<char> {
        if self.gap_end >= self.data.len() {
            return None;
        }
        let ch = std::mem::replace(&mut self.data[self.gap_end], VACANT);
        self.gap_end += 1;
        Some(ch)
    }

    /// Returns the character at the given logical position.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        Some(self.data[self.storage_offset(pos)])
    }

    /// Returns an iterator over all characters in the buffer.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns a borrowed view of the logical range `[start, end)`.
    ///
    /// The view reads around the gap: a range that straddles the gap is
    /// returned as two segments, one on each side of it.
    pub fn slice(&self, start: usize, end: usize) -> Result<TextSlice<'_>, BufferError> {
        let len = self.len();
        if start > end || end > len {
            return Err(BufferError::OutOfRange { start, end, len });
        }

        let gap_len = self.gap_len();
        let before = &self.data[start.min(self.gap_start)..end.min(self.gap_start)];
        let after = &self.data
            [start.max(self.gap_start) + gap_len..end.max(self.gap_start) + gap_len];
        Ok(TextSlice::new(before, after))
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;

        for ch in self.chars() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_INITIAL_GAP;

    fn small() -> GapConfig {
        GapConfig {
            initial_gap: 4,
            gap_increment: 4,
        }
    }

    #[test]
    fn test_new_empty() {
        let buf = GapBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(
            buf.layout(),
            GapLayout {
                gap_start: 0,
                gap_end: 64,
                storage_len: 64
            }
        );
    }

    #[test]
    fn test_from_str() {
        let buf = GapBuffer::from_str_with_config("hello", small());
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.to_string(), "hello");
        assert_eq!(buf.gap_position(), 5);
    }

    #[test]
    fn test_insert() {
        let mut buf = GapBuffer::new();
        buf.insert('a').unwrap();
        buf.insert('b').unwrap();
        buf.insert('c').unwrap();
        assert_eq!(buf.to_string(), "abc");
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_insert_at_middle() {
        let mut buf = GapBuffer::from_str_with_config("ac", small());
        buf.move_gap_to(1);
        buf.insert('b').unwrap();
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_delete_backward() {
        let mut buf = GapBuffer::from_str_with_config("abc", small());
        assert_eq!(buf.delete_backward(), Some('c'));
        assert_eq!(buf.to_string(), "ab");
        assert_eq!(buf.delete_backward(), Some('b'));
        assert_eq!(buf.to_string(), "a");
    }

    #[test]
    fn test_delete_backward_zeroes_vacated_slot() {
        let mut buf = GapBuffer::from_str_with_config("abc", small());
        buf.delete_backward();
        assert_eq!(buf.data[2], VACANT);
    }

    #[test]
    fn test_delete_backward_at_start() {
        let mut buf = GapBuffer::from_str_with_config("abc", small());
        buf.move_gap_to(0);
        assert_eq!(buf.delete_backward(), None);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_delete_forward() {
        let mut buf = GapBuffer::from_str_with_config("abc", small());
        buf.move_gap_to(0);
        assert_eq!(buf.delete_forward(), Some('a'));
        assert_eq!(buf.to_string(), "bc");
    }

    #[test]
    fn test_delete_forward_at_end() {
        let mut buf = GapBuffer::from_str_with_config("abc", small());
        assert_eq!(buf.delete_forward(), None);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_move_gap() {
        let mut buf = GapBuffer::from_str_with_config("abcdef", small());
        assert_eq!(buf.gap_position(), 6);

        buf.move_gap_to(3);
        assert_eq!(buf.gap_position(), 3);
        assert_eq!(buf.to_string(), "abcdef");

        buf.move_gap_to(0);
        assert_eq!(buf.gap_position(), 0);
        assert_eq!(buf.to_string(), "abcdef");

        buf.move_gap_to(6);
        assert_eq!(buf.gap_position(), 6);
        assert_eq!(buf.to_string(), "abcdef");
    }

    #[test]
    fn test_move_gap_left_offsets() {
        let mut buf = GapBuffer::from_str_with_config("abcdef", small());
        buf.move_gap_to(2);
        assert_eq!(
            buf.layout(),
            GapLayout {
                gap_start: 2,
                gap_end: 6,
                storage_len: 10
            }
        );
        assert_eq!(&buf.data[6..], &['c', 'd', 'e', 'f']);
    }

    #[test]
    fn test_move_gap_to_same_position_counts_nothing() {
        let mut buf = GapBuffer::from_str_with_config("abc", small());
        buf.move_gap_to(3);
        buf.move_gap_to(3);
        assert_eq!(buf.stats().migrations, 0);
        assert_eq!(buf.stats().chars_moved, 0);
    }

    #[test]
    fn test_move_gap_counts_moved_chars() {
        let mut buf = GapBuffer::from_str_with_config("abcdef", small());
        buf.move_gap_to(1);
        buf.move_gap_to(4);
        let stats = buf.stats();
        assert_eq!(stats.migrations, 2);
        assert_eq!(stats.chars_moved, 5 + 3);
    }

    #[test]
    fn test_move_gap_clamps_past_end() {
        let mut buf = GapBuffer::from_str_with_config("abc", small());
        buf.move_gap_to(0);
        buf.move_gap_to(99);
        assert_eq!(buf.gap_position(), 3);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_growth_preserves_post_gap_content() {
        let mut buf = GapBuffer::from_str_with_config("abcd", small());
        buf.move_gap_to(2);
        for ch in "12345".chars() {
            buf.insert(ch).unwrap();
        }
        assert_eq!(buf.to_string(), "ab12345cd");
        assert_eq!(buf.stats().growths, 1);
        let layout = buf.layout();
        assert!(layout.is_well_formed());
        assert_eq!(layout.gap_start, 7);
        assert_eq!(layout.storage_len - layout.gap_end, 2);
    }

    #[test]
    fn test_growth_uses_fixed_increment() {
        let mut buf = GapBuffer::with_config(small());
        for ch in "abcd".chars() {
            buf.insert(ch).unwrap();
        }
        assert_eq!(buf.layout().storage_len, 4);
        buf.insert('e').unwrap();
        assert_eq!(buf.layout().storage_len, 8);
        assert_eq!(buf.layout().gap_len(), 3);
    }

    #[test]
    fn test_insert_str_grows_in_one_step() {
        let mut buf = GapBuffer::with_config(small());
        assert_eq!(buf.insert_str("hello world").unwrap(), 11);
        assert_eq!(buf.to_string(), "hello world");
        assert_eq!(buf.stats().growths, 1);
        assert_eq!(buf.layout().storage_len, 12);
    }

    #[test]
    fn test_huge_initial_gap_is_capped() {
        let config = GapConfig {
            initial_gap: usize::MAX,
            gap_increment: 4,
        };
        let buf = GapBuffer::from_str_with_config("abc", config);
        assert_eq!(buf.to_string(), "abc");
        assert_eq!(buf.layout().gap_len(), MAX_INITIAL_GAP);
    }

    #[test]
    fn test_failed_growth_leaves_buffer_untouched() {
        let mut buf = GapBuffer::with_config(GapConfig {
            initial_gap: 1,
            gap_increment: usize::MAX / 4,
        });
        buf.insert('a').unwrap();
        let layout = buf.layout();

        let err = buf.insert('b').unwrap_err();

        assert!(matches!(err, BufferError::AllocationFailure { .. }));
        assert_eq!(buf.to_string(), "a");
        assert_eq!(buf.layout(), layout);
        assert_eq!(buf.stats().growths, 0);
    }

    #[test]
    fn test_char_at() {
        let buf = GapBuffer::from_str_with_config("hello", small());
        assert_eq!(buf.char_at(0), Some('h'));
        assert_eq!(buf.char_at(4), Some('o'));
        assert_eq!(buf.char_at(5), None);
    }

    #[test]
    fn test_char_at_with_gap_in_middle() {
        let mut buf = GapBuffer::from_str_with_config("hello", small());
        buf.move_gap_to(2);
        let chars: Vec<Option<char>> = (0..5).map(|i| buf.char_at(i)).collect();
        assert_eq!(
            chars,
            vec![Some('h'), Some('e'), Some('l'), Some('l'), Some('o')]
        );
    }

    #[test]
    fn test_slice_straddling_gap() {
        let mut buf = GapBuffer::from_str_with_config("hello world", small());
        buf.move_gap_to(4);
        let slice = buf.slice(2, 8).unwrap();
        assert_eq!(slice, "llo wo");
        assert_eq!(slice.segments(), (&['l', 'l'][..], &['o', ' ', 'w', 'o'][..]));
    }

    #[test]
    fn test_slice_entirely_on_one_side() {
        let mut buf = GapBuffer::from_str_with_config("hello world", small());
        buf.move_gap_to(5);
        assert_eq!(buf.slice(0, 5).unwrap(), "hello");
        assert_eq!(buf.slice(6, 11).unwrap(), "world");
        assert_eq!(buf.slice(5, 5).unwrap(), "");
    }

    #[test]
    fn test_slice_rejects_bad_ranges() {
        let buf = GapBuffer::from_str_with_config("abc", small());
        assert_eq!(
            buf.slice(2, 1).unwrap_err(),
            BufferError::OutOfRange {
                start: 2,
                end: 1,
                len: 3
            }
        );
        assert!(buf.slice(0, 4).is_err());
    }

    #[test]
    fn test_large_insert() {
        let mut buf = GapBuffer::new();
        for i in 0..1000u32 {
            buf.insert(char::from_u32('a' as u32 + i % 26).unwrap()).unwrap();
        }
        assert_eq!(buf.len(), 1000);
    }
}
