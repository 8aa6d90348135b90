// Chunk: docs/chunks/gap_buffer - Gap buffer data structure and cursor model

//! Borrowed, read-only view of a range of document text.

use std::fmt;

/// A range of document text, borrowed from a gap buffer.
///
/// Because the range may straddle the gap, the text is held as two segments:
/// the part stored before the gap followed by the part stored after it. Either
/// may be empty. The gap itself is never part of a slice.
#[derive(Debug, Clone, Copy)]
pub struct TextSlice<'a> {
    before: &'a [char],
    after: &'a [char],
}

impl<'a> TextSlice<'a> {
    pub(crate) fn new(before: &'a [char], after: &'a [char]) -> Self {
        Self { before, after }
    }

    /// Number of characters in the slice.
    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The two stored segments, in document order.
    pub fn segments(&self) -> (&'a [char], &'a [char]) {
        (self.before, self.after)
    }

    pub fn chars(&self) -> impl DoubleEndedIterator<Item = char> + 'a {
        self.before.iter().chain(self.after.iter()).copied()
    }

    /// Returns the offsets (relative to the slice start) of every `'\n'`.
    pub fn newline_offsets(&self) -> impl Iterator<Item = usize> + 'a {
        self.chars()
            .enumerate()
            .filter_map(|(i, ch)| (ch == '\n').then_some(i))
    }
}

impl fmt::Display for TextSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for ch in self.chars() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for TextSlice<'_> {
    fn eq(&self, other: &str) -> bool {
        let mut ours = self.chars();
        let mut theirs = other.chars();
        loop {
            match (ours.next(), theirs.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => continue,
                _ => return false,
            }
        }
    }
}

impl PartialEq<&str> for TextSlice<'_> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq for TextSlice<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.chars().eq(other.chars())
    }
}

impl Eq for TextSlice<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_segments() {
        let before = ['a', 'b'];
        let after = ['c'];
        let slice = TextSlice::new(&before, &after);
        assert_eq!(slice.len(), 3);
        assert_eq!(slice.to_string(), "abc");
        assert_eq!(slice, "abc");
    }

    #[test]
    fn test_prefix_is_not_equal() {
        let before = ['a', 'b'];
        let slice = TextSlice::new(&before, &[]);
        assert_ne!(slice, "a");
        assert_ne!(slice, "abc");
    }

    #[test]
    fn test_empty() {
        let slice = TextSlice::new(&[], &[]);
        assert!(slice.is_empty());
        assert_eq!(slice, "");
    }

    #[test]
    fn test_slices_with_different_splits_are_equal() {
        let a = TextSlice::new(&['x'], &['y', 'z']);
        let b = TextSlice::new(&['x', 'y', 'z'], &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_newline_offsets_cross_segments() {
        let before = ['a', '\n'];
        let after = ['b', '\n', 'c'];
        let slice = TextSlice::new(&before, &after);
        let offsets: Vec<usize> = slice.newline_offsets().collect();
        assert_eq!(offsets, vec![1, 3]);
    }
}
