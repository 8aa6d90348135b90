// Chunk: docs/chunks/gap_buffer - Gap buffer data structure and cursor model

use serde::{Deserialize, Serialize};

/// Default size of the gap in a freshly created buffer.
pub const DEFAULT_INITIAL_GAP: usize = 64;

/// Default number of slots added to the gap each time it runs out.
pub const DEFAULT_GAP_INCREMENT: usize = 64;

/// Largest gap a buffer is created with. Larger requested gaps are clamped.
pub const MAX_INITIAL_GAP: usize = 1 << 20;

/// Position in the document as (line, column) where both are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.col.cmp(&other.col))
    }
}

/// Sizing policy for the gap.
///
/// Growth is by a fixed increment rather than a multiplicative factor, so
/// `gap_increment` directly bounds how much memory a single growth adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapConfig {
    /// Gap length of a newly created empty buffer.
    pub initial_gap: usize,
    /// Slots added to the storage when the gap is exhausted.
    pub gap_increment: usize,
}

impl GapConfig {
    /// Returns a copy with zero sizes raised to 1 and the initial gap capped
    /// at [`MAX_INITIAL_GAP`].
    ///
    /// A zero increment would make growth a no-op and the next write would
    /// land outside the gap. The initial gap is allocated infallibly at
    /// construction, so it must stay small enough to allocate.
    pub fn normalized(self) -> Self {
        Self {
            initial_gap: self.initial_gap.clamp(1, MAX_INITIAL_GAP),
            gap_increment: self.gap_increment.max(1),
        }
    }
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            initial_gap: DEFAULT_INITIAL_GAP,
            gap_increment: DEFAULT_GAP_INCREMENT,
        }
    }
}

/// Snapshot of the raw storage offsets of a gap buffer.
///
/// Storage is always `[before gap | gap | after gap]`, with
/// `gap_start <= gap_end <= storage_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapLayout {
    pub gap_start: usize,
    pub gap_end: usize,
    pub storage_len: usize,
}

impl GapLayout {
    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Length of the document, i.e. the storage minus the gap.
    pub fn visible_len(&self) -> usize {
        self.storage_len - self.gap_len()
    }

    /// Returns true if the offsets are ordered as a gap buffer requires.
    pub fn is_well_formed(&self) -> bool {
        self.gap_start <= self.gap_end && self.gap_end <= self.storage_len
    }
}

/// Counters describing how much work the gap has done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GapStats {
    /// Gap migrations that moved at least one character.
    pub migrations: u64,
    /// Total characters copied by gap migrations.
    pub chars_moved: u64,
    /// Number of times the backing store was grown.
    pub growths: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_orders_by_line_then_col() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
        assert_eq!(Position::new(1, 1).cmp(&Position::new(1, 1)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_gap_config_normalized_clamps_zero() {
        let config = GapConfig {
            initial_gap: 0,
            gap_increment: 0,
        }
        .normalized();
        assert_eq!(config.initial_gap, 1);
        assert_eq!(config.gap_increment, 1);
    }

    #[test]
    fn test_gap_config_normalized_caps_initial_gap() {
        let config = GapConfig {
            initial_gap: usize::MAX,
            gap_increment: usize::MAX,
        }
        .normalized();
        assert_eq!(config.initial_gap, MAX_INITIAL_GAP);
        // Growth is fallible, so the increment is left alone.
        assert_eq!(config.gap_increment, usize::MAX);
    }

    #[test]
    fn test_gap_config_partial_json_uses_defaults() {
        let config: GapConfig = serde_json::from_str(r#"{ "gap_increment": 8 }"#).unwrap();
        assert_eq!(config.initial_gap, DEFAULT_INITIAL_GAP);
        assert_eq!(config.gap_increment, 8);
    }

    #[test]
    fn test_gap_layout_derived_lengths() {
        let layout = GapLayout {
            gap_start: 3,
            gap_end: 10,
            storage_len: 12,
        };
        assert_eq!(layout.gap_len(), 7);
        assert_eq!(layout.visible_len(), 5);
        assert!(layout.is_well_formed());
    }
}
