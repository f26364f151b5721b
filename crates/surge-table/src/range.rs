//! Inclusive integer ranges over the roll domain.

use serde::{Deserialize, Serialize};

/// An inclusive interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Lowest value in the range.
    pub min: i64,
    /// Highest value in the range.
    pub max: i64,
}

impl Range {
    /// Create a range. Validity (`min <= max`) is checked by the table.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// True if `value` lies within the range.
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// True if `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// True if the two ranges share at least one value.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Number of values covered, or 0 for an inverted range.
    pub fn width(&self) -> u64 {
        if self.is_valid() {
            self.max.abs_diff(self.min) + 1
        } else {
            0
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}–{:02}", self.min, self.max)
    }
}
