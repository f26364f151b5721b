//! Error types for range tables.

use thiserror::Error;

use crate::range::Range;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Configuration errors detected while building or loading a table.
///
/// Every variant is fatal: a table that fails validation must not serve lookups.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table declares no entries.
    #[error("table '{0}' has no entries")]
    Empty(String),

    /// The declared domain itself is inverted.
    #[error("domain {0} has min greater than max")]
    InvalidDomain(Range),

    /// An entry's min is greater than its max.
    #[error("range {0} has min greater than max")]
    InvertedRange(Range),

    /// Entries are not sorted ascending by min.
    #[error("range {range} starts before the preceding range {prev}")]
    Unsorted {
        /// The preceding entry.
        prev: Range,
        /// The out-of-order entry.
        range: Range,
    },

    /// Two consecutive entries share at least one value.
    #[error("range {range} overlaps the preceding range {prev}")]
    Overlap {
        /// The preceding entry.
        prev: Range,
        /// The overlapping entry.
        range: Range,
    },

    /// Values between two consecutive entries are not covered.
    #[error("gap between {prev} and {range}")]
    Gap {
        /// The preceding entry.
        prev: Range,
        /// The entry after the gap.
        range: Range,
    },

    /// The first entry does not start at the domain floor.
    #[error("first range starts at {found}, expected domain floor {expected}")]
    FloorMismatch {
        /// The declared domain floor.
        expected: i64,
        /// The first entry's min.
        found: i64,
    },

    /// The last entry does not end at the domain ceiling.
    #[error("last range ends at {found}, expected domain ceiling {expected}")]
    CeilingMismatch {
        /// The declared domain ceiling.
        expected: i64,
        /// The last entry's max.
        found: i64,
    },

    /// A resolver is malformed.
    #[error("entry {range}: {message}")]
    InvalidResolver {
        /// The entry holding the resolver.
        range: Range,
        /// What is wrong with it.
        message: String,
    },

    /// Reading a table file failed.
    #[error("failed to read table: {0}")]
    Io(#[from] std::io::Error),

    /// A table file is not valid JSON for a table definition.
    #[error("failed to parse table: {0}")]
    Json(#[from] serde_json::Error),
}
