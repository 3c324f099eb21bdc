//! Error types for the commitgrid-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the commitgrid-calendar crate.
///
/// Covers weekday row lookups, day sequences that run off chrono's
/// representable range, and day slices that skip or repeat dates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a weekday row is outside the valid range 0..=6.
    #[error("invalid weekday row: {row} (must be 0..=6)")]
    InvalidRow {
        /// The invalid row index that was provided.
        row: usize,
    },

    /// Returned when a day sequence would step past the last representable date.
    #[error("day sequence starting at {start} cannot hold {n_days} days")]
    OutOfRange {
        /// First date of the requested sequence.
        start: NaiveDate,
        /// Requested number of days.
        n_days: usize,
    },

    /// Returned when a day does not directly follow its predecessor.
    #[error("days are not contiguous at index {index}: expected {expected}, found {found}")]
    NonContiguous {
        /// Position of the offending day in the input.
        index: usize,
        /// The date that should have appeared at `index`.
        expected: NaiveDate,
        /// The date that actually appeared at `index`.
        found: NaiveDate,
    },

    /// Returned when a day follows the last representable date.
    #[error("day at index {index} follows {previous}, the last representable date")]
    AfterMaxDate {
        /// Position of the offending day in the input.
        index: usize,
        /// The preceding day, which has no successor.
        previous: NaiveDate,
    },
}
