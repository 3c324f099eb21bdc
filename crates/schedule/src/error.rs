//! Error types for the commitgrid-schedule crate.

use chrono::NaiveDate;
use commitgrid_calendar::CalendarError;

/// Error type for all fallible operations in the commitgrid-schedule crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when the day sequence is empty.
    #[error("day sequence is empty")]
    EmptyInput,

    /// Returned when a date range ends before it starts.
    #[error("range end {end} is before range start {start}")]
    ReversedRange {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },

    /// Returned when the first week, last week and day count do not describe
    /// a whole number of weeks.
    #[error(
        "{total_days} days cannot span a first week of {first_days} days and a last week of {last_days} days"
    )]
    MisalignedRange {
        /// Number of days in the range.
        total_days: usize,
        /// Real days in the first week.
        first_days: usize,
        /// Real days in the last week.
        last_days: usize,
    },

    /// Returned when the dates from first to last day do not match the number
    /// of days given.
    #[error("{n_days} days cannot cover the {start}..={end} date span")]
    SpanMismatch {
        /// Date of the first day.
        start: NaiveDate,
        /// Date of the last day.
        end: NaiveDate,
        /// Number of days provided.
        n_days: usize,
    },

    /// Returned when the day sequence is longer than the configured limit.
    #[error("day sequence has {n_days} days, limit is {max_days}")]
    TooManyDays {
        /// Number of days provided.
        n_days: usize,
        /// Configured maximum.
        max_days: usize,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Calendar error propagated from commitgrid-calendar.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
