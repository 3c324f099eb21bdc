//! Sunday-first weekday rows.
//!
//! A contribution calendar draws one row per weekday, Sunday at the top.
//! These helpers convert between [`chrono::Weekday`] and that row index.

use chrono::Weekday;

use crate::error::CalendarError;

/// Number of weekdays, and therefore rows, in a calendar week.
pub const DAYS_PER_WEEK: usize = 7;

/// Weekdays in row order, Sunday first.
pub const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Returns the grid row of `weekday`: 0 for Sunday through 6 for Saturday.
pub fn weekday_row(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

/// Returns the weekday drawn on grid row `row`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRow`] if `row` is not in 0..=6.
pub fn weekday_at_row(row: usize) -> Result<Weekday, CalendarError> {
    WEEKDAYS
        .get(row)
        .copied()
        .ok_or(CalendarError::InvalidRow { row })
}
