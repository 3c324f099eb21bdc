//! Contiguity validation for day slices.

use tracing::debug;

use crate::day::CalendarDay;
use crate::error::CalendarError;

/// Checks that every day in `days` falls exactly one day after its predecessor.
///
/// Empty and single-element slices are trivially contiguous. Gaps, repeated
/// days and days out of order are all reported against the first offending
/// position.
///
/// # Errors
///
/// Returns [`CalendarError::NonContiguous`] describing the first violation,
/// or [`CalendarError::AfterMaxDate`] if any day follows
/// [`NaiveDate::MAX`](chrono::NaiveDate::MAX).
pub fn check_contiguous<D: CalendarDay>(days: &[D]) -> Result<(), CalendarError> {
    for (index, pair) in days.windows(2).enumerate() {
        let previous = pair[0].date();
        let found = pair[1].date();
        let Some(expected) = previous.succ_opt() else {
            debug!(index = index + 1, %previous, "day follows the last representable date");
            return Err(CalendarError::AfterMaxDate {
                index: index + 1,
                previous,
            });
        };
        if found != expected {
            debug!(index = index + 1, %expected, %found, "day sequence is not contiguous");
            return Err(CalendarError::NonContiguous {
                index: index + 1,
                expected,
                found,
            });
        }
    }
    Ok(())
}
