//! Stitches the first week, the full middle weeks and the last week together.

use commitgrid_calendar::DAYS_PER_WEEK;
use tracing::debug;

use crate::error::ScheduleError;
use crate::schedule::Schedule;
use crate::week::Week;

/// Assembles a [`Schedule`] spanning `total_days` days.
///
/// `first` and `last` are the partial weeks produced by
/// [`first_week`](crate::first_week) and [`last_week`](crate::last_week).
///
/// When the whole range fits in the first week, both describe the same
/// calendar week and the result is a single merged week. Otherwise the days
/// not covered by `first` and `last` must fill a whole number of weeks, which
/// are emitted between them.
///
/// # Errors
///
/// - [`ScheduleError::EmptyInput`] if `total_days` is zero.
/// - [`ScheduleError::MisalignedRange`] if the day count does not agree with
///   the two partial weeks.
pub fn connect_weeks_to_schedule(
    first: Week,
    last: Week,
    total_days: usize,
) -> Result<Schedule, ScheduleError> {
    if total_days == 0 {
        return Err(ScheduleError::EmptyInput);
    }

    let first_days = first.real_days();
    let last_days = last.real_days();
    let misaligned = ScheduleError::MisalignedRange {
        total_days,
        first_days,
        last_days,
    };

    if total_days <= first_days {
        // Start and end fall in the same calendar week.
        if last_days != first.leading_padding() + total_days {
            return Err(misaligned);
        }
        debug!(total_days, "range fits in a single week");
        return Ok(Schedule::from_weeks(vec![Week::merge(first, last)]));
    }

    let intermediate_days = total_days
        .checked_sub(first_days + last_days)
        .ok_or_else(|| misaligned.clone())?;
    if intermediate_days % DAYS_PER_WEEK != 0 {
        return Err(misaligned);
    }
    let full_weeks = intermediate_days / DAYS_PER_WEEK;
    debug!(total_days, full_weeks, "assembling schedule");

    let mut weeks = Vec::with_capacity(full_weeks + 2);
    weeks.push(first);
    weeks.extend(std::iter::repeat_n(Week::full(), full_weeks));
    weeks.push(last);
    Ok(Schedule::from_weeks(weeks))
}
