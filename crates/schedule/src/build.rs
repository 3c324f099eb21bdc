//! Top-level schedule construction from a day sequence.

use chrono::NaiveDate;
use commitgrid_calendar::{CalendarDay, check_contiguous};
use tracing::debug;

use crate::assemble::connect_weeks_to_schedule;
use crate::config::ScheduleConfig;
use crate::error::ScheduleError;
use crate::schedule::Schedule;
use crate::week::{first_week, last_week};

/// Builds the schedule for `days` with the default [`ScheduleConfig`].
///
/// # Errors
///
/// See [`build_commit_schedule_with`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use commitgrid_calendar::day_sequence;
/// use commitgrid_schedule::build_commit_schedule;
///
/// // Monday 2009-11-09 through Thursday 2009-11-12.
/// let start = NaiveDate::from_ymd_opt(2009, 11, 9).unwrap();
/// let days = day_sequence(start, 4).unwrap();
/// let schedule = build_commit_schedule(&days).unwrap();
/// assert_eq!(schedule.len(), 1);
/// assert_eq!(schedule.day_count(), 4);
/// ```
pub fn build_commit_schedule<D: CalendarDay>(days: &[D]) -> Result<Schedule, ScheduleError> {
    build_commit_schedule_with(days, &ScheduleConfig::default())
}

/// Builds the schedule for an ordered, contiguous sequence of days.
///
/// The first day's weekday shapes the first week, the last day's weekday
/// shapes the last week, and the number of days decides how many full weeks
/// sit between them.
///
/// # Errors
///
/// - [`ScheduleError::InvalidConfig`] if `config` does not validate.
/// - [`ScheduleError::EmptyInput`] if `days` is empty.
/// - [`ScheduleError::TooManyDays`] if `days` exceeds `config.max_days()`.
/// - [`ScheduleError::Calendar`] wrapping
///   [`CalendarError::NonContiguous`](commitgrid_calendar::CalendarError::NonContiguous)
///   if the contiguity check is enabled and fails.
/// - [`ScheduleError::SpanMismatch`] if the check is disabled and the dates
///   from first to last day do not add up to the number of days given.
#[tracing::instrument(skip_all, fields(n_days = days.len()))]
pub fn build_commit_schedule_with<D: CalendarDay>(
    days: &[D],
    config: &ScheduleConfig,
) -> Result<Schedule, ScheduleError> {
    config.validate()?;

    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return Err(ScheduleError::EmptyInput);
    };
    check_max_days(days.len(), config)?;

    let (start, end) = (first.date(), last.date());
    if config.check_contiguity() {
        check_contiguous(days)?;
    } else if span_days(start, end) != Some(days.len()) {
        debug!(%start, %end, "day count does not match the date span");
        return Err(ScheduleError::SpanMismatch {
            start,
            end,
            n_days: days.len(),
        });
    }

    debug!(%start, %end, "building schedule");
    connect_weeks_to_schedule(
        first_week(first.weekday()),
        last_week(last.weekday()),
        days.len(),
    )
}

/// Builds the schedule for the inclusive range `start..=end` with the
/// default [`ScheduleConfig`].
///
/// The default configuration sets no `max_days`, so the grid grows with the
/// range: one week per seven days. Use [`build_schedule_for_range_with`] to
/// bound ranges that come from untrusted input.
///
/// # Errors
///
/// See [`build_schedule_for_range_with`].
pub fn build_schedule_for_range(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Schedule, ScheduleError> {
    build_schedule_for_range_with(start, end, &ScheduleConfig::default())
}

/// Builds the schedule for the inclusive range `start..=end`.
///
/// Equivalent to [`build_commit_schedule_with`] over every day in the range,
/// without materialising the days.
///
/// # Errors
///
/// - [`ScheduleError::InvalidConfig`] if `config` does not validate.
/// - [`ScheduleError::ReversedRange`] if `end` is before `start`.
/// - [`ScheduleError::TooManyDays`] if the range exceeds `config.max_days()`.
pub fn build_schedule_for_range_with(
    start: NaiveDate,
    end: NaiveDate,
    config: &ScheduleConfig,
) -> Result<Schedule, ScheduleError> {
    config.validate()?;

    let Some(total_days) = span_days(start, end) else {
        return Err(ScheduleError::ReversedRange { start, end });
    };
    check_max_days(total_days, config)?;

    connect_weeks_to_schedule(
        first_week(start.weekday()),
        last_week(end.weekday()),
        total_days,
    )
}

/// Number of days in `start..=end`, or `None` if `end` is before `start`.
fn span_days(start: NaiveDate, end: NaiveDate) -> Option<usize> {
    let span = (end - start).num_days().checked_add(1)?;
    usize::try_from(span).ok().filter(|n| *n > 0)
}

fn check_max_days(n_days: usize, config: &ScheduleConfig) -> Result<(), ScheduleError> {
    match config.max_days() {
        Some(max_days) if n_days > max_days => {
            Err(ScheduleError::TooManyDays { n_days, max_days })
        }
        _ => Ok(()),
    }
}
