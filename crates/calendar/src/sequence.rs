//! Contiguous day sequence generation.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Generates a contiguous sequence of calendar days.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates by
/// repeatedly advancing one day. Month, year and leap-day boundaries follow
/// the proleptic Gregorian calendar.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the sequence would run past
/// [`NaiveDate::MAX`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use commitgrid_calendar::day_sequence;
///
/// let start = NaiveDate::from_ymd_opt(2015, 12, 30).unwrap();
/// let days = day_sequence(start, 4).unwrap();
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[3], NaiveDate::from_ymd_opt(2016, 1, 2).unwrap());
/// ```
pub fn day_sequence(start: NaiveDate, n_days: usize) -> Result<Vec<NaiveDate>, CalendarError> {
    let mut days = Vec::with_capacity(n_days);
    if n_days == 0 {
        return Ok(days);
    }
    days.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current
            .succ_opt()
            .ok_or(CalendarError::OutOfRange { start, n_days })?;
        days.push(current);
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty() {
        let days = day_sequence(date(2009, 11, 9), 0).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn single() {
        let start = date(2014, 7, 7);
        let days = day_sequence(start, 1).unwrap();
        assert_eq!(days, vec![start]);
    }

    #[test]
    fn leap_day() {
        let days = day_sequence(date(2016, 2, 28), 3).unwrap();
        assert_eq!(
            days,
            vec![date(2016, 2, 28), date(2016, 2, 29), date(2016, 3, 1)]
        );
    }

    #[test]
    fn non_leap_february() {
        let days = day_sequence(date(2015, 2, 28), 2).unwrap();
        assert_eq!(days[1], date(2015, 3, 1));
    }

    #[test]
    fn year_transition() {
        let days = day_sequence(date(2014, 12, 31), 2).unwrap();
        assert_eq!(days[1], date(2015, 1, 1));
    }

    #[test]
    fn full_leap_year() {
        let days = day_sequence(date(2016, 1, 1), 366).unwrap();
        assert_eq!(days.len(), 366);
        assert_eq!(*days.last().unwrap(), date(2016, 12, 31));
    }

    #[test]
    fn past_max_date() {
        let start = NaiveDate::MAX.pred_opt().unwrap();
        assert!(day_sequence(start, 2).is_ok());
        assert_eq!(
            day_sequence(start, 3).unwrap_err(),
            CalendarError::OutOfRange { start, n_days: 3 }
        );
    }
}
