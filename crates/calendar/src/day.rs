//! Calendar day abstraction accepted by the schedule builder.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};

/// A value that identifies a single calendar day.
///
/// The schedule builder only needs the date of each element; the weekday is
/// derived from it. Implement this for domain types (a commit, an activity
/// record) to feed them in directly.
pub trait CalendarDay {
    /// Returns the calendar date of this day.
    fn date(&self) -> NaiveDate;

    /// Returns the weekday of this day.
    fn weekday(&self) -> Weekday {
        Datelike::weekday(&self.date())
    }
}

impl CalendarDay for NaiveDate {
    fn date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn date(&self) -> NaiveDate {
        NaiveDateTime::date(self)
    }
}

/// Uses the date local to the value's own time zone.
impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<D: CalendarDay + ?Sized> CalendarDay for &D {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }
}
