//! One grid column: seven cells, Sunday first.

use std::ops::Index;

use chrono::Weekday;
use commitgrid_calendar::{DAYS_PER_WEEK, weekday_row};
use serde::Serialize;

use crate::entry::ScheduleEntry;

/// Seven schedule cells indexed by weekday, Sunday at index 0.
///
/// The fixed-size array makes the length invariant a property of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Week([ScheduleEntry; DAYS_PER_WEEK]);

impl Week {
    /// Creates a week from its cells in Sunday..Saturday order.
    pub fn new(entries: [ScheduleEntry; DAYS_PER_WEEK]) -> Self {
        Self(entries)
    }

    /// A week in which every day is inside the range.
    pub fn full() -> Self {
        Self([ScheduleEntry::Empty; DAYS_PER_WEEK])
    }

    /// Combines the padding of two weeks describing the same calendar week.
    ///
    /// A cell is [`ScheduleEntry::NotAField`] if it is padding in either
    /// input; otherwise the cell from `first` is kept.
    pub fn merge(first: Week, last: Week) -> Self {
        let mut entries = first.0;
        for (entry, other) in entries.iter_mut().zip(last.0) {
            if !other.is_real() {
                *entry = ScheduleEntry::NotAField;
            }
        }
        Self(entries)
    }

    /// Returns the cells in Sunday..Saturday order.
    pub fn entries(&self) -> &[ScheduleEntry; DAYS_PER_WEEK] {
        &self.0
    }

    /// Iterates the cells in Sunday..Saturday order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.0.iter()
    }

    /// Number of cells that are days inside the range.
    pub fn real_days(&self) -> usize {
        self.0.iter().filter(|e| e.is_real()).count()
    }

    /// Number of padding cells before the first real day.
    ///
    /// A week with no real days is all leading padding.
    pub fn leading_padding(&self) -> usize {
        self.0.iter().take_while(|e| !e.is_real()).count()
    }

    /// Number of padding cells after the last real day.
    ///
    /// A week with no real days is all trailing padding.
    pub fn trailing_padding(&self) -> usize {
        self.0.iter().rev().take_while(|e| !e.is_real()).count()
    }
}

impl Default for Week {
    fn default() -> Self {
        Self::full()
    }
}

impl Index<usize> for Week {
    type Output = ScheduleEntry;

    fn index(&self, row: usize) -> &ScheduleEntry {
        &self.0[row]
    }
}

impl Index<Weekday> for Week {
    type Output = ScheduleEntry;

    fn index(&self, weekday: Weekday) -> &ScheduleEntry {
        &self.0[weekday_row(weekday)]
    }
}

impl<'a> IntoIterator for &'a Week {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds the first week of a range that starts on `start`.
///
/// Rows before `start` are [`ScheduleEntry::NotAField`]; rows from `start`
/// through Saturday are [`ScheduleEntry::Empty`].
///
/// ```
/// use chrono::Weekday;
/// use commitgrid_schedule::{ScheduleEntry::{Empty, NotAField}, first_week};
///
/// let week = first_week(Weekday::Wed);
/// assert_eq!(
///     week.entries(),
///     &[NotAField, NotAField, NotAField, Empty, Empty, Empty, Empty]
/// );
/// ```
pub fn first_week(start: Weekday) -> Week {
    let start_row = weekday_row(start);
    let mut entries = [ScheduleEntry::Empty; DAYS_PER_WEEK];
    for entry in &mut entries[..start_row] {
        *entry = ScheduleEntry::NotAField;
    }
    Week(entries)
}

/// Builds the last week of a range that ends on `end`.
///
/// Rows from Sunday through `end` are [`ScheduleEntry::Empty`]; rows after
/// `end` are [`ScheduleEntry::NotAField`].
pub fn last_week(end: Weekday) -> Week {
    let end_row = weekday_row(end);
    let mut entries = [ScheduleEntry::Empty; DAYS_PER_WEEK];
    for entry in &mut entries[end_row + 1..] {
        *entry = ScheduleEntry::NotAField;
    }
    Week(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ScheduleEntry::{Empty, NotAField};
    use commitgrid_calendar::WEEKDAYS;

    const N: ScheduleEntry = NotAField;
    const E: ScheduleEntry = Empty;

    #[test]
    fn first_week_table() {
        let expected = [
            (Weekday::Sun, [E, E, E, E, E, E, E]),
            (Weekday::Mon, [N, E, E, E, E, E, E]),
            (Weekday::Tue, [N, N, E, E, E, E, E]),
            (Weekday::Wed, [N, N, N, E, E, E, E]),
            (Weekday::Thu, [N, N, N, N, E, E, E]),
            (Weekday::Fri, [N, N, N, N, N, E, E]),
            (Weekday::Sat, [N, N, N, N, N, N, E]),
        ];
        for (day, entries) in expected {
            assert_eq!(first_week(day), Week::new(entries), "from {day}");
        }
    }

    #[test]
    fn last_week_table() {
        let expected = [
            (Weekday::Sun, [E, N, N, N, N, N, N]),
            (Weekday::Mon, [E, E, N, N, N, N, N]),
            (Weekday::Tue, [E, E, E, N, N, N, N]),
            (Weekday::Wed, [E, E, E, E, N, N, N]),
            (Weekday::Thu, [E, E, E, E, E, N, N]),
            (Weekday::Fri, [E, E, E, E, E, E, N]),
            (Weekday::Sat, [E, E, E, E, E, E, E]),
        ];
        for (day, entries) in expected {
            assert_eq!(last_week(day), Week::new(entries), "to {day}");
        }
    }

    #[test]
    fn padding_counts() {
        for (row, day) in WEEKDAYS.into_iter().enumerate() {
            let first = first_week(day);
            assert_eq!(first.leading_padding(), row);
            assert_eq!(first.trailing_padding(), 0);
            assert_eq!(first.real_days(), 7 - row);

            let last = last_week(day);
            assert_eq!(last.leading_padding(), 0);
            assert_eq!(last.trailing_padding(), 6 - row);
            assert_eq!(last.real_days(), row + 1);
        }
    }

    #[test]
    fn merge_keeps_both_paddings() {
        let merged = Week::merge(first_week(Weekday::Mon), last_week(Weekday::Thu));
        assert_eq!(
            merged.entries(),
            &[NotAField, Empty, Empty, Empty, Empty, NotAField, NotAField]
        );
    }

    #[test]
    fn merge_single_day() {
        let merged = Week::merge(first_week(Weekday::Fri), last_week(Weekday::Fri));
        assert_eq!(merged.real_days(), 1);
        assert_eq!(merged[Weekday::Fri], Empty);
    }

    #[test]
    fn merge_keeps_counts_from_first() {
        let mut entries = [Empty; DAYS_PER_WEEK];
        entries[2] = ScheduleEntry::Count(5);
        let merged = Week::merge(Week::new(entries), last_week(Weekday::Tue));
        assert_eq!(merged[2], ScheduleEntry::Count(5));
        assert_eq!(merged[3], NotAField);
    }

    #[test]
    fn index_by_weekday_matches_row() {
        let week = first_week(Weekday::Thu);
        assert_eq!(week[Weekday::Wed], NotAField);
        assert_eq!(week[Weekday::Thu], Empty);
        assert_eq!(week[Weekday::Sun], week[0]);
    }

    #[test]
    fn full_week_has_no_padding() {
        let week = Week::default();
        assert_eq!(week.real_days(), 7);
        assert_eq!(week.leading_padding(), 0);
        assert_eq!(week.trailing_padding(), 0);
    }

    #[test]
    fn all_padding_week() {
        let week = Week::new([NotAField; DAYS_PER_WEEK]);
        assert_eq!(week.real_days(), 0);
        assert_eq!(week.leading_padding(), 7);
        assert_eq!(week.trailing_padding(), 7);
    }
}
