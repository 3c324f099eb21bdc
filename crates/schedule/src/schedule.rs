//! The assembled week-by-weekday grid.

use chrono::Weekday;
use commitgrid_calendar::{DAYS_PER_WEEK, WEEKDAYS};
use serde::Serialize;

use crate::entry::ScheduleEntry;
use crate::week::Week;

/// A rectangular grid of weeks, earliest week first.
///
/// Columns are weeks and rows are weekdays (Sunday = row 0). A schedule is
/// built once by [`connect_weeks_to_schedule`](crate::connect_weeks_to_schedule)
/// or [`build_commit_schedule`](crate::build_commit_schedule) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    weeks: Vec<Week>,
}

impl Schedule {
    pub(crate) fn from_weeks(weeks: Vec<Week>) -> Self {
        Self { weeks }
    }

    /// Returns the weeks in chronological order.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Number of weeks (grid columns).
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Returns `true` if the schedule has no weeks.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Iterates the weeks in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Week> {
        self.weeks.iter()
    }

    /// Returns the cell at column `week`, row `weekday`.
    pub fn get(&self, week: usize, weekday: Weekday) -> Option<ScheduleEntry> {
        self.weeks.get(week).map(|w| w[weekday])
    }

    /// Total number of cells, padding included.
    pub fn cell_count(&self) -> usize {
        self.weeks.len() * DAYS_PER_WEEK
    }

    /// Number of cells that are days inside the range.
    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(Week::real_days).sum()
    }

    /// Iterates the real days in chronological order as
    /// `(week, weekday, entry)`.
    pub fn days(&self) -> impl Iterator<Item = (usize, Weekday, ScheduleEntry)> + '_ {
        self.weeks.iter().enumerate().flat_map(|(column, week)| {
            WEEKDAYS
                .into_iter()
                .zip(week.iter().copied())
                .filter(|(_, entry)| entry.is_real())
                .map(move |(weekday, entry)| (column, weekday, entry))
        })
    }

    /// Returns the cell holding the day `offset` days after the first day of
    /// the range, or `None` if that day is past the end of the range.
    pub fn position_of(&self, offset: usize) -> Option<(usize, Weekday)> {
        let first = self.weeks.first()?;
        let index = first.leading_padding().checked_add(offset)?;
        let (column, row) = (index / DAYS_PER_WEEK, index % DAYS_PER_WEEK);
        let week = self.weeks.get(column)?;
        week[row].is_real().then_some((column, WEEKDAYS[row]))
    }

    /// Consumes the schedule, returning its weeks.
    pub fn into_weeks(self) -> Vec<Week> {
        self.weeks
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Week;
    type IntoIter = std::slice::Iter<'a, Week>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ScheduleEntry::{Empty, NotAField};
    use crate::week::{first_week, last_week};

    fn wed_to_thu() -> Schedule {
        Schedule::from_weeks(vec![first_week(Weekday::Wed), last_week(Weekday::Thu)])
    }

    #[test]
    fn counts() {
        let schedule = wed_to_thu();
        assert_eq!(schedule.len(), 2);
        assert!(!schedule.is_empty());
        assert_eq!(schedule.cell_count(), 14);
        assert_eq!(schedule.day_count(), 9);
    }

    #[test]
    fn get_cells() {
        let schedule = wed_to_thu();
        assert_eq!(schedule.get(0, Weekday::Tue), Some(NotAField));
        assert_eq!(schedule.get(0, Weekday::Wed), Some(Empty));
        assert_eq!(schedule.get(1, Weekday::Fri), Some(NotAField));
        assert_eq!(schedule.get(2, Weekday::Sun), None);
    }

    #[test]
    fn days_are_chronological() {
        let schedule = wed_to_thu();
        let days: Vec<_> = schedule.days().map(|(w, d, _)| (w, d)).collect();
        assert_eq!(days.len(), 9);
        assert_eq!(days[0], (0, Weekday::Wed));
        assert_eq!(days[3], (0, Weekday::Sat));
        assert_eq!(days[4], (1, Weekday::Sun));
        assert_eq!(days[8], (1, Weekday::Thu));
    }

    #[test]
    fn position_of_matches_days() {
        let schedule = wed_to_thu();
        for (offset, (week, weekday, _)) in schedule.days().enumerate() {
            assert_eq!(schedule.position_of(offset), Some((week, weekday)));
        }
        assert_eq!(schedule.position_of(9), None);
        assert_eq!(schedule.position_of(usize::MAX), None);
    }

    #[test]
    fn empty_schedule() {
        let schedule = Schedule::from_weeks(Vec::new());
        assert!(schedule.is_empty());
        assert_eq!(schedule.cell_count(), 0);
        assert_eq!(schedule.position_of(0), None);
        assert_eq!(schedule.days().count(), 0);
    }

    #[test]
    fn into_weeks_round_trip() {
        let schedule = wed_to_thu();
        let weeks = schedule.clone().into_weeks();
        assert_eq!(weeks.as_slice(), schedule.weeks());
        assert_eq!((&schedule).into_iter().count(), 2);
    }
}
