//! Grid cell classification.

use serde::Serialize;

/// The content of one cell in a [`Schedule`](crate::Schedule).
///
/// Every cell is either padding that keeps the grid rectangular or a real
/// day inside the range. Real days carry an optional activity count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum ScheduleEntry {
    /// A cell outside the day range: before the first day or after the last.
    NotAField,
    /// A day inside the range with no recorded activity.
    #[default]
    Empty,
    /// A day inside the range with recorded activity.
    Count(u32),
}

impl ScheduleEntry {
    /// Returns `true` if this cell is a day inside the range.
    pub fn is_real(self) -> bool {
        !matches!(self, Self::NotAField)
    }

    /// Returns the activity count, `Some(0)` for [`Empty`](Self::Empty),
    /// or `None` for padding.
    pub fn count(self) -> Option<u32> {
        match self {
            Self::NotAField => None,
            Self::Empty => Some(0),
            Self::Count(n) => Some(n),
        }
    }
}
