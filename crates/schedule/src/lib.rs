//! Week-aligned contribution calendar grids.
//!
//! Turns an ordered, contiguous run of calendar days into the familiar
//! activity heatmap layout: one column per week, one row per weekday
//! (Sunday on top), earliest day in the top-left corner. Cells outside the
//! range are [`ScheduleEntry::NotAField`] so that every week has seven cells.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use commitgrid_calendar::day_sequence;
//! use commitgrid_schedule::{ScheduleEntry, build_commit_schedule};
//!
//! // Wednesday 2015-11-11 through Thursday 2015-11-19.
//! let start = NaiveDate::from_ymd_opt(2015, 11, 11).unwrap();
//! let days = day_sequence(start, 9).unwrap();
//!
//! let schedule = build_commit_schedule(&days).unwrap();
//! assert_eq!(schedule.len(), 2);
//! assert_eq!(schedule.cell_count(), 14);
//! assert_eq!(schedule.day_count(), 9);
//! assert_eq!(schedule.weeks()[0][0], ScheduleEntry::NotAField);
//! ```
//!
//! # Architecture
//!
//! ```text
//! build_commit_schedule_with()
//!   ├─ ScheduleConfig::validate()   (config.rs)
//!   ├─ check_contiguous()           (commitgrid-calendar)
//!   │    or, when disabled, a first..=last span check
//!   ├─ first_week()                 (week.rs)
//!   ├─ last_week()                  (week.rs)
//!   └─ connect_weeks_to_schedule()  (assemble.rs)
//!        ├─ single merged week, or
//!        └─ first + full weeks + last
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod schedule;
pub mod week;

pub(crate) mod assemble;
pub(crate) mod build;

pub use assemble::connect_weeks_to_schedule;
pub use build::{
    build_commit_schedule, build_commit_schedule_with, build_schedule_for_range,
    build_schedule_for_range_with,
};
pub use config::ScheduleConfig;
pub use entry::ScheduleEntry;
pub use error::ScheduleError;
pub use schedule::Schedule;
pub use week::{Week, first_week, last_week};
