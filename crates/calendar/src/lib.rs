//! # commitgrid-calendar
//!
//! Calendar plumbing for week-aligned activity grids.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate / DateTime"] -->|"CalendarDay::weekday()"| B["Weekday"]
//!     B -->|"weekday_row()"| C["row 0..=6 (Sunday first)"]
//!     C -->|"weekday_at_row()"| B
//!     A -->|"day_sequence()"| D["Vec of NaiveDate"]
//!     D -->|"check_contiguous()"| E["Ok / NonContiguous"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use commitgrid_calendar::{CalendarDay, check_contiguous, day_sequence, weekday_row};
//!
//! let start = NaiveDate::from_ymd_opt(2015, 11, 11).unwrap(); // a Wednesday
//! let days = day_sequence(start, 9).unwrap();
//! assert!(check_contiguous(&days).is_ok());
//! assert_eq!(days[0].weekday(), Weekday::Wed);
//! assert_eq!(weekday_row(Weekday::Wed), 3);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `weekday` | Sunday-first row order and conversions |
//! | `day` | The `CalendarDay` input trait |
//! | `sequence` | Contiguous day sequence generation |
//! | `contiguity` | Gap and ordering validation |
//! | `error` | Error types |

mod contiguity;
mod day;
mod error;
mod sequence;
mod weekday;

pub use contiguity::check_contiguous;
pub use day::CalendarDay;
pub use error::CalendarError;
pub use sequence::day_sequence;
pub use weekday::{DAYS_PER_WEEK, WEEKDAYS, weekday_at_row, weekday_row};
