//! Configuration for schedule construction.

use crate::error::ScheduleError;

/// Options for [`build_commit_schedule_with`](crate::build_commit_schedule_with).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use commitgrid_schedule::ScheduleConfig;
///
/// let config = ScheduleConfig::new()
///     .with_contiguity_check(false)
///     .with_max_days(371);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Reject inputs whose days skip, repeat or go backwards.
    check_contiguity: bool,
    /// Upper bound on the number of input days.
    max_days: Option<usize>,
}

impl ScheduleConfig {
    /// Creates a configuration with the defaults.
    ///
    /// Defaults: `check_contiguity = true`, `max_days = None`.
    pub fn new() -> Self {
        Self {
            check_contiguity: true,
            max_days: None,
        }
    }

    /// Enables or disables the contiguity check.
    pub fn with_contiguity_check(mut self, check: bool) -> Self {
        self.check_contiguity = check;
        self
    }

    /// Sets the maximum number of input days.
    pub fn with_max_days(mut self, max_days: usize) -> Self {
        self.max_days = Some(max_days);
        self
    }

    /// Returns whether the contiguity check is enabled.
    pub fn check_contiguity(&self) -> bool {
        self.check_contiguity
    }

    /// Returns the maximum number of input days, if any.
    pub fn max_days(&self) -> Option<usize> {
        self.max_days
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `max_days` is zero, since no non-empty input
    /// could satisfy it.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.max_days == Some(0) {
            return Err(ScheduleError::InvalidConfig {
                reason: "max_days must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::new()
    }
}
