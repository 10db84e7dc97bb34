//! Night shift model.
//!
//! This module defines the NightShift struct representing one night's
//! babysitting engagement as a triple of wall-clock times.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// One night's babysitting engagement, bounded by start, bedtime, and end.
///
/// All three fields are wall-clock times of day with no date component.
/// They are interpreted within a single overnight cycle running from
/// 17:00 through midnight to 04:00, so an `end_time` of 02:00 means
/// 2 AM on the morning after `start_time`.
///
/// A `NightShift` carries no lifecycle: it is constructed fresh for each
/// calculation call and validated by
/// [`validate_shift`](crate::calculation::validate_shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightShift {
    /// The time at which babysitting begins.
    pub start_time: NaiveTime,
    /// The time when the children go to bed.
    pub bed_time: NaiveTime,
    /// The time when babysitting ends.
    pub end_time: NaiveTime,
}

impl NightShift {
    /// Returns true when the shift runs past midnight into the
    /// early-morning window.
    ///
    /// An end time of exactly 00:00 counts as running to the midnight
    /// boundary, which still places the end in the early-morning window
    /// (zero hours of it are billed).
    ///
    /// # Examples
    ///
    /// ```
    /// use sitter_engine::models::NightShift;
    /// use chrono::NaiveTime;
    ///
    /// let shift = NightShift {
    ///     start_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
    ///     bed_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
    /// };
    /// assert!(shift.ends_after_midnight());
    ///
    /// let evening_shift = NightShift {
    ///     end_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
    ///     ..shift
    /// };
    /// assert!(!evening_shift.ends_after_midnight());
    /// ```
    pub fn ends_after_midnight(&self) -> bool {
        self.end_time.hour() <= 4
    }
}
