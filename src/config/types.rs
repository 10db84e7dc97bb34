//! Configuration types for charge calculation.
//!
//! This module contains the strongly-typed rate schedule that can be
//! deserialized from a YAML configuration file.

use serde::Deserialize;

/// The hourly rates charged for each segment of a night, in whole dollars.
///
/// A schedule is injected into the calculation rather than read from
/// global state, so tests and callers can price shifts under alternate
/// schedules. [`RateSchedule::default`] returns the reference schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateSchedule {
    /// Dollars per hour from start time to bedtime.
    pub pre_bedtime: u32,
    /// Dollars per hour from bedtime to midnight.
    pub post_bedtime: u32,
    /// Dollars per hour from midnight to the end of the night.
    pub post_midnight: u32,
}

impl Default for RateSchedule {
    /// The reference schedule: $12 before bedtime, $8 from bedtime to
    /// midnight, $16 after midnight.
    fn default() -> Self {
        Self {
            pre_bedtime: 12,
            post_bedtime: 8,
            post_midnight: 16,
        }
    }
}
