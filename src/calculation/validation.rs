//! Shift validation logic.
//!
//! This module checks a [`NightShift`] against the overnight cycle rules
//! before any charge is calculated:
//!
//! - The shift starts no earlier than 5:00 PM, or exactly at midnight.
//! - The shift ends no later than 4:00 AM, or during the evening.
//! - Bedtime is exactly midnight or during the evening, never after.
//! - Bedtime does not precede the start time.
//! - The end time does not precede bedtime.
//!
//! The last two rules use the overnight cycle ordering ([`night_cmp`]), so a
//! midnight bedtime is valid for any evening start and a post-midnight end
//! is valid for any evening bedtime.

use tracing::warn;

use crate::error::InvalidShiftError;
use crate::models::NightShift;

use super::night_order::{four_am, five_pm, midnight, night_cmp};

/// Validates a shift against the overnight cycle rules.
///
/// Checks run in the order listed in the module docs and report the first
/// violation; any single violated rule is sufficient to reject the shift.
///
/// # Arguments
///
/// * `shift` - The shift to validate
///
/// # Returns
///
/// `Ok(())` for a valid shift, or the [`InvalidShiftError`] variant naming
/// the violated rule.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::validate_shift;
/// use sitter_engine::models::NightShift;
/// use chrono::NaiveTime;
///
/// let shift = NightShift {
///     start_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     bed_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
/// };
/// assert!(validate_shift(&shift).is_ok());
///
/// let too_early = NightShift {
///     start_time: NaiveTime::from_hms_opt(16, 59, 0).unwrap(),
///     ..shift
/// };
/// assert!(validate_shift(&too_early).is_err());
/// ```
pub fn validate_shift(shift: &NightShift) -> Result<(), InvalidShiftError> {
    if let Err(err) = check_rules(shift) {
        warn!("rejected shift: {err}");
        return Err(err);
    }
    Ok(())
}

fn check_rules(shift: &NightShift) -> Result<(), InvalidShiftError> {
    let NightShift {
        start_time,
        bed_time,
        end_time,
    } = *shift;

    // Start must be in the evening, or exactly at midnight (the wraparound
    // "late start").
    if start_time != midnight() && start_time < five_pm() {
        return Err(InvalidShiftError::StartBeforeFivePm { start_time });
    }

    // End must be at or before 4 AM, or in the evening.
    if end_time > four_am() && end_time < five_pm() {
        return Err(InvalidShiftError::EndAfterFourAm { end_time });
    }

    // Bedtime is exactly midnight or in the evening; it never falls in the
    // early-morning window.
    if bed_time != midnight() && bed_time < five_pm() {
        return Err(InvalidShiftError::BedTimeAfterMidnight { bed_time });
    }

    // The remaining rules compare across the midnight boundary, where plain
    // time-of-day ordering is wrong: midnight ranks after any evening start,
    // and a post-midnight end ranks after any evening bedtime.
    if night_cmp(bed_time, start_time).is_lt() {
        return Err(InvalidShiftError::BedTimeBeforeStart {
            bed_time,
            start_time,
        });
    }

    if night_cmp(end_time, bed_time).is_lt() {
        return Err(InvalidShiftError::EndBeforeBedTime { end_time, bed_time });
    }

    Ok(())
}
