//! Nightly charge calculation.
//!
//! This module prices a validated shift by decomposing it into its three
//! billed segments and charging each at its scheduled hourly rate.

use tracing::debug;

use crate::config::RateSchedule;
use crate::error::EngineResult;
use crate::models::NightShift;

use super::hour_bucketing::{
    hours_after_midnight, hours_post_bedtime, hours_pre_bedtime,
};

/// The result of a nightly charge calculation, with the per-segment
/// breakdown alongside the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightlyChargeResult {
    /// Billed hours from start time to bedtime.
    pub pre_bedtime_hours: u32,
    /// Billed hours from bedtime to midnight.
    pub post_bedtime_hours: u32,
    /// Billed hours from midnight to the end of the night.
    pub post_midnight_hours: u32,
    /// Dollars charged for the pre-bedtime segment.
    pub pre_bedtime_amount: u32,
    /// Dollars charged for the bedtime-to-midnight segment.
    pub post_bedtime_amount: u32,
    /// Dollars charged for the post-midnight segment.
    pub post_midnight_amount: u32,
    /// Total charge for the night, in dollars.
    pub total_charge: u32,
}

/// Calculates the charge for a night of babysitting, with a per-segment
/// breakdown.
///
/// This function:
/// 1. Validates the shift against the overnight cycle rules
/// 2. Buckets the shift into pre-bedtime, post-bedtime, and post-midnight
///    whole hours (partial hours round up)
/// 3. Prices each bucket at its scheduled rate and sums the total
///
/// The calculation is a pure function of its inputs: no state is read or
/// written, and repeated calls with the same inputs return the same result.
///
/// # Arguments
///
/// * `shift` - The shift to price
/// * `rates` - The hourly rate schedule to price it under
///
/// # Returns
///
/// Returns a `NightlyChargeResult` with the hour buckets, segment amounts,
/// and total, or an [`InvalidShiftError`](crate::error::InvalidShiftError)
/// when the shift violates a cycle rule. The arithmetic itself cannot fail
/// on a validated shift.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::calculate_nightly_charge;
/// use sitter_engine::config::RateSchedule;
/// use sitter_engine::models::NightShift;
/// use chrono::NaiveTime;
///
/// let shift = NightShift {
///     start_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     bed_time: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(4, 0, 0).unwrap(),
/// };
///
/// let result = calculate_nightly_charge(&shift, &RateSchedule::default()).unwrap();
/// assert_eq!(result.pre_bedtime_hours, 7);
/// assert_eq!(result.post_midnight_hours, 4);
/// assert_eq!(result.total_charge, 148);
/// ```
pub fn calculate_nightly_charge(
    shift: &NightShift,
    rates: &RateSchedule,
) -> EngineResult<NightlyChargeResult> {
    super::validate_shift(shift)?;

    let pre_bedtime_hours = hours_pre_bedtime(shift.start_time, shift.bed_time);
    let post_bedtime_hours = hours_post_bedtime(shift.start_time, shift.bed_time, shift.end_time);
    let post_midnight_hours = hours_after_midnight(shift.end_time);

    let pre_bedtime_amount = pre_bedtime_hours * rates.pre_bedtime;
    let post_bedtime_amount = post_bedtime_hours * rates.post_bedtime;
    let post_midnight_amount = post_midnight_hours * rates.post_midnight;
    let total_charge = pre_bedtime_amount + post_bedtime_amount + post_midnight_amount;

    debug!(
        "charged ${total_charge}: {pre_bedtime_hours}h pre-bedtime, \
         {post_bedtime_hours}h post-bedtime, {post_midnight_hours}h post-midnight"
    );

    Ok(NightlyChargeResult {
        pre_bedtime_hours,
        post_bedtime_hours,
        post_midnight_hours,
        pre_bedtime_amount,
        post_bedtime_amount,
        post_midnight_amount,
        total_charge,
    })
}

/// Calculates the total charge for a night of babysitting, in dollars.
///
/// Convenience wrapper over [`calculate_nightly_charge`] for callers that
/// only need the total.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::calculate_total_charge;
/// use sitter_engine::config::RateSchedule;
/// use sitter_engine::models::NightShift;
/// use chrono::NaiveTime;
///
/// let shift = NightShift {
///     start_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
///     bed_time: NaiveTime::from_hms_opt(22, 15, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(23, 45, 0).unwrap(),
/// };
///
/// let total = calculate_total_charge(&shift, &RateSchedule::default()).unwrap();
/// assert_eq!(total, 44);
/// ```
pub fn calculate_total_charge(shift: &NightShift, rates: &RateSchedule) -> EngineResult<u32> {
    Ok(calculate_nightly_charge(shift, rates)?.total_charge)
}
