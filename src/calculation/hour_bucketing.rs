//! Hour bucketing logic.
//!
//! This module decomposes a validated shift into the three billed segments
//! (pre-bedtime, bedtime-to-midnight, post-midnight) as whole hour counts.
//! Billing is by the clock hour: any interval touching any part of a clock
//! hour counts as one full hour of it, so every partial hour rounds up.
//!
//! The hour containing bedtime is attributed to the pre-bedtime bucket, not
//! the post-bedtime bucket. This tie-break is part of the charging policy.
//!
//! All functions here assume their inputs come from a shift that passed
//! [`validate_shift`](super::validate_shift); for arbitrary times the
//! subtractions below can underflow.

use chrono::{NaiveTime, Timelike};

/// Returns the hour of `t`, rounded up when `t` has any sub-hour remainder.
///
/// A time exactly on the hour maps to its own hour; one nanosecond later it
/// maps to the next hour (so 22:00 → 22 but 22:15 → 23). Used by every
/// bucketing function below.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::round_up_hour;
/// use chrono::NaiveTime;
///
/// assert_eq!(round_up_hour(NaiveTime::from_hms_opt(22, 0, 0).unwrap()), 22);
/// assert_eq!(round_up_hour(NaiveTime::from_hms_opt(22, 15, 0).unwrap()), 23);
/// assert_eq!(round_up_hour(NaiveTime::from_hms_opt(23, 45, 0).unwrap()), 24);
/// ```
pub fn round_up_hour(t: NaiveTime) -> u32 {
    if t.minute() > 0 || t.second() > 0 || t.nanosecond() > 0 {
        t.hour() + 1
    } else {
        t.hour()
    }
}

/// Hours from the start time to midnight.
///
/// Returns 0 for a start of exactly midnight (nothing of the evening
/// remains); otherwise `24 - start.hour`. The start minute is irrelevant:
/// a 19:55 start already occupies the 19-o'clock hour.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::hours_before_midnight;
/// use chrono::NaiveTime;
///
/// assert_eq!(hours_before_midnight(NaiveTime::from_hms_opt(17, 0, 0).unwrap()), 7);
/// assert_eq!(hours_before_midnight(NaiveTime::from_hms_opt(23, 59, 0).unwrap()), 1);
/// assert_eq!(hours_before_midnight(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), 0);
/// ```
pub fn hours_before_midnight(start_time: NaiveTime) -> u32 {
    if start_time.hour() == 0 {
        0
    } else {
        24 - start_time.hour()
    }
}

/// Hours worked after midnight, based on the end time.
///
/// Returns 0 when the end time is an evening time (hour above 4) or exactly
/// midnight. Otherwise the end hour, rounded up when the end time has a
/// sub-hour remainder.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::hours_after_midnight;
/// use chrono::NaiveTime;
///
/// assert_eq!(hours_after_midnight(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), 0);
/// assert_eq!(hours_after_midnight(NaiveTime::from_hms_opt(2, 10, 0).unwrap()), 3);
/// assert_eq!(hours_after_midnight(NaiveTime::from_hms_opt(4, 0, 0).unwrap()), 4);
/// assert_eq!(hours_after_midnight(NaiveTime::from_hms_opt(23, 0, 0).unwrap()), 0);
/// ```
pub fn hours_after_midnight(end_time: NaiveTime) -> u32 {
    if end_time.hour() > 4 {
        0
    } else {
        round_up_hour(end_time)
    }
}

/// Hours from the start time to bedtime, rounded up.
///
/// Returns 0 when bedtime equals the start time. A bedtime of exactly
/// midnight yields the full evening (`24 - start.hour`); otherwise the
/// rounded-up bedtime hour minus the start hour, so the hour containing
/// bedtime bills at the pre-bedtime rate.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::hours_pre_bedtime;
/// use chrono::NaiveTime;
///
/// let start = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
/// let bed = NaiveTime::from_hms_opt(22, 15, 0).unwrap();
/// assert_eq!(hours_pre_bedtime(start, bed), 3);
/// ```
pub fn hours_pre_bedtime(start_time: NaiveTime, bed_time: NaiveTime) -> u32 {
    if bed_time == start_time {
        0
    } else if bed_time == NaiveTime::MIN {
        24 - start_time.hour()
    } else {
        round_up_hour(bed_time) - start_time.hour()
    }
}

/// Hours from bedtime to midnight or the end time, whichever comes first,
/// rounded up.
///
/// Computed as a remainder so that the hour straddling bedtime stays in the
/// pre-bedtime bucket: for a post-midnight end this is the whole evening
/// minus the pre-bedtime hours, and for an evening end it is the rounded-up
/// shift span minus the pre-bedtime hours.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::hours_post_bedtime;
/// use chrono::NaiveTime;
///
/// let start = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
/// let bed = NaiveTime::from_hms_opt(22, 15, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(23, 45, 0).unwrap();
/// assert_eq!(hours_post_bedtime(start, bed, end), 1);
/// ```
pub fn hours_post_bedtime(start_time: NaiveTime, bed_time: NaiveTime, end_time: NaiveTime) -> u32 {
    let pre_bedtime = hours_pre_bedtime(start_time, bed_time);
    if end_time.hour() <= 4 {
        hours_before_midnight(start_time) - pre_bedtime
    } else {
        round_up_hour(end_time) - start_time.hour() - pre_bedtime
    }
}
