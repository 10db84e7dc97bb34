//! Overnight cycle ordering.
//!
//! This module provides utilities for comparing times of day within the
//! overnight cycle that runs from 17:00 through midnight to 04:00. Within
//! that cycle, 00:00 through 04:00 rank *after* the evening hours, so plain
//! `NaiveTime` ordering gives wrong answers across the midnight boundary.
//! All cross-boundary comparisons in the engine go through [`night_cmp`].

use std::cmp::Ordering;

use chrono::{NaiveTime, Timelike};

/// 5:00 PM, the earliest evening time in the cycle.
pub(crate) fn five_pm() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).expect("valid time")
}

/// 4:00 AM, the latest early-morning time in the cycle.
pub(crate) fn four_am() -> NaiveTime {
    NaiveTime::from_hms_opt(4, 0, 0).expect("valid time")
}

/// Midnight, the boundary between the evening and early-morning windows.
pub(crate) fn midnight() -> NaiveTime {
    NaiveTime::MIN
}

/// Returns true when a time lies within the overnight cycle.
///
/// The cycle covers [17:00, 24:00) in the evening and [00:00, 04:00] in the
/// early morning. Times from 04:00:00.000000001 through 16:59:59.999… are
/// outside the cycle.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::in_night_window;
/// use chrono::NaiveTime;
///
/// assert!(in_night_window(NaiveTime::from_hms_opt(17, 0, 0).unwrap()));
/// assert!(in_night_window(NaiveTime::from_hms_opt(0, 0, 0).unwrap()));
/// assert!(in_night_window(NaiveTime::from_hms_opt(4, 0, 0).unwrap()));
/// assert!(!in_night_window(NaiveTime::from_hms_opt(4, 10, 0).unwrap()));
/// assert!(!in_night_window(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
/// ```
pub fn in_night_window(t: NaiveTime) -> bool {
    t >= five_pm() || t <= four_am()
}

/// Compares two times within the overnight cycle.
///
/// Evening times (17:00 onward) order among themselves chronologically and
/// rank before every early-morning time; early-morning times (00:00–04:00)
/// order among themselves chronologically. So 23:59 < 00:00 < 04:00 in this
/// ordering, even though plain time-of-day comparison says otherwise.
///
/// Both arguments must lie within the cycle (see [`in_night_window`]);
/// the result is meaningless for times outside it.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::night_cmp;
/// use chrono::NaiveTime;
/// use std::cmp::Ordering;
///
/// let eleven_pm = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
/// let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
/// let two_am = NaiveTime::from_hms_opt(2, 0, 0).unwrap();
///
/// assert_eq!(night_cmp(eleven_pm, midnight), Ordering::Less);
/// assert_eq!(night_cmp(two_am, midnight), Ordering::Greater);
/// assert_eq!(night_cmp(two_am, two_am), Ordering::Equal);
/// ```
pub fn night_cmp(a: NaiveTime, b: NaiveTime) -> Ordering {
    debug_assert!(in_night_window(a), "time outside night cycle: {a}");
    debug_assert!(in_night_window(b), "time outside night cycle: {b}");
    night_rank(a).cmp(&night_rank(b))
}

/// Nanoseconds elapsed since 17:00 within the cycle.
///
/// Early-morning times get a seven-hour offset so they rank after every
/// evening time.
fn night_rank(t: NaiveTime) -> i64 {
    let secs = i64::from(t.num_seconds_from_midnight());
    let base_secs = if t.hour() >= 17 {
        secs - 17 * 3600
    } else {
        7 * 3600 + secs
    };
    base_secs * 1_000_000_000 + i64::from(t.nanosecond())
}
