//! Integration tests for the Nightly Charge Engine.
//!
//! This test suite covers the end-to-end calculation scenarios:
//! - Reference charges under the default rate schedule
//! - Rejection of shifts violating each overnight cycle rule
//! - Midnight-bedtime acceptance regardless of start time
//! - Alternate rate schedules, including one loaded from YAML
//! - Bucketing invariants checked property-style

use chrono::{NaiveTime, Timelike};
use proptest::prelude::*;

use sitter_engine::calculation::{
    calculate_nightly_charge, calculate_total_charge, hours_after_midnight, hours_before_midnight,
    round_up_hour, validate_shift,
};
use sitter_engine::config::{RateSchedule, RateScheduleLoader};
use sitter_engine::error::{EngineError, InvalidShiftError};
use sitter_engine::models::NightShift;

// =============================================================================
// Test Helpers
// =============================================================================

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn shift(start: NaiveTime, bed: NaiveTime, end: NaiveTime) -> NightShift {
    NightShift {
        start_time: start,
        bed_time: bed,
        end_time: end,
    }
}

fn charge(start: NaiveTime, bed: NaiveTime, end: NaiveTime) -> Result<u32, EngineError> {
    calculate_total_charge(&shift(start, bed, end), &RateSchedule::default())
}

/// The rounded-up hour span of a whole shift, computed without the
/// per-segment bucketing functions.
fn rounded_up_span(s: &NightShift) -> u32 {
    if s.ends_after_midnight() {
        hours_before_midnight(s.start_time) + hours_after_midnight(s.end_time)
    } else {
        round_up_hour(s.end_time) - s.start_time.hour()
    }
}

// =============================================================================
// Reference charges
// =============================================================================

#[test]
fn test_full_night_with_midnight_bedtime_charges_148() {
    assert_eq!(charge(time(17, 0), time(0, 0), time(4, 0)).unwrap(), 148);
}

#[test]
fn test_zero_length_shift_charges_0() {
    assert_eq!(charge(time(17, 0), time(17, 0), time(17, 0)).unwrap(), 0);
}

#[test]
fn test_evening_shift_with_partial_hours_charges_44() {
    assert_eq!(charge(time(20, 0), time(22, 15), time(23, 45)).unwrap(), 44);
}

#[test]
fn test_midnight_crossing_shift_charges_100() {
    assert_eq!(charge(time(19, 15), time(21, 30), time(2, 10)).unwrap(), 100);
}

#[test]
fn test_breakdown_accounts_for_every_dollar() {
    let result = calculate_nightly_charge(
        &shift(time(19, 15), time(21, 30), time(2, 10)),
        &RateSchedule::default(),
    )
    .unwrap();

    assert_eq!(
        result.total_charge,
        result.pre_bedtime_amount + result.post_bedtime_amount + result.post_midnight_amount
    );
}

// =============================================================================
// Rejections, one per rule
// =============================================================================

#[test]
fn test_start_before_5pm_rejected_with_reason() {
    let err = charge(time(16, 59), time(21, 0), time(23, 0)).unwrap_err();
    assert!(err.to_string().contains("start time is before 5pm"));
}

#[test]
fn test_end_after_4am_rejected_with_reason() {
    for end in [time(4, 10), time(5, 0), time(11, 0), time(16, 0)] {
        let err = charge(time(17, 0), time(21, 0), end).unwrap_err();
        assert!(
            err.to_string().contains("end time is after 4am"),
            "end {end}: {err}"
        );
    }
}

#[test]
fn test_bedtime_after_midnight_rejected_with_reason() {
    let err = charge(time(17, 0), time(0, 15), time(2, 0)).unwrap_err();
    assert!(err.to_string().contains("bed time is after midnight"));
}

#[test]
fn test_bedtime_before_start_rejected_with_reason() {
    let err = charge(time(18, 0), time(17, 15), time(23, 0)).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidShift(InvalidShiftError::BedTimeBeforeStart {
            bed_time: time(17, 15),
            start_time: time(18, 0),
        })
    );
}

#[test]
fn test_end_before_bedtime_rejected_with_reason() {
    let err = charge(time(18, 0), time(20, 0), time(19, 0)).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidShift(InvalidShiftError::EndBeforeBedTime {
            end_time: time(19, 0),
            bed_time: time(20, 0),
        })
    );
}

#[test]
fn test_each_rule_produces_a_distinct_message() {
    let rejected = [
        charge(time(12, 0), time(21, 0), time(23, 0)).unwrap_err(),
        charge(time(17, 0), time(21, 0), time(5, 0)).unwrap_err(),
        charge(time(17, 0), time(2, 0), time(4, 0)).unwrap_err(),
        charge(time(18, 0), time(17, 15), time(23, 0)).unwrap_err(),
        charge(time(18, 0), time(20, 0), time(19, 0)).unwrap_err(),
    ];

    let messages: Vec<String> = rejected.iter().map(|e| e.to_string()).collect();
    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================================
// Midnight bedtime
// =============================================================================

#[test]
fn test_midnight_bedtime_valid_for_any_evening_start() {
    for start_hour in 17..=23 {
        let result = charge(time(start_hour, 0), time(0, 0), time(1, 0));
        assert!(result.is_ok(), "start {start_hour}:00");
    }
}

#[test]
fn test_midnight_bedtime_bills_whole_evening_at_pre_bedtime_rate() {
    let result = calculate_nightly_charge(
        &shift(time(17, 0), time(0, 0), time(1, 0)),
        &RateSchedule::default(),
    )
    .unwrap();

    assert_eq!(result.pre_bedtime_hours, 7);
    assert_eq!(result.post_bedtime_hours, 0);
    assert_eq!(result.post_midnight_hours, 1);
    assert_eq!(result.total_charge, 100);
}

// =============================================================================
// Rate schedules
// =============================================================================

#[test]
fn test_schedule_loaded_from_yaml_matches_default() {
    let loader = RateScheduleLoader::load("./config/rates.yaml").unwrap();
    let s = shift(time(19, 15), time(21, 30), time(2, 10));

    let from_file = calculate_total_charge(&s, loader.schedule()).unwrap();
    let from_default = calculate_total_charge(&s, &RateSchedule::default()).unwrap();
    assert_eq!(from_file, from_default);
}

#[test]
fn test_alternate_schedule_changes_totals() {
    let doubled = RateSchedule {
        pre_bedtime: 24,
        post_bedtime: 16,
        post_midnight: 32,
    };
    let s = shift(time(17, 0), time(0, 0), time(4, 0));
    assert_eq!(calculate_total_charge(&s, &doubled).unwrap(), 296);
}

#[test]
fn test_repeated_calls_yield_identical_output() {
    let s = shift(time(20, 0), time(22, 15), time(23, 45));
    let rates = RateSchedule::default();
    let first = calculate_total_charge(&s, &rates).unwrap();
    for _ in 0..10 {
        assert_eq!(calculate_total_charge(&s, &rates).unwrap(), first);
    }
}

// =============================================================================
// Properties
// =============================================================================

fn evening_or_midnight() -> impl Strategy<Value = NaiveTime> {
    prop_oneof![
        Just(NaiveTime::MIN),
        (17u32..24, 0u32..60, 0u32..60)
            .prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap()),
    ]
}

fn night_end() -> impl Strategy<Value = NaiveTime> {
    prop_oneof![
        Just(time(4, 0)),
        (0u32..4, 0u32..60, 0u32..60)
            .prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap()),
        (17u32..24, 0u32..60, 0u32..60)
            .prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap()),
    ]
}

prop_compose! {
    fn valid_shift()(
        start in evening_or_midnight(),
        bed in evening_or_midnight(),
        end in night_end(),
    ) -> Option<NightShift> {
        let candidate = NightShift {
            start_time: start,
            bed_time: bed,
            end_time: end,
        };
        validate_shift(&candidate).ok().map(|_| candidate)
    }
}

proptest! {
    #[test]
    fn prop_bucket_hours_sum_to_shift_span(candidate in valid_shift()) {
        prop_assume!(candidate.is_some());
        let s = candidate.unwrap();

        let result = calculate_nightly_charge(&s, &RateSchedule::default()).unwrap();
        let bucket_sum =
            result.pre_bedtime_hours + result.post_bedtime_hours + result.post_midnight_hours;
        prop_assert_eq!(bucket_sum, rounded_up_span(&s));
    }

    #[test]
    fn prop_flat_schedule_prices_span_directly(candidate in valid_shift(), rate in 1u32..100) {
        prop_assume!(candidate.is_some());
        let s = candidate.unwrap();

        let flat = RateSchedule {
            pre_bedtime: rate,
            post_bedtime: rate,
            post_midnight: rate,
        };
        let total = calculate_total_charge(&s, &flat).unwrap();
        prop_assert_eq!(total, rounded_up_span(&s) * rate);
    }

    #[test]
    fn prop_valid_shift_never_fails_arithmetic(candidate in valid_shift()) {
        prop_assume!(candidate.is_some());
        let s = candidate.unwrap();
        prop_assert!(calculate_nightly_charge(&s, &RateSchedule::default()).is_ok());
    }
}
