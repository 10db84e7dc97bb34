//! Performance benchmarks for the Nightly Charge Engine.
//!
//! The whole calculation is a handful of integer operations, so these
//! benchmarks mostly guard against regressions from accidental allocation
//! or formatting in the hot path.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveTime;
use sitter_engine::calculation::{calculate_nightly_charge, validate_shift};
use sitter_engine::config::RateSchedule;
use sitter_engine::models::NightShift;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn full_night() -> NightShift {
    NightShift {
        start_time: time(17, 0),
        bed_time: time(0, 0),
        end_time: time(4, 0),
    }
}

fn partial_hours_night() -> NightShift {
    NightShift {
        start_time: time(19, 15),
        bed_time: time(21, 30),
        end_time: time(2, 10),
    }
}

fn bench_validation(c: &mut Criterion) {
    let shift = full_night();
    c.bench_function("validate_shift", |b| {
        b.iter(|| validate_shift(black_box(&shift)))
    });
}

fn bench_nightly_charge(c: &mut Criterion) {
    let rates = RateSchedule::default();

    let shift = full_night();
    c.bench_function("nightly_charge_full_night", |b| {
        b.iter(|| calculate_nightly_charge(black_box(&shift), black_box(&rates)))
    });

    let shift = partial_hours_night();
    c.bench_function("nightly_charge_partial_hours", |b| {
        b.iter(|| calculate_nightly_charge(black_box(&shift), black_box(&rates)))
    });
}

criterion_group!(benches, bench_validation, bench_nightly_charge);
criterion_main!(benches);
