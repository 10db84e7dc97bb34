//! Nightly Charge Engine for overnight babysitting shifts
//!
//! This crate validates a night's shift times (start, bedtime, end) against the
//! overnight cycle rules and calculates the charge under a tiered hourly-rate
//! schedule: one rate before bedtime, one from bedtime to midnight, and one
//! after midnight, with every partial hour billed as a full hour.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
