//! Error types for the Nightly Charge Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during charge calculation.

use chrono::NaiveTime;
use thiserror::Error;

/// The main error type for the Nightly Charge Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use sitter_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift violated one of the overnight cycle rules.
    #[error(transparent)]
    InvalidShift(#[from] InvalidShiftError),
}

/// A shift validation failure, one variant per violated rule.
///
/// Each variant has a distinct message so callers can assert on *why*
/// a shift was rejected, not just that it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidShiftError {
    /// The shift started before 5:00 PM (and not exactly at midnight).
    #[error("start time is before 5pm: {start_time}")]
    StartBeforeFivePm {
        /// The rejected start time.
        start_time: NaiveTime,
    },

    /// The shift ended after 4:00 AM but before the evening window.
    #[error("end time is after 4am: {end_time}")]
    EndAfterFourAm {
        /// The rejected end time.
        end_time: NaiveTime,
    },

    /// Bedtime fell after midnight (anywhere in the early-morning window).
    #[error("bed time is after midnight: {bed_time}")]
    BedTimeAfterMidnight {
        /// The rejected bedtime.
        bed_time: NaiveTime,
    },

    /// Bedtime fell before the start of the shift.
    #[error("bed time {bed_time} is before start time {start_time}")]
    BedTimeBeforeStart {
        /// The rejected bedtime.
        bed_time: NaiveTime,
        /// The shift's start time.
        start_time: NaiveTime,
    },

    /// The shift ended before bedtime.
    #[error("end time {end_time} is before bed time {bed_time}")]
    EndBeforeBedTime {
        /// The rejected end time.
        end_time: NaiveTime,
        /// The shift's bedtime.
        bed_time: NaiveTime,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
