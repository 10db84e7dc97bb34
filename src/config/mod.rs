//! Configuration loading and management for the Nightly Charge Engine.
//!
//! This module provides the rate schedule used to price each segment of a
//! night, with a built-in default matching the reference policy and a
//! loader for reading alternate schedules from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use sitter_engine::config::RateScheduleLoader;
//!
//! let loader = RateScheduleLoader::load("./config/rates.yaml").unwrap();
//! println!("Pre-bedtime rate: ${}/hour", loader.schedule().pre_bedtime);
//! ```

mod loader;
mod types;

pub use loader::RateScheduleLoader;
pub use types::RateSchedule;
