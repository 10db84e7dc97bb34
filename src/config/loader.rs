//! Configuration loading functionality.
//!
//! This module provides the [`RateScheduleLoader`] type for loading rate
//! schedules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateSchedule;

/// Loads and provides access to a rate schedule.
///
/// The `RateScheduleLoader` reads a YAML file declaring the three hourly
/// rates and exposes the parsed [`RateSchedule`].
///
/// # File Format
///
/// ```text
/// # config/rates.yaml
/// pre_bedtime: 12
/// post_bedtime: 8
/// post_midnight: 16
/// ```
///
/// # Example
///
/// ```no_run
/// use sitter_engine::config::RateScheduleLoader;
///
/// let loader = RateScheduleLoader::load("./config/rates.yaml").unwrap();
/// let schedule = loader.schedule();
/// println!("Post-midnight rate: ${}/hour", schedule.post_midnight);
/// ```
#[derive(Debug, Clone)]
pub struct RateScheduleLoader {
    schedule: RateSchedule,
}

impl RateScheduleLoader {
    /// Loads a rate schedule from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the schedule file (e.g., "./config/rates.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `RateScheduleLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or is missing a rate (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let schedule =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { schedule })
    }

    /// Returns the loaded rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }
}
