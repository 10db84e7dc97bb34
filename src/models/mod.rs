//! Core data models for the Nightly Charge Engine.
//!
//! This module contains the domain models used throughout the engine.

mod shift;

pub use shift::NightShift;
