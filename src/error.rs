/*
 * Error Module
 *
 * This module defines the error type returned when a simulation is
 * constructed from a degenerate parameter set. The per-tick math itself
 * is total over finite floats and has no failure modes.
 */

use std::fmt;

// Errors raised by parameter validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    // min_speed is greater than max_speed.
    SpeedRange { min: f32, max: f32 },
    // A speed bound below zero; speeds are magnitudes.
    NegativeSpeed { min: f32, max: f32 },
    // danger_range is not strictly below sight_range, which collapses
    // the alignment/cohesion band.
    RangeOrder { danger: f32, sight: f32 },
    // A fixed time step with zero steps per second.
    ZeroSimSteps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SpeedRange { min, max } => {
                write!(f, "min_speed {} exceeds max_speed {}", min, max)
            }
            ConfigError::NegativeSpeed { min, max } => {
                write!(
                    f,
                    "speed bounds must be non-negative, got min_speed {} and max_speed {}",
                    min, max
                )
            }
            ConfigError::RangeOrder { danger, sight } => {
                write!(
                    f,
                    "danger_range {} must be strictly below sight_range {}",
                    danger, sight
                )
            }
            ConfigError::ZeroSimSteps => {
                write!(f, "fixed time step requires at least one simulation step per second")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
