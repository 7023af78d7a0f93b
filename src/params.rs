/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the boid simulation. Every field is a runtime
 * input, shared read-only by the rule passes during a tick; the host may
 * change fields between ticks (margins are re-derived from the extent at
 * the start of every tick).
 */

use crate::error::ConfigError;
use crate::vector::SimVector;
use glam::{vec2, vec3, Vec2, Vec3};

// Where the integration time step comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeStep {
    // The caller passes measured elapsed seconds into step().
    Measured,
    // A constant 1 / sim_steps increment; the dt passed to step() is ignored.
    Fixed { sim_steps: u32 },
}

impl TimeStep {
    // Resolve the effective dt for one tick.
    pub fn delta(self, measured: f32) -> f32 {
        match self {
            TimeStep::Measured => measured,
            TimeStep::Fixed { sim_steps } => 1.0 / sim_steps as f32,
        }
    }
}

// How the per-agent work of a tick is executed. Both modes produce
// bit-identical trajectories: each agent reads the previous tick's
// snapshot and writes only its own slot, and the per-agent arithmetic
// order does not depend on scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Parallel,
}

// Parameters for the simulation that can be adjusted by the host
pub struct SimulationParams<V: SimVector> {
    // Environment
    pub extent: V,
    pub boid_radius: f32, // rendering-only; the math never reads it
    // Factors
    pub avoid_factor: f32,
    pub matching_factor: f32,
    pub centering_factor: f32,
    // Other boid variables
    pub turn_factor: f32,
    pub max_speed: f32,
    pub min_speed: f32,
    pub sight_range: f32,
    pub danger_range: f32,
    // Rules
    pub separation: bool,
    pub alignment: bool,
    pub cohesion: bool,
    // Execution settings
    pub time_step: TimeStep,
    pub execution: ExecutionMode,
}

impl<V: SimVector> SimulationParams<V> {
    pub fn with_extent(extent: V) -> Self {
        Self {
            extent,
            boid_radius: 0.1,
            avoid_factor: 0.03,
            matching_factor: 0.001,
            centering_factor: 0.003,
            turn_factor: 0.15,
            max_speed: 8.0,
            min_speed: 5.0,
            sight_range: 10.0,
            danger_range: 1.0,
            separation: true,
            alignment: true,
            cohesion: true,
            time_step: TimeStep::Fixed { sim_steps: 120 },
            execution: ExecutionMode::Parallel,
        }
    }

    // Reject parameter sets that would produce nonsensical flocking
    // behavior instead of letting them run silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Speeds are magnitudes; a negative bound would flip velocities
        // through the clamp's rescaling instead of clamping them.
        if self.min_speed < 0.0 || self.max_speed < 0.0 {
            return Err(ConfigError::NegativeSpeed {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if self.danger_range >= self.sight_range {
            return Err(ConfigError::RangeOrder {
                danger: self.danger_range,
                sight: self.sight_range,
            });
        }
        if let TimeStep::Fixed { sim_steps: 0 } = self.time_step {
            return Err(ConfigError::ZeroSimSteps);
        }
        Ok(())
    }
}

impl Default for SimulationParams<Vec2> {
    fn default() -> Self {
        Self::with_extent(vec2(95.0, 55.0))
    }
}

impl Default for SimulationParams<Vec3> {
    fn default() -> Self {
        Self::with_extent(vec3(95.0, 55.0, 80.0))
    }
}
