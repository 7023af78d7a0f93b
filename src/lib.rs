/*
 * Boid Flocking Simulation Core - Module Definitions
 *
 * This file defines the module structure for the boid simulation crate.
 * The crate is a pure in-memory simulation core: rendering, host-app
 * lifecycle, and UI are external collaborators that consume the accessor
 * API on Simulation.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use boundary::{Margins, MARGIN_FACTOR};
pub use error::ConfigError;
pub use params::{ExecutionMode, SimulationParams, TimeStep};
pub use simulation::{Simulation, Simulation2D, Simulation3D};
pub use vector::{clamp_speed, distance, SimVector};

// Re-export the vector types used by the two dimensionality variants
pub use glam::{Vec2, Vec3};

// Define modules
pub mod boid;
pub mod boundary;
pub mod error;
pub mod params;
pub mod physics;
pub mod rules;
pub mod simulation;
pub mod vector;
