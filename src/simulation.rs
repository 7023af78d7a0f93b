/*
 * Simulation Module
 *
 * This module defines the Simulation struct that owns the boid array and
 * the per-boid centroid buffer, and exposes the public stepping and
 * read-accessor API. The struct is a plain value owned by the caller;
 * there is no global simulation state.
 */

use glam::{Vec2, Vec3};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::boid::Boid;
use crate::error::ConfigError;
use crate::params::SimulationParams;
use crate::physics;
use crate::vector::SimVector;

pub type Simulation2D = Simulation<Vec2>;
pub type Simulation3D = Simulation<Vec3>;

pub struct Simulation<V: SimVector> {
    pub(crate) params: SimulationParams<V>,
    pub(crate) boids: Vec<Boid<V>>,
    // Most recent cohesion centroid per boid, for visualization. Slots
    // keep their last written value across ticks without neighbors.
    pub(crate) centroids: Vec<V>,
}

impl<V: SimVector> Simulation<V> {
    // Create a simulation with num_boids randomized agents. The seed is
    // passed explicitly so runs are reproducible.
    pub fn new(
        params: SimulationParams<V>,
        num_boids: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let boids = (0..num_boids)
            .map(|_| Boid::spawn(&mut rng, params.extent, params.max_speed))
            .collect();

        info!("initialized {}D flock of {} boids (seed {})", V::DIM, num_boids, seed);

        Ok(Self {
            params,
            boids,
            centroids: vec![V::default(); num_boids],
        })
    }

    // Re-randomize positions and velocities in place, keeping the
    // population size and parameters.
    pub fn reset(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for boid in &mut self.boids {
            *boid = Boid::spawn(&mut rng, self.params.extent, self.params.max_speed);
        }
        for centroid in &mut self.centroids {
            *centroid = V::default();
        }
        info!("reset flock of {} boids (seed {})", self.boids.len(), seed);
    }

    // Advance the simulation by one tick. dt is the measured elapsed time
    // in seconds; it is ignored when the time step source is Fixed. A
    // zero-boid simulation steps as a legal no-op.
    pub fn step(&mut self, dt: f32) {
        physics::step(self, dt);
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn boids(&self) -> &[Boid<V>] {
        &self.boids
    }

    // Mutable access for hosts that place agents directly (e.g. tests or
    // scripted scenarios).
    pub fn boids_mut(&mut self) -> &mut [Boid<V>] {
        &mut self.boids
    }

    pub fn positions(&self) -> impl Iterator<Item = V> + '_ {
        self.boids.iter().map(|boid| boid.position)
    }

    pub fn velocities(&self) -> impl Iterator<Item = V> + '_ {
        self.boids.iter().map(|boid| boid.velocity)
    }

    pub fn centroids(&self) -> &[V] {
        &self.centroids
    }

    pub fn params(&self) -> &SimulationParams<V> {
        &self.params
    }

    // Parameter changes take effect at the start of the next tick. The
    // caller is responsible for keeping the set valid; use set_params
    // for bulk edits that should be revalidated.
    pub fn params_mut(&mut self) -> &mut SimulationParams<V> {
        &mut self.params
    }

    // Replace the whole parameter set, applying the same validation as
    // construction. On error the current parameters are kept.
    pub fn set_params(&mut self, params: SimulationParams<V>) -> Result<(), ConfigError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_degenerate_params() {
        let mut params = SimulationParams::<Vec2>::default();
        params.danger_range = 20.0;
        assert!(Simulation::new(params, 10, 0).is_err());
    }

    #[test]
    fn new_spawns_the_requested_population() {
        let sim = Simulation2D::new(SimulationParams::default(), 64, 1).unwrap();
        assert_eq!(sim.len(), 64);
        assert_eq!(sim.positions().count(), 64);
        assert_eq!(sim.centroids().len(), 64);
    }

    #[test]
    fn set_params_revalidates_and_keeps_the_old_set_on_error() {
        let mut sim = Simulation2D::new(SimulationParams::default(), 4, 0).unwrap();

        let mut bad = SimulationParams::<Vec2>::default();
        bad.min_speed = -5.0;
        bad.max_speed = -1.0;
        assert!(sim.set_params(bad).is_err());
        assert_eq!(sim.params().min_speed, 5.0);

        let mut good = SimulationParams::<Vec2>::default();
        good.max_speed = 12.0;
        assert!(sim.set_params(good).is_ok());
        assert_eq!(sim.params().max_speed, 12.0);
    }

    #[test]
    fn reset_reproduces_the_same_state_for_the_same_seed() {
        let mut sim = Simulation3D::new(SimulationParams::default(), 32, 5).unwrap();
        let initial: Vec<_> = sim.boids().to_vec();

        sim.step(0.016);
        sim.reset(5);

        assert_eq!(sim.boids(), &initial[..]);
        assert!(sim.centroids().iter().all(|c| *c == glam::Vec3::ZERO));
    }
}
