/*
 * Boid Module
 *
 * This module defines the Boid struct: one agent's position and velocity.
 * Boids are created once at initialization with randomized state and are
 * never destroyed during a run; the population size is fixed.
 */

use crate::vector::SimVector;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Boid<V: SimVector> {
    pub position: V,
    pub velocity: V,
}

impl<V: SimVector> Boid<V> {
    pub fn new(position: V, velocity: V) -> Self {
        Self { position, velocity }
    }

    // Randomized initial state: position uniform inside the extent,
    // velocity uniform per axis in [-max_speed, +max_speed). The initial
    // speed is only bounded per axis; the first tick's speed clamp pulls
    // the magnitude into [min_speed, max_speed].
    pub fn spawn(rng: &mut impl Rng, extent: V, max_speed: f32) -> Self {
        Self {
            position: V::sample_uniform(rng, extent * 0.5),
            velocity: V::sample_uniform(rng, V::splat(max_speed)),
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{vec2, Vec2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_places_boids_inside_the_extent() {
        let mut rng = StdRng::seed_from_u64(42);
        let extent = vec2(95.0, 55.0);

        for _ in 0..200 {
            let boid = Boid::<Vec2>::spawn(&mut rng, extent, 8.0);
            assert!(boid.position.x.abs() <= extent.x / 2.0);
            assert!(boid.position.y.abs() <= extent.y / 2.0);
            assert!(boid.velocity.x.abs() <= 8.0);
            assert!(boid.velocity.y.abs() <= 8.0);
        }
    }

    #[test]
    fn spawn_is_deterministic_for_a_fixed_seed() {
        let extent = vec2(95.0, 55.0);
        let a = Boid::<Vec2>::spawn(&mut StdRng::seed_from_u64(7), extent, 8.0);
        let b = Boid::<Vec2>::spawn(&mut StdRng::seed_from_u64(7), extent, 8.0);
        assert_eq!(a, b);
    }
}
