/*
 * Neighborhood Rules Module
 *
 * This module implements the three flocking rules. Each rule scans the
 * full population (O(n^2) per tick across all boids), reads a frozen
 * snapshot of the previous tick's state, and mutates only the target
 * boid's velocity:
 * 1. Separation: repel from boids closer than danger_range
 * 2. Alignment: match the average velocity of boids in the sight band
 * 3. Cohesion: steer toward the average position of boids in the sight band
 *
 * Alignment and cohesion use the strict band danger_range < d < sight_range;
 * a neighbor at exactly danger_range or sight_range is excluded from every
 * rule, separating "too close" from "in sight".
 */

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::vector::{distance, SimVector};

// Sum the offsets away from every boid inside danger_range and push the
// velocity along that sum. Strength grows with both the neighbor count
// and their closeness.
pub fn separation<V: SimVector>(
    index: usize,
    snapshot: &[Boid<V>],
    boid: &mut Boid<V>,
    params: &SimulationParams<V>,
) {
    let mut close = V::default();

    for (i, other) in snapshot.iter().enumerate() {
        if i == index {
            continue;
        }
        if distance(boid.position, other.position) < params.danger_range {
            close += boid.position - other.position;
        }
    }

    boid.velocity += close * params.avoid_factor;
}

// Blend the velocity toward the average velocity of the boids in the
// sight band. No-op when no neighbor qualifies.
pub fn alignment<V: SimVector>(
    index: usize,
    snapshot: &[Boid<V>],
    boid: &mut Boid<V>,
    params: &SimulationParams<V>,
) {
    let mut vel_sum = V::default();
    let mut neighbors = 0u32;

    for (i, other) in snapshot.iter().enumerate() {
        if i == index {
            continue;
        }
        let d = distance(boid.position, other.position);
        if d > params.danger_range && d < params.sight_range {
            vel_sum += other.velocity;
            neighbors += 1;
        }
    }

    if neighbors > 0 {
        let vel_avg = vel_sum / neighbors as f32;
        boid.velocity += (vel_avg - boid.velocity) * params.matching_factor;
    }
}

// Blend the velocity toward the average position of the boids in the
// sight band, and record that average in the boid's centroid slot for
// visualization. When no neighbor qualifies the rule is a no-op and the
// centroid slot keeps the value from the last tick that had neighbors.
pub fn cohesion<V: SimVector>(
    index: usize,
    snapshot: &[Boid<V>],
    boid: &mut Boid<V>,
    centroid: &mut V,
    params: &SimulationParams<V>,
) {
    let mut pos_sum = V::default();
    let mut neighbors = 0u32;

    for (i, other) in snapshot.iter().enumerate() {
        if i == index {
            continue;
        }
        let d = distance(boid.position, other.position);
        if d > params.danger_range && d < params.sight_range {
            pos_sum += other.position;
            neighbors += 1;
        }
    }

    if neighbors > 0 {
        let pos_avg = pos_sum / neighbors as f32;
        *centroid = pos_avg;
        boid.velocity += (pos_avg - boid.position) * params.centering_factor;
    }
}
