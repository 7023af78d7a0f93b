/*
 * Boundary Module
 *
 * This module keeps boids inside the configured extent with a soft
 * containment: a fixed-magnitude velocity nudge back toward the interior
 * on every axis whose position is outside the margin. Positions are never
 * clamped, and the nudge is not proportional to the overshoot, so boids
 * oscillate near the walls rather than converging smoothly.
 */

use crate::boid::Boid;
use crate::vector::SimVector;

// Margins sit at 45% of the extent on each side of the origin.
pub const MARGIN_FACTOR: f32 = 0.45;

// Per-axis containment bounds, re-derived from the extent every tick so
// that extent changes between ticks take effect immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins<V: SimVector> {
    pub upper: V,
    pub lower: V,
}

impl<V: SimVector> Margins<V> {
    pub fn from_extent(extent: V) -> Self {
        Self {
            upper: extent * MARGIN_FACTOR,
            lower: extent * -MARGIN_FACTOR,
        }
    }
}

// Nudge the velocity of a boid that has strayed past a margin back
// toward the interior by turn_factor on the offending axis.
pub fn apply_boundary<V: SimVector>(boid: &mut Boid<V>, margins: &Margins<V>, turn_factor: f32) {
    for axis in 0..V::DIM {
        if boid.position[axis] > margins.upper[axis] {
            boid.velocity[axis] -= turn_factor;
        } else if boid.position[axis] < margins.lower[axis] {
            boid.velocity[axis] += turn_factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{vec2, vec3, Vec3};

    #[test]
    fn margins_scale_with_the_extent() {
        let margins = Margins::from_extent(vec2(100.0, 40.0));
        assert_eq!(margins.upper, vec2(45.0, 18.0));
        assert_eq!(margins.lower, vec2(-45.0, -18.0));
    }

    #[test]
    fn boids_inside_the_margins_are_untouched() {
        let margins = Margins::from_extent(vec2(100.0, 100.0));
        let mut boid = Boid::new(vec2(10.0, -20.0), vec2(3.0, -2.0));
        apply_boundary(&mut boid, &margins, 0.15);
        assert_eq!(boid.velocity, vec2(3.0, -2.0));
    }

    #[test]
    fn boids_past_a_margin_are_nudged_back() {
        let margins = Margins::from_extent(vec3(100.0, 100.0, 100.0));
        let mut boid = Boid::new(vec3(50.0, -50.0, 0.0), Vec3::ZERO);
        apply_boundary(&mut boid, &margins, 0.15);
        assert_eq!(boid.velocity, vec3(-0.15, 0.15, 0.0));
    }

    #[test]
    fn nudge_magnitude_ignores_the_overshoot() {
        let margins = Margins::from_extent(vec2(100.0, 100.0));
        let mut near = Boid::new(vec2(46.0, 0.0), vec2(0.0, 0.0));
        let mut far = Boid::new(vec2(500.0, 0.0), vec2(0.0, 0.0));
        apply_boundary(&mut near, &margins, 0.15);
        apply_boundary(&mut far, &margins, 0.15);
        assert_eq!(near.velocity, far.velocity);
    }
}
