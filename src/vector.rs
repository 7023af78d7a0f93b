/*
 * Vector Math Module
 *
 * This module abstracts over the two simulation dimensionalities. The
 * SimVector trait is implemented for glam's Vec2 and Vec3, so every rule
 * and pass in the crate is written once and works for both the 2D and
 * the 3D variant.
 *
 * It also provides the two numeric primitives the simulation is built on:
 * Euclidean distance and speed clamping.
 */

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Sub};

use glam::{Vec2, Vec3};
use rand::Rng;

// A fixed-dimension f32 vector usable as a boid position or velocity.
pub trait SimVector:
    Copy
    + Default
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
    + Index<usize, Output = f32>
    + IndexMut<usize>
{
    const DIM: usize;

    fn length(self) -> f32;

    fn splat(value: f32) -> Self;

    // Draw each axis uniformly from [-half_widths[axis], +half_widths[axis]).
    // An axis with a non-positive half-width stays at zero.
    fn sample_uniform(rng: &mut impl Rng, half_widths: Self) -> Self {
        let mut v = Self::default();
        for axis in 0..Self::DIM {
            let half = half_widths[axis];
            if half > 0.0 {
                v[axis] = rng.gen_range(-half..half);
            }
        }
        v
    }
}

impl SimVector for Vec2 {
    const DIM: usize = 2;

    fn length(self) -> f32 {
        Vec2::length(self)
    }

    fn splat(value: f32) -> Self {
        Vec2::splat(value)
    }
}

impl SimVector for Vec3 {
    const DIM: usize = 3;

    fn length(self) -> f32 {
        Vec3::length(self)
    }

    fn splat(value: f32) -> Self {
        Vec3::splat(value)
    }
}

// Euclidean distance between two points.
//
// Both variants use the root of the summed squared axis differences. The
// 3D variant deliberately does not reproduce the dot-product formula from
// the reference implementation, which measured something other than the
// distance between the two points.
pub fn distance<V: SimVector>(a: V, b: V) -> f32 {
    (a - b).length()
}

// Rescale a velocity whose magnitude falls outside [min_speed, max_speed].
//
// A zero velocity has no direction to rescale along and is returned
// unchanged; the next tick's forces give it one.
pub fn clamp_speed<V: SimVector>(velocity: V, min_speed: f32, max_speed: f32) -> V {
    let speed = velocity.length();

    if speed == 0.0 {
        return velocity;
    }

    if speed < min_speed {
        velocity * (min_speed / speed)
    } else if speed > max_speed {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}
