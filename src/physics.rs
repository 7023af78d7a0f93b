/*
 * Physics Module
 *
 * This module runs one simulation tick: boundary pass, the enabled rule
 * passes, speed clamping, and position integration, in that fixed order
 * for every boid.
 *
 * Every boid's update reads a frozen snapshot of the previous tick's
 * state and writes only its own boid and centroid slot, so the per-boid
 * work carries no shared mutable state and the parallel path needs no
 * locking. The per-boid arithmetic order is identical in both execution
 * modes, which makes sequential and parallel runs bit-identical.
 */

use rayon::prelude::*;

use crate::boid::Boid;
use crate::boundary::{apply_boundary, Margins};
use crate::params::{ExecutionMode, SimulationParams};
use crate::rules;
use crate::simulation::Simulation;
use crate::vector::{clamp_speed, SimVector};

// Advance the whole population by one tick.
pub(crate) fn step<V: SimVector>(sim: &mut Simulation<V>, dt: f32) {
    // Margins follow the current extent, which the host may have changed
    // since the last tick.
    let margins = Margins::from_extent(sim.params.extent);
    let dt = sim.params.time_step.delta(dt);

    // Freeze the previous tick's state; all neighbor scans read this.
    let snapshot = sim.boids.clone();

    let params = &sim.params;
    let boids = &mut sim.boids;
    let centroids = &mut sim.centroids;

    match params.execution {
        ExecutionMode::Sequential => {
            for (index, (boid, centroid)) in
                boids.iter_mut().zip(centroids.iter_mut()).enumerate()
            {
                update_boid(index, boid, centroid, &snapshot, params, &margins, dt);
            }
        }
        ExecutionMode::Parallel => {
            // Process boids in chunks to reduce synchronization overhead.
            let chunk_size = std::cmp::max(boids.len() / rayon::current_num_threads(), 1);

            boids
                .par_chunks_mut(chunk_size)
                .zip(centroids.par_chunks_mut(chunk_size))
                .enumerate()
                .for_each(|(chunk_index, (boid_chunk, centroid_chunk))| {
                    for (offset, (boid, centroid)) in
                        boid_chunk.iter_mut().zip(centroid_chunk.iter_mut()).enumerate()
                    {
                        let index = chunk_index * chunk_size + offset;
                        update_boid(index, boid, centroid, &snapshot, params, &margins, dt);
                    }
                });
        }
    }
}

// One boid's full tick. Later passes see the cumulative velocity produced
// by earlier passes for this boid; neighbor reads come from the snapshot.
fn update_boid<V: SimVector>(
    index: usize,
    boid: &mut Boid<V>,
    centroid: &mut V,
    snapshot: &[Boid<V>],
    params: &SimulationParams<V>,
    margins: &Margins<V>,
    dt: f32,
) {
    apply_boundary(boid, margins, params.turn_factor);

    if params.separation {
        rules::separation(index, snapshot, boid, params);
    }
    if params.alignment {
        rules::alignment(index, snapshot, boid, params);
    }
    if params.cohesion {
        rules::cohesion(index, snapshot, boid, centroid, params);
    }

    boid.velocity = clamp_speed(boid.velocity, params.min_speed, params.max_speed);
    boid.position += boid.velocity * dt;
}
