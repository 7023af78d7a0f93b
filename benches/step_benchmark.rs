/*
 * Simulation Step Benchmark
 *
 * Measures one full tick across population sizes and both execution
 * modes. The tick is an O(n^2) all-pairs scan, so the population sweep
 * shows the quadratic growth and the parallel speedup directly.
 */

use boidsim::{ExecutionMode, Simulation2D, Simulation3D, SimulationParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

const MODES: [(&str, ExecutionMode); 2] = [
    ("sequential", ExecutionMode::Sequential),
    ("parallel", ExecutionMode::Parallel),
];

fn bench_step_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_2d");

    for num_boids in [100, 500, 1000, 2000] {
        for (label, execution) in MODES {
            group.bench_with_input(
                BenchmarkId::new(label, num_boids),
                &num_boids,
                |b, &n| {
                    let mut params = SimulationParams::default();
                    params.execution = execution;
                    let mut sim = Simulation2D::new(params, n, 42).unwrap();

                    b.iter(|| sim.step(black_box(1.0 / 120.0)));
                },
            );
        }
    }

    group.finish();
}

fn bench_step_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_3d");

    for num_boids in [100, 500, 1000, 2000] {
        for (label, execution) in MODES {
            group.bench_with_input(
                BenchmarkId::new(label, num_boids),
                &num_boids,
                |b, &n| {
                    let mut params = SimulationParams::default();
                    params.execution = execution;
                    let mut sim = Simulation3D::new(params, n, 42).unwrap();

                    b.iter(|| sim.step(black_box(1.0 / 120.0)));
                },
            );
        }
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step_2d, bench_step_3d
}

criterion_main!(benches);
