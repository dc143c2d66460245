//! Performance measurement for terrain noise, flood fill, and line walks

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

use tilefield::fill::flood_fill;
use tilefield::noise::{noise_fill, normalize};
use tilefield::raster::drunken_walk;
use tilefield::{Grid, Line, Rectangle, Size};

/// Measures multi-resolution noise generation plus normalization
fn bench_noise_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise_fill");

    for levels in &[2u32, 4, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(levels), levels, |b, &levels| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(12345);
                let Ok(mut field) = noise_fill(Size::new(128, 128), levels, &mut rng) else {
                    return;
                };
                if normalize(&mut field).is_err() {
                    return;
                }
                black_box(field);
            });
        });
    }

    group.finish();
}

/// Measures scanline flood fill over a sparsely obstructed grid
fn bench_flood_fill(c: &mut Criterion) {
    let mut blocks = Grid::<bool>::new(128, 128);
    // scattered pillars, every eighth cell on both axes
    blocks.set_each(|_, point| point.x % 8 == 0 && point.y % 8 == 0);

    c.bench_function("flood_fill_128", |b| {
        b.iter(|| {
            let Ok(flooded) = flood_fill(&blocks, (1, 1)) else {
                return;
            };
            black_box(flooded);
        });
    });
}

/// Measures a bounded drunken walk across a 64x64 field
fn bench_drunken_walk(c: &mut Criterion) {
    let line = Line::new((2, 2), (60, 60));
    let bounds = Rectangle::of_size(64, 64);

    c.bench_function("drunken_walk_64", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(12345);
            let Ok(path) = drunken_walk(&line, 0.5, Some(bounds), &mut rng) else {
                return;
            };
            black_box(path);
        });
    });
}

criterion_group!(benches, bench_noise_fill, bench_flood_fill, bench_drunken_walk);
criterion_main!(benches);
