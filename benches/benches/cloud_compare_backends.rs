// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cloud_layout::{
    Backend, CircularCloudLayouterGeneric, FlatVec, Point, Size, SpiralParams, UniformGrid,
};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_in(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo) as u64) as i64
    }
}

/// Tag-like sizes: wide and short, with a few large "headline" tags.
fn gen_tag_sizes(count: usize) -> Vec<Size> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| {
            if i % 25 == 0 {
                Size::new(rng.next_in(120, 240), rng.next_in(40, 70))
            } else {
                Size::new(rng.next_in(20, 90), rng.next_in(10, 24))
            }
        })
        .collect()
}

fn gen_uniform_sizes(count: usize, w: i64, h: i64) -> Vec<Size> {
    vec![Size::new(w, h); count]
}

fn place_all<B: Backend>(mut cloud: CircularCloudLayouterGeneric<B>, sizes: &[Size]) {
    for s in sizes {
        black_box(cloud.put_next_rectangle(*s).unwrap());
    }
    black_box(cloud.rectangles().len());
}

fn flat() -> CircularCloudLayouterGeneric<FlatVec> {
    CircularCloudLayouterGeneric::new(Point::new(0, 0))
}

fn grid(cell: i64) -> CircularCloudLayouterGeneric<UniformGrid> {
    CircularCloudLayouterGeneric::with_uniform_grid(Point::new(0, 0), cell, cell).unwrap()
}

fn bench_flatvec(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatvec");
    for &n in &[100usize, 250, 500] {
        let sizes = gen_tag_sizes(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("tags_n{}", n), |b| {
            b.iter_batched(flat, |cloud| place_all(cloud, &sizes), BatchSize::SmallInput)
        });
    }
    let sizes = gen_uniform_sizes(250, 10, 20);
    group.bench_function("uniform_n250", |b| {
        b.iter_batched(flat, |cloud| place_all(cloud, &sizes), BatchSize::SmallInput)
    });
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for &n in &[100usize, 250, 500] {
        let sizes = gen_tag_sizes(n);
        group.throughput(Throughput::Elements(n as u64));
        for &cell in &[16i64, 32, 64] {
            group.bench_function(format!("tags_n{}_cell{}", n, cell), |b| {
                b.iter_batched(
                    || grid(cell),
                    |cloud| place_all(cloud, &sizes),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    let sizes = gen_uniform_sizes(250, 10, 20);
    group.bench_function("uniform_n250_cell16", |b| {
        b.iter_batched(|| grid(16), |cloud| place_all(cloud, &sizes), BatchSize::SmallInput)
    });
    group.finish();
}

fn bench_spiral_density(c: &mut Criterion) {
    // Finer spirals test more candidates per tag but pack tighter.
    let mut group = c.benchmark_group("spiral_density");
    let sizes = gen_tag_sizes(200);
    for &(step, scale) in &[(0.1, 0.5), (0.05, 0.25), (0.2, 1.0)] {
        let params = SpiralParams::new(step, scale).unwrap();
        group.bench_function(format!("step{}_scale{}", step, scale), |b| {
            b.iter_batched(
                || CircularCloudLayouterGeneric::<FlatVec>::with_spiral(Point::new(0, 0), params),
                |cloud| place_all(cloud, &sizes),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flatvec, bench_grid, bench_spiral_density);
criterion_main!(benches);
