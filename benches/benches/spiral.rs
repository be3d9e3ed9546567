// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cloud_layout::{Point, SpiralPoints};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral");
    for &n in &[1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("advance_n{}", n), |b| {
            b.iter(|| {
                let mut spiral = SpiralPoints::new(Point::new(0, 0));
                for _ in 0..n {
                    black_box(spiral.advance());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
