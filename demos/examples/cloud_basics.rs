// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cloud basics.
//!
//! Place a handful of word-sized rectangles, print where they landed, and
//! show that a bad size is rejected without disturbing the layout.
//!
//! Run:
//! - `cargo run -p cloud_layout_demos --example cloud_basics`
//! - `RUST_LOG=debug cargo run -p cloud_layout_demos --example cloud_basics` to see each placement

use cloud_layout::{CircularCloudLayouter, Point, Size};

fn main() {
    env_logger::init();

    // Pretend these came from measuring text at a size proportional to frequency.
    let words = [
        ("rust", 160, 60),
        ("layout", 120, 40),
        ("spiral", 110, 36),
        ("cloud", 90, 32),
        ("rect", 70, 28),
        ("center", 80, 24),
        ("greedy", 70, 20),
        ("tag", 40, 18),
        ("grid", 50, 18),
        ("edge", 48, 16),
    ];

    let mut cloud = CircularCloudLayouter::new(Point::new(400, 300));
    for (word, w, h) in words {
        let r = cloud
            .put_next_rectangle(Size::new(w, h))
            .expect("sizes are non-negative");
        println!(
            "{word:>8}: ({:>4}, {:>4}) .. ({:>4}, {:>4})",
            r.left(),
            r.top(),
            r.right(),
            r.bottom()
        );
    }

    let err = cloud.put_next_rectangle(Size::new(-5, 10)).unwrap_err();
    println!("rejected: {err}");
    assert_eq!(cloud.len(), words.len(), "failed call must not add a rectangle");

    let stats = cloud.stats();
    println!(
        "{} tags, bounds {:?}, max corner distance {:.1}, density {:.2}",
        stats.count,
        stats.bounds,
        stats.max_corner_distance,
        stats.density()
    );
}
