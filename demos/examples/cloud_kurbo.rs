// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handing a layout to a Kurbo-based renderer.
//!
//! Builds a larger grid-backed cloud, converts the placements to
//! `kurbo::Rect`, and computes what a renderer would need: the canvas size
//! and each shape translated into canvas space.
//!
//! Run:
//! - `cargo run -p cloud_layout_demos --example cloud_kurbo`

use cloud_layout::{CircularCloudLayouterGeneric, Point, Size};
use kurbo::{Rect, Shape, Vec2};
use log::info;

fn main() {
    env_logger::init();

    let mut cloud = CircularCloudLayouterGeneric::with_uniform_grid(Point::new(0, 0), 32, 16)
        .expect("cell size is positive");
    for i in 0..300_i64 {
        // Zipf-ish weights: a few big tags, many small ones.
        let weight = 1 + 60 / (i + 1);
        let size = Size::new(18 + weight * 10 + i % 7 * 4, 10 + weight * 3);
        cloud
            .put_next_rectangle(size)
            .expect("sizes are non-negative");
    }
    info!("placed {} rectangles", cloud.len());

    let shapes: Vec<Rect> = cloud.rectangles().iter().map(|r| Rect::from(*r)).collect();
    let bounds = shapes
        .iter()
        .copied()
        .reduce(|acc, r| acc.union(r))
        .unwrap_or(Rect::ZERO);
    let margin = 16.0;
    let canvas = bounds.inflate(margin, margin);
    let to_canvas = Vec2::new(-canvas.x0, -canvas.y0);

    let ink: f64 = shapes.iter().map(Shape::area).sum();
    println!(
        "canvas {:.0} x {:.0}, ink coverage {:.1}%",
        canvas.width(),
        canvas.height(),
        100.0 * ink / canvas.area()
    );
    for r in shapes.iter().take(5) {
        let placed = *r + to_canvas;
        println!(
            "  draw at ({:.0}, {:.0}) size {:.0} x {:.0}",
            placed.x0,
            placed.y0,
            placed.width(),
            placed.height()
        );
    }
}
