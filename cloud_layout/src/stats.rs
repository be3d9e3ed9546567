// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compactness summary of a finished or in-progress layout.

use core::f64::consts::PI;

use crate::types::{Point, Rect};

/// How tightly a set of rectangles clusters around a center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CloudStats {
    /// Number of rectangles.
    pub count: usize,
    /// Union of all rectangles, `None` if there are none.
    pub bounds: Option<Rect>,
    /// Sum of rectangle areas, clamped to `i128::MAX`.
    pub covered_area: i128,
    /// Largest distance from any rectangle corner to the center.
    pub max_corner_distance: f64,
}

impl CloudStats {
    /// Summarise `rects` relative to `center`.
    pub fn from_rects(center: Point, rects: &[Rect]) -> Self {
        let mut it = rects.iter();
        let bounds = it
            .next()
            .map(|first| it.fold(*first, |acc, r| acc.union(r)));
        let covered_area = rects
            .iter()
            .map(|r| r.size.area())
            .fold(0, i128::saturating_add);
        let max_corner_distance = rects
            .iter()
            .flat_map(Rect::corners)
            .map(|p| p.distance(center))
            .fold(0.0, f64::max);
        Self {
            count: rects.len(),
            bounds,
            covered_area,
            max_corner_distance,
        }
    }

    /// Covered area over the area of the enclosing circle of radius
    /// [`max_corner_distance`](Self::max_corner_distance).
    ///
    /// Returns `0.0` when that circle is degenerate.
    pub fn density(&self) -> f64 {
        let circle = PI * self.max_corner_distance * self.max_corner_distance;
        if circle > 0.0 {
            #[allow(
                clippy::cast_precision_loss,
                reason = "A ratio; low bits of huge areas do not matter."
            )]
            let covered = self.covered_area as f64;
            covered / circle
        } else {
            0.0
        }
    }
}
