// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Archimedean spiral of candidate points around a fixed center.
//!
//! The spiral radius grows linearly with the angle: `r = k · φ`. Each call to
//! [`SpiralPoints::advance`] adds `Δφ` to the angle and returns
//!
//! - `x = center.x + floor(k · φ · cos φ)`
//! - `y = center.y + floor(k · φ · sin φ)`
//!
//! `Δφ` controls how densely each turn is sampled, `k` how quickly the turns
//! move outward (consecutive turns are `2π · k` apart).

use core::iter::FusedIterator;

use crate::error::LayoutError;
use crate::float;
use crate::types::Point;

/// Shape parameters of the spiral.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpiralParams {
    angle_step: f64,
    scale: f64,
}

impl SpiralParams {
    /// Angle increment per advance, in radians, used by [`Default`].
    pub const DEFAULT_ANGLE_STEP: f64 = 0.1;
    /// Radius growth per radian, used by [`Default`].
    pub const DEFAULT_SCALE: f64 = 0.5;

    /// Create parameters from an angle step (radians) and a radius scale.
    ///
    /// Both must be finite and strictly positive, otherwise the spiral would
    /// not move outward and placement could not terminate.
    pub fn new(angle_step: f64, scale: f64) -> Result<Self, LayoutError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(angle_step) && valid(scale) {
            Ok(Self { angle_step, scale })
        } else {
            Err(LayoutError::InvalidSpiral)
        }
    }

    /// Angle increment per advance, in radians.
    pub const fn angle_step(&self) -> f64 {
        self.angle_step
    }

    /// Radius growth per radian.
    pub const fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            angle_step: Self::DEFAULT_ANGLE_STEP,
            scale: Self::DEFAULT_SCALE,
        }
    }
}

/// Unbounded sequence of points spiraling outward from a center.
///
/// The cursor only moves forward. Two sequences with the same center and
/// parameters yield the same points in the same order.
///
/// ```
/// use cloud_layout::{Point, SpiralPoints};
///
/// let mut spiral = SpiralPoints::new(Point::new(0, 0));
/// let first = spiral.advance();
/// assert_eq!(first, Point::new(0, 0));
///
/// // It is also an endless iterator.
/// let far = spiral.nth(1_000).unwrap();
/// assert!(far.distance(Point::new(0, 0)) > 40.0);
/// ```
#[derive(Clone, Debug)]
pub struct SpiralPoints {
    center: Point,
    params: SpiralParams,
    // Angle is derived as `steps * angle_step` so it does not drift.
    steps: u64,
}

impl SpiralPoints {
    /// Create a spiral around `center` with default parameters.
    pub fn new(center: Point) -> Self {
        Self::with_params(center, SpiralParams::default())
    }

    /// Create a spiral around `center` with explicit parameters.
    pub const fn with_params(center: Point, params: SpiralParams) -> Self {
        Self {
            center,
            params,
            steps: 0,
        }
    }

    /// The center the spiral winds around.
    pub const fn center(&self) -> Point {
        self.center
    }

    /// The parameters this spiral was built with.
    pub const fn params(&self) -> SpiralParams {
        self.params
    }

    /// Advance the cursor and return the next point.
    pub fn advance(&mut self) -> Point {
        // Placement only terminates while the radius grows; `steps` reaching
        // `u64::MAX` (and repeating one point) is assumed never to happen.
        self.steps = self.steps.saturating_add(1);
        #[allow(
            clippy::cast_precision_loss,
            reason = "Step counts past 2^53 are unreachable in practice."
        )]
        let phi = self.steps as f64 * self.params.angle_step;
        let radius = self.params.scale * phi;
        let (sin, cos) = float::sin_cos(phi);
        Point::new(
            self.center.x.saturating_add(offset(radius * cos)),
            self.center.y.saturating_add(offset(radius * sin)),
        )
    }
}

/// Floor to an integer offset. The cast saturates for out-of-range values.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Value is floored first; `as` saturates on overflow."
)]
fn offset(v: f64) -> i64 {
    float::floor(v) as i64
}

impl Iterator for SpiralPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for SpiralPoints {}
