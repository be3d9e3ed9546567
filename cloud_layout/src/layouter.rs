// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public layouter API and generic implementation over a pluggable backend.

use log::{debug, trace};

use crate::backend::Backend;
use crate::backends::{FlatVec, UniformGrid};
use crate::error::LayoutError;
use crate::spiral::{SpiralParams, SpiralPoints};
use crate::stats::CloudStats;
use crate::types::{Point, Rect, Size};

/// Places rectangles around a fixed center without overlaps.
///
/// Each call to [`put_next_rectangle`](Self::put_next_rectangle) first tries
/// the rectangle centered on the layout center, then centers it on successive
/// points of an outward spiral until it overlaps nothing placed so far. The
/// spiral cursor is shared by all calls and never rewinds, so later rectangles
/// continue from where earlier ones stopped.
#[derive(Debug)]
pub struct CircularCloudLayouterGeneric<B: Backend> {
    center: Point,
    spiral: SpiralPoints,
    // Owns the placed rectangles, in placement order.
    backend: B,
}

/// Layouter using the flat vector backend.
pub type CircularCloudLayouter = CircularCloudLayouterGeneric<FlatVec>;

impl<B: Backend + Default> CircularCloudLayouterGeneric<B> {
    /// Create an empty layout around `center` with the default spiral.
    pub fn new(center: Point) -> Self {
        Self::with_spiral(center, SpiralParams::default())
    }

    /// Create an empty layout around `center` with custom spiral parameters.
    pub fn with_spiral(center: Point, params: SpiralParams) -> Self {
        Self::with_backend(center, params, B::default())
    }
}

impl CircularCloudLayouterGeneric<UniformGrid> {
    /// Create an empty layout backed by a uniform grid anchored at `center`.
    ///
    /// Cells of roughly the typical rectangle size work well.
    pub fn with_uniform_grid(center: Point, cell_w: i64, cell_h: i64) -> Result<Self, LayoutError> {
        let grid = UniformGrid::new(cell_w, cell_h, center)?;
        Ok(Self::with_backend(center, SpiralParams::default(), grid))
    }
}

impl<B: Backend> CircularCloudLayouterGeneric<B> {
    /// Create an empty layout using an explicit backend.
    ///
    /// Anything already recorded in `backend` is cleared.
    pub fn with_backend(center: Point, params: SpiralParams, mut backend: B) -> Self {
        backend.clear();
        Self {
            center,
            spiral: SpiralPoints::with_params(center, params),
            backend,
        }
    }

    /// The fixed center of the layout.
    pub const fn center(&self) -> Point {
        self.center
    }

    /// All placed rectangles, in placement order.
    pub fn rectangles(&self) -> &[Rect] {
        self.backend.rects()
    }

    /// Number of placed rectangles.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// True if nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Place a rectangle of `size` and return where it went.
    ///
    /// The result has exactly `size` and overlaps no earlier placement.
    /// Fails with [`LayoutError::NegativeSize`] if either dimension is
    /// negative, leaving the layout untouched.
    ///
    /// ```
    /// use cloud_layout::{CircularCloudLayouter, Point, Size};
    ///
    /// let mut cloud = CircularCloudLayouter::new(Point::new(500, 500));
    /// let first = cloud.put_next_rectangle(Size::new(100, 20)).unwrap();
    /// assert_eq!(first.origin, Point::new(450, 490));
    ///
    /// let second = cloud.put_next_rectangle(Size::new(40, 10)).unwrap();
    /// assert!(!first.intersects(&second));
    /// assert_eq!(cloud.rectangles(), &[first, second]);
    ///
    /// assert!(cloud.put_next_rectangle(Size::new(-1, 5)).is_err());
    /// assert_eq!(cloud.len(), 2);
    /// ```
    pub fn put_next_rectangle(&mut self, size: Size) -> Result<Rect, LayoutError> {
        let size = size.validate().inspect_err(|err| trace!("rejected size: {err}"))?;
        let mut candidate = Rect::from_center(self.center, size);
        let mut tested = 1_u64;
        while self.backend.any_intersecting(candidate) {
            candidate = Rect::from_center(self.spiral.advance(), size);
            tested += 1;
        }
        let slot = self.backend.len();
        self.backend.insert(slot, candidate);
        debug!("placed slot {slot} at {candidate:?} after {tested} candidates");
        Ok(candidate)
    }

    /// Compactness summary of the current layout.
    pub fn stats(&self) -> CloudStats {
        CloudStats::from_rects(self.center, self.backend.rects())
    }
}
