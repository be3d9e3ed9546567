// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend for integer layout coordinates.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::RangeInclusive;

use crate::backend::Backend;
use crate::error::LayoutError;
use crate::types::{Point, Rect};

/// Rectangles covering more cells than this are kept out of the grid and scanned linearly.
const MAX_CELLS_PER_RECT: i128 = 1024;

/// Uniform grid backend.
///
/// Cell coordinates are relative to an origin and use Euclidean division
/// (`div_euclid`), so negative coordinates snap consistently toward negative
/// infinity. Rectangles are half-open (`[left, right) × [top, bottom)`) when
/// mapped to cells, which matches the strict overlap test.
#[derive(Clone)]
pub struct UniformGrid {
    cell_w: i64,
    cell_h: i64,
    origin: Point,
    entries: Vec<Rect>,
    cells: BTreeMap<(i64, i64), Vec<usize>>,
    oversized: Vec<usize>,
}

type CellSpan = (RangeInclusive<i64>, RangeInclusive<i64>);

impl UniformGrid {
    /// Create a grid with the given cell size, anchored at `origin`.
    pub fn new(cell_w: i64, cell_h: i64, origin: Point) -> Result<Self, LayoutError> {
        if cell_w <= 0 || cell_h <= 0 {
            return Err(LayoutError::InvalidCellSize {
                width: cell_w,
                height: cell_h,
            });
        }
        Ok(Self {
            cell_w,
            cell_h,
            origin,
            entries: Vec::new(),
            cells: BTreeMap::new(),
            oversized: Vec::new(),
        })
    }

    #[inline]
    fn key_for(&self, x: i64, y: i64) -> (i64, i64) {
        let cx = x.saturating_sub(self.origin.x).div_euclid(self.cell_w);
        let cy = y.saturating_sub(self.origin.y).div_euclid(self.cell_h);
        (cx, cy)
    }

    /// Covered cell ranges, or `None` if the rectangle covers no cells.
    fn cells_for_rect(&self, r: &Rect) -> Option<CellSpan> {
        if r.is_empty() {
            return None;
        }
        let (minx, miny) = self.key_for(r.left(), r.top());
        let (maxx, maxy) = self.key_for(r.right() - 1, r.bottom() - 1);
        Some((minx..=maxx, miny..=maxy))
    }

    fn is_oversized(span: &CellSpan) -> bool {
        let w = i128::from(*span.0.end()) - i128::from(*span.0.start()) + 1;
        let h = i128::from(*span.1.end()) - i128::from(*span.1.start()) + 1;
        w * h > MAX_CELLS_PER_RECT
    }
}

impl Backend for UniformGrid {
    fn insert(&mut self, slot: usize, rect: Rect) {
        debug_assert_eq!(slot, self.entries.len(), "slots are dense insertion indices");
        self.entries.push(rect);
        let Some(span) = self.cells_for_rect(&rect) else {
            return;
        };
        if Self::is_oversized(&span) {
            self.oversized.push(slot);
            return;
        }
        let (xs, ys) = span;
        for y in ys {
            for x in xs.clone() {
                self.cells.entry((x, y)).or_default().push(slot);
            }
        }
    }
    fn clear(&mut self) {
        self.entries.clear();
        self.cells.clear();
        self.oversized.clear();
    }
    fn rects(&self) -> &[Rect] {
        &self.entries
    }
    fn query_rect<'a>(&'a self, rect: Rect) -> Box<dyn Iterator<Item = usize> + 'a> {
        let Some(span) = self.cells_for_rect(&rect) else {
            return Box::new(core::iter::empty());
        };
        if Self::is_oversized(&span) {
            return Box::new(
                self.entries
                    .iter()
                    .enumerate()
                    .filter(move |(_, r)| r.intersects(&rect))
                    .map(|(i, _)| i),
            );
        }
        let mut set: BTreeSet<usize> = self.oversized.iter().copied().collect();
        let (xs, ys) = span;
        for y in ys {
            for x in xs.clone() {
                if let Some(slots) = self.cells.get(&(x, y)) {
                    set.extend(slots.iter().copied());
                }
            }
        }
        Box::new(
            set.into_iter()
                .filter(move |&i| self.entries[i].intersects(&rect)),
        )
    }
}

impl Debug for UniformGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UniformGrid")
            .field("cell_w", &self.cell_w)
            .field("cell_h", &self.cell_h)
            .field("origin", &self.origin)
            .field("slots", &self.entries.len())
            .field("cells", &self.cells.len())
            .field("oversized", &self.oversized.len())
            .finish_non_exhaustive()
    }
}
