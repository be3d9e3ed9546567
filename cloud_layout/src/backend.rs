// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for overlap queries against placed rectangles.

use alloc::boxed::Box;

use crate::types::Rect;

/// Spatial backend abstraction used by [`CircularCloudLayouterGeneric`](crate::CircularCloudLayouterGeneric).
///
/// Slots are dense insertion indices: the n-th inserted rectangle is slot `n`.
/// Implementations must use [`Rect::intersects`] semantics so every backend
/// yields the same placements.
pub trait Backend {
    /// Record a placed rectangle under `slot`.
    fn insert(&mut self, slot: usize, rect: Rect);

    /// Forget every rectangle.
    fn clear(&mut self);

    /// Recorded rectangles, indexed by slot.
    fn rects(&self) -> &[Rect];

    /// Number of rectangles recorded.
    fn len(&self) -> usize {
        self.rects().len()
    }

    /// True if nothing has been recorded.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Query slots whose rectangle overlaps `rect` with positive area.
    fn query_rect<'a>(&'a self, rect: Rect) -> Box<dyn Iterator<Item = usize> + 'a>;

    /// Whether any recorded rectangle overlaps `rect`.
    fn any_intersecting(&self, rect: Rect) -> bool {
        self.query_rect(rect).next().is_some()
    }
}
