// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for small clouds.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Rect;

/// Flat vector backend with linear scans.
#[derive(Clone, Default)]
pub struct FlatVec {
    entries: Vec<Rect>,
}

impl Debug for FlatVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("slots", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Backend for FlatVec {
    fn insert(&mut self, slot: usize, rect: Rect) {
        debug_assert_eq!(slot, self.entries.len(), "slots are dense insertion indices");
        self.entries.push(rect);
    }
    fn clear(&mut self) {
        self.entries.clear();
    }
    fn rects(&self) -> &[Rect] {
        &self.entries
    }
    fn query_rect<'a>(&'a self, rect: Rect) -> Box<dyn Iterator<Item = usize> + 'a> {
        // Lazy so `any_intersecting` stops at the first hit.
        Box::new(
            self.entries
                .iter()
                .enumerate()
                .filter(move |(_, r)| r.intersects(&rect))
                .map(|(i, _)| i),
        )
    }
}
