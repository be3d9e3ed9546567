// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cloud Layout: greedy circular tag cloud placement.
//!
//! Cloud Layout places rectangles of caller-supplied sizes around a fixed
//! center so that none overlap and the overall silhouette stays roughly
//! circular, denser near the middle and sparser farther out.
//!
//! - Feed sizes one at a time with [`CircularCloudLayouterGeneric::put_next_rectangle`]
//!   and get back the placed [`Rect`].
//! - Read every placement so far, in order, with [`CircularCloudLayouterGeneric::rectangles`].
//! - Summarise compactness with [`CloudStats`].
//!
//! Candidate positions come from an Archimedean spiral ([`SpiralPoints`]) that
//! is shared across calls and never restarted, so each new rectangle picks up
//! where the previous one stopped. The result is deterministic: the same
//! center, spiral parameters and size sequence always give the same layout.
//! It is a heuristic and makes no claim of optimal packing.
//!
//! Measuring text and drawing the result are left to the caller. With the
//! `kurbo` feature, [`Rect`] converts into `kurbo::Rect` for rendering.
//!
//! # Example
//!
//! ```rust
//! use cloud_layout::{CircularCloudLayouter, Point, Size};
//!
//! let mut cloud = CircularCloudLayouter::new(Point::new(500, 500));
//! for (w, h) in [(120, 40), (80, 30), (60, 24), (60, 24), (40, 16)] {
//!     cloud.put_next_rectangle(Size::new(w, h)).unwrap();
//! }
//!
//! let placed = cloud.rectangles();
//! assert_eq!(placed.len(), 5);
//! for (i, a) in placed.iter().enumerate() {
//!     for b in &placed[i + 1..] {
//!         assert!(!a.intersects(b));
//!     }
//! }
//! ```
//!
//! ## Choosing a backend
//!
//! Overlap tests go through a [`Backend`]; both backends give identical layouts.
//!
//! - [`FlatVec`] (default): linear scans. Good for clouds of a few hundred tags.
//! - [`UniformGrid`]: integer cell grid anchored at the center. Use it for
//!   large clouds; pick cells around the typical tag size.
//!
//! ```rust
//! use cloud_layout::{CircularCloudLayouterGeneric, Point, Size};
//!
//! let mut cloud = CircularCloudLayouterGeneric::with_uniform_grid(Point::new(0, 0), 32, 16).unwrap();
//! let r = cloud.put_next_rectangle(Size::new(64, 20)).unwrap();
//! assert_eq!((r.left(), r.top()), (-32, -10));
//! ```
//!
//! ## Features
//!
//! - `std` (default): float math from the standard library.
//! - `libm`: float math from `libm` for `no_std` builds.
//! - `kurbo`: conversions into Kurbo geometry types.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("cloud_layout requires either the `std` or `libm` feature");

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod error;
mod float;
pub mod layouter;
pub mod spiral;
pub mod stats;
pub mod types;

pub use backend::Backend;
pub use backends::{FlatVec, UniformGrid};
pub use error::LayoutError;
pub use layouter::{CircularCloudLayouter, CircularCloudLayouterGeneric};
pub use spiral::{SpiralParams, SpiralPoints};
pub use stats::CloudStats;
pub use types::{Point, Rect, Size};
