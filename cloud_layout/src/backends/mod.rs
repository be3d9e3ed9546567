// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `flatvec`: flat vector with linear scans. Simple, fine for a few hundred tags.
//! - `grid`: uniform integer grid anchored at the layout center. Queries only
//!   visit the cells a candidate covers, so cost stays flat as the cloud grows.
//!   Pick a cell size close to the typical rectangle size.

pub mod flatvec;
pub mod grid;

pub use flatvec::FlatVec;
pub use grid::UniformGrid;
