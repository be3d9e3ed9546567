// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type returned by fallible layout operations.

/// Invalid arguments rejected before any layout state changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LayoutError {
    /// A requested rectangle had a negative width or height.
    #[error("size width and height must be non-negative (got {width}x{height})")]
    NegativeSize {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },
    /// Spiral angle step or scale was not a finite positive number.
    #[error("spiral angle step and scale must be finite and positive")]
    InvalidSpiral,
    /// Uniform grid cells must have positive width and height.
    #[error("grid cell width and height must be positive (got {width}x{height})")]
    InvalidCellSize {
        /// Requested cell width.
        width: i64,
        /// Requested cell height.
        height: i64,
    },
}
