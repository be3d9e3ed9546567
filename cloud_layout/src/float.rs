// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float math shims over `std` or `libm`.

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sin_cos(v: f64) -> (f64, f64) {
    v.sin_cos()
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn sin_cos(v: f64) -> (f64, f64) {
    libm::sincos(v)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn floor(v: f64) -> f64 {
    v.floor()
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn floor(v: f64) -> f64 {
    libm::floor(v)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sqrt(v: f64) -> f64 {
    v.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn sqrt(v: f64) -> f64 {
    libm::sqrt(v)
}
