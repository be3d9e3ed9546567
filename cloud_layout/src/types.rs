// Copyright 2025 the Cloud Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use crate::error::LayoutError;

/// Integer point in layout space. `y` grows downward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        // Square in f64: an i64 span squared does not fit in i128.
        #[allow(
            clippy::cast_precision_loss,
            reason = "Spans past 2^53 only lose low bits."
        )]
        let (dx, dy) = (dx as f64, dy as f64);
        crate::float::sqrt(dx * dx + dy * dy)
    }
}

/// Requested rectangle size.
///
/// Negative dimensions can be expressed but are rejected when placed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent.
    pub width: i64,
    /// Vertical extent.
    pub height: i64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are non-negative.
    pub const fn is_valid(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    /// Return the size if both dimensions are non-negative.
    pub const fn validate(self) -> Result<Self, LayoutError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(LayoutError::NegativeSize {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Area widened to `i128`. Negative sizes count as empty.
    pub fn area(&self) -> i128 {
        i128::from(self.width.max(0)) * i128::from(self.height.max(0))
    }
}

/// Axis-aligned rectangle: top-left origin plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a rectangle from origin and size components.
    pub const fn from_xywh(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// Create a rectangle of `size` whose center is `center`.
    ///
    /// The origin is `center - size / 2` with floor division on both axes,
    /// so odd dimensions put the extra unit on the right/bottom side.
    pub const fn from_center(center: Point, size: Size) -> Self {
        let x = center.x.saturating_sub(size.width.div_euclid(2));
        let y = center.y.saturating_sub(size.height.div_euclid(2));
        Self::from_xywh(x, y, size.width, size.height)
    }

    /// Left edge (`origin.x`).
    pub const fn left(&self) -> i64 {
        self.origin.x
    }

    /// Top edge (`origin.y`).
    pub const fn top(&self) -> i64 {
        self.origin.y
    }

    /// Right edge (`origin.x + width`), saturating.
    pub const fn right(&self) -> i64 {
        self.origin.x.saturating_add(self.size.width)
    }

    /// Bottom edge (`origin.y + height`), saturating.
    pub const fn bottom(&self) -> i64 {
        self.origin.y.saturating_add(self.size.height)
    }

    /// The four corners: top-left, top-right, bottom-left, bottom-right.
    pub const fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.left(), self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// True if the rectangle covers no area.
    pub const fn is_empty(&self) -> bool {
        self.size.width <= 0 || self.size.height <= 0
    }

    /// Whether the two rectangles overlap with positive area.
    ///
    /// Shared edges and corners are not an overlap, and an empty rectangle
    /// never intersects anything.
    pub const fn intersects(&self, other: &Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Self) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::from_xywh(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }
}

#[cfg(feature = "kurbo")]
mod kurbo_interop {
    #![allow(
        clippy::cast_precision_loss,
        reason = "Layout coordinates are expected to stay well within 2^53."
    )]

    use super::{Point, Rect, Size};

    impl From<Point> for kurbo::Point {
        fn from(p: Point) -> Self {
            Self::new(p.x as f64, p.y as f64)
        }
    }

    impl From<Size> for kurbo::Size {
        fn from(s: Size) -> Self {
            Self::new(s.width as f64, s.height as f64)
        }
    }

    impl From<Rect> for kurbo::Rect {
        fn from(r: Rect) -> Self {
            Self::new(
                r.left() as f64,
                r.top() as f64,
                r.right() as f64,
                r.bottom() as f64,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_origin_uses_floor_division() {
        let r = Rect::from_center(Point::new(500, 500), Size::new(100, 20));
        assert_eq!(r.origin, Point::new(450, 490));
        let odd = Rect::from_center(Point::new(0, 0), Size::new(3, 5));
        assert_eq!(odd.origin, Point::new(-1, -2));
        assert_eq!((odd.right(), odd.bottom()), (2, 3));
    }

    #[test]
    fn shared_edges_do_not_intersect() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let right = Rect::from_xywh(10, 0, 10, 10);
        let below = Rect::from_xywh(0, 10, 10, 10);
        let corner = Rect::from_xywh(10, 10, 5, 5);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
        assert!(a.intersects(&Rect::from_xywh(9, 9, 5, 5)));
    }

    #[test]
    fn intersection_is_symmetric_and_contains() {
        let outer = Rect::from_xywh(-5, -5, 20, 20);
        let inner = Rect::from_xywh(0, 0, 2, 2);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn empty_rect_never_intersects() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::from_xywh(5, 5, 0, 3)));
        assert!(!Rect::from_xywh(5, 5, 3, 0).intersects(&a));
    }

    #[test]
    fn negative_size_is_rejected() {
        assert_eq!(
            Size::new(-1, 1).validate(),
            Err(LayoutError::NegativeSize {
                width: -1,
                height: 1
            })
        );
        assert!(Size::new(0, 0).validate().is_ok());
    }

    #[test]
    fn union_and_corners() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let b = Rect::from_xywh(20, -5, 5, 5);
        assert_eq!(a.union(&b), Rect::from_xywh(0, -5, 25, 15));
        assert_eq!(
            a.corners(),
            [
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(0, 10),
                Point::new(10, 10)
            ]
        );
    }

    #[test]
    fn distance_between_points() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
    }

    #[test]
    fn distance_across_the_full_range() {
        let lo = Point::new(i64::MIN, i64::MIN);
        let hi = Point::new(i64::MAX, i64::MAX);
        let d = lo.distance(hi);
        let span = 2.0_f64.powi(64);
        assert!(d.is_finite(), "distance {d}");
        assert!((d - span * 2.0_f64.sqrt()).abs() / d < 1e-12, "distance {d}");
        assert_eq!(d, hi.distance(lo));
    }
}
