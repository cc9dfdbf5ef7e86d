//! Core geometry types for layout and painting.
//!
//! All units are character cells. The coordinate system has its origin at
//! the top-left corner: positive X extends to the right, positive Y extends
//! downward, matching terminal row/column addressing.
//!
//! Widths and heights are unsigned, so a zero-area rectangle is valid (a
//! widget collapses to nothing) and a negative extent is unrepresentable.

use std::fmt;
use std::ops::{Add, Sub};

/// A point in cell space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 2D extent in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether either axis is zero (nothing to paint).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clamp both axes to fit within `max`.
    #[inline]
    pub fn min(self, max: Size) -> Size {
        Size {
            width: self.width.min(max.width),
            height: self.height.min(max.height),
        }
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get the origin point of this rectangle.
    #[inline]
    pub fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Get the size of this rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// One past the rightmost column covered by this rectangle.
    #[inline]
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottommost row covered by this rectangle.
    #[inline]
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Whether this rectangle covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a cell is inside this rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Check if this rectangle shares at least one cell with another.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Get the overlapping region of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Rect {
            x,
            y,
            width: right - x,
            height: bottom - y,
        })
    }

    /// Translate this rectangle by an offset.
    #[inline]
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            x: self.x.saturating_add(offset.x),
            y: self.y.saturating_add(offset.y),
            ..*self
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Point tests
    // =========================================================================

    #[test]
    fn point_add_sub() {
        let a = Point::new(10, 20);
        let b = Point::new(5, 15);
        assert_eq!(a + b, Point::new(15, 35));
        assert_eq!(a - b, Point::new(5, 5));
    }

    #[test]
    fn point_sub_saturates() {
        let a = Point::new(3, 3);
        let b = Point::new(10, 1);
        assert_eq!(a - b, Point::new(0, 2));
    }

    #[test]
    fn point_from_tuple() {
        let p: Point = (5, 10).into();
        assert_eq!(p, Point::new(5, 10));
    }

    // =========================================================================
    // Size tests
    // =========================================================================

    #[test]
    fn size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn size_min() {
        let s = Size::new(100, 5);
        assert_eq!(s.min(Size::new(40, 40)), Size::new(40, 5));
    }

    // =========================================================================
    // Rect tests
    // =========================================================================

    #[test]
    fn rect_contains() {
        let rect = Rect::new(10, 20, 100, 50);

        assert!(rect.contains(Point::new(10, 20))); // Top-left corner
        assert!(rect.contains(Point::new(50, 40))); // Interior
        assert!(rect.contains(Point::new(109, 69))); // Just inside bottom-right

        assert!(!rect.contains(Point::new(110, 70))); // Bottom-right corner (exclusive)
        assert!(!rect.contains(Point::new(5, 40))); // Left of rect
        assert!(!rect.contains(Point::new(50, 80))); // Below rect
    }

    #[test]
    fn rect_zero_area_contains_nothing() {
        let rect = Rect::new(5, 5, 0, 0);
        assert!(!rect.contains(Point::new(5, 5)));
        assert!(rect.is_empty());
    }

    #[test]
    fn rect_right_bottom() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
    }

    #[test]
    fn rect_intersects() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        let c = Rect::new(200, 200, 50, 50);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);

        let intersection = a.intersection(&b).unwrap();
        assert_eq!(intersection, Rect::new(50, 50, 50, 50));

        let c = Rect::new(200, 200, 50, 50);
        assert!(a.intersection(&c).is_none());
    }

    #[test]
    fn rect_intersection_zero_area_is_none() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10); // Touching edges share no cell
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn rect_translate() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.translate(Point::new(5, 1)), Rect::new(15, 21, 100, 50));
    }

    #[test]
    fn rect_from_origin_size() {
        let r = Rect::from_origin_size(Point::new(10, 20), Size::new(100, 50));
        assert_eq!(r, Rect::new(10, 20, 100, 50));
        assert_eq!(r.origin(), Point::new(10, 20));
        assert_eq!(r.size(), Size::new(100, 50));
    }
}
