//! Screen-space geometry: points and rectangles.
//!
//! Coordinates are integer pixels with the origin at the top-left,
//! matching what windowing platforms report for pointer events.
//! Rectangles are half-open: the right and bottom edges are exclusive,
//! so adjacent cards separated by a gap never both claim a click.

use serde::{Deserialize, Serialize};

/// A point in screen space (pixels, top-left origin).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The center of the rectangle.
    #[must_use]
    pub const fn center(self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Hit test. Right and bottom edges are exclusive.
    #[must_use]
    pub const fn contains(self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }

    /// Shrink the rectangle by `margin` pixels on every side.
    ///
    /// Degenerates to a zero-size rectangle at the center rather than
    /// inverting when the margin exceeds half the extent.
    #[must_use]
    pub fn inset(self, margin: i32) -> Self {
        let w = (self.w - 2 * margin).max(0);
        let h = (self.h - 2 * margin).max(0);
        Self::new(self.x + (self.w - w) / 2, self.y + (self.h - h) / 2, w, h)
    }

    /// Check whether `other` lies entirely within this rectangle.
    #[must_use]
    pub const fn encloses(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }

    /// Check whether two rectangles overlap (share any area).
    #[must_use]
    pub const fn intersects(self, other: Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_half_open() {
        let rect = Rect::new(10, 10, 20, 20);

        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(29, 29)));
        assert!(!rect.contains(Point::new(30, 30)));
        assert!(!rect.contains(Point::new(9, 15)));
        assert!(!rect.contains(Point::new(15, 30)));
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(0, 0, 100, 50);
        assert_eq!(rect.center(), Point::new(50, 25));
    }

    #[test]
    fn test_inset() {
        let rect = Rect::new(10, 10, 100, 60);
        let inner = rect.inset(10);

        assert_eq!(inner, Rect::new(20, 20, 80, 40));
        assert!(rect.encloses(inner));

        // Oversized margin collapses instead of inverting
        let collapsed = Rect::new(0, 0, 10, 10).inset(20);
        assert_eq!(collapsed.w, 0);
        assert_eq!(collapsed.h, 0);
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        let c = Rect::new(10, 0, 10, 10);

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        // Touching edges do not overlap
        assert!(!a.intersects(c));
    }

    #[test]
    fn test_serde_roundtrip() {
        let rect = Rect::new(1, 2, 3, 4);
        let json = serde_json::to_string(&rect).unwrap();
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(rect, back);
    }
}
