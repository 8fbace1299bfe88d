//! 2D geometry for viewport intersection
//!
//! Sections and viewports are axis-aligned rectangles. Triggering only ever
//! needs intersection tests and signed margin adjustment, so that is all
//! this module provides.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// A rect with no measurable area (not yet laid out)
    ///
    /// Bindings on such sections are deferred until a layout pass gives
    /// them a box.
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Grow (positive) or shrink (negative) the rect on all sides
    ///
    /// This is the intersection-margin adjustment: a viewport expanded by
    /// -100.0 fires triggers only once a section is 100px inside the true
    /// viewport edge; +100.0 fires them 100px early.
    pub fn expand(&self, margin: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x - margin, self.origin.y - margin),
            size: Size::new(
                (self.size.width + 2.0 * margin).max(0.0),
                (self.size.height + 2.0 * margin).max(0.0),
            ),
        }
    }

    /// Check if this rect intersects with another
    ///
    /// Returns true if the two rects overlap at any point. Empty rects
    /// intersect nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.origin.x < other.right()
            && self.right() > other.origin.x
            && self.origin.y < other.bottom()
            && self.bottom() > other.origin.y
    }

    /// Get the intersection of two rects (if they overlap)
    pub fn intersection(&self, other: &Rect) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.origin.x.max(other.origin.x);
        let y = self.origin.y.max(other.origin.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Rect {
            origin: Point::new(x, y),
            size: Size::new(right - x, bottom - y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(0.0, 200.0, 100.0, 100.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(0.0, 100.0, 100.0, 100.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_empty_rect_intersects_nothing() {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let unmeasured = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(unmeasured.is_empty());
        assert!(!viewport.intersects(&unmeasured));
    }

    #[test]
    fn test_expand_negative_shrinks() {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let shrunk = viewport.expand(-100.0);
        assert_eq!(shrunk, Rect::new(100.0, 100.0, 1080.0, 600.0));

        // A section 50px inside the bottom edge intersects the true
        // viewport but not the shrunken one.
        let section = Rect::new(0.0, 750.0, 1280.0, 400.0);
        assert!(viewport.intersects(&section));
        assert!(!shrunk.intersects(&section));
    }

    #[test]
    fn test_expand_positive_grows() {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let grown = viewport.expand(100.0);
        let below = Rect::new(0.0, 850.0, 1280.0, 400.0);
        assert!(!viewport.intersects(&below));
        assert!(grown.intersects(&below));
    }

    #[test]
    fn test_expand_never_inverts() {
        let tiny = Rect::new(0.0, 0.0, 50.0, 50.0);
        let shrunk = tiny.expand(-100.0);
        assert!(shrunk.is_empty());
        assert!(shrunk.size.width >= 0.0 && shrunk.size.height >= 0.0);
    }

    #[test]
    fn test_intersection_area() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let i = a.intersection(&b).unwrap();
        assert_eq!(i, Rect::new(50.0, 50.0, 50.0, 50.0));
        assert!(a.intersection(&Rect::new(500.0, 500.0, 10.0, 10.0)).is_none());
    }
}
