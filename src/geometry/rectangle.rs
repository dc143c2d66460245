use crate::geometry::{Point, Size};

/// An inclusive axis-aligned rectangle
///
/// `left <= right` and `top <= bottom` are NOT enforced: the ellipse
/// rasterizer deliberately builds inverted rectangles for quadrant bounds
/// and normalizes them itself. Width and height are derived inclusively,
/// so a rectangle whose corners coincide has size 1x1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Smallest y coordinate
    pub top: i32,
    /// Smallest x coordinate
    pub left: i32,
    /// Largest x coordinate (inclusive)
    pub right: i32,
    /// Largest y coordinate (inclusive)
    pub bottom: i32,
}

impl Rectangle {
    /// Create a rectangle from its four edges
    pub const fn new(top: i32, left: i32, right: i32, bottom: i32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// The rectangle covering `[0, width) x [0, height)`
    pub const fn of_size(width: usize, height: usize) -> Self {
        Self::new(0, 0, width as i32 - 1, height as i32 - 1)
    }

    /// Inclusive horizontal extent
    pub const fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    /// Inclusive vertical extent
    pub const fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    /// Dimensions as a size, clamping inverted extents to zero
    pub const fn size(&self) -> Size {
        let width = self.width();
        let height = self.height();
        Size::new(
            if width < 0 { 0 } else { width as usize },
            if height < 0 { 0 } else { height as usize },
        )
    }

    /// Corner at (left, top)
    pub const fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Corner at (right, top)
    pub const fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    /// Corner at (right, bottom)
    pub const fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// Corner at (left, bottom)
    pub const fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    /// Whether a point lies inside the rectangle, edges inclusive
    pub const fn in_bounds(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}
