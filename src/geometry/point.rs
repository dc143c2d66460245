use std::fmt;

use crate::geometry::Rectangle;

/// An integer 2D coordinate
///
/// Equality is structural; points are hashable so they can live in point
/// sets produced by the flood fill and rasterizers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal component (column)
    pub x: i32,
    /// Vertical component (row)
    pub y: i32,
}

impl Point {
    /// Create a point from x and y components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point displaced by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 4-directional neighbors (up, down, left, right)
    pub const fn neighbors(self) -> [Self; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
        ]
    }

    /// Sum of absolute axis distances to another point
    pub const fn manhattan_distance(self, other: Self) -> i32 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// Wrap both components into a rectangle's dimensions
    ///
    /// Uses non-negative modulo, so negative coordinates wrap to the far
    /// edge rather than mirroring.
    pub const fn wrap(self, bounds: &Rectangle) -> Self {
        Self::new(
            wrap_component(self.x, bounds.width()),
            wrap_component(self.y, bounds.height()),
        )
    }
}

/// Non-negative modulo of a coordinate into a dimension
const fn wrap_component(value: i32, dimension: i32) -> i32 {
    ((value % dimension) + dimension) % dimension
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
