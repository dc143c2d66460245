/// Non-negative grid dimensions
///
/// A width or height of zero denotes an empty grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent in cells
    pub width: usize,
    /// Vertical extent in cells
    pub height: usize,
}

impl Size {
    /// Create a size from width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total cell count
    pub const fn area(self) -> usize {
        self.width * self.height
    }
}

impl From<(usize, usize)> for Size {
    fn from((width, height): (usize, usize)) -> Self {
        Self::new(width, height)
    }
}
