use crate::geometry::Point;

/// A directed start/end point pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// First endpoint
    pub start: Point,
    /// Last endpoint
    pub end: Point,
}

impl Line {
    /// Create a line between two points
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Euclidean distance between the endpoints
    pub fn length(&self) -> f64 {
        let dx = f64::from(self.end.x - self.start.x);
        let dy = f64::from(self.end.y - self.start.y);
        dx.hypot(dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_is_euclidean() {
        let line = Line::new((0, 0), (3, 4));
        assert!((line.length() - 5.0).abs() < f64::EPSILON);
    }
}
