//! Error types for grid and rasterization operations

use std::fmt;

use crate::geometry::Point;

/// Main error type for all grid engine operations
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A coordinate fell outside the grid's dimensions
    OutOfBounds {
        /// The offending coordinate
        point: Point,
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// A batch operation received grids of unequal size
    SizeMismatch {
        /// Size of the first grid (width, height)
        expected: (usize, usize),
        /// Size of the grid that disagreed
        actual: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Bezier control point violates the monotonic-gradient precondition
    ///
    /// The sign of the gradient from the control point to each endpoint
    /// must not change, or the curve stepping algorithm diverges.
    InvalidCurvature {
        /// Description of the violation
        reason: String,
    },

    /// Normalization over a constant field (max == min)
    DegenerateRange {
        /// The single value every cell holds
        value: f64,
    },

    /// A randomized walk exhausted its step budget before reaching its target
    ///
    /// Occurs when the walk's endpoint is unreachable within the supplied
    /// bounds; the budget turns what would be an infinite retry loop into
    /// an immediate failure.
    StepLimitExceeded {
        /// The exhausted budget
        limit: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point, dimensions } => {
                write!(
                    f,
                    "Point ({}, {}) is outside grid dimensions {}x{}",
                    point.x, point.y, dimensions.0, dimensions.1
                )
            }
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Grid size mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCurvature { reason } => {
                write!(f, "Invalid curvature: {reason}")
            }
            Self::DegenerateRange { value } => {
                write!(f, "Cannot normalize constant field (every cell is {value})")
            }
            Self::StepLimitExceeded { limit } => {
                write!(f, "Walk exceeded step budget of {limit} without reaching its target")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for grid engine results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_coordinates() {
        let err = GridError::OutOfBounds {
            point: Point::new(7, -1),
            dimensions: (5, 5),
        };
        assert_eq!(err.to_string(), "Point (7, -1) is outside grid dimensions 5x5");
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("tile_size", &0, &"must be positive");
        match err {
            GridError::InvalidParameter { parameter, value, .. } => {
                assert_eq!(parameter, "tile_size");
                assert_eq!(value, "0");
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }
}
