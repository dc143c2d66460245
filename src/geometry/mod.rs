//! Geometric value types used throughout the engine
//!
//! Pure data with derived accessors: integer points, sizes, directed lines
//! and inclusive rectangles. No algorithmic behavior lives here.

/// Directed start/end point pair
pub mod line;
/// Integer 2D coordinate
pub mod point;
/// Inclusive axis-aligned rectangle
pub mod rectangle;
/// Non-negative width/height pair
pub mod size;

pub use line::Line;
pub use point::Point;
pub use rectangle::Rectangle;
pub use size::Size;
