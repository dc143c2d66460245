//! Stateless rasterization algorithms
//!
//! Each rasterizer converts a geometric input (line, ellipse bounds, Bezier
//! control triple, randomized-walk endpoints) into a sequence of
//! grid-addressable points. Nothing here touches a grid; callers draw the
//! returned points however they like.

/// Rational quadratic Bezier curves
pub mod bezier;
/// Integer-error line rasterization
pub mod bresenham;
/// Midpoint ellipses, circles and quarter-arcs
pub mod ellipse;
/// Randomized "drunken walk" path tracing
pub mod walk;

pub use bezier::bezier;
pub use bresenham::bresenham;
pub use ellipse::{Quadrants, arc, circle, ellipse};
pub use walk::drunken_walk;
