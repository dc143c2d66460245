//! Generic 2D spatial-grid engine for procedural tile-based worlds
//!
//! A typed rectangular container plus the classic rasterization, fill,
//! visibility and noise algorithms used to synthesize and query tile maps:
//! Bresenham lines, midpoint ellipses and arcs, quadratic Bezier curves,
//! drunken-walk paths, scanline flood fill, radial field of view and
//! multi-octave value noise. Everything runs synchronously on the calling
//! thread; stochastic operations take an explicit random source so a seed
//! fully determines their output.

#![forbid(unsafe_code)]

/// Error types and result alias
pub mod error;
/// Scanline and naive flood fill engines
pub mod fill;
/// Radial ray-cast field of view
pub mod fov;
/// Geometric value types: points, sizes, lines, rectangles
pub mod geometry;
/// The generic grid container and its bulk operations
pub mod grid;
/// Value-noise and multi-resolution noise synthesis
pub mod noise;
/// Line, ellipse, Bezier and drunken-walk rasterizers
pub mod raster;

pub use error::{GridError, Result};
pub use geometry::{Line, Point, Rectangle, Size};
pub use grid::Grid;
