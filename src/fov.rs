//! Radial ray-cast field of view
//!
//! Casts 360 rays at one-degree increments from a cell center and marches
//! each outward in unit steps. The result is a conservative,
//! direction-quantized visibility approximation: rays are independent and
//! never merge or interpolate between the angular samples.

use crate::geometry::Point;
use crate::grid::Grid;

// Truncated radians per degree. Visibility shapes are sensitive to the
// angular step, so the constant stays at exactly this precision.
const DEGREE: f64 = 0.017_45;

/// Compute the cells visible from `origin` within `radius` steps
///
/// `true` cells in `blocks` stop rays; the blocking cell itself is marked
/// visible before its ray stops. Returns a visibility grid the same size
/// as `blocks`. A radius of 0 sees only the origin cell.
pub fn fov(blocks: &Grid<bool>, radius: i32, origin: impl Into<Point>) -> Grid<bool> {
    let origin = origin.into();
    let mut visible = Grid::new(blocks.width(), blocks.height());

    for degree in 0..360 {
        let angle = f64::from(degree) * DEGREE;
        cast_ray(&mut visible, blocks, radius, origin, angle.cos(), angle.sin());
    }

    visible
}

/// March one ray outward from the origin's cell center
fn cast_ray(
    visible: &mut Grid<bool>,
    blocks: &Grid<bool>,
    radius: i32,
    origin: Point,
    direction_x: f64,
    direction_y: f64,
) {
    let mut ray_x = f64::from(origin.x) + 0.5;
    let mut ray_y = f64::from(origin.y) + 0.5;

    for _ in 0..=radius {
        let cell = Point::new(ray_x as i32, ray_y as i32);
        // out-of-bounds cells are skipped but the ray keeps marching,
        // since it may re-enter the grid
        let _ = visible.set(cell, true);
        if blocks.get(cell).is_ok_and(|blocked| *blocked) {
            return;
        }
        ray_x += direction_x;
        ray_y += direction_y;
    }
}
