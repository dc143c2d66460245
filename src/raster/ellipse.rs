use std::collections::HashSet;

use crate::geometry::{Line, Point, Rectangle};

/// Which symmetric reflections of the ellipse to emit
///
/// Quadrant numbering follows the rasterizer's reflection order: q1 is the
/// right/top reflection, q2 left/top, q3 left/bottom, q4 right/bottom.
/// Gating individual quadrants rasterizes quarter-arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadrants {
    /// Right/top reflection
    pub q1: bool,
    /// Left/top reflection
    pub q2: bool,
    /// Left/bottom reflection
    pub q3: bool,
    /// Right/bottom reflection
    pub q4: bool,
}

impl Quadrants {
    /// All four reflections (a full ellipse)
    pub const ALL: Self = Self {
        q1: true,
        q2: true,
        q3: true,
        q4: true,
    };

    /// No reflections
    pub const NONE: Self = Self {
        q1: false,
        q2: false,
        q3: false,
        q4: false,
    };

    /// Exactly one quadrant
    const fn only(index: u8) -> Self {
        Self {
            q1: index == 1,
            q2: index == 2,
            q3: index == 3,
            q4: index == 4,
        }
    }
}

/// Rasterize an ellipse inscribed in `bounds` with the midpoint algorithm
///
/// Integer-only Bresenham ellipse error recurrence (`4(1-a)b²` /
/// `4(b1+1)a²` increments); inverted bounds are normalized the way the
/// algorithm expects, so quadrant callers may pass them freely. Output is
/// deduplicated in first-seen order since symmetric reflections can
/// coincide on the axes.
pub fn ellipse(bounds: &Rectangle, quadrants: Quadrants) -> Vec<Point> {
    let mut x0 = i64::from(bounds.left);
    let mut y0 = i64::from(bounds.top);
    let mut x1 = i64::from(bounds.right);
    let mut y1 = i64::from(bounds.bottom);

    let a = (x1 - x0).abs();
    let b = (y1 - y0).abs();
    let mut b1 = b & 1;
    let mut dx = 4 * (1 - a) * b * b;
    let mut dy = 4 * (b1 + 1) * a * a;
    let mut err = dx + dy + b1 * a * a;

    // called with swapped corners: exchange them
    if x0 > x1 {
        x0 = x1;
        x1 += a;
    }
    if y0 > y1 {
        y0 = y1;
    }

    // starting pixel
    y0 += (b + 1) / 2;
    y1 = y0 - b1;
    let a8 = 8 * a * a;
    b1 = 8 * b * b;

    let mut seen = HashSet::new();
    let mut points = Vec::new();
    let mut plot = |x: i64, y: i64| {
        let point = Point::new(x as i32, y as i32);
        if seen.insert(point) {
            points.push(point);
        }
    };

    loop {
        if quadrants.q1 {
            plot(x1, y0);
        }
        if quadrants.q2 {
            plot(x0, y0);
        }
        if quadrants.q3 {
            plot(x0, y1);
        }
        if quadrants.q4 {
            plot(x1, y1);
        }

        let e2 = 2 * err;
        if e2 <= dy {
            y0 += 1;
            y1 -= 1;
            dy += a8;
            err += dy;
        }
        if e2 >= dx || 2 * err > dy {
            x0 += 1;
            x1 -= 1;
            dx += b1;
            err += dx;
        }
        if x0 > x1 {
            break;
        }
    }

    points
}

/// Rasterize a quarter-arc between a line's endpoints
///
/// The relative quadrant of `line.end` with respect to `line.start`
/// selects an ellipse bounding rectangle and the single reflection to
/// draw; the four sign cases of (dx, dy) are exhaustive. Axis-aligned or
/// degenerate lines select no quadrant and yield no points.
pub fn arc(line: &Line) -> Vec<Point> {
    let delta_x = (line.end.x - line.start.x).abs();
    let delta_y = (line.end.y - line.start.y).abs();

    let end_left = line.end.x < line.start.x;
    let end_right = line.end.x > line.start.x;
    let end_below = line.end.y > line.start.y;
    let end_above = line.end.y < line.start.y;

    let (bounds, quadrants) = if end_left && end_below {
        (
            Rectangle {
                top: line.start.y - delta_y,
                left: line.end.x - delta_x,
                right: line.start.x,
                bottom: line.end.y,
            },
            Quadrants::only(1),
        )
    } else if end_left && end_above {
        (
            Rectangle {
                top: line.end.y - delta_y,
                left: line.end.x,
                right: line.start.x + delta_x,
                bottom: line.start.y,
            },
            Quadrants::only(2),
        )
    } else if end_right && end_above {
        (
            Rectangle {
                top: line.end.y,
                left: line.start.x,
                right: line.end.x + delta_x,
                bottom: line.start.y + delta_y,
            },
            Quadrants::only(3),
        )
    } else if end_right && end_below {
        (
            Rectangle {
                top: line.start.y,
                left: line.start.x - delta_x,
                right: line.end.x,
                bottom: line.end.y + delta_y,
            },
            Quadrants::only(4),
        )
    } else {
        return Vec::new();
    };

    ellipse(&bounds, quadrants)
}

/// Rasterize a circle with the midpoint algorithm
///
/// Emits the four symmetric reflections per step without deduplication,
/// matching the raw midpoint emission order.
pub fn circle(center: Point, radius: i32) -> Vec<Point> {
    let mut x = -radius;
    let mut y = 0;
    let mut err = 2 - 2 * radius;
    let mut points = Vec::new();

    loop {
        points.push(Point::new(center.x - x, center.y + y));
        points.push(Point::new(center.x - y, center.y - x));
        points.push(Point::new(center.x + x, center.y - y));
        points.push(Point::new(center.x + y, center.y + x));

        let r = err;
        if r <= y {
            y += 1;
            err += y * 2 + 1;
        }
        if r > x || err > y {
            x += 1;
            err += x * 2 + 1;
        }
        if x >= 0 {
            break;
        }
    }

    points
}
