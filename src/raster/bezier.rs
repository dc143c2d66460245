use crate::error::{GridError, Result};
use crate::geometry::{Line, Point};
use crate::raster::bresenham;

/// Rasterize a quadratic Bezier curve between a line's endpoints
///
/// Zingl's integer curve-stepping algorithm. The control point must not
/// change the sign of the gradient relative to either endpoint; zero
/// curvature (a collinear control point) degenerates to a straight
/// Bresenham segment, as does any remainder after the curve stepping's
/// gradient sign flips.
///
/// # Errors
///
/// Returns [`GridError::InvalidCurvature`] when the control point violates
/// the monotonic-gradient precondition.
pub fn bezier(line: &Line, control: Point) -> Result<Vec<Point>> {
    let mut x0 = line.start.x;
    let mut y0 = line.start.y;
    let x1 = control.x;
    let y1 = control.y;
    let mut x2 = line.end.x;
    let mut y2 = line.end.y;

    let mut sx = x2 - x1;
    let mut sy = y2 - y1;
    let mut xx = i64::from(x0 - x1);
    let mut yy = i64::from(y0 - y1);
    let mut cur = (xx * i64::from(sy) - yy * i64::from(sx)) as f64;

    // sign of gradient must not change
    if xx * i64::from(sx) > 0 || yy * i64::from(sy) > 0 {
        return Err(GridError::InvalidCurvature {
            reason: format!(
                "control point {control} changes gradient sign between {} and {}",
                line.start, line.end
            ),
        });
    }

    // begin with the longer part
    if i64::from(sx) * i64::from(sx) + i64::from(sy) * i64::from(sy) > xx * xx + yy * yy {
        x2 = x0;
        x0 = sx + x1;
        y2 = y0;
        y0 = sy + y1;
        cur = -cur;
    }

    let mut points = Vec::new();

    if cur.abs() > f64::EPSILON {
        xx += i64::from(sx);
        sx = if x0 < x2 { 1 } else { -1 };
        xx *= i64::from(sx);
        yy += i64::from(sy);
        sy = if y0 < y2 { 1 } else { -1 };
        yy *= i64::from(sy);

        let mut xy = 2 * xx * yy;
        xx *= xx;
        yy *= yy;

        // negated curvature?
        if cur * f64::from(sx) * f64::from(sy) < 0.0 {
            xx = -xx;
            yy = -yy;
            xy = -xy;
            cur = -cur;
        }

        let mut dx = 4.0_f64.mul_add(f64::from(sy) * cur * f64::from(x1 - x0), (xx - xy) as f64);
        let mut dy = 4.0_f64.mul_add(f64::from(sx) * cur * f64::from(y0 - y1), (yy - xy) as f64);
        xx += xx;
        yy += yy;
        let mut err = dx + dy + xy as f64;

        loop {
            points.push(Point::new(x0, y0));
            if x0 == x2 && y0 == y2 {
                // last pixel, curve finished
                return Ok(points);
            }

            let step_y = err < dx;
            if 2.0 * err > dy {
                x0 += sx;
                dx -= xy as f64;
                dy += yy as f64;
                err += dy;
            }
            if step_y {
                y0 += sy;
                dy -= xy as f64;
                dx += xx as f64;
                err += dx;
            }

            // gradient negates: curve stepping no longer valid
            if dy >= 0.0 || dx <= 0.0 {
                break;
            }
        }
    }

    // finish the remainder (or the whole curve when curvature is zero)
    // as a straight segment
    if points.last() == Some(&Point::new(x0, y0)) {
        points.pop();
    }
    points.extend(bresenham(&Line::new((x0, y0), (x2, y2))));
    Ok(points)
}
