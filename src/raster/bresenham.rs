use crate::geometry::{Line, Point};

/// Rasterize a line with Bresenham's integer error accumulator
///
/// Always includes both endpoints and produces exactly one point per
/// integer step, terminating when the current point reaches `line.end`.
pub fn bresenham(line: &Line) -> Vec<Point> {
    let delta_x = (line.end.x - line.start.x).abs();
    let delta_y = (line.end.y - line.start.y).abs();
    let step_x = (line.end.x - line.start.x).signum();
    let step_y = (line.end.y - line.start.y).signum();

    let mut error = delta_x - delta_y;
    let mut current = line.start;
    let mut points = Vec::with_capacity((delta_x.max(delta_y) + 1) as usize);

    loop {
        points.push(current);
        if current == line.end {
            break;
        }

        let error2 = 2 * error;
        if error2 > -delta_y {
            error -= delta_y;
            current.x += step_x;
        }
        if error2 < delta_x {
            error += delta_x;
            current.y += step_y;
        }
    }

    points
}
