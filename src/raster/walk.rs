use rand::Rng;

use crate::error::{GridError, Result, invalid_parameter};
use crate::geometry::{Line, Point, Rectangle};

/// Trace a randomized path from `line.start` to `line.end`
///
/// At each step, with probability `drunkenness` the walk staggers one unit
/// in a uniformly random axis and direction; otherwise it moves one unit
/// along an axis that reduces the remaining Manhattan distance, chosen
/// with probability proportional to that axis's share of the distance.
/// Steps leaving `bounds` revert and retry. Every draw comes from the
/// caller's generator, so a seeded generator reproduces the path.
///
/// # Errors
///
/// Returns [`GridError::InvalidParameter`] when `drunkenness` is outside
/// [0, 1], and [`GridError::StepLimitExceeded`] when the step budget runs
/// out before the walk reaches its target, which happens precisely when
/// `line.end` is unreachable within `bounds`.
pub fn drunken_walk(
    line: &Line,
    drunkenness: f64,
    bounds: Option<Rectangle>,
    rng: &mut impl Rng,
) -> Result<Vec<Point>> {
    if !(0.0..=1.0).contains(&drunkenness) {
        return Err(invalid_parameter(
            "drunkenness",
            &drunkenness,
            &"must be within [0, 1]",
        ));
    }

    let limit = step_budget(line, bounds.as_ref());
    let mut current = line.start;
    let mut points = vec![current];
    let mut steps = 0_usize;

    while current != line.end {
        steps += 1;
        if steps > limit {
            return Err(GridError::StepLimitExceeded { limit });
        }

        let previous = current;

        if rng.random::<f64>() < drunkenness {
            // drunk: stagger in a uniformly random direction
            if rng.random::<f64>() > 0.5 {
                current.x += if rng.random_range(0..2) == 1 { 1 } else { -1 };
            } else {
                current.y += if rng.random_range(0..2) == 1 { 1 } else { -1 };
            }
        } else {
            // sober-ish: still stagger, but only toward the target,
            // weighted by each axis's share of the remaining distance
            let delta_x = f64::from((line.end.x - current.x).abs());
            let delta_y = f64::from((line.end.y - current.y).abs());

            if rng.random::<f64>() < delta_x / (delta_x + delta_y) {
                current.x += (line.end.x - current.x).signum();
            } else {
                current.y += (line.end.y - current.y).signum();
            }
        }

        if let Some(bounds) = &bounds {
            if !bounds.in_bounds(current) {
                current = previous;
                continue;
            }
        }

        points.push(current);
    }

    Ok(points)
}

/// Step budget before the walk gives up
///
/// Generous enough that a reachable target exhausting it has vanishing
/// probability; its purpose is to turn an unreachable target from an
/// infinite retry loop into an error.
fn step_budget(line: &Line, bounds: Option<&Rectangle>) -> usize {
    bounds.map_or_else(
        || 256 * (line.start.manhattan_distance(line.end) as usize + 1),
        |bounds| 64 * bounds.size().area().max(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_same_seed_reproduces_path() {
        let line = Line::new((0, 0), (12, 7));
        let a = drunken_walk(&line, 0.4, None, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = drunken_walk(&line, 0.4, None, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_drunkenness_out_of_range_is_rejected() {
        let line = Line::new((0, 0), (1, 1));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            drunken_walk(&line, 1.5, None, &mut rng),
            Err(GridError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_unreachable_target_fails_instead_of_hanging() {
        // end lies outside the bounds, so every step toward it reverts
        let line = Line::new((1, 1), (10, 10));
        let bounds = Rectangle::new(0, 0, 3, 3);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            drunken_walk(&line, 0.0, Some(bounds), &mut rng),
            Err(GridError::StepLimitExceeded { .. })
        ));
    }
}
