//! Validates the point sequences produced by the line, ellipse, arc,
//! Bezier and drunken-walk rasterizers

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tilefield::raster::{Quadrants, arc, bezier, bresenham, circle, drunken_walk, ellipse};
use tilefield::{GridError, Line, Point, Rectangle};

#[test]
fn test_bresenham_horizontal_line() {
    let points = bresenham(&Line::new((0, 0), (4, 0)));
    assert_eq!(
        points,
        vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(3, 0),
            Point::new(4, 0),
        ]
    );
}

#[test]
fn test_bresenham_diagonal_line() {
    let points = bresenham(&Line::new((0, 0), (3, 3)));
    assert_eq!(
        points,
        vec![
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 2),
            Point::new(3, 3),
        ]
    );
}

#[test]
fn test_bresenham_includes_endpoints_for_steep_lines() {
    let line = Line::new((2, -1), (4, 7));
    let points = bresenham(&line);
    assert_eq!(points.first(), Some(&line.start));
    assert_eq!(points.last(), Some(&line.end));
    // one point per unit step on the dominant axis
    assert_eq!(points.len(), 9);
}

#[test]
fn test_ellipse_is_symmetric_about_both_axes() {
    let bounds = Rectangle::new(0, 0, 4, 4);
    let points: HashSet<_> = ellipse(&bounds, Quadrants::ALL).into_iter().collect();

    assert!(!points.is_empty());
    for point in &points {
        assert!(bounds.in_bounds(*point), "point {point} escaped bounds");
        assert!(points.contains(&Point::new(4 - point.x, point.y)));
        assert!(points.contains(&Point::new(point.x, 4 - point.y)));
    }
}

#[test]
fn test_ellipse_single_quadrant_is_a_quarter() {
    let bounds = Rectangle::new(0, 0, 8, 8);
    let full: HashSet<_> = ellipse(&bounds, Quadrants::ALL).into_iter().collect();
    let quarter = ellipse(
        &bounds,
        Quadrants {
            q1: true,
            q2: false,
            q3: false,
            q4: false,
        },
    );

    assert!(quarter.len() < full.len());
    for point in &quarter {
        assert!(full.contains(point));
        // q1 is the right/top reflection
        assert!(point.x >= 4, "q1 point {point} on the left half");
    }
}

#[test]
fn test_ellipse_accepts_inverted_bounds() {
    let normal = ellipse(&Rectangle::new(0, 0, 6, 4), Quadrants::ALL);
    let inverted = ellipse(&Rectangle::new(4, 6, 0, 0), Quadrants::ALL);
    let normal_set: HashSet<_> = normal.into_iter().collect();
    let inverted_set: HashSet<_> = inverted.into_iter().collect();
    assert_eq!(normal_set, inverted_set);
}

#[test]
fn test_arc_connects_endpoints_for_each_quadrant() {
    let start = Point::new(0, 0);
    for end in [
        Point::new(4, 4),
        Point::new(-4, 4),
        Point::new(4, -4),
        Point::new(-4, -4),
    ] {
        let points = arc(&Line::new(start, end));
        assert!(
            points.contains(&start),
            "arc to {end} is missing its start"
        );
        assert!(points.contains(&end), "arc to {end} is missing its end");
    }
}

#[test]
fn test_circle_contains_cardinal_extremes() {
    let points = circle(Point::new(10, 10), 3);
    for extreme in [
        Point::new(13, 10),
        Point::new(7, 10),
        Point::new(10, 13),
        Point::new(10, 7),
    ] {
        assert!(points.contains(&extreme), "missing {extreme}");
    }
}

#[test]
fn test_bezier_monotone_curve_spans_endpoints() {
    let line = Line::new((0, 0), (8, 4));
    let points = bezier(&line, Point::new(4, 0)).unwrap();

    assert!(points.contains(&line.start));
    assert!(points.contains(&line.end));
    // curve stepping moves at most one cell per axis per emitted point
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!((a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1);
    }
}

#[test]
fn test_bezier_rejects_gradient_sign_change() {
    // control above the chord: y leaves the endpoints' span
    let result = bezier(&Line::new((0, 0), (6, 0)), Point::new(3, 3));
    assert!(matches!(result, Err(GridError::InvalidCurvature { .. })));
}

#[test]
fn test_sober_walk_descends_manhattan_distance() {
    let line = Line::new((0, 0), (9, 5));
    let mut rng = StdRng::seed_from_u64(21);
    let path = drunken_walk(&line, 0.0, None, &mut rng).unwrap();

    assert_eq!(path.first(), Some(&line.start));
    assert_eq!(path.last(), Some(&line.end));
    for pair in path.windows(2) {
        let before = pair[0].manhattan_distance(line.end);
        let after = pair[1].manhattan_distance(line.end);
        assert_eq!(after, before - 1, "sober step must approach the target");
    }
}

#[test]
fn test_drunken_walk_respects_bounds() {
    let line = Line::new((1, 1), (6, 6));
    let bounds = Rectangle::new(0, 0, 7, 7);
    let mut rng = StdRng::seed_from_u64(3);
    let path = drunken_walk(&line, 0.8, Some(bounds), &mut rng).unwrap();

    assert_eq!(path.last(), Some(&line.end));
    for point in &path {
        assert!(bounds.in_bounds(*point), "walk left bounds at {point}");
    }
}
