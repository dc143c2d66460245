//! Ray-cast visibility over open and obstructed grids

use tilefield::fov::fov;
use tilefield::{Grid, Point};

#[test]
fn test_open_grid_visibility_is_a_bounded_disc() {
    let blocks = Grid::<bool>::new(11, 11);
    let origin = Point::new(5, 5);
    let radius = 4;

    let visible = fov(&blocks, radius, origin);

    assert!(*visible.get(origin).unwrap());
    visible.for_each_cell(|&seen, point| {
        if seen {
            // rays march in unit steps from the cell center, so nothing
            // beyond radius + 1 in either axis can be reached
            assert!((point.x - origin.x).abs() <= radius + 1);
            assert!((point.y - origin.y).abs() <= radius + 1);
        }
    });
}

#[test]
fn test_cardinal_neighbors_are_visible() {
    let blocks = Grid::<bool>::new(9, 9);
    let visible = fov(&blocks, 3, (4, 4));
    for neighbor in Point::new(4, 4).neighbors() {
        assert!(*visible.get(neighbor).unwrap(), "expected {neighbor} visible");
    }
}

#[test]
fn test_wall_is_visible_but_occludes_behind_it() {
    // solid column at x = 4
    let mut blocks = Grid::<bool>::new(7, 7);
    for y in 0..7 {
        blocks.set((4, y), true).unwrap();
    }

    let visible = fov(&blocks, 5, (1, 3));

    // the blocking cell straight ahead is seen, the cell behind it is not
    assert!(*visible.get((4, 3)).unwrap());
    assert!(!*visible.get((5, 3)).unwrap());
    assert!(!*visible.get((6, 3)).unwrap());
}

#[test]
fn test_adjacent_blocker_still_leaves_origin_visible() {
    let mut blocks = Grid::<bool>::new(3, 3);
    blocks.set((2, 1), true).unwrap();
    let visible = fov(&blocks, 2, (1, 1));
    assert!(*visible.get((1, 1)).unwrap());
    assert!(*visible.get((2, 1)).unwrap());
}
