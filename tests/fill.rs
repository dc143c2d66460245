//! Validates the scanline flood fill against shaped obstacle layouts and
//! against the naive per-cell reference variant

use std::collections::HashSet;

use tilefield::fill::{flood_fill, flood_fill_naive};
use tilefield::{Grid, GridError, Point};

fn blocked_grid(width: usize, height: usize, walls: &[(i32, i32)]) -> Grid<bool> {
    let mut blocks = Grid::new(width, height);
    for &(x, y) in walls {
        blocks.set((x, y), true).unwrap();
    }
    blocks
}

#[test]
fn test_open_grid_floods_completely() {
    let blocks = Grid::<bool>::new(5, 5);
    let flooded = flood_fill(&blocks, (2, 2)).unwrap();
    assert_eq!(flooded.len(), 25);
}

#[test]
fn test_diagonal_wall_confines_the_fill() {
    // a full blocked diagonal separates the x > y side from x < y
    let walls: Vec<_> = (0..5).map(|i| (i, i)).collect();
    let blocks = blocked_grid(5, 5, &walls);

    let flooded = flood_fill(&blocks, (3, 1)).unwrap();
    let expected: HashSet<_> = (0..5)
        .flat_map(|y| (0..5).map(move |x| Point::new(x, y)))
        .filter(|p| p.x > p.y)
        .collect();
    assert_eq!(flooded, expected);
}

#[test]
fn test_fill_passes_through_gaps() {
    // vertical wall at x = 2 with a single gap at y = 3
    let walls: Vec<_> = (0..5).filter(|&y| y != 3).map(|y| (2, y)).collect();
    let blocks = blocked_grid(5, 5, &walls);

    let flooded = flood_fill(&blocks, (0, 0)).unwrap();
    // everything except the four wall cells is reachable
    assert_eq!(flooded.len(), 25 - 4);
    assert!(flooded.contains(&Point::new(4, 4)));
    assert!(!flooded.contains(&Point::new(2, 0)));
}

#[test]
fn test_out_of_bounds_seed_fails() {
    let blocks = Grid::<bool>::new(3, 3);
    assert!(matches!(
        flood_fill(&blocks, (5, 5)),
        Err(GridError::OutOfBounds { .. })
    ));
}

#[test]
fn test_naive_fill_replaces_connected_region() {
    // u8 grid: 1 is a wall, 0 is open; fill open cells with 2
    let mut grid = Grid::<u8>::new(4, 4);
    for y in 0..4 {
        grid.set((1, y), 1).unwrap();
    }

    flood_fill_naive(&mut grid, (0, 0), &0, 2).unwrap();

    // the left column filled, the right side untouched
    for y in 0..4 {
        assert_eq!(grid.get((0, y)).copied().unwrap(), 2);
        assert_eq!(grid.get((1, y)).copied().unwrap(), 1);
        assert_eq!(grid.get((3, y)).copied().unwrap(), 0);
    }
}

#[test]
fn test_scanline_and_naive_agree_on_reachable_set() {
    // U-shaped chamber: walls along x=1 except the bottom row
    let walls: Vec<_> = (0..7)
        .filter(|&y| y != 6)
        .flat_map(|y| [(1, y), (4, y)])
        .collect();
    let blocks = blocked_grid(6, 7, &walls);
    let seed = Point::new(2, 2);

    let scanline = flood_fill(&blocks, seed).unwrap();

    let mut values = blocks.map(|&blocked| u8::from(blocked));
    flood_fill_naive(&mut values, seed, &0, 2).unwrap();
    let mut naive = HashSet::new();
    values.for_each_cell(|&value, point| {
        if value == 2 {
            naive.insert(point);
        }
    });

    assert_eq!(scanline, naive);
}
