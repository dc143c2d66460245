//! Flood fill over boolean obstacle grids
//!
//! The primary engine is a scanline span fill: whole horizontal runs are
//! filled and queued at once, bounding work to O(cells) regardless of the
//! region's shape. A naive per-cell variant is kept as a simpler reference
//! implementation over value-matched grids; both produce the same
//! reachable set for a given obstacle layout.

use std::collections::{HashSet, VecDeque};

use bitvec::prelude::*;

use crate::error::{Result, invalid_parameter};
use crate::geometry::Point;
use crate::grid::Grid;

/// A horizontal span of contiguous floodable cells at row `y`
///
/// Ephemeral: produced and consumed only inside the fill's work queue.
#[derive(Debug, Clone, Copy)]
struct Span {
    start_x: i32,
    end_x: i32,
    y: i32,
}

/// Scanline flood fill state over a blocked-cell grid
struct ScanlineFiller<'a> {
    blocks: &'a Grid<bool>,
    flooded: BitVec,
    spans: VecDeque<Span>,
}

impl<'a> ScanlineFiller<'a> {
    fn new(blocks: &'a Grid<bool>) -> Self {
        Self {
            blocks,
            flooded: bitvec![0; blocks.size().area()],
            spans: VecDeque::new(),
        }
    }

    /// Fill the maximal span through (x, y), mark it flooded and queue it
    fn linear_fill(&mut self, x: i32, y: i32) -> Result<()> {
        let start = Point::new(x, y);
        let leftmost = self.blocks.leftmost_where(start, |blocked| !*blocked)?;
        let rightmost = self.blocks.rightmost_where(start, |blocked| !*blocked)?;

        for span_x in leftmost..=rightmost {
            let index = self.cell_index(span_x, y);
            self.flooded.set(index, true);
        }
        self.spans.push_back(Span {
            start_x: leftmost,
            end_x: rightmost,
            y,
        });
        Ok(())
    }

    /// Whether (x, y) is in bounds, unblocked and not yet flooded
    fn is_floodable(&self, x: i32, y: i32) -> bool {
        let point = Point::new(x, y);
        self.blocks.get(point).is_ok_and(|blocked| !*blocked)
            && !self.flooded[self.cell_index(x, y)]
    }

    fn cell_index(&self, x: i32, y: i32) -> usize {
        y as usize * self.blocks.width() + x as usize
    }

    fn run(&mut self, seed: Point) -> Result<()> {
        self.linear_fill(seed.x, seed.y)?;

        while let Some(span) = self.spans.pop_front() {
            let up = span.y - 1;
            let down = span.y + 1;
            for x in span.start_x..=span.end_x {
                if self.is_floodable(x, up) {
                    self.linear_fill(x, up)?;
                }
                if self.is_floodable(x, down) {
                    self.linear_fill(x, down)?;
                }
            }
        }
        Ok(())
    }

    fn flooded_points(&self) -> HashSet<Point> {
        let width = self.blocks.width();
        self.flooded
            .iter_ones()
            .map(|index| Point::new((index % width) as i32, (index / width) as i32))
            .collect()
    }
}

/// Compute the region reachable from `seed` without crossing blocked cells
///
/// `true` cells in `blocks` are obstacles; reachability is 4-directional.
///
/// # Errors
///
/// Returns [`crate::error::GridError::OutOfBounds`] when the seed is
/// outside the grid and [`crate::error::GridError::InvalidParameter`]
/// when it sits on a blocked cell.
pub fn flood_fill(blocks: &Grid<bool>, seed: impl Into<Point>) -> Result<HashSet<Point>> {
    let seed = seed.into();
    if *blocks.get(seed)? {
        return Err(invalid_parameter(
            "seed",
            &seed,
            &"seed cell must be unblocked",
        ));
    }

    let mut filler = ScanlineFiller::new(blocks);
    filler.run(seed)?;
    Ok(filler.flooded_points())
}

/// Naive per-cell flood fill, replacing matching values in place
///
/// Reference variant of [`flood_fill`]: walks a cell queue over the grid,
/// replacing every 4-connected cell equal to `target` with `replacement`
/// starting from `seed`. Slower than the scanline engine but reaches the
/// identical cell set when `target` marks the unblocked cells.
///
/// # Errors
///
/// Returns [`crate::error::GridError::OutOfBounds`] when the seed is
/// outside the grid and [`crate::error::GridError::InvalidParameter`]
/// when `target == replacement` (the fill would never terminate).
pub fn flood_fill_naive<T: PartialEq + Clone>(
    grid: &mut Grid<T>,
    seed: impl Into<Point>,
    target: &T,
    replacement: T,
) -> Result<()> {
    if target == &replacement {
        return Err(invalid_parameter(
            "replacement",
            &"<value>",
            &"target and replacement must differ",
        ));
    }
    let seed = seed.into();
    grid.get(seed)?;

    let mut queue = VecDeque::new();
    queue.push_back(seed);

    while let Some(next) = queue.pop_front() {
        if grid.get(next).is_ok_and(|value| value != target) {
            continue;
        }

        // walk west from the seed cell and east from its neighbor,
        // replacing and queueing vertical neighbors along the way
        for (mut x, step) in [(next.x, -1), (next.x + 1, 1)] {
            while grid
                .get(Point::new(x, next.y))
                .is_ok_and(|value| value == target)
            {
                grid.set(Point::new(x, next.y), replacement.clone())?;
                for neighbor_y in [next.y - 1, next.y + 1] {
                    let neighbor = Point::new(x, neighbor_y);
                    if grid.get(neighbor).is_ok_and(|value| value == target) {
                        queue.push_back(neighbor);
                    }
                }
                x += step;
            }
        }
    }

    Ok(())
}
