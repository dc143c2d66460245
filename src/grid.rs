//! Generic 2D grid container
//!
//! A fixed-size rectangular array of values addressable by point or (x, y)
//! pair, with bulk operations (fill, map, copy, paste, resample, split) used
//! by every other part of the engine. The backing store is a single
//! row-major [`Array2`]; rows, columns and the flat cell stream are computed
//! views of it, never separately maintained caches.

use ndarray::Array2;

use crate::error::{GridError, Result, invalid_parameter};
use crate::geometry::{Point, Rectangle, Size};

/// A dense 2D grid of `T`
///
/// Dimensions are fixed at construction; a "resized" grid is always a new
/// grid produced by [`Grid::copy`], [`Grid::interpolate`] or [`Grid::split`].
/// Plain indexing never wraps; wrapping is the explicit opt-in behavior of
/// [`Grid::paste`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T: Default> Default for Grid<T> {
    fn default() -> Self {
        Self {
            cells: Array2::default((0, 0)),
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid of default-valued cells
    ///
    /// A width or height of zero produces an empty grid with no backing
    /// store.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::default((height, width)),
        }
    }

    /// Create a grid from a size
    pub fn with_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// Extract a sub-region as a new grid
    ///
    /// The result is sized to `rect`; destination cell (x, y) maps to
    /// source cell (rect.left + x, rect.top + y). Source cells outside the
    /// original bounds copy as the default value rather than failing, so a
    /// viewport may overhang the source edges.
    pub fn copy(&self, rect: Rectangle) -> Self {
        let bounds = self.bounds();
        let mut copied = Self::with_size(rect.size());
        copied.set_each(|_, point| {
            let source = Point::new(rect.left + point.x, rect.top + point.y);
            if bounds.in_bounds(source) {
                self.cells[(source.y as usize, source.x as usize)].clone()
            } else {
                T::default()
            }
        });
        copied
    }

    /// Extract the entire grid (equivalent to `copy(self.bounds())`)
    pub fn copy_all(&self) -> Self {
        self.copy(self.bounds())
    }

    /// Paste another grid into this one at `location`
    ///
    /// Cells landing outside the bounds are skipped when `wrap` is false,
    /// or wrapped into the grid by non-negative modulo when `wrap` is true.
    pub fn paste(&mut self, other: &Self, location: impl Into<Point>, wrap: bool) {
        if self.size().is_empty() {
            return;
        }
        let location = location.into();
        let bounds = self.bounds();
        other.for_each_cell(|value, point| {
            let mut target = Point::new(location.x + point.x, location.y + point.y);
            if !bounds.in_bounds(target) {
                if !wrap {
                    return;
                }
                target = target.wrap(&bounds);
            }
            self.cells[(target.y as usize, target.x as usize)] = value.clone();
        });
    }

    /// Resample to a new resolution by nearest-neighbor sampling
    ///
    /// Each target cell takes the source cell at the floor of its scaled
    /// coordinate. Numeric grids wanting a smooth resample use
    /// [`Grid::interpolate_smooth`] instead; the asymmetry is deliberate and
    /// callers choose their element type to select one or the other.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] when resampling an empty
    /// grid to a non-empty size.
    pub fn interpolate(&self, new_size: Size) -> Result<Self> {
        if self.size().is_empty() && !new_size.is_empty() {
            return Err(invalid_parameter(
                "new_size",
                &format!("{}x{}", new_size.width, new_size.height),
                &"cannot resample an empty grid to a non-empty size",
            ));
        }

        let x_ratio = self.width() as f64 / new_size.width as f64;
        let y_ratio = self.height() as f64 / new_size.height as f64;

        let mut resampled = Self::with_size(new_size);
        resampled.set_each(|_, point| {
            let source_x = ((f64::from(point.x) * x_ratio).floor() as usize).min(self.width() - 1);
            let source_y = ((f64::from(point.y) * y_ratio).floor() as usize).min(self.height() - 1);
            self.cells[(source_y, source_x)].clone()
        });
        Ok(resampled)
    }

    /// Partition into a grid of equal square tiles
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] when `tile_size` is zero or
    /// either dimension is not an exact multiple of it.
    pub fn split(&self, tile_size: usize) -> Result<Grid<Self>> {
        validate_tile_size(tile_size, self.width(), self.height())?;

        let across = self.width() / tile_size;
        let down = self.height() / tile_size;
        let mut tiles = Grid::<Self>::new(across, down);
        tiles.set_each(|_, point| {
            let left = point.x * tile_size as i32;
            let top = point.y * tile_size as i32;
            self.copy(Rectangle::new(
                top,
                left,
                left + tile_size as i32 - 1,
                top + tile_size as i32 - 1,
            ))
        });
        Ok(tiles)
    }

    /// Replace the cell contents from a flat row-major sequence
    ///
    /// Fewer values than capacity pad the remainder with defaults; excess
    /// values are ignored. Image-import collaborators rely on this exact
    /// truncate/pad policy.
    pub fn set_cells<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut values = values.into_iter();
        self.set_with(|| values.next().unwrap_or_default());
    }
}

impl<T> Grid<T> {
    /// Horizontal extent in cells
    pub fn width(&self) -> usize {
        self.cells.dim().1
    }

    /// Vertical extent in cells
    pub fn height(&self) -> usize {
        self.cells.dim().0
    }

    /// Dimensions as a size
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The rectangle `(0, 0)..=(width-1, height-1)`
    pub fn bounds(&self) -> Rectangle {
        Rectangle::of_size(self.width(), self.height())
    }

    /// Whether a point lies within the grid
    pub fn in_bounds(&self, point: Point) -> bool {
        self.bounds().in_bounds(point)
    }

    /// Read a cell
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] outside `[0, width) x [0, height)`.
    pub fn get(&self, point: impl Into<Point>) -> Result<&T> {
        let point = point.into();
        self.cells
            .get(self.index(point)?)
            .ok_or_else(|| self.out_of_bounds(point))
    }

    /// Mutably borrow a cell
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] outside `[0, width) x [0, height)`.
    pub fn get_mut(&mut self, point: impl Into<Point>) -> Result<&mut T> {
        let point = point.into();
        let index = self.index(point)?;
        let error = self.out_of_bounds(point);
        self.cells.get_mut(index).ok_or(error)
    }

    /// Write a cell
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] outside `[0, width) x [0, height)`.
    pub fn set(&mut self, point: impl Into<Point>, value: T) -> Result<()> {
        *self.get_mut(point)? = value;
        Ok(())
    }

    /// Visit every cell in row-major order (y outer, x inner)
    ///
    /// The order is part of the contract: text rendering and row-major
    /// serialization depend on left-to-right, top-to-bottom emission.
    pub fn for_each_cell(&self, mut action: impl FnMut(&T, Point)) {
        let (height, width) = self.cells.dim();
        for y in 0..height {
            for x in 0..width {
                action(&self.cells[(y, x)], Point::new(x as i32, y as i32));
            }
        }
    }

    /// Overwrite every cell with a single value
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    /// Overwrite every cell from a generator, in row-major order
    ///
    /// Row-major write order is guaranteed so stateful generators (such as
    /// draws from a seeded random source) are reproducible.
    pub fn set_with(&mut self, mut generate: impl FnMut() -> T) {
        self.set_each(|_, _| generate());
    }

    /// Overwrite every cell from its current value and position, row-major
    pub fn set_each(&mut self, mut transform: impl FnMut(&T, Point) -> T) {
        let (height, width) = self.cells.dim();
        for y in 0..height {
            for x in 0..width {
                let point = Point::new(x as i32, y as i32);
                let value = transform(&self.cells[(y, x)], point);
                self.cells[(y, x)] = value;
            }
        }
    }

    /// Produce a same-sized grid by converting every cell
    pub fn map<U>(&self, convert: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.map(convert),
        }
    }

    /// Count the cells whose values differ from another grid's
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeMismatch`] when the sizes differ.
    pub fn difference(&self, other: &Self) -> Result<usize>
    where
        T: PartialEq,
    {
        if self.cells.dim() != other.cells.dim() {
            return Err(GridError::SizeMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        Ok(self
            .cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count())
    }

    /// The flat row-major cell stream, read-only
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Rows as contiguous slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.rows().into_iter().filter_map(|row| row.to_slice())
    }

    /// Render the grid as text, one row per line
    ///
    /// Each cell is converted by the caller; rows are newline-terminated.
    pub fn render(&self, mut convert: impl FnMut(&T) -> String) -> String {
        let mut out = String::new();
        for row in self.rows() {
            for cell in row {
                out.push_str(&convert(cell));
            }
            out.push('\n');
        }
        out
    }

    /// Leftmost x from `start` (inclusive) whose run still satisfies the predicate
    ///
    /// Scans left from `start` while cells match; used by the scanline
    /// flood filler to find span edges.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `start` is outside the grid.
    pub fn leftmost_where(&self, start: Point, mut predicate: impl FnMut(&T) -> bool) -> Result<i32> {
        self.get(start)?;
        let mut x = start.x;
        while x >= 0 && predicate(&self.cells[(start.y as usize, x as usize)]) {
            x -= 1;
        }
        Ok(x + 1)
    }

    /// Rightmost x from `start` (inclusive) whose run still satisfies the predicate
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `start` is outside the grid.
    pub fn rightmost_where(
        &self,
        start: Point,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> Result<i32> {
        self.get(start)?;
        let mut x = start.x;
        while x < self.width() as i32 && predicate(&self.cells[(start.y as usize, x as usize)]) {
            x += 1;
        }
        Ok(x - 1)
    }

    fn index(&self, point: Point) -> Result<(usize, usize)> {
        if self.in_bounds(point) {
            Ok((point.y as usize, point.x as usize))
        } else {
            Err(self.out_of_bounds(point))
        }
    }

    fn out_of_bounds(&self, point: Point) -> GridError {
        GridError::OutOfBounds {
            point,
            dimensions: (self.width(), self.height()),
        }
    }
}

impl<T: Clone + Default> Grid<Grid<T>> {
    /// Reassemble a grid of equal square tiles into one grid
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] when `tile_size` is zero, or
    /// [`GridError::SizeMismatch`] when any tile is not `tile_size` square.
    pub fn unsplit(&self, tile_size: usize) -> Result<Grid<T>> {
        if tile_size == 0 {
            return Err(invalid_parameter("tile_size", &0, &"must be positive"));
        }
        for row in self.rows() {
            for tile in row {
                if tile.size() != Size::new(tile_size, tile_size) {
                    return Err(GridError::SizeMismatch {
                        expected: (tile_size, tile_size),
                        actual: (tile.width(), tile.height()),
                    });
                }
            }
        }

        let mut joined = Grid::new(self.width() * tile_size, self.height() * tile_size);
        self.for_each_cell(|tile, point| {
            joined.paste(
                tile,
                Point::new(point.x * tile_size as i32, point.y * tile_size as i32),
                false,
            );
        });
        Ok(joined)
    }
}

impl Grid<f64> {
    /// Resample by bilinear interpolation
    ///
    /// Computes the four neighboring samples for each target cell and
    /// blends by the fractional offsets. The "ceiling" neighbor wraps to
    /// index 0 when `wrap` is true (toroidal resampling for tiling noise)
    /// or clamps to the last valid index when false.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] when resampling an empty
    /// grid to a non-empty size.
    pub fn interpolate_smooth(&self, new_size: Size, wrap: bool) -> Result<Self> {
        if self.size().is_empty() && !new_size.is_empty() {
            return Err(invalid_parameter(
                "new_size",
                &format!("{}x{}", new_size.width, new_size.height),
                &"cannot resample an empty grid to a non-empty size",
            ));
        }

        let x_ratio = self.width() as f64 / new_size.width as f64;
        let y_ratio = self.height() as f64 / new_size.height as f64;
        let width = self.width();
        let height = self.height();

        let mut resampled = Self::with_size(new_size);
        resampled.set_each(|_, point| {
            let scaled_x = f64::from(point.x) * x_ratio;
            let scaled_y = f64::from(point.y) * y_ratio;
            let floor_x = (scaled_x.floor() as usize).min(width - 1);
            let floor_y = (scaled_y.floor() as usize).min(height - 1);

            let mut ceiling_x = floor_x + 1;
            if ceiling_x >= width {
                ceiling_x = if wrap { 0 } else { floor_x };
            }
            let mut ceiling_y = floor_y + 1;
            if ceiling_y >= height {
                ceiling_y = if wrap { 0 } else { floor_y };
            }

            let fraction_x = scaled_x - floor_x as f64;
            let fraction_y = scaled_y - floor_y as f64;
            let one_less_x = 1.0 - fraction_x;
            let one_less_y = 1.0 - fraction_y;

            let c1 = self.cells[(floor_y, floor_x)];
            let c2 = self.cells[(floor_y, ceiling_x)];
            let c3 = self.cells[(ceiling_y, floor_x)];
            let c4 = self.cells[(ceiling_y, ceiling_x)];

            let b1 = one_less_x.mul_add(c1, fraction_x * c2);
            let b2 = one_less_x.mul_add(c3, fraction_x * c4);

            one_less_y.mul_add(b1, fraction_y * b2)
        });
        Ok(resampled)
    }

    /// Combine same-sized grids by iterative pairwise averaging
    ///
    /// Each step computes `(accumulated + next) / 2`, which for more than
    /// two grids is NOT a true arithmetic mean: later grids carry more
    /// weight. Downstream terrain generation depends on that exact bias,
    /// so it is a behavioral contract, not a bug to fix.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] for an empty slice, or
    /// [`GridError::SizeMismatch`] when any grid's size differs from the
    /// first's.
    pub fn average(grids: &[Self]) -> Result<Self> {
        let Some(first) = grids.first() else {
            return Err(invalid_parameter(
                "grids",
                &"[]",
                &"need at least one grid to average",
            ));
        };

        let mut accumulated = first.clone();
        for grid in grids.iter().skip(1) {
            if grid.size() != first.size() {
                return Err(GridError::SizeMismatch {
                    expected: (first.width(), first.height()),
                    actual: (grid.width(), grid.height()),
                });
            }
            let mut next = grid.cells().copied();
            accumulated.set_each(|current, _| {
                let value = next.next().unwrap_or_default();
                (current + value) / 2.0
            });
        }
        Ok(accumulated)
    }
}

impl Grid<u8> {
    /// Resample by bilinear interpolation, routed through `f64`
    ///
    /// Same neighbor and wrap policy as the `f64` version; resulting values
    /// are clamped to 0..=255.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] when resampling an empty
    /// grid to a non-empty size.
    pub fn interpolate_smooth(&self, new_size: Size, wrap: bool) -> Result<Self> {
        let smooth = self.map(|&v| f64::from(v)).interpolate_smooth(new_size, wrap)?;
        Ok(smooth.map(|&v| v.clamp(0.0, 255.0) as u8))
    }

    /// Combine same-sized byte grids by iterative pairwise averaging
    ///
    /// Integer arithmetic, same later-element bias as the float version.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] for an empty slice, or
    /// [`GridError::SizeMismatch`] when any grid's size differs from the
    /// first's.
    pub fn average(grids: &[Self]) -> Result<Self> {
        let Some(first) = grids.first() else {
            return Err(invalid_parameter(
                "grids",
                &"[]",
                &"need at least one grid to average",
            ));
        };

        let mut accumulated = first.clone();
        for grid in grids.iter().skip(1) {
            if grid.size() != first.size() {
                return Err(GridError::SizeMismatch {
                    expected: (first.width(), first.height()),
                    actual: (grid.width(), grid.height()),
                });
            }
            let mut next = grid.cells().copied();
            accumulated.set_each(|current, _| {
                let value = next.next().unwrap_or_default();
                ((u16::from(*current) + u16::from(value)) / 2) as u8
            });
        }
        Ok(accumulated)
    }
}

fn validate_tile_size(tile_size: usize, width: usize, height: usize) -> Result<()> {
    if tile_size == 0 {
        return Err(invalid_parameter("tile_size", &0, &"must be positive"));
    }
    if width % tile_size != 0 || height % tile_size != 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("grid dimensions {width}x{height} must be exact multiples"),
        ));
    }
    Ok(())
}
