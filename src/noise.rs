//! Band-limited pseudo-random scalar fields
//!
//! Two independent techniques: multi-octave value noise over a toroidal
//! base grid, and a simpler multi-resolution averaging noise used for
//! terrain generation. Both draw exclusively from a caller-supplied
//! generator, so a seed fully determines the output field.

use num_traits::Float;
use rand::Rng;

use crate::error::{GridError, Result, invalid_parameter};
use crate::geometry::Size;
use crate::grid::Grid;

/// Octave accumulation parameters for [`NoiseField::value`]
#[derive(Debug, Clone, Copy)]
pub struct NoiseParams {
    /// Base sampling frequency, doubled every octave
    pub frequency: f64,
    /// Base amplitude, multiplied by `persistence` every octave
    pub amplitude: f64,
    /// Per-octave amplitude decay
    pub persistence: f64,
    /// Number of octaves to accumulate
    pub octaves: u32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            frequency: 0.0625,
            amplitude: 1.0,
            persistence: 0.5,
            octaves: 8,
        }
    }
}

/// A base grid of uniform random values in [-1, 1] sampled toroidally
///
/// The field wraps in both axes, so octave sampling beyond the base
/// resolution tiles seamlessly.
#[derive(Debug, Clone)]
pub struct NoiseField {
    base: Grid<f64>,
}

impl NoiseField {
    /// Generate a base field of independent uniform values in [-1, 1]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] for an empty size.
    pub fn generate(size: Size, rng: &mut impl Rng) -> Result<Self> {
        if size.is_empty() {
            return Err(invalid_parameter(
                "size",
                &format!("{}x{}", size.width, size.height),
                &"noise field must have positive dimensions",
            ));
        }
        let mut base = Grid::with_size(size);
        base.set_with(|| (rng.random::<f64>() - 0.5) * 2.0);
        Ok(Self { base })
    }

    /// Accumulate octaves of smoothed noise at a cell coordinate
    ///
    /// Sums `smooth(x * freq, y * freq) * amplitude` over the octaves,
    /// doubling the frequency and scaling the amplitude by the persistence
    /// each iteration; the result is clamped to [-1, 1].
    pub fn value(&self, x: i32, y: i32, params: &NoiseParams) -> f64 {
        let mut frequency = params.frequency;
        let mut amplitude = params.amplitude;
        let mut total = 0.0;

        for _ in 0..params.octaves {
            total += self.smooth(f64::from(x) * frequency, f64::from(y) * frequency) * amplitude;
            frequency *= 2.0;
            amplitude *= params.persistence;
        }

        total.clamp(-1.0, 1.0)
    }

    /// Toroidal bilinear blend of the four base samples nearest (x, y)
    fn smooth(&self, x: f64, y: f64) -> f64 {
        let width = self.base.width() as i32;
        let height = self.base.height() as i32;

        let fraction_x = x - f64::from(x as i32);
        let fraction_y = y - f64::from(y as i32);
        let x1 = ((x as i32 + width) % width) as usize;
        let y1 = ((y as i32 + height) % height) as usize;
        let x2 = ((x as i32 + width - 1) % width) as usize;
        let y2 = ((y as i32 + height - 1) % height) as usize;

        let sample = |sx: usize, sy: usize| {
            self.base
                .get((sx as i32, sy as i32))
                .copied()
                .unwrap_or_default()
        };

        fraction_x * fraction_y * sample(x1, y1)
            + fraction_x * (1.0 - fraction_y) * sample(x1, y2)
            + (1.0 - fraction_x) * fraction_y * sample(x2, y1)
            + (1.0 - fraction_x) * (1.0 - fraction_y) * sample(x2, y2)
    }
}

/// Fill a byte grid from freshly generated octave noise
///
/// Generates a base field the size of `grid`, then maps each accumulated
/// octave value from [-1, 1] to a 0..=255 byte.
///
/// # Errors
///
/// Returns [`GridError::InvalidParameter`] when the grid is empty.
pub fn octave_fill(grid: &mut Grid<u8>, params: &NoiseParams, rng: &mut impl Rng) -> Result<()> {
    let field = NoiseField::generate(grid.size(), rng)?;
    grid.set_each(|_, point| {
        let value = field.value(point.x, point.y, params);
        (value.mul_add(0.5, 0.5) * 255.0).clamp(0.0, 255.0) as u8
    });
    Ok(())
}

/// Multi-resolution averaging noise over `f64`
///
/// Builds `levels` independent random grids at successively halved
/// resolutions (minimum dimension 1), upsamples each back to `size` by
/// bilinear interpolation, then combines them with the grid averaging
/// operation. Its pairwise-iterative bias toward later (coarser) levels
/// is part of the terrain generator's look.
///
/// # Errors
///
/// Returns [`GridError::InvalidParameter`] when `levels` is zero or
/// `size` is empty.
pub fn noise_fill(size: Size, levels: u32, rng: &mut impl Rng) -> Result<Grid<f64>> {
    validate_fill(size, levels)?;

    let mut layers = Vec::with_capacity(levels as usize);
    let mut current = size;
    for _ in 0..levels {
        let mut layer = Grid::<f64>::with_size(current);
        layer.set_with(|| rng.random::<f64>());
        if current != size {
            layer = layer.interpolate_smooth(size, true)?;
        }
        layers.push(layer);
        current = halve(current);
    }

    Grid::<f64>::average(&layers)
}

/// Multi-resolution averaging noise over bytes
///
/// Byte-valued counterpart of [`noise_fill`], for terrain layers consumed
/// as 0..=255 heightfields.
///
/// # Errors
///
/// Returns [`GridError::InvalidParameter`] when `levels` is zero or
/// `size` is empty.
pub fn noise_fill_bytes(size: Size, levels: u32, rng: &mut impl Rng) -> Result<Grid<u8>> {
    validate_fill(size, levels)?;

    let mut layers = Vec::with_capacity(levels as usize);
    let mut current = size;
    for _ in 0..levels {
        let mut layer = Grid::<u8>::with_size(current);
        layer.set_with(|| rng.random::<u8>());
        if current != size {
            layer = layer.interpolate_smooth(size, true)?;
        }
        layers.push(layer);
        current = halve(current);
    }

    Grid::<u8>::average(&layers)
}

/// Rescale a float field linearly so its minimum maps to 0 and maximum to 1
///
/// # Errors
///
/// Returns [`GridError::DegenerateRange`] for a constant (or empty) field,
/// where the rescale would divide by zero.
pub fn normalize<T: Float>(grid: &mut Grid<T>) -> Result<()> {
    let mut cells = grid.cells();
    let Some(first) = cells.next().copied() else {
        return Err(GridError::DegenerateRange { value: 0.0 });
    };
    let (min, max) = cells.fold((first, first), |(min, max), &value| {
        (min.min(value), max.max(value))
    });
    if max == min {
        return Err(GridError::DegenerateRange {
            value: min.to_f64().unwrap_or_default(),
        });
    }

    let ratio = T::one() / (max - min);
    grid.set_each(|value, _| (*value - min) * ratio);
    Ok(())
}

/// Rescale a byte field linearly so its minimum maps to 0 and maximum to 255
///
/// # Errors
///
/// Returns [`GridError::DegenerateRange`] for a constant (or empty) field.
pub fn normalize_bytes(grid: &mut Grid<u8>) -> Result<()> {
    let mut cells = grid.cells();
    let Some(first) = cells.next().copied() else {
        return Err(GridError::DegenerateRange { value: 0.0 });
    };
    let (min, max) = cells.fold((first, first), |(min, max), &value| {
        (min.min(value), max.max(value))
    });
    if max == min {
        return Err(GridError::DegenerateRange {
            value: f64::from(min),
        });
    }

    let range = f64::from(max - min);
    grid.set_each(|value, _| {
        ((f64::from(value - min) * 255.0 / range).clamp(0.0, 255.0)) as u8
    });
    Ok(())
}

fn validate_fill(size: Size, levels: u32) -> Result<()> {
    if size.is_empty() {
        return Err(invalid_parameter(
            "size",
            &format!("{}x{}", size.width, size.height),
            &"noise target must have positive dimensions",
        ));
    }
    if levels == 0 {
        return Err(invalid_parameter("levels", &0, &"need at least one level"));
    }
    Ok(())
}

/// Halve a size, clamping each dimension to at least 1
const fn halve(size: Size) -> Size {
    let width = size.width / 2;
    let height = size.height / 2;
    Size::new(
        if width < 1 { 1 } else { width },
        if height < 1 { 1 } else { height },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_field_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(NoiseField::generate(Size::new(0, 8), &mut rng).is_err());
    }

    #[test]
    fn test_normalize_constant_field_fails() {
        let mut grid = Grid::<f64>::new(4, 4);
        grid.fill(0.25);
        assert!(matches!(
            normalize(&mut grid),
            Err(GridError::DegenerateRange { .. })
        ));
    }

    #[test]
    fn test_halve_clamps_to_one() {
        assert_eq!(halve(Size::new(1, 6)), Size::new(1, 3));
        assert_eq!(halve(Size::new(5, 1)), Size::new(2, 1));
    }
}
