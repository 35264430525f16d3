//! Random stippling of an intensity image into black dots on white

use crate::io::configuration::{DEFAULT_SEED, DEFAULT_STIPPLE_DENSITY};
use crate::io::error::{Result, invalid_parameter};
use crate::raster::intensity::IntensityImage;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Places a dot at each pixel with probability `density * (1 - intensity)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stippler {
    density: f64,
    seed: u64,
}

impl Default for Stippler {
    fn default() -> Self {
        Self {
            density: DEFAULT_STIPPLE_DENSITY,
            seed: DEFAULT_SEED,
        }
    }
}

impl Stippler {
    /// Create a stippler with the given dot density and seed
    ///
    /// # Errors
    ///
    /// Returns an error if the density is not within (0, 1]
    pub fn new(density: f64, seed: u64) -> Result<Self> {
        if !(density > 0.0 && density <= 1.0) {
            return Err(invalid_parameter("density", &density, &"must lie in (0, 1]"));
        }
        Ok(Self { density, seed })
    }

    /// Dot density scale
    pub const fn density(&self) -> f64 {
        self.density
    }

    /// Produce the stippled image; identical seeds give identical output
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting array fails intensity validation
    pub fn sample(&self, source: &IntensityImage) -> Result<IntensityImage> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let dots = Array2::from_shape_fn(source.dim(), |(row, col)| {
            let darkness = 1.0 - source.get(row, col).unwrap_or(1.0);
            if rng.random::<f64>() < self.density * darkness {
                0.0
            } else {
                1.0
            }
        });
        IntensityImage::from_array("stipple", dots)
    }
}
