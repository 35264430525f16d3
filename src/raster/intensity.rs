//! Grayscale intensity images with values in [0, 1]
//!
//! 0.0 is pure black and 1.0 pure white. Images are treated as values:
//! every transformation returns a new image and leaves its input untouched.

use crate::io::error::{PanelError, Result, computation_error};
use image::{GrayImage, Luma};
use ndarray::Array2;

/// Two-dimensional grid of intensities indexed by (row, col)
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityImage {
    data: Array2<f64>,
}

impl IntensityImage {
    /// Wrap an array after checking it is non-empty and every sample lies in [0, 1]
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero
    /// - Any value is non-finite or outside [0, 1]
    pub fn from_array(name: &str, data: Array2<f64>) -> Result<Self> {
        let (height, width) = data.dim();
        if height == 0 || width == 0 {
            return Err(PanelError::InvalidImageData {
                name: name.to_string(),
                reason: format!("image has zero size ({height}x{width})"),
            });
        }

        if let Some(((row, col), value)) = data
            .indexed_iter()
            .find(|(_, v)| !v.is_finite() || **v < 0.0 || **v > 1.0)
        {
            return Err(PanelError::InvalidImageData {
                name: name.to_string(),
                reason: format!("value {value} at ({row}, {col}) is outside [0, 1]"),
            });
        }

        Ok(Self { data })
    }

    /// Create an image of the given shape filled with a single intensity
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the value is outside [0, 1]
    pub fn filled(height: usize, width: usize, value: f64) -> Result<Self> {
        Self::from_array("filled", Array2::from_elem((height, width), value))
    }

    /// Convert an 8-bit luma image, dividing every sample by 255
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image has zero width or height
    /// - The pixel buffer does not match the image dimensions
    pub fn from_gray8(name: &str, image: &GrayImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        let levels = image
            .as_raw()
            .iter()
            .map(|&level| f64::from(level) / 255.0)
            .collect();
        let data = Array2::from_shape_vec((height as usize, width as usize), levels)
            .map_err(|e| computation_error("gray conversion", &e))?;
        Self::from_array(name, data)
    }

    /// Scale to 0..=255 and truncate to 8-bit luma
    ///
    /// Truncation makes `from_gray8` followed by `to_gray8` lossless, which the
    /// reconciliation resize relies on.
    pub fn to_gray8(&self) -> GrayImage {
        self.quantize(|value| value * 255.0)
    }

    /// Scale to 0..=255 and round to the nearest 8-bit level for display
    pub fn to_display_gray8(&self) -> GrayImage {
        self.quantize(|value| (value * 255.0).round())
    }

    fn quantize(&self, scale: impl Fn(f64) -> f64) -> GrayImage {
        let (height, width) = self.dim();
        GrayImage::from_fn(width as u32, height as u32, |x, y| {
            let value = self.get(y as usize, x as usize).unwrap_or(1.0);
            Luma([scale(value) as u8])
        })
    }

    /// Shape as (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Sample at (row, col), if inside the image
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Borrow the underlying array
    pub const fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consume the image and return the underlying array
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }
}
