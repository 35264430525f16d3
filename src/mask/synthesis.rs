//! Glyph-shaped mask synthesis
//!
//! Renders one glyph in black, centered on a white canvas. The glyph's em size
//! is `floor(min(height, width) * size_ratio)` and its ink bounding box, not its
//! draw origin, is what gets centered.

use crate::glyph::source::GlyphSource;
use crate::io::configuration::{DEFAULT_GLYPH, DEFAULT_GLYPH_RATIO};
use crate::io::error::{Result, invalid_parameter};
use crate::raster::intensity::IntensityImage;
use image::{GrayImage, Luma};

/// Glyph and sizing used to synthesize a mask
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskSpec {
    /// Glyph drawn in the mask
    pub glyph: char,
    /// Glyph em size relative to the smaller canvas dimension, in (0, 1]
    pub size_ratio: f64,
}

impl Default for MaskSpec {
    fn default() -> Self {
        Self {
            glyph: DEFAULT_GLYPH,
            size_ratio: DEFAULT_GLYPH_RATIO,
        }
    }
}

impl MaskSpec {
    /// Create a spec for the given glyph and size ratio
    pub const fn new(glyph: char, size_ratio: f64) -> Self {
        Self { glyph, size_ratio }
    }

    /// Glyph em size in pixels for a canvas of the given shape
    pub fn glyph_pixel_size(&self, height: usize, width: usize) -> usize {
        (height.min(width) as f64 * self.size_ratio).floor() as usize
    }

    /// Render the mask at (height, width)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Height or width is zero or does not fit in 32 bits
    /// - The size ratio is not within (0, 1]
    pub fn synthesize(
        &self,
        height: usize,
        width: usize,
        fonts: &dyn GlyphSource,
    ) -> Result<IntensityImage> {
        if height == 0 || width == 0 {
            return Err(invalid_parameter(
                "mask size",
                &format!("{height}x{width}"),
                &"height and width must be positive",
            ));
        }
        if !(self.size_ratio > 0.0 && self.size_ratio <= 1.0) {
            return Err(invalid_parameter(
                "size_ratio",
                &self.size_ratio,
                &"must lie in (0, 1]",
            ));
        }

        let too_large = || {
            invalid_parameter(
                "mask size",
                &format!("{height}x{width}"),
                &"exceeds 32-bit image dimensions",
            )
        };
        let canvas_width = u32::try_from(width).ok().ok_or_else(too_large)?;
        let canvas_height = u32::try_from(height).ok().ok_or_else(too_large)?;

        let mut canvas = GrayImage::from_pixel(canvas_width, canvas_height, Luma([255]));
        let pixel_size = self.glyph_pixel_size(height, width);

        if pixel_size > 0 {
            let raster = fonts.render_text(&self.glyph.to_string(), pixel_size as f32);
            if let Some(ink) = raster.ink_bounds() {
                // Offset maps ink-box coordinates onto the canvas
                let offset_x = (width as i64 - ink.width() as i64).div_euclid(2);
                let offset_y = (height as i64 - ink.height() as i64).div_euclid(2);

                for row in ink.top..ink.bottom {
                    for col in ink.left..ink.right {
                        let coverage = raster.coverage_at(row, col);
                        if coverage <= 0.0 {
                            continue;
                        }
                        let x = offset_x + (col - ink.left) as i64;
                        let y = offset_y + (row - ink.top) as i64;
                        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                            continue;
                        };
                        if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                            let ink_level = (255.0 * (1.0 - f64::from(coverage))).round() as u8;
                            pixel.0[0] = pixel.0[0].min(ink_level);
                        }
                    }
                }
            } else {
                log::debug!("Glyph {:?} produced no ink; mask is blank", self.glyph);
            }
        }

        IntensityImage::from_gray8("mask", &canvas)
    }
}

/// Synthesize a mask with the given glyph and size ratio
///
/// # Errors
///
/// Returns an error if the dimensions are zero or the ratio is outside (0, 1]
pub fn synthesize_mask(
    height: usize,
    width: usize,
    glyph: char,
    size_ratio: f64,
    fonts: &dyn GlyphSource,
) -> Result<IntensityImage> {
    MaskSpec::new(glyph, size_ratio).synthesize(height, width, fonts)
}
