//! Resize-to-match reconciliation of panel images
//!
//! Mismatched images are scaled to the canonical shape, never cropped. The
//! resize runs on the 8-bit representation, so a reconciled image carries up
//! to 1/255 of quantization error; an image that already matches is returned
//! untouched.

use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::raster::intensity::IntensityImage;
use image::imageops::{self, FilterType};

/// Resampling filter used for reconciliation in both directions
pub const RECONCILE_FILTER: FilterType = FilterType::Lanczos3;

/// Return `image` with shape `target` as (height, width)
///
/// # Errors
///
/// Returns an error if:
/// - The target shape has a zero dimension or exceeds 32-bit sizes
/// - The resized buffer cannot be converted back to an intensity image
pub fn reconcile(
    image: IntensityImage,
    target: (usize, usize),
    name: &str,
) -> Result<IntensityImage> {
    let (target_height, target_width) = target;
    if target_height == 0 || target_width == 0 {
        return Err(invalid_parameter(
            "target",
            &format!("{target_height}x{target_width}"),
            &"reconciliation target must be non-empty",
        ));
    }

    if image.dim() == target {
        return Ok(image);
    }

    let (height, width) = image.dim();
    log::warn!(
        "{name} has shape {height}x{width}, expected {target_height}x{target_width}; \
         resizing to match"
    );

    let too_large = || {
        invalid_parameter(
            "target",
            &format!("{target_height}x{target_width}"),
            &"exceeds 32-bit image dimensions",
        )
    };
    let out_width = u32::try_from(target_width).ok().ok_or_else(too_large)?;
    let out_height = u32::try_from(target_height).ok().ok_or_else(too_large)?;

    let resized = imageops::resize(&image.to_gray8(), out_width, out_height, RECONCILE_FILTER);
    if resized.dimensions() != (out_width, out_height) {
        return Err(computation_error(
            "reconciliation",
            &format!("resize produced {:?}", resized.dimensions()),
        ));
    }
    IntensityImage::from_gray8(name, &resized)
}
