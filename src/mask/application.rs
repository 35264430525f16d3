//! Thresholded masking of sampled images

use crate::io::configuration::DEFAULT_THRESHOLD;
use crate::io::error::{Result, invalid_parameter, shape_mismatch};
use crate::raster::intensity::IntensityImage;
use ndarray::Zip;

/// Erase samples wherever the mask is darker than `threshold`
///
/// Output pixel is 1.0 when `mask < threshold` and the sampled value otherwise,
/// so a mask value exactly at the threshold preserves the sample. Neither input
/// is modified.
///
/// # Errors
///
/// Returns an error if:
/// - The images differ in shape
/// - The threshold is outside [0, 1]
pub fn apply_mask(
    sampled: &IntensityImage,
    mask: &IntensityImage,
    threshold: f64,
) -> Result<IntensityImage> {
    if sampled.dim() != mask.dim() {
        return Err(shape_mismatch("mask application", sampled.dim(), mask.dim()));
    }
    if !(0.0..=1.0).contains(&threshold) {
        return Err(invalid_parameter(
            "threshold",
            &threshold,
            &"must lie in [0, 1]",
        ));
    }

    let masked = Zip::from(sampled.data())
        .and(mask.data())
        .map_collect(|&sample, &gate| if gate < threshold { 1.0 } else { sample });

    IntensityImage::from_array("masked", masked)
}

/// Apply the mask with the default threshold of 0.5
///
/// # Errors
///
/// Returns an error if the images differ in shape
pub fn apply_mask_default(
    sampled: &IntensityImage,
    mask: &IntensityImage,
) -> Result<IntensityImage> {
    apply_mask(sampled, mask, DEFAULT_THRESHOLD)
}
