//! Four-panel illustration of selection bias
//!
//! Renders an original image, a stippled sample of it, a glyph-shaped mask and
//! the sample with the mask applied, side by side under bold labels with
//! separators between panels.

#![forbid(unsafe_code)]

/// Panel reconciliation, layout and compositing
pub mod composite;
/// Glyph rasterization with a font fallback chain
pub mod glyph;
/// Input/output operations, configuration and error handling
pub mod io;
/// Mask synthesis and thresholded mask application
pub mod mask;
/// Intensity images and reconciliation resizing
pub mod raster;
/// Stippling of the original image
pub mod sampling;

pub use io::error::{ErrorKind, PanelError, Result};
pub use raster::IntensityImage;
