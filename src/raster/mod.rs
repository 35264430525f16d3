//! Intensity image representation and shape reconciliation

/// Grayscale intensity image value type
pub mod intensity;
/// Resize-to-match reconciliation between panel images
pub mod resize;

pub use intensity::IntensityImage;
