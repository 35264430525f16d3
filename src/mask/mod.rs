/// Thresholded mask application
pub mod application;
/// Glyph mask synthesis
pub mod synthesis;

pub use application::apply_mask;
pub use synthesis::{MaskSpec, synthesize_mask};
