/// Command-line interface and pipeline orchestration
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types and classification
pub mod error;
/// Image loading and atomic export
pub mod image;
/// Stage progress display
pub mod progress;
