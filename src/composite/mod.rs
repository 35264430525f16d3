//! Panel compositing and canvas geometry
//!
//! This module contains:
//! - Color parsing for backgrounds and separators
//! - The canvas coordinate model
//! - Reconciliation, drawing and output of the four-panel composite

/// Named and hex color parsing
pub mod color;
/// Four-panel compositor
pub mod compositor;
/// Canvas coordinate model
pub mod layout;

pub use compositor::{Composite, CompositeStyle, CompositeSummary, PanelSet, compose};
pub use layout::CanvasLayout;
