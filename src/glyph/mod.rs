//! Text and glyph rendering
//!
//! This module contains:
//! - The `GlyphSource` rasterization interface
//! - Outline fonts loaded from disk
//! - A built-in bitmap font that is always available
//! - The ordered font provider chain

/// Built-in bitmap fallback font
pub mod bitmap;
/// Ordered font provider chain with bitmap fallback
pub mod chain;
/// Outline font loading and rasterization
pub mod scalable;
/// Glyph source trait and coverage rasters
pub mod source;

pub use chain::FontChain;
pub use source::{GlyphSource, TextRaster};
