//! Explicit canvas coordinate model for the four-panel composite
//!
//! The canvas is one row of equal-width panels, edge to edge, below a title
//! band. Separator positions are fractions of the whole canvas width, so they
//! fall exactly on panel boundaries.

use crate::io::configuration::{PANEL_COUNT, POINTS_PER_INCH, SEPARATOR_MARGIN_FRACTION};
use crate::io::error::{Result, invalid_parameter};
use std::ops::Range;

/// Convert a length in points to whole pixels at `dpi`, never less than 1
pub fn points_to_pixels(points: f64, dpi: u32) -> u32 {
    (points * f64::from(dpi) / POINTS_PER_INCH).round().max(1.0) as u32
}

/// Axis-aligned pixel rectangle on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Pixel geometry of the composite canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    panel_width: u32,
    panel_height: u32,
    title_height: u32,
    canvas_width: u32,
    canvas_height: u32,
}

impl CanvasLayout {
    /// Lay out panels of (`panel_height`, `panel_width`) under a title band
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A panel dimension is zero
    /// - The canvas would not fit in 32-bit pixel coordinates
    pub fn new(panel_height: usize, panel_width: usize, title_height: usize) -> Result<Self> {
        if panel_height == 0 || panel_width == 0 {
            return Err(invalid_parameter(
                "panel size",
                &format!("{panel_height}x{panel_width}"),
                &"panels must be non-empty",
            ));
        }

        let too_large = || {
            invalid_parameter(
                "panel size",
                &format!("{panel_height}x{panel_width}"),
                &"canvas exceeds 32-bit pixel coordinates",
            )
        };
        let panel_width = u32::try_from(panel_width).ok().ok_or_else(too_large)?;
        let panel_height = u32::try_from(panel_height).ok().ok_or_else(too_large)?;
        let title_height = u32::try_from(title_height).ok().ok_or_else(too_large)?;
        let canvas_width = panel_width
            .checked_mul(PANEL_COUNT as u32)
            .ok_or_else(too_large)?;
        let canvas_height = panel_height
            .checked_add(title_height)
            .ok_or_else(too_large)?;

        Ok(Self {
            panel_width,
            panel_height,
            title_height,
            canvas_width,
            canvas_height,
        })
    }

    /// Width of each panel
    pub const fn panel_width(&self) -> u32 {
        self.panel_width
    }

    /// Height of each panel
    pub const fn panel_height(&self) -> u32 {
        self.panel_height
    }

    /// Height of the band holding the labels
    pub const fn title_height(&self) -> u32 {
        self.title_height
    }

    /// Full canvas width, four panel widths
    pub const fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Full canvas height, title band plus panel height
    pub const fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Image area of panel `index`, counted from the left
    pub fn panel_region(&self, index: usize) -> Option<Region> {
        (index < PANEL_COUNT).then(|| Region {
            x: self.panel_width * index as u32,
            y: self.title_height,
            width: self.panel_width,
            height: self.panel_height,
        })
    }

    /// Title band above panel `index`
    pub fn title_region(&self, index: usize) -> Option<Region> {
        (index < PANEL_COUNT).then(|| Region {
            x: self.panel_width * index as u32,
            y: 0,
            width: self.panel_width,
            height: self.title_height,
        })
    }

    /// Canvas column at a horizontal fraction of the full width
    pub fn separator_x(&self, fraction: f64) -> u32 {
        (fraction * f64::from(self.canvas_width)).round() as u32
    }

    /// Columns covered by a separator of `line_width` centered at `fraction`
    pub fn separator_columns(&self, fraction: f64, line_width: u32) -> Range<u32> {
        let start = self
            .separator_x(fraction)
            .saturating_sub(line_width / 2)
            .min(self.canvas_width);
        let end = start.saturating_add(line_width).min(self.canvas_width);
        start..end
    }

    /// Rows covered by every separator, leaving a margin top and bottom
    pub fn separator_rows(&self) -> Range<u32> {
        let height = f64::from(self.canvas_height);
        let top = (SEPARATOR_MARGIN_FRACTION * height).round() as u32;
        let bottom = ((1.0 - SEPARATOR_MARGIN_FRACTION) * height).round() as u32;
        top..bottom.min(self.canvas_height)
    }
}
