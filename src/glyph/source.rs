//! Glyph rasterization interface shared by scalable and bitmap fonts

use ndarray::Array2;

/// Coverage raster of a rendered line of text
///
/// Values are ink coverage in [0, 1] indexed by (row, col). The raster spans the
/// font's line box plus any ink overhanging it, so ink does not necessarily start
/// at (0, 0).
#[derive(Debug, Clone, PartialEq)]
pub struct TextRaster {
    coverage: Array2<f32>,
}

/// Tight rectangle around all inked pixels, end bounds exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    /// First inked row
    pub top: usize,
    /// First inked column
    pub left: usize,
    /// One past the last inked row
    pub bottom: usize,
    /// One past the last inked column
    pub right: usize,
}

impl InkBounds {
    /// Inked width in pixels
    pub const fn width(&self) -> usize {
        self.right - self.left
    }

    /// Inked height in pixels
    pub const fn height(&self) -> usize {
        self.bottom - self.top
    }
}

impl TextRaster {
    /// Wrap a coverage array
    pub const fn new(coverage: Array2<f32>) -> Self {
        Self { coverage }
    }

    /// Shape as (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.coverage.dim()
    }

    /// Coverage at (row, col), zero outside the raster
    pub fn coverage_at(&self, row: usize, col: usize) -> f32 {
        self.coverage.get((row, col)).copied().unwrap_or(0.0)
    }

    /// Borrow the coverage array
    pub const fn coverage(&self) -> &Array2<f32> {
        &self.coverage
    }

    /// Measure the inked region, `None` when nothing was drawn
    pub fn ink_bounds(&self) -> Option<InkBounds> {
        let mut bounds: Option<InkBounds> = None;
        for ((row, col), &value) in self.coverage.indexed_iter() {
            if value <= 0.0 {
                continue;
            }
            bounds = Some(bounds.map_or(
                InkBounds {
                    top: row,
                    left: col,
                    bottom: row + 1,
                    right: col + 1,
                },
                |b| InkBounds {
                    top: b.top.min(row),
                    left: b.left.min(col),
                    bottom: b.bottom.max(row + 1),
                    right: b.right.max(col + 1),
                },
            ));
        }
        bounds
    }
}

/// A font able to rasterize text at a requested em size in pixels
pub trait GlyphSource {
    /// Human-readable identifier for logging
    fn name(&self) -> &str;

    /// Render `text` on a single line
    fn render_text(&self, text: &str, pixel_size: f32) -> TextRaster;

    /// Height of the font's line box at `pixel_size`
    fn line_height(&self, pixel_size: f32) -> usize;
}
