//! Built-in 5x7 bitmap font used when no outline font can be loaded
//!
//! Covers digits, Latin capitals (lowercase is drawn as uppercase) and a few
//! punctuation marks; anything else renders as an outlined box. Cells are
//! scaled up in whole pixels so the glyph tracks the requested size.

use crate::glyph::source::{GlyphSource, TextRaster};
use ndarray::Array2;

const GLYPH_WIDTH: usize = 5;
const GLYPH_HEIGHT: usize = 7;
const ADVANCE_CELLS: usize = 6;
const DESCENT_CELLS: usize = 2;

// Cap height is roughly 0.7 em, spread over 7 cells
const CELLS_PER_EM: f32 = 10.0;

const MISSING_GLYPH: [u8; GLYPH_HEIGHT] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

// One byte per row, bit 4 is the leftmost column
const fn glyph_rows(ch: char) -> [u8; GLYPH_HEIGHT] {
    match ch {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04],
        _ => MISSING_GLYPH,
    }
}

/// Fixed bitmap font that is always available
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    /// Create the built-in font
    pub const fn new() -> Self {
        Self
    }

    /// Side length in pixels of one bitmap cell at `pixel_size`
    pub fn cell_size(pixel_size: f32) -> usize {
        (pixel_size / CELLS_PER_EM).round().max(1.0) as usize
    }
}

impl GlyphSource for BitmapFont {
    fn name(&self) -> &str {
        "built-in 5x7 bitmap"
    }

    fn render_text(&self, text: &str, pixel_size: f32) -> TextRaster {
        let cell = Self::cell_size(pixel_size);
        let glyph_count = text.chars().count();
        let height = self.line_height(pixel_size);
        let width = glyph_count * ADVANCE_CELLS * cell;
        let mut coverage = Array2::<f32>::zeros((height, width));

        for (index, ch) in text.chars().enumerate() {
            let rows = glyph_rows(ch.to_ascii_uppercase());
            let left = index * ADVANCE_CELLS * cell;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    for dy in 0..cell {
                        for dx in 0..cell {
                            let position = (row * cell + dy, left + col * cell + dx);
                            if let Some(value) = coverage.get_mut(position) {
                                *value = 1.0;
                            }
                        }
                    }
                }
            }
        }

        TextRaster::new(coverage)
    }

    fn line_height(&self, pixel_size: f32) -> usize {
        (GLYPH_HEIGHT + DESCENT_CELLS) * Self::cell_size(pixel_size)
    }
}
