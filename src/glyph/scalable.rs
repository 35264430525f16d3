//! Outline font loading and anti-aliased rasterization

use crate::glyph::source::{GlyphSource, TextRaster};
use crate::io::error::{PanelError, Result};
use ab_glyph::{Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont, point};
use ndarray::Array2;
use std::path::Path;

/// TrueType/OpenType font loaded into memory
pub struct ScalableFont {
    name: String,
    font: FontVec,
}

impl ScalableFont {
    /// Load the first face of a font file or collection
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The data is not a parseable font
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PanelError::FontUnavailable {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }
        let data = std::fs::read(path).map_err(|e| PanelError::FontUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(&path.display().to_string(), data)
    }

    /// Parse font data held in memory
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not a parseable font
    pub fn from_bytes(name: &str, data: Vec<u8>) -> Result<Self> {
        let font =
            FontVec::try_from_vec_and_index(data, 0).map_err(|e| PanelError::FontUnavailable {
                path: name.into(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            name: name.to_string(),
            font,
        })
    }

    // Interprets the pixel size as an em size, matching point-size conventions
    fn scale_for(&self, pixel_size: f32) -> PxScale {
        match self.font.units_per_em() {
            Some(units) if units > 0.0 => {
                PxScale::from(pixel_size * self.font.height_unscaled() / units)
            }
            _ => PxScale::from(pixel_size),
        }
    }
}

impl GlyphSource for ScalableFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn render_text(&self, text: &str, pixel_size: f32) -> TextRaster {
        let scale = self.scale_for(pixel_size);
        let scaled = self.font.as_scaled(scale);
        let ascent = scaled.ascent();
        let line_height = ascent - scaled.descent();

        let mut caret = 0.0_f32;
        let mut previous: Option<GlyphId> = None;
        let mut outlines: Vec<OutlinedGlyph> = Vec::new();
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, ascent));
            caret += scaled.h_advance(id);
            previous = Some(id);
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                outlines.push(outlined);
            }
        }

        // Ink may overhang the line box on any side
        let (mut min_x, mut min_y) = (0.0_f32, 0.0_f32);
        let (mut max_x, mut max_y) = (caret, line_height);
        for outlined in &outlines {
            let bounds = outlined.px_bounds();
            min_x = min_x.min(bounds.min.x);
            min_y = min_y.min(bounds.min.y);
            max_x = max_x.max(bounds.max.x);
            max_y = max_y.max(bounds.max.y);
        }
        let (origin_x, origin_y) = (min_x.floor(), min_y.floor());
        let width = (max_x.ceil() - origin_x).max(0.0) as usize;
        let height = (max_y.ceil() - origin_y).max(0.0) as usize;

        let mut coverage = Array2::<f32>::zeros((height, width));
        for outlined in &outlines {
            let bounds = outlined.px_bounds();
            let left = (bounds.min.x - origin_x).max(0.0) as usize;
            let top = (bounds.min.y - origin_y).max(0.0) as usize;
            outlined.draw(|x, y, c| {
                if let Some(cell) = coverage.get_mut((top + y as usize, left + x as usize)) {
                    *cell = cell.max(c.clamp(0.0, 1.0));
                }
            });
        }

        TextRaster::new(coverage)
    }

    fn line_height(&self, pixel_size: f32) -> usize {
        let scaled = self.font.as_scaled(self.scale_for(pixel_size));
        (scaled.ascent() - scaled.descent()).ceil().max(0.0) as usize
    }
}
