//! Four-panel compositing with labels and separators
//!
//! The first panel's shape is canonical; the other three are reconciled to it
//! before drawing. Panels go edge to edge below a title band, labels are
//! centered over their panels and shrunk when wider than them, and the
//! separators are drawn last so they sit on top of everything.

use crate::composite::color::parse_color;
use crate::composite::layout::{CanvasLayout, Region, points_to_pixels};
use crate::glyph::source::{GlyphSource, TextRaster};
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_DPI, LABEL_COLOR, LABEL_PAD_PT, LABEL_SIZE_PT, MIN_LABEL_PIXELS,
    PANEL_COUNT, PANEL_LABELS, SEPARATOR_COLOR, SEPARATOR_FRACTIONS, SEPARATOR_WIDTH_PT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::write_rgb_image;
use crate::raster::intensity::IntensityImage;
use crate::raster::resize::reconcile;
use image::{Rgb, RgbImage};
use std::fmt;
use std::path::{Path, PathBuf};

/// The four images of the composite, in left-to-right order
#[derive(Debug, Clone)]
pub struct PanelSet {
    /// Ground truth image; its shape is canonical
    pub reality: IntensityImage,
    /// Sampled ("stippled") image
    pub model: IntensityImage,
    /// Mask image
    pub selection_bias: IntensityImage,
    /// Sampled image with the mask applied
    pub estimate: IntensityImage,
}

/// One labeled image at a fixed position in the row
#[derive(Debug, Clone)]
pub struct Panel {
    /// Position from the left, 0 to 3
    pub index: usize,
    /// Title drawn above the image
    pub label: &'static str,
    /// Panel content
    pub image: IntensityImage,
}

impl PanelSet {
    /// Reconcile every image to the first image's shape and attach labels
    ///
    /// # Errors
    ///
    /// Returns an error if any image fails reconciliation
    pub fn into_panels(self) -> Result<[Panel; PANEL_COUNT]> {
        let [reality_label, model_label, bias_label, estimate_label] = PANEL_LABELS;
        let target = self.reality.dim();

        Ok([
            Panel {
                index: 0,
                label: reality_label,
                image: self.reality,
            },
            Panel {
                index: 1,
                label: model_label,
                image: reconcile(self.model, target, "model image")?,
            },
            Panel {
                index: 2,
                label: bias_label,
                image: reconcile(self.selection_bias, target, "selection bias image")?,
            },
            Panel {
                index: 3,
                label: estimate_label,
                image: reconcile(self.estimate, target, "estimate image")?,
            },
        ])
    }
}

/// Visual parameters of the composite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeStyle {
    /// Output resolution in dots per inch
    pub dpi: u32,
    /// Fill behind the title band
    pub background: Rgb<u8>,
    /// Label text color
    pub label_color: Rgb<u8>,
    /// Label size in points
    pub label_size_pt: f64,
    /// Padding above and below labels in points
    pub label_pad_pt: f64,
    /// Separator line color
    pub separator_color: Rgb<u8>,
    /// Separator line width in points
    pub separator_width_pt: f64,
}

impl Default for CompositeStyle {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            background: parse_color(DEFAULT_BACKGROUND).unwrap_or(Rgb([255, 255, 255])),
            label_color: Rgb(LABEL_COLOR),
            label_size_pt: LABEL_SIZE_PT,
            label_pad_pt: LABEL_PAD_PT,
            separator_color: Rgb(SEPARATOR_COLOR),
            separator_width_pt: SEPARATOR_WIDTH_PT,
        }
    }
}

impl CompositeStyle {
    /// Default style at the given resolution and background
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution is zero
    pub fn new(dpi: u32, background: Rgb<u8>) -> Result<Self> {
        if dpi == 0 {
            return Err(invalid_parameter("dpi", &dpi, &"must be positive"));
        }
        Ok(Self {
            dpi,
            background,
            ..Self::default()
        })
    }

    /// Label em size in pixels
    pub fn label_pixels(&self) -> u32 {
        points_to_pixels(self.label_size_pt, self.dpi)
    }

    /// Label padding in pixels
    pub fn label_padding(&self) -> u32 {
        points_to_pixels(self.label_pad_pt, self.dpi)
    }

    /// Separator width in pixels
    pub fn separator_pixels(&self) -> u32 {
        points_to_pixels(self.separator_width_pt, self.dpi)
    }
}

/// Rendered composite held in memory
#[derive(Debug, Clone)]
pub struct Composite {
    canvas: RgbImage,
    layout: CanvasLayout,
    dpi: u32,
}

/// Human-readable report of a written composite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeSummary {
    /// File the composite was written to
    pub path: PathBuf,
    /// Width of each panel
    pub panel_width: u32,
    /// Height of each panel
    pub panel_height: u32,
    /// Full canvas width
    pub canvas_width: u32,
    /// Full canvas height
    pub canvas_height: u32,
    /// Output resolution
    pub dpi: u32,
}

impl fmt::Display for CompositeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Composite saved to: {}", self.path.display())?;
        writeln!(
            f,
            "  Panel dimensions: {} x {} pixels",
            self.panel_width, self.panel_height
        )?;
        writeln!(
            f,
            "  Total size: {} x {} pixels",
            self.canvas_width, self.canvas_height
        )?;
        write!(f, "  Resolution: {} DPI", self.dpi)
    }
}

impl Composite {
    /// Borrow the rendered canvas
    pub const fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    /// Geometry the canvas was drawn with
    pub const fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Resolution the canvas was drawn for
    pub const fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Write the canvas to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output format cannot be determined from the extension
    /// - The file cannot be created, encoded or moved into place
    pub fn write(&self, path: &Path) -> Result<CompositeSummary> {
        write_rgb_image(&self.canvas, path, self.dpi)?;

        let summary = CompositeSummary {
            path: path.to_path_buf(),
            panel_width: self.layout.panel_width(),
            panel_height: self.layout.panel_height(),
            canvas_width: self.layout.canvas_width(),
            canvas_height: self.layout.canvas_height(),
            dpi: self.dpi,
        };
        log::info!("{summary}");
        Ok(summary)
    }
}

/// Reconcile the panels and draw them with labels and separators
///
/// # Errors
///
/// Returns an error if:
/// - Any image fails reconciliation
/// - The canvas dimensions are invalid
pub fn compose(
    panels: PanelSet,
    fonts: &dyn GlyphSource,
    style: &CompositeStyle,
) -> Result<Composite> {
    if style.dpi == 0 {
        return Err(invalid_parameter("dpi", &style.dpi, &"must be positive"));
    }

    let panels = panels.into_panels()?;
    let (panel_height, panel_width) = panels
        .first()
        .map(|panel| panel.image.dim())
        .unwrap_or_default();

    let label_pixels = style.label_pixels() as f32;
    let title_height =
        fonts.line_height(label_pixels) + 2 * style.label_padding() as usize;
    let layout = CanvasLayout::new(panel_height, panel_width, title_height)?;
    log::debug!(
        "Canvas {}x{} with {}px title band using {}",
        layout.canvas_width(),
        layout.canvas_height(),
        layout.title_height(),
        fonts.name()
    );

    let mut canvas = RgbImage::from_pixel(
        layout.canvas_width(),
        layout.canvas_height(),
        style.background,
    );

    for panel in &panels {
        if let Some(region) = layout.panel_region(panel.index) {
            draw_panel(&mut canvas, region, &panel.image);
        }
        if let Some(region) = layout.title_region(panel.index) {
            draw_label(&mut canvas, region, panel.label, fonts, label_pixels, style.label_color);
        }
    }

    draw_separators(&mut canvas, &layout, style);

    Ok(Composite {
        canvas,
        layout,
        dpi: style.dpi,
    })
}

fn draw_panel(canvas: &mut RgbImage, region: Region, image: &IntensityImage) {
    let gray = image.to_display_gray8();
    for (x, y, pixel) in gray.enumerate_pixels() {
        let level = pixel.0[0];
        if let Some(target) = canvas.get_pixel_mut_checked(region.x + x, region.y + y) {
            *target = Rgb([level, level, level]);
        }
    }
}

fn draw_label(
    canvas: &mut RgbImage,
    region: Region,
    label: &str,
    fonts: &dyn GlyphSource,
    pixel_size: f32,
    color: Rgb<u8>,
) {
    let raster = fit_label(fonts, label, pixel_size, region.width as usize);
    let (text_height, text_cols) = raster.dim();
    let text_width = text_cols as i64;
    let centered = i64::from(region.x) + (i64::from(region.width) - text_width).div_euclid(2);
    // A label wider than its panel even at the smallest size spills sideways but stays on canvas
    let left = centered.min(i64::from(canvas.width()) - text_width).max(0);
    let top = i64::from(region.y) + (i64::from(region.height) - text_height as i64).div_euclid(2);

    for ((row, col), &coverage) in raster.coverage().indexed_iter() {
        if coverage <= 0.0 {
            continue;
        }
        let (Ok(x), Ok(y)) = (
            u32::try_from(left + col as i64),
            u32::try_from(top + row as i64),
        ) else {
            continue;
        };
        // Labels never reach into the panel images
        if y >= region.y + region.height {
            continue;
        }
        if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
            *pixel = blend(*pixel, color, coverage);
        }
    }
}

/// Render `label`, shrinking it until it fits `max_width` or reaches the smallest size
fn fit_label(
    fonts: &dyn GlyphSource,
    label: &str,
    pixel_size: f32,
    max_width: usize,
) -> TextRaster {
    let mut size = pixel_size;
    let mut raster = fonts.render_text(label, size);
    while raster.dim().1 > max_width && size > MIN_LABEL_PIXELS {
        let fitted = (size * max_width as f32 / raster.dim().1 as f32).floor();
        size = fitted.min(size - 1.0).max(MIN_LABEL_PIXELS);
        raster = fonts.render_text(label, size);
    }
    if size < pixel_size {
        log::debug!("Label {label:?} shrunk from {pixel_size}px to {size}px to fit {max_width}px");
    }
    raster
}

fn draw_separators(canvas: &mut RgbImage, layout: &CanvasLayout, style: &CompositeStyle) {
    let line_width = style.separator_pixels();
    let rows = layout.separator_rows();
    for fraction in SEPARATOR_FRACTIONS {
        for x in layout.separator_columns(fraction, line_width) {
            for y in rows.clone() {
                if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                    *pixel = style.separator_color;
                }
            }
        }
    }
}

fn blend(base: Rgb<u8>, ink: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let alpha = coverage.clamp(0.0, 1.0);
    let mut mixed = [0u8; 3];
    for ((out, &b), &i) in mixed.iter_mut().zip(base.0.iter()).zip(ink.0.iter()) {
        *out = f32::from(b)
            .mul_add(1.0 - alpha, f32::from(i) * alpha)
            .round() as u8;
    }
    Rgb(mixed)
}
