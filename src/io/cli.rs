//! Command-line interface and orchestration of the rendering pipeline

use crate::composite::color::parse_color;
use crate::composite::compositor::{CompositeStyle, CompositeSummary, PanelSet, compose};
use crate::glyph::chain::FontChain;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_DPI, DEFAULT_GLYPH, DEFAULT_GLYPH_RATIO, DEFAULT_OUTPUT,
    DEFAULT_SEED, DEFAULT_STIPPLE_DENSITY, DEFAULT_THRESHOLD,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::load_intensity_image;
use crate::io::progress::{Stage, StageProgress};
use crate::mask::application::apply_mask;
use crate::mask::synthesis::MaskSpec;
use crate::raster::resize::reconcile;
use crate::sampling::stipple::Stippler;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biaspanels")]
#[command(
    author,
    version,
    about = "Render a four-panel illustration of selection bias"
)]
/// Command-line arguments for the composite renderer
pub struct Cli {
    /// Original image shown as the "Reality" panel
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file; the format follows the extension
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Pre-computed stippled image (stippled internally when omitted)
    #[arg(long, value_name = "PATH")]
    pub stipple: Option<PathBuf>,

    /// External mask image (synthesized from the glyph when omitted)
    #[arg(long, value_name = "PATH")]
    pub mask: Option<PathBuf>,

    /// Output resolution in dots per inch
    #[arg(short, long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Background color name or #rrggbb code
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Mask values strictly below this erase the stipple
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Glyph drawn into the synthesized mask
    #[arg(short, long, default_value_t = DEFAULT_GLYPH)]
    pub glyph: char,

    /// Glyph size as a fraction of the smaller image dimension
    #[arg(short = 'r', long, default_value_t = DEFAULT_GLYPH_RATIO)]
    pub glyph_ratio: f64,

    /// Font file tried before the platform bold fonts
    #[arg(short, long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Random seed for reproducible stippling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Stipple dot density in (0, 1]
    #[arg(long, default_value_t = DEFAULT_STIPPLE_DENSITY)]
    pub density: f64,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for the selected verbosity
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// Runs the load, sample, mask, apply, compose and write stages for one input
pub struct PanelRenderer {
    cli: Cli,
    progress: StageProgress,
}

impl PanelRenderer {
    /// Create a renderer for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            StageProgress::new()
        } else {
            StageProgress::hidden()
        };
        Self { cli, progress }
    }

    /// Font chain with the user's font, if any, ahead of the platform fonts
    pub fn font_chain(&self) -> FontChain {
        let chain = FontChain::system_bold();
        match &self.cli.font {
            Some(path) => chain.preferring_font_file(path.clone()),
            None => chain,
        }
    }

    /// Render the composite and write it to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, any pipeline stage or the
    /// final write fails; nothing is written in that case
    pub fn process(&self) -> Result<CompositeSummary> {
        let result = self.run_stages();
        self.progress.finish();
        result
    }

    fn run_stages(&self) -> Result<CompositeSummary> {
        let background = parse_color(&self.cli.background)?;
        let style = CompositeStyle::new(self.cli.dpi, background)?;
        if !(0.0..=1.0).contains(&self.cli.threshold) {
            return Err(invalid_parameter(
                "threshold",
                &self.cli.threshold,
                &"must lie in [0, 1]",
            ));
        }
        let mask_spec = MaskSpec::new(self.cli.glyph, self.cli.glyph_ratio);
        let fonts = self.font_chain().resolve();

        self.progress.start(Stage::Load);
        let reality = load_intensity_image(&self.cli.input)?;

        self.progress.start(Stage::Sample);
        let model = match &self.cli.stipple {
            Some(path) => load_intensity_image(path)?,
            None => Stippler::new(self.cli.density, self.cli.seed)?.sample(&reality)?,
        };

        self.progress.start(Stage::Mask);
        let (height, width) = model.dim();
        let mask = match &self.cli.mask {
            Some(path) => reconcile(load_intensity_image(path)?, model.dim(), "mask image")?,
            None => mask_spec.synthesize(height, width, fonts.as_ref())?,
        };

        self.progress.start(Stage::Apply);
        let estimate = apply_mask(&model, &mask, self.cli.threshold)?;

        self.progress.start(Stage::Compose);
        let composite = compose(
            PanelSet {
                reality,
                model,
                selection_bias: mask,
                estimate,
            },
            fonts.as_ref(),
            &style,
        )?;

        self.progress.start(Stage::Write);
        composite.write(&self.cli.output)
    }
}
