//! Stage progress display for the rendering pipeline

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading the original image
    Load,
    /// Producing or reading the sampled image
    Sample,
    /// Producing or reading the mask
    Mask,
    /// Applying the mask to the sampled image
    Apply,
    /// Reconciling and drawing the composite
    Compose,
    /// Encoding and writing the output file
    Write,
}

impl Stage {
    /// Every stage, in order
    pub const ALL: [Self; 6] = [
        Self::Load,
        Self::Sample,
        Self::Mask,
        Self::Apply,
        Self::Compose,
        Self::Write,
    ];

    /// Short description shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Load => "Loading original",
            Self::Sample => "Sampling",
            Self::Mask => "Building mask",
            Self::Apply => "Applying mask",
            Self::Compose => "Compositing",
            Self::Write => "Writing output",
        }
    }

    /// Zero-based position in the pipeline
    pub const fn position(self) -> usize {
        match self {
            Self::Load => 0,
            Self::Sample => 1,
            Self::Mask => 2,
            Self::Apply => 3,
            Self::Compose => 4,
            Self::Write => 5,
        }
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar ticking through the pipeline stages
pub struct StageProgress {
    bar: ProgressBar,
}

impl Default for StageProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl StageProgress {
    /// Create a visible progress bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(Stage::ALL.len() as u64);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Mark `stage` as the one currently running
    pub fn start(&self, stage: Stage) {
        self.bar.set_position(stage.position() as u64);
        self.bar.set_message(stage.label());
    }

    /// Number of stages completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Fill the bar and remove it from the terminal
    pub fn finish(&self) {
        self.bar.set_position(Stage::ALL.len() as u64);
        self.bar.finish_and_clear();
    }
}
