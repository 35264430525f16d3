//! Rendering constants and runtime configuration defaults

/// Number of panels in the composite
pub const PANEL_COUNT: usize = 4;

/// Panel titles in left-to-right order
pub const PANEL_LABELS: [&str; PANEL_COUNT] =
    ["Reality", "Your Model", "Selection Bias", "Estimate"];

// Default values for configurable parameters
/// Output resolution in dots per inch
pub const DEFAULT_DPI: u32 = 150;
/// Background fill color name
pub const DEFAULT_BACKGROUND: &str = "white";
/// Mask values strictly below this are excluded
pub const DEFAULT_THRESHOLD: f64 = 0.5;
/// Glyph rendered into the synthesized mask
pub const DEFAULT_GLYPH: char = 'S';
/// Glyph size as a fraction of the smaller image dimension
pub const DEFAULT_GLYPH_RATIO: f64 = 0.9;
/// Output file written when none is given
pub const DEFAULT_OUTPUT: &str = "selection_bias.png";

// Stippling of the original when no sampled image is supplied
/// Probability scale for placing a dot on a black pixel
pub const DEFAULT_STIPPLE_DENSITY: f64 = 0.5;
/// Fixed seed for reproducible stippling
pub const DEFAULT_SEED: u64 = 42;

// Typography and separators, in points
/// Points per inch used to convert point sizes to pixels
pub const POINTS_PER_INCH: f64 = 72.0;
/// Metres per inch, for pixel densities stored per metre
pub const METRES_PER_INCH: f64 = 0.0254;
/// Label font size
pub const LABEL_SIZE_PT: f64 = 16.0;
/// Smallest pixel size a label is shrunk to when wider than its panel
pub const MIN_LABEL_PIXELS: f32 = 1.0;
/// Gap between a label and the edges of its title band
pub const LABEL_PAD_PT: f64 = 2.0;
/// Width of the vertical separator lines
pub const SEPARATOR_WIDTH_PT: f64 = 3.0;
/// Separator line color (light blue)
pub const SEPARATOR_COLOR: [u8; 3] = [173, 216, 230];
/// Label text color
pub const LABEL_COLOR: [u8; 3] = [0, 0, 0];

/// Horizontal canvas fractions where separators are drawn
pub const SEPARATOR_FRACTIONS: [f64; PANEL_COUNT - 1] = [0.25, 0.5, 0.75];
/// Fraction of canvas height left clear above and below the separators
pub const SEPARATOR_MARGIN_FRACTION: f64 = 0.03;

/// Bold font files tried in order before the built-in bitmap font
pub const BOLD_FONT_PATHS: &[&str] = &[
    // Windows
    "C:/Windows/Fonts/arialbd.ttf",
    "C:/Windows/Fonts/arial.ttf",
    "C:/Windows/Fonts/calibrib.ttf",
    "C:/Windows/Fonts/timesbd.ttf",
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    // Working directory
    "arial.ttf",
];

// Progress bar display settings
/// Width of the stage progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
