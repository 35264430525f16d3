//! Best-effort font acquisition with graceful degradation
//!
//! Providers are tried in order and the first that yields a font wins. When
//! every provider fails the built-in bitmap font is used, so resolution itself
//! never fails.

use crate::glyph::bitmap::BitmapFont;
use crate::glyph::scalable::ScalableFont;
use crate::glyph::source::GlyphSource;
use crate::io::configuration::BOLD_FONT_PATHS;
use crate::io::error::Result;
use std::path::PathBuf;

/// Function that attempts to produce a font
pub type FontProvider = Box<dyn Fn() -> Result<Box<dyn GlyphSource>>>;

/// Ordered list of font providers
#[derive(Default)]
pub struct FontChain {
    providers: Vec<FontProvider>,
}

impl FontChain {
    /// Create an empty chain that resolves straight to the bitmap font
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain over the platform bold font locations
    pub fn system_bold() -> Self {
        BOLD_FONT_PATHS
            .iter()
            .fold(Self::new(), |chain, path| chain.with_font_file(*path))
    }

    /// Append a provider that loads the given font file
    #[must_use]
    pub fn with_font_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_provider(file_provider(path.into()))
    }

    /// Insert a font file ahead of every existing provider
    #[must_use]
    pub fn preferring_font_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.providers.insert(0, file_provider(path.into()));
        self
    }

    /// Append an arbitrary provider
    #[must_use]
    pub fn with_provider(mut self, provider: FontProvider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Number of providers tried before the bitmap fallback
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain goes straight to the bitmap fallback
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Return the first font any provider yields, or the bitmap font
    pub fn resolve(&self) -> Box<dyn GlyphSource> {
        for provider in &self.providers {
            match provider() {
                Ok(source) => {
                    log::debug!("Using font: {}", source.name());
                    return source;
                }
                Err(error) => log::debug!("Skipping font: {error}"),
            }
        }

        let fallback = BitmapFont::new();
        log::warn!(
            "No outline font could be loaded; falling back to the {} font",
            fallback.name()
        );
        Box::new(fallback)
    }
}

fn file_provider(path: PathBuf) -> FontProvider {
    Box::new(move || {
        ScalableFont::from_file(&path).map(|font| Box::new(font) as Box<dyn GlyphSource>)
    })
}
