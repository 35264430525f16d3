//! Tests for ordered font acquisition with bitmap fallback

#[cfg(test)]
mod tests {
    use biaspanels::glyph::bitmap::BitmapFont;
    use biaspanels::glyph::chain::{FontChain, FontProvider};
    use biaspanels::glyph::source::{GlyphSource, TextRaster};
    use biaspanels::io::configuration::BOLD_FONT_PATHS;
    use biaspanels::io::error::{Result, invalid_parameter};
    use ndarray::Array2;

    struct NamedSource(&'static str);

    impl GlyphSource for NamedSource {
        fn name(&self) -> &str {
            self.0
        }

        fn render_text(&self, _text: &str, _pixel_size: f32) -> TextRaster {
            TextRaster::new(Array2::zeros((1, 1)))
        }

        fn line_height(&self, _pixel_size: f32) -> usize {
            1
        }
    }

    fn named(name: &'static str) -> FontProvider {
        Box::new(move || -> Result<Box<dyn GlyphSource>> { Ok(Box::new(NamedSource(name))) })
    }

    fn failing() -> FontProvider {
        Box::new(|| -> Result<Box<dyn GlyphSource>> {
            Err(invalid_parameter("font", &"none", &"always fails"))
        })
    }

    // Tests an empty chain degrades to the bitmap font
    // Verified by returning an error from resolve
    #[test]
    fn test_empty_chain_uses_bitmap() {
        let chain = FontChain::new();

        assert!(chain.is_empty());
        assert_eq!(chain.resolve().name(), BitmapFont::new().name());
    }

    // Tests failing providers are skipped and the first success wins
    // Verified by returning the last successful provider
    #[test]
    fn test_first_success_wins() {
        let chain = FontChain::new()
            .with_provider(failing())
            .with_provider(named("first"))
            .with_provider(named("second"));

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.resolve().name(), "first");
    }

    // Tests only failing providers still resolve to the fallback
    // Verified by dropping the fallback
    #[test]
    fn test_all_failing_falls_back() {
        let chain = FontChain::new()
            .with_font_file("/nonexistent/a.ttf")
            .with_provider(failing());

        assert_eq!(chain.resolve().name(), BitmapFont::new().name());
    }

    // Tests a preferred font file goes ahead of existing providers
    // Verified by appending instead of inserting at the front
    #[test]
    fn test_preferred_file_goes_first() {
        let chain = FontChain::new()
            .with_provider(named("existing"))
            .preferring_font_file("/nonexistent/preferred.ttf");

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.resolve().name(), "existing");
    }

    // Tests the system chain covers every configured font location
    // Verified by skipping the last configured path
    #[test]
    fn test_system_bold_chain_length() {
        let chain = FontChain::system_bold();

        assert_eq!(chain.len(), BOLD_FONT_PATHS.len());
        assert!(!chain.resolve().name().is_empty());
    }
}
