//! Tests for command-line parsing and the rendering pipeline driver

#[cfg(test)]
mod tests {
    use biaspanels::ErrorKind;
    use biaspanels::io::cli::{Cli, PanelRenderer};
    use biaspanels::io::configuration::{
        DEFAULT_DPI, DEFAULT_GLYPH, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_THRESHOLD,
    };
    use clap::Parser;
    use image::{GrayImage, Luma};
    use std::path::{Path, PathBuf};

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args.iter().copied())
    }

    fn arg(path: &Path) -> String {
        path.display().to_string()
    }

    fn write_gradient(path: &Path, width: u32, height: u32) {
        let image = GrayImage::from_fn(width, height, |x, _| Luma([(x * 255 / width) as u8]));
        let Ok(()) = image.save(path) else {
            unreachable!("test image saves");
        };
    }

    // Tests CLI parsing with only the required input argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "photo.png"]);

        assert_eq!(cli.input, PathBuf::from("photo.png"));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.dpi, DEFAULT_DPI);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.glyph, DEFAULT_GLYPH);
        assert!((cli.threshold - DEFAULT_THRESHOLD).abs() < f64::EPSILON);
        assert_eq!(cli.background, "white");
        assert!(cli.stipple.is_none());
        assert!(cli.mask.is_none());
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping short flags between options
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "photo.png",
            "-o",
            "out.jpg",
            "--stipple",
            "dots.png",
            "--mask",
            "mask.png",
            "-d",
            "300",
            "-b",
            "pink",
            "-t",
            "0.25",
            "-g",
            "B",
            "-r",
            "0.5",
            "-f",
            "bold.ttf",
            "-s",
            "9",
            "--density",
            "0.8",
            "-q",
        ]);

        assert_eq!(cli.output, PathBuf::from("out.jpg"));
        assert_eq!(cli.stipple, Some(PathBuf::from("dots.png")));
        assert_eq!(cli.mask, Some(PathBuf::from("mask.png")));
        assert_eq!(cli.dpi, 300);
        assert_eq!(cli.background, "pink");
        assert!((cli.threshold - 0.25).abs() < f64::EPSILON);
        assert_eq!(cli.glyph, 'B');
        assert!((cli.glyph_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(cli.font, Some(PathBuf::from("bold.ttf")));
        assert_eq!(cli.seed, 9);
        assert!((cli.density - 0.8).abs() < f64::EPSILON);
        assert!(cli.quiet);
    }

    // Tests progress display and log filter follow the quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_quiet_flag() {
        let loud = Cli::parse_from(["program", "a.png"]);
        let quiet = Cli::parse_from(["program", "a.png", "--quiet"]);

        assert!(loud.should_show_progress());
        assert!(!quiet.should_show_progress());
        assert_eq!(loud.log_filter(), "info");
        assert_eq!(quiet.log_filter(), "warn");
    }

    // Tests a user font is tried before the platform fonts
    // Verified by appending the user font instead
    #[test]
    fn test_font_chain_prefers_user_font() {
        let plain = PanelRenderer::new(Cli::parse_from(["program", "a.png", "-q"]));
        let custom =
            PanelRenderer::new(Cli::parse_from(["program", "a.png", "-q", "-f", "my.ttf"]));

        assert_eq!(custom.font_chain().len(), plain.font_chain().len() + 1);
    }

    // Tests a full run writes a four-panel composite
    // Verified by writing only the reality panel
    #[test]
    fn test_process_writes_composite() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        let input = dir.path().join("input.png");
        let output = dir.path().join("composite.png");
        write_gradient(&input, 40, 30);

        let cli = parse(&["program", arg(&input).as_str(), "-o", arg(&output).as_str(), "-q"]);
        let Ok(summary) = PanelRenderer::new(cli).process() else {
            unreachable!("valid input renders");
        };

        assert_eq!(summary.panel_width, 40);
        assert_eq!(summary.panel_height, 30);
        assert_eq!(summary.canvas_width, 160);
        let Ok(decoded) = image::open(&output) else {
            unreachable!("output decodes");
        };
        assert_eq!(decoded.width(), 160);
        assert_eq!(decoded.height(), summary.canvas_height);
    }

    // Tests invalid parameters fail before anything is written
    // Verified by validating the threshold after writing
    #[test]
    fn test_invalid_parameters_write_nothing() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        let input = dir.path().join("input.png");
        let output = dir.path().join("composite.png");
        write_gradient(&input, 10, 10);

        for (flag, value) in [("-t", "1.5"), ("-d", "0"), ("-b", "nocolor"), ("-r", "2")] {
            let cli = parse(&[
                "program",
                arg(&input).as_str(),
                "-o",
                arg(&output).as_str(),
                "-q",
                flag,
                value,
            ]);
            let Err(error) = PanelRenderer::new(cli).process() else {
                unreachable!("{flag} {value} must fail");
            };
            assert_eq!(error.kind(), ErrorKind::Precondition, "{flag} {value}");
        }
        assert!(!output.exists());
    }

    // Tests a missing input is reported as an I/O failure
    // Verified by substituting a blank image for missing input
    #[test]
    fn test_missing_input() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        let output = dir.path().join("composite.png");
        let missing = dir.path().join("missing.png");
        let cli = parse(&["program", arg(&missing).as_str(), "-o", arg(&output).as_str(), "-q"]);

        let Err(error) = PanelRenderer::new(cli).process() else {
            unreachable!("missing input must fail");
        };

        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(!output.exists());
    }
}
