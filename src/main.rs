//! CLI entry point for the four-panel selection bias renderer

use biaspanels::io::cli::{Cli, PanelRenderer};
use clap::Parser;

fn main() -> biaspanels::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let renderer = PanelRenderer::new(cli);
    renderer.process()?;
    Ok(())
}
