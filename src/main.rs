//! paged-view CLI
//!
//! Command-line interface for inspecting paginated views

use clap::Parser;
use paged_view::cli::{Cli, Runner};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    let runner = Runner::new(cli);

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LevelFilter::from_level(runner.log_level()).into()),
        )
        .init();

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
