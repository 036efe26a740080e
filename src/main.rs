//! merged-interfaces CLI
//!
//! Command-line interface for generating TypeScript interfaces from samples

use clap::Parser;
use merged_interfaces::cli::{Cli, Runner};
use merged_interfaces::config::load_config;

fn main() {
    let cli = Cli::parse();

    // Config errors are reported by the runner once logging is up
    let config_level = cli
        .config_path()
        .and_then(|path| load_config(path).ok())
        .and_then(|config| config.log_level);

    // Initialize logging
    let level: tracing::Level = cli.effective_log_level(config_level).into();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
