use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gtl_cli::commands::report::{self, ReportOptions};
use gtl_cli::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support; stdout is reserved for the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let path = config.timelog_path(cli.file.as_deref())?;
    let file = File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
    tracing::debug!(path = %path.display(), "reading timelog");

    let options = ReportOptions {
        workday: config.workday(),
        json: cli.json,
    };
    let stdout = io::stdout();
    report::run(BufReader::new(file), &mut stdout.lock(), options)?;

    Ok(())
}
