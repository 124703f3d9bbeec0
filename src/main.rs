//! tipscope - Main entry point
//!
//! Runs the tip analysis once and exits.

use std::io::stdout;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use tipscope::analysis::{AnalysisOutcome, run_analysis};
use tipscope::cli::{Cli, Commands};
use tipscope::config::AnalysisConfig;
use tipscope::loader::loader_from_config;

/// Initialize logging on stderr; stdout carries the report.
fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse_args();
    debug!(?cli, "CLI arguments parsed");

    if let Some(Commands::Validate { config }) = &cli.command {
        validate_config_file(config);
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load_from_file(path)?,
        None => AnalysisConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    let loader = loader_from_config(&config.dataset);
    let mut out = stdout().lock();
    match run_analysis(loader.as_ref(), &config, &mut out)? {
        AnalysisOutcome::Completed { output, records } => {
            info!(output = %output.display(), records, "analysis finished");
        }
        AnalysisOutcome::LoadFailed { reason } => {
            // Reported on stdout already; not a failure exit.
            debug!(%reason, "analysis stopped before plotting");
        }
    }

    Ok(())
}

fn validate_config_file(path: &Path) {
    info!("Validating configuration file: {:?}", path);
    match AnalysisConfig::load_from_file(path).and_then(|config| config.validate()) {
        Ok(()) => {
            info!("Configuration validation successful");
            println!("✓ Configuration file is valid: {}", path.display());
        }
        Err(e) => {
            error!("Configuration validation failed: {:#}", e);
            eprintln!("✗ Configuration validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
