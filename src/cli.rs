use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AnalysisConfig;

/// tipscope - restaurant tip analysis
#[derive(Parser, Debug)]
#[command(name = "tipscope")]
#[command(about = "Summarise tip percentages in the tips dataset and plot them against the bill")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file (defaults apply to every missing field)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output image path (.png or .svg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory used to cache downloaded datasets
    #[arg(long)]
    pub data_home: Option<PathBuf>,

    /// Read the dataset from a local CSV file instead of downloading it
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Always download the dataset, bypassing the local cache
    #[arg(long)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut AnalysisConfig) {
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(home) = &self.data_home {
            config.dataset.data_home = Some(home.clone());
        }
        if let Some(csv) = &self.csv {
            config.dataset.local_csv = Some(csv.clone());
        }
        if self.no_cache {
            config.dataset.cache = false;
        }
    }
}
