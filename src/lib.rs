//! tipscope library
//!
//! Loads the restaurant "tips" dataset, derives the tip percentage of every
//! bill, summarises it and plots it against the bill amount.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod render;
pub mod stats;
pub mod theme;
pub mod transform;
pub mod types;

// Re-export main types for convenience
pub use analysis::{AnalysisOutcome, describe_column, run_analysis};
pub use config::{AnalysisConfig, DatasetConfig, OUTPUT_PLOT_FILE, PlotConfig};
pub use dataset::{BillRecord, TipsDataset};
pub use error::{Result, TipsError};
pub use loader::{CsvFileLoader, DatasetLoader, SampleDatasetLoader, loader_from_config};
pub use stats::Summary;
pub use theme::{PlotTheme, ThemeStyle};
pub use transform::{TIP_PERCENTAGE, add_tip_percentage, tip_percentage};
pub use types::{Day, MealTime, Sex, Smoker};
