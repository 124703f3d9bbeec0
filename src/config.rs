//! Analysis configuration: saving, loading and validating JSON config files.
//!
//! Every field has a default, so an empty file (or no file at all) reproduces
//! the canonical run: the `tips` sample dataset, cached locally, plotted to
//! `tip_analysis_scatterplot.png`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::ThemeStyle;

/// Fixed output artefact name.
pub const OUTPUT_PLOT_FILE: &str = "tip_analysis_scatterplot.png";

/// Name of the sample dataset.
pub const SAMPLE_DATASET: &str = "tips";

/// Where sample datasets are downloaded from.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/mwaskom/seaborn-data/master";

/// Environment variable overriding the dataset cache directory.
pub const DATA_HOME_ENV: &str = "TIPSCOPE_DATA";

/// Output formats understood by the renderer, by file extension.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "svg"];

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub dataset: DatasetConfig,
    pub output: PathBuf,
    pub plot: PlotConfig,
}

/// Where the table comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub name: String,
    pub base_url: String,
    /// Cache directory; `None` resolves via `TIPSCOPE_DATA` then the user cache dir.
    pub data_home: Option<PathBuf>,
    pub cache: bool,
    /// Read this CSV file instead of the sample source.
    pub local_csv: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Figure geometry, column mapping and text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub style: ThemeStyle,
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    /// Marker area in pt².
    pub point_size: f64,
    pub x: String,
    pub y: String,
    pub hue: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            output: PathBuf::from(OUTPUT_PLOT_FILE),
            plot: PlotConfig::default(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            name: SAMPLE_DATASET.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            data_home: None,
            cache: true,
            local_csv: None,
            timeout_secs: None,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            style: ThemeStyle::WhiteGrid,
            width_in: 10.0,
            height_in: 6.0,
            dpi: 100,
            point_size: 80.0,
            x: "total_bill".to_string(),
            y: crate::transform::TIP_PERCENTAGE.to_string(),
            hue: "day".to_string(),
            title: "Tip Percentage vs. Total Bill, by Day of Week".to_string(),
            x_label: "Total Bill ($)".to_string(),
            y_label: "Tip Percentage (%)".to_string(),
            legend_title: "Day".to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.dataset.name.trim().is_empty() {
            anyhow::bail!("Dataset name must be specified");
        }
        if self.dataset.local_csv.is_none()
            && !(self.dataset.base_url.starts_with("http://")
                || self.dataset.base_url.starts_with("https://"))
        {
            anyhow::bail!("Dataset base URL must start with http:// or https://");
        }
        if self.dataset.timeout_secs == Some(0) {
            anyhow::bail!("Download timeout must be at least one second");
        }

        let ext = self.output_extension();
        if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            anyhow::bail!(
                "Output file {:?} must end in one of: {}",
                self.output,
                SUPPORTED_EXTENSIONS.join(", ")
            );
        }

        let plot = &self.plot;
        if !(plot.width_in > 0.0 && plot.height_in > 0.0) {
            anyhow::bail!("Figure width and height must be positive");
        }
        if plot.dpi == 0 {
            anyhow::bail!("Figure dpi must be positive");
        }
        if !(plot.point_size > 0.0) {
            anyhow::bail!("Point size must be positive");
        }
        for (field, column) in [("x", &plot.x), ("y", &plot.y), ("hue", &plot.hue)] {
            if column.trim().is_empty() {
                anyhow::bail!("Plot column '{}' must be specified", field);
            }
        }

        Ok(())
    }

    /// Lower-cased extension of the output path (empty when missing).
    pub fn output_extension(&self) -> String {
        self.output
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default()
    }
}

impl DatasetConfig {
    /// Resolve the cache directory: explicit setting, then `TIPSCOPE_DATA`, then the
    /// platform user cache directory.
    pub fn resolve_data_home(&self) -> PathBuf {
        if let Some(home) = &self.data_home {
            return home.clone();
        }
        if let Some(env) = std::env::var_os(DATA_HOME_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(env);
        }
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("tipscope")
    }
}
