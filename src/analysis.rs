//! The analysis pipeline: load, transform, describe, plot, save.
//!
//! The human-readable report goes to the supplied writer (standard output in
//! the binary). Diagnostics go through `tracing`.

use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use tracing::{error, info};

use crate::config::AnalysisConfig;
use crate::dataset::TipsDataset;
use crate::error::{Result, TipsError};
use crate::loader::DatasetLoader;
use crate::render;
use crate::stats::Summary;
use crate::transform::{self, TIP_PERCENTAGE};

/// Header printed above the statistics table.
pub const SUMMARY_HEADER: &str = "--- Summary of Tip Percentage ---";
/// Footer printed below the statistics table.
pub const SUMMARY_FOOTER: &str = "---------------------------------";

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Statistics printed and the figure written.
    Completed { output: PathBuf, records: usize },
    /// The dataset could not be loaded; nothing was written.
    LoadFailed { reason: String },
}

impl AnalysisOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, AnalysisOutcome::Completed { .. })
    }
}

/// Describe a numeric column, rounded to two decimals.
pub fn describe_column(dataset: &TipsDataset, name: &str) -> Result<Summary> {
    let values = dataset
        .numeric_column(name)
        .ok_or_else(|| TipsError::UnknownColumn(name.to_string()))?;
    Ok(Summary::describe(&values).rounded(2))
}

/// Run the full pipeline once.
///
/// A loader failure is reported on `out` and returned as
/// [`AnalysisOutcome::LoadFailed`]; every later failure is an error.
pub fn run_analysis<L, W>(
    loader: &L,
    config: &AnalysisConfig,
    out: &mut W,
) -> Result<AnalysisOutcome>
where
    L: DatasetLoader + ?Sized,
    W: Write,
{
    writeln!(
        out,
        "[{}] Starting data analysis...",
        Local::now().format("%H:%M:%S")
    )?;

    let mut dataset = match loader.load() {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(dataset = loader.name(), error = %e, "dataset load failed");
            writeln!(out, "Error loading tips dataset: {e}")?;
            return Ok(AnalysisOutcome::LoadFailed {
                reason: e.to_string(),
            });
        }
    };
    info!(
        dataset = loader.name(),
        rows = dataset.len(),
        "dataset loaded"
    );
    writeln!(out, "Data loaded. Total records: {}", dataset.len())?;

    transform::add_tip_percentage(&mut dataset)?;

    let summary = describe_column(&dataset, TIP_PERCENTAGE)?;
    writeln!(out)?;
    writeln!(out, "{SUMMARY_HEADER}")?;
    writeln!(out, "{}", summary.to_table(TIP_PERCENTAGE))?;
    writeln!(out, "{SUMMARY_FOOTER}")?;

    render::plot_to_file(&dataset, &config.plot, &config.output)?;
    writeln!(out)?;
    writeln!(
        out,
        "Plot saved successfully as '{}'",
        config.output.display()
    )?;

    writeln!(out, "Script finished.")?;
    out.flush()?;

    Ok(AnalysisOutcome::Completed {
        output: config.output.clone(),
        records: dataset.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::BillRecord;
    use crate::types::{Day, MealTime, Sex, Smoker};
    use tempfile::TempDir;

    struct Fixed(Vec<(f64, f64)>);

    impl DatasetLoader for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn load(&self) -> Result<TipsDataset> {
            Ok(TipsDataset::new(
                self.0
                    .iter()
                    .map(|&(total_bill, tip)| BillRecord {
                        total_bill,
                        tip,
                        sex: Sex::Male,
                        smoker: Smoker::No,
                        day: Day::Saturday,
                        time: MealTime::Dinner,
                        size: 2,
                    })
                    .collect(),
            ))
        }
    }

    struct Broken;

    impl DatasetLoader for Broken {
        fn name(&self) -> &str {
            "tips"
        }

        fn load(&self) -> Result<TipsDataset> {
            Err(TipsError::unavailable("tips", "connection refused"))
        }
    }

    fn config_in(dir: &TempDir, file: &str) -> AnalysisConfig {
        AnalysisConfig {
            output: dir.path().join(file),
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn report_lines_in_order() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "plot.svg");
        let mut out = Vec::new();

        let loader = Fixed(vec![(10.0, 1.0), (20.0, 4.0)]);
        let outcome = run_analysis(&loader, &config, &mut out).unwrap();
        assert_eq!(
            outcome,
            AnalysisOutcome::Completed {
                output: config.output.clone(),
                records: 2,
            }
        );

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with('[') && lines[0].ends_with("] Starting data analysis..."));
        assert_eq!(lines[0].len(), "[00:00:00] Starting data analysis...".len());
        assert_eq!(lines[1], "Data loaded. Total records: 2");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], SUMMARY_HEADER);
        assert_eq!(lines[4], "count     2.00");
        assert_eq!(lines[5], "mean     15.00");
        assert_eq!(lines[12], "Name: tip_percentage, dtype: float64");
        assert_eq!(lines[13], SUMMARY_FOOTER);
        assert_eq!(lines[14], "");
        assert_eq!(
            lines[15],
            format!("Plot saved successfully as '{}'", config.output.display())
        );
        assert_eq!(lines[16], "Script finished.");
        assert!(config.output.exists());
    }

    #[test]
    fn load_failure_stops_early() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "plot.svg");
        let mut out = Vec::new();

        let outcome = run_analysis(&Broken, &config, &mut out).unwrap();
        assert!(!outcome.is_completed());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error loading tips dataset: "));
        assert!(text.contains("connection refused"));
        assert!(!text.contains("Script finished."));
        assert!(!config.output.exists());
    }

    #[test]
    fn render_failure_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "plot.gif");
        let mut out = Vec::new();
        let err = run_analysis(&Fixed(vec![(10.0, 1.0)]), &config, &mut out).unwrap_err();
        assert!(matches!(err, TipsError::Render(_)));
    }

    #[test]
    fn describe_unknown_column() {
        let ds = TipsDataset::default();
        assert!(matches!(describe_column(&ds, "nope"), Err(TipsError::UnknownColumn(_))));
    }
}
