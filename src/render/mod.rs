//! Figure rendering.
//!
//! Plots are drawn onto an SVG [`canvas::Canvas`] in points and then written
//! as SVG or rasterised to PNG depending on the output file extension.

pub mod axis;
pub mod canvas;
pub mod color;
pub mod layout;
pub mod legend;
pub mod output;
pub mod scatter;

use std::path::Path;

use tracing::info;

use crate::config::PlotConfig;
use crate::dataset::TipsDataset;
use crate::error::Result;
use crate::theme::PlotTheme;

pub use output::{save_figure, svg_to_png};
pub use scatter::{ScatterSeries, render_scatter};

/// Render the configured scatter plot of `dataset` and write it to `path`.
pub fn plot_to_file(dataset: &TipsDataset, config: &PlotConfig, path: &Path) -> Result<()> {
    let theme = PlotTheme::for_style(config.style);
    let series = ScatterSeries::from_dataset(dataset, config)?;
    let svg = render_scatter(&series, config, &theme)?;
    save_figure(&svg, path, config.dpi)?;
    info!(path = %path.display(), style = %config.style, points = series.len(), "plot saved");
    Ok(())
}
