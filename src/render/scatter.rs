//! Categorical-hue scatter plot.
//!
//! Two numeric columns become the axes and one categorical column picks the
//! palette colour of every point. Rows with a non-finite coordinate are not
//! drawn and are left out of the axis ranges.

use tracing::debug;

use crate::config::PlotConfig;
use crate::dataset::TipsDataset;
use crate::error::{Result, TipsError};
use crate::render::axis::Axis;
use crate::render::canvas::{Canvas, LineStyle, Style, TextAnchor, TextBaseline, TextStyle};
use crate::render::color::palette_color;
use crate::render::layout::PlotArea;
use crate::render::legend::{LegendBox, LegendEntry, best_corner, draw_legend};
use crate::theme::{FontSizes, PlotTheme};

/// Points per inch.
pub const PT_PER_INCH: f64 = 72.0;

/// Gap between the frame and tick labels.
const TICK_PAD: f64 = 3.5;
/// Gap between tick labels and axis labels.
const LABEL_PAD: f64 = 4.0;
/// Gap between the frame and the title baseline.
const TITLE_PAD: f64 = 6.0;

/// Column data pulled out of the table for one scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Index into `levels` for every row.
    pub hue: Vec<usize>,
    pub levels: Vec<String>,
}

impl ScatterSeries {
    /// Resolve the x / y / hue columns named in `config`.
    pub fn from_dataset(dataset: &TipsDataset, config: &PlotConfig) -> Result<Self> {
        let x = numeric(dataset, &config.x)?;
        let y = numeric(dataset, &config.y)?;

        let (values, levels) = match (
            dataset.category_column(&config.hue),
            dataset.category_levels(&config.hue),
        ) {
            (Some(values), Some(levels)) => (values, levels),
            _ if dataset.has_column(&config.hue) => {
                return Err(TipsError::invalid_column(
                    &config.hue,
                    "hue column must be categorical",
                ));
            }
            _ => return Err(TipsError::UnknownColumn(config.hue.clone())),
        };

        let hue = values
            .iter()
            .map(|v| {
                levels.iter().position(|l| l == v).ok_or_else(|| {
                    TipsError::invalid_column(&config.hue, format!("unknown level '{v}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { x, y, hue, levels })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Rows where both coordinates are finite.
    pub fn finite_rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&i| self.x[i].is_finite() && self.y[i].is_finite())
    }
}

fn numeric(dataset: &TipsDataset, name: &str) -> Result<Vec<f64>> {
    match dataset.numeric_column(name) {
        Some(values) => Ok(values),
        None if dataset.has_column(name) => {
            Err(TipsError::invalid_column(name, "axis column must be numeric"))
        }
        None => Err(TipsError::UnknownColumn(name.to_string())),
    }
}

/// Marker radius in points for a marker area of `size` pt².
pub fn marker_radius(size: f64) -> f64 {
    size.sqrt() / 2.0
}

/// Marker edge width, proportional to the marker diameter.
pub fn marker_edge_width(size: f64) -> f64 {
    0.08 * size.sqrt()
}

/// Render the scatter plot as an SVG document.
pub fn render_scatter(
    series: &ScatterSeries,
    config: &PlotConfig,
    theme: &PlotTheme,
) -> Result<String> {
    let fig_w = config.width_in * PT_PER_INCH;
    let fig_h = config.height_in * PT_PER_INCH;
    let mut canvas = Canvas::new(fig_w, fig_h, theme.background);
    let area = PlotArea::subplot(fig_w, fig_h);

    let finite: Vec<usize> = series.finite_rows().collect();
    let xs: Vec<f64> = finite.iter().map(|&i| series.x[i]).collect();
    let ys: Vec<f64> = finite.iter().map(|&i| series.y[i]).collect();
    let x_axis = Axis::auto_linear(&xs, 9).with_label(&config.x_label);
    let y_axis = Axis::auto_linear(&ys, 8).with_label(&config.y_label);
    debug!(
        drawn = finite.len(),
        skipped = series.len() - finite.len(),
        "scatter points"
    );

    canvas.rect(
        area.left,
        area.top,
        area.width,
        area.height,
        &Style::filled(theme.axes_face),
    );
    draw_grid(&mut canvas, &area, &x_axis, &y_axis, theme);
    draw_frame(&mut canvas, &area, theme);

    // Points
    let radius = marker_radius(config.point_size);
    let edge = marker_edge_width(config.point_size);
    let mut pixels = Vec::with_capacity(finite.len());
    for &i in &finite {
        let px = x_axis.data_to_pixel(series.x[i], area.left, area.right());
        let py = y_axis.data_to_pixel(series.y[i], area.bottom(), area.top);
        let color = palette_color(&theme.palette, series.hue[i]);
        canvas.circle(
            px,
            py,
            radius,
            &Style::outlined(color, theme.marker_edge, edge),
        );
        pixels.push((px, py));
    }

    draw_tick_labels(&mut canvas, &area, &x_axis, &y_axis, theme);
    draw_axis_labels(&mut canvas, &area, &x_axis, &y_axis, theme);

    if !config.title.is_empty() {
        let title_style = TextStyle {
            size: FontSizes::TITLE,
            color: theme.text,
            anchor: TextAnchor::Middle,
            ..Default::default()
        };
        let center = area.left + area.width / 2.0;
        canvas.text(center, area.top - TITLE_PAD, &config.title, &title_style);
    }

    // Legend
    let entries: Vec<LegendEntry> = series
        .levels
        .iter()
        .enumerate()
        .map(|(i, level)| LegendEntry {
            label: level.clone(),
            color: palette_color(&theme.palette, i),
        })
        .collect();
    let legend = LegendBox::measure(&canvas, &config.legend_title, &entries, radius);
    let corner = best_corner(&area, &legend, &pixels);
    debug!(?corner, "legend placement");
    draw_legend(
        &mut canvas,
        theme,
        legend.origin(&area, corner),
        &legend,
        &config.legend_title,
        &entries,
    );

    canvas.finish_svg()
}

fn draw_grid(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &PlotTheme,
) {
    let Some(grid) = theme.grid else {
        return;
    };
    let style = LineStyle::solid(grid.color, grid.width);
    for &val in &x_axis.tick_positions {
        let px = x_axis.data_to_pixel(val, area.left, area.right());
        canvas.line(px, area.top, px, area.bottom(), &style);
    }
    for &val in &y_axis.tick_positions {
        let py = y_axis.data_to_pixel(val, area.bottom(), area.top);
        canvas.line(area.left, py, area.right(), py, &style);
    }
}

fn draw_frame(canvas: &mut Canvas, area: &PlotArea, theme: &PlotTheme) {
    let Some(color) = theme.spine else {
        return;
    };
    let style = LineStyle {
        color,
        width: theme.spine_width,
        square_cap: true,
    };
    canvas.line(area.left, area.top, area.right(), area.top, &style);
    canvas.line(
        area.left,
        area.bottom(),
        area.right(),
        area.bottom(),
        &style,
    );
    canvas.line(area.left, area.top, area.left, area.bottom(), &style);
    canvas.line(area.right(), area.top, area.right(), area.bottom(), &style);
}

fn draw_tick_labels(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &PlotTheme,
) {
    let x_style = TextStyle {
        size: FontSizes::TICK,
        color: theme.text,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };
    for (val, label) in x_axis.tick_positions.iter().zip(&x_axis.tick_labels) {
        let px = x_axis.data_to_pixel(*val, area.left, area.right());
        canvas.text(px, area.bottom() + TICK_PAD, label, &x_style);
    }

    let y_style = TextStyle {
        size: FontSizes::TICK,
        color: theme.text,
        anchor: TextAnchor::End,
        baseline: TextBaseline::Central,
        ..Default::default()
    };
    for (val, label) in y_axis.tick_positions.iter().zip(&y_axis.tick_labels) {
        let py = y_axis.data_to_pixel(*val, area.bottom(), area.top);
        canvas.text(area.left - TICK_PAD, py, label, &y_style);
    }
}

fn draw_axis_labels(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &PlotTheme,
) {
    let label_style = TextStyle {
        size: FontSizes::LABEL,
        color: theme.text,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };

    if !x_axis.label.is_empty() {
        let y = area.bottom() + TICK_PAD + FontSizes::TICK * 1.2 + LABEL_PAD;
        canvas.text(area.left + area.width / 2.0, y, &x_axis.label, &label_style);
    }

    if !y_axis.label.is_empty() {
        let tick_style = TextStyle {
            size: FontSizes::TICK,
            ..Default::default()
        };
        let widest = y_axis
            .tick_labels
            .iter()
            .map(|l| canvas.measure_text(l, &tick_style).0)
            .fold(0.0_f64, f64::max);
        let x = area.left - TICK_PAD - widest - LABEL_PAD - FontSizes::LABEL;
        canvas.text_rotated(
            x,
            area.top + area.height / 2.0,
            &y_axis.label,
            &label_style,
            -90.0,
        );
    }
}
