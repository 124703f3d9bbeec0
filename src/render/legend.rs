use crate::render::canvas::{Canvas, Style, TextAnchor, TextBaseline, TextStyle};
use crate::render::color::Color;
use crate::render::layout::PlotArea;
use crate::theme::{FontSizes, PlotTheme};

/// Distance between the legend frame and the plot area edge.
const BORDER_PAD: f64 = 5.0;
/// Inner padding of the legend frame.
const PADDING: f64 = 6.0;

pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Legend corner inside the plot area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendCorner {
    /// Candidates in preference order; ties go to the earlier one.
    pub const ALL: [LegendCorner; 4] = [
        LegendCorner::UpperRight,
        LegendCorner::UpperLeft,
        LegendCorner::LowerLeft,
        LegendCorner::LowerRight,
    ];
}

/// Legend frame size and marker geometry.
#[derive(Debug, Clone, Copy)]
pub struct LegendBox {
    pub width: f64,
    pub height: f64,
    pub row_height: f64,
    pub marker_radius: f64,
}

impl LegendBox {
    pub fn measure(
        canvas: &Canvas,
        title: &str,
        entries: &[LegendEntry],
        marker_radius: f64,
    ) -> Self {
        let entry_style = TextStyle {
            size: FontSizes::LEGEND,
            ..Default::default()
        };
        let title_style = TextStyle {
            size: FontSizes::LEGEND_TITLE,
            ..Default::default()
        };

        let row_height = (FontSizes::LEGEND * 1.4).max(marker_radius * 2.0 + 2.0);
        let swatch_w = marker_radius * 2.0 + 8.0;
        let max_label = entries
            .iter()
            .map(|e| canvas.measure_text(&e.label, &entry_style).0)
            .fold(0.0_f64, f64::max);
        let title_w = canvas.measure_text(title, &title_style).0;

        let width = PADDING * 2.0 + (swatch_w + max_label).max(title_w);
        let title_h = if title.is_empty() { 0.0 } else { row_height };
        let height = PADDING * 2.0 + title_h + entries.len() as f64 * row_height;

        Self {
            width,
            height,
            row_height,
            marker_radius,
        }
    }

    /// Top-left corner of the frame when placed at `corner`.
    pub fn origin(&self, area: &PlotArea, corner: LegendCorner) -> (f64, f64) {
        let left = area.left + BORDER_PAD;
        let right = area.right() - BORDER_PAD - self.width;
        let top = area.top + BORDER_PAD;
        let bottom = area.bottom() - BORDER_PAD - self.height;
        match corner {
            LegendCorner::UpperRight => (right, top),
            LegendCorner::UpperLeft => (left, top),
            LegendCorner::LowerLeft => (left, bottom),
            LegendCorner::LowerRight => (right, bottom),
        }
    }
}

/// Pick the corner covering the fewest plotted points (pixel coordinates).
pub fn best_corner(area: &PlotArea, legend: &LegendBox, points: &[(f64, f64)]) -> LegendCorner {
    let mut best = LegendCorner::UpperRight;
    let mut best_hits = usize::MAX;
    for corner in LegendCorner::ALL {
        let (x, y) = legend.origin(area, corner);
        let hits = points
            .iter()
            .filter(|(px, py)| {
                *px >= x && *px <= x + legend.width && *py >= y && *py <= y + legend.height
            })
            .count();
        if hits < best_hits {
            best = corner;
            best_hits = hits;
        }
    }
    best
}

/// Draw a framed legend with an optional title and one marker row per entry.
pub fn draw_legend(
    canvas: &mut Canvas,
    theme: &PlotTheme,
    origin: (f64, f64),
    legend: &LegendBox,
    title: &str,
    entries: &[LegendEntry],
) {
    if entries.is_empty() {
        return;
    }
    let (lx, ly) = origin;

    canvas.rect(
        lx,
        ly,
        legend.width,
        legend.height,
        &Style::outlined(theme.legend_face, theme.legend_edge, 0.8),
    );

    let mut row_top = ly + PADDING;
    if !title.is_empty() {
        let title_style = TextStyle {
            size: FontSizes::LEGEND_TITLE,
            color: theme.text,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Central,
            ..Default::default()
        };
        let (cx, cy) = (lx + legend.width / 2.0, row_top + legend.row_height / 2.0);
        canvas.text(cx, cy, title, &title_style);
        row_top += legend.row_height;
    }

    let text_style = TextStyle {
        size: FontSizes::LEGEND,
        color: theme.text,
        baseline: TextBaseline::Central,
        ..Default::default()
    };
    for (i, entry) in entries.iter().enumerate() {
        let cy = row_top + i as f64 * legend.row_height + legend.row_height / 2.0;
        let cx = lx + PADDING + legend.marker_radius + 2.0;
        canvas.circle(
            cx,
            cy,
            legend.marker_radius,
            &Style::outlined(entry.color, theme.marker_edge, 0.5),
        );
        canvas.text(
            cx + legend.marker_radius + 6.0,
            cy,
            &entry.label,
            &text_style,
        );
    }
}
