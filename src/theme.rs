//! Centralized plot theme and styling
//!
//! This module is the single source of truth for the colours, font sizes and
//! line widths of the rendered figure. A [`PlotTheme`] is chosen once per run
//! (the "global visual theme") and handed to the renderer.
//!
//! # Usage
//! ```rust
//! use tipscope::theme::{PlotTheme, ThemeStyle};
//!
//! let theme = PlotTheme::for_style(ThemeStyle::WhiteGrid);
//! assert!(theme.grid.is_some());
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::render::color::{Color, DEEP};

// =============================================================================
// STYLE PRESETS
// =============================================================================

/// Named figure styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeStyle {
    /// White background with a light grey grid
    #[default]
    WhiteGrid,
    /// Grey-blue axes background with a white grid
    DarkGrid,
    /// White background, no grid, dark frame
    White,
}

// =============================================================================
// FONT SIZES
// =============================================================================

/// Font sizes in points
pub struct FontSizes;

impl FontSizes {
    /// Axes title
    pub const TITLE: f64 = 12.0;

    /// Axis labels
    pub const LABEL: f64 = 12.0;

    /// Tick labels
    pub const TICK: f64 = 11.0;

    /// Legend entries
    pub const LEGEND: f64 = 11.0;

    /// Legend title
    pub const LEGEND_TITLE: f64 = 12.0;
}

// =============================================================================
// THEME
// =============================================================================

/// Grid line settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTheme {
    pub color: Color,
    pub width: f64,
}

/// Resolved theme for one figure
#[derive(Debug, Clone, PartialEq)]
pub struct PlotTheme {
    pub style: ThemeStyle,
    /// Figure background
    pub background: Color,
    /// Plot area background
    pub axes_face: Color,
    /// Frame colour; `None` hides the frame
    pub spine: Option<Color>,
    pub spine_width: f64,
    /// Grid lines; `None` disables the grid
    pub grid: Option<GridTheme>,
    /// Text colour for titles, labels and ticks
    pub text: Color,
    /// Marker edge colour
    pub marker_edge: Color,
    /// Categorical palette
    pub palette: Vec<Color>,
    /// Legend frame background
    pub legend_face: Color,
    pub legend_edge: Color,
}

impl PlotTheme {
    pub fn for_style(style: ThemeStyle) -> Self {
        match style {
            ThemeStyle::WhiteGrid => Self::whitegrid(),
            ThemeStyle::DarkGrid => Self::darkgrid(),
            ThemeStyle::White => Self::white(),
        }
    }

    fn whitegrid() -> Self {
        Self {
            style: ThemeStyle::WhiteGrid,
            background: Color::WHITE,
            axes_face: Color::WHITE,
            spine: Some(Color::grey(0.8)),
            spine_width: 1.25,
            grid: Some(GridTheme {
                color: Color::grey(0.8),
                width: 1.0,
            }),
            text: Color::grey(0.15),
            marker_edge: Color::WHITE,
            palette: DEEP.to_vec(),
            legend_face: Color::WHITE.with_alpha(0.8),
            legend_edge: Color::grey(0.8),
        }
    }

    fn darkgrid() -> Self {
        Self {
            style: ThemeStyle::DarkGrid,
            axes_face: Color::rgb(234, 234, 242),
            spine: None,
            grid: Some(GridTheme {
                color: Color::WHITE,
                width: 1.0,
            }),
            ..Self::whitegrid()
        }
    }

    fn white() -> Self {
        Self {
            style: ThemeStyle::White,
            spine: Some(Color::grey(0.15)),
            grid: None,
            ..Self::whitegrid()
        }
    }
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self::for_style(ThemeStyle::default())
    }
}
