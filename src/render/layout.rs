/// Default subplot fractions of the figure: left, right, bottom, top.
pub const SUBPLOT_LEFT: f64 = 0.125;
pub const SUBPLOT_RIGHT: f64 = 0.9;
pub const SUBPLOT_BOTTOM: f64 = 0.11;
pub const SUBPLOT_TOP: f64 = 0.88;

/// Rectangular plot area within the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Single-axes layout using the default subplot fractions.
    ///
    /// Figure fractions are measured from the bottom; canvas coordinates grow down.
    pub fn subplot(fig_width: f64, fig_height: f64) -> Self {
        let left = fig_width * SUBPLOT_LEFT;
        let top = fig_height * (1.0 - SUBPLOT_TOP);
        Self {
            left,
            top,
            width: fig_width * (SUBPLOT_RIGHT - SUBPLOT_LEFT),
            height: fig_height * (SUBPLOT_TOP - SUBPLOT_BOTTOM),
        }
    }

    pub fn manual(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
