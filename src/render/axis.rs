/// Fraction of the data range added on each side of a linear axis.
pub const AXIS_MARGIN: f64 = 0.05;

/// Linear axis with tick generation and data→pixel mapping.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub tick_positions: Vec<f64>,
    pub tick_labels: Vec<String>,
}

impl Axis {
    /// Axis spanning the finite values of `data`, padded by [`AXIS_MARGIN`], with
    /// "nice number" ticks inside the padded range.
    pub fn auto_linear(data: &[f64], target_ticks: usize) -> Self {
        let (lo, hi) = finite_extent(data).unwrap_or((0.0, 1.0));
        let (min, max) = padded_range(lo, hi);

        let step = nice_step((max - min) / (target_ticks.max(2) - 1) as f64);
        let mut ticks = Vec::new();
        let mut labels = Vec::new();
        let mut v = (min / step).ceil() * step;
        while v <= max + step * 1e-9 {
            ticks.push(v);
            labels.push(format_tick(v, step));
            v += step;
        }

        Self {
            min,
            max,
            label: String::new(),
            tick_positions: ticks,
            tick_labels: labels,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Map a data value to a pixel coordinate.
    pub fn data_to_pixel(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        let frac = (value - self.min) / (self.max - self.min);
        px_min + frac * (px_max - px_min)
    }
}

/// `(min, max)` of the finite values, if any.
pub fn finite_extent(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn padded_range(lo: f64, hi: f64) -> (f64, f64) {
    if (hi - lo).abs() < 1e-12 {
        // Degenerate range: open up around the single value.
        let half = if lo.abs() > 1e-12 { lo.abs() * 0.05 } else { 0.05 };
        return (lo - half, hi + half);
    }
    let pad = (hi - lo) * AXIS_MARGIN;
    (lo - pad, hi + pad)
}

/// Round a rough step to 1, 2, 5 or 10 × 10ⁿ.
fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    // Avoid "-0"
    let value = if value.abs() < step * 1e-6 { 0.0 } else { value };
    format!("{value:.decimals$}")
}
