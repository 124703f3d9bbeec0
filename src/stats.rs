//! Descriptive statistics of a numeric column.
//!
//! `NaN` values are dropped before anything is computed; infinities are kept
//! and flow through the arithmetic unchanged.

/// Row labels of a [`Summary`] table, in print order.
pub const SUMMARY_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// count / mean / std / min / quartiles / max of a column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: f64,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Summary {
    /// Summarise `values`, skipping `NaN`.
    pub fn describe(values: &[f64]) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        if n == 0 {
            return Self {
                count: 0.0,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                q50: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = if n < 2 {
            f64::NAN
        } else {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        };

        Self {
            count: n as f64,
            mean,
            std,
            min: sorted[0],
            q25: quantile_sorted(&sorted, 0.25),
            q50: quantile_sorted(&sorted, 0.50),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted[n - 1],
        }
    }

    /// Round every field to `decimals` places.
    pub fn rounded(&self, decimals: i32) -> Self {
        let r = |v: f64| round_to(v, decimals);
        Self {
            count: r(self.count),
            mean: r(self.mean),
            std: r(self.std),
            min: r(self.min),
            q25: r(self.q25),
            q50: r(self.q50),
            q75: r(self.q75),
            max: r(self.max),
        }
    }

    /// `(label, value)` pairs in print order.
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        let values = [
            self.count, self.mean, self.std, self.min, self.q25, self.q50, self.q75, self.max,
        ];
        std::array::from_fn(|i| (SUMMARY_LABELS[i], values[i]))
    }

    /// Render as a labelled column table ending with a `Name: ..., dtype: float64` line.
    pub fn to_table(&self, name: &str) -> String {
        let formatted: Vec<(&str, String)> = self
            .rows()
            .iter()
            .map(|(label, value)| (*label, format!("{value:.2}")))
            .collect();
        let label_w = formatted.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let value_w = formatted.iter().map(|(_, v)| v.len()).max().unwrap_or(0) + 4;

        let mut out = String::new();
        for (label, value) in &formatted {
            out.push_str(&format!("{label:<label_w$}{value:>value_w$}\n"));
        }
        out.push_str(&format!("Name: {name}, dtype: float64"));
        out
    }
}

/// Linear-interpolated quantile of already sorted, `NaN`-free values.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            if lo == hi {
                sorted[lo]
            } else {
                let frac = pos - lo as f64;
                sorted[lo] + (sorted[hi] - sorted[lo]) * frac
            }
        }
    }
}

/// Round to `decimals` places, ties to even; non-finite values pass through.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
