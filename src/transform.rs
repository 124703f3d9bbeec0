//! Derived column computation.

use tracing::{debug, warn};

use crate::dataset::{BillRecord, TipsDataset};
use crate::error::Result;

/// Name of the derived tip percentage column.
pub const TIP_PERCENTAGE: &str = "tip_percentage";

/// `100 × tip / total_bill` for a single bill.
///
/// A zero bill is not guarded: it yields `inf` (or `NaN` for a zero tip).
pub fn tip_percentage(record: &BillRecord) -> f64 {
    100.0 * (record.tip / record.total_bill)
}

/// Add the `tip_percentage` column to the table, keeping row order.
pub fn add_tip_percentage(dataset: &mut TipsDataset) -> Result<()> {
    let values: Vec<f64> = dataset.records().iter().map(tip_percentage).collect();

    let non_finite = values.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        warn!(
            rows = non_finite,
            "tip percentage is not finite for some rows (zero bill)"
        );
    }

    dataset.set_derived_column(TIP_PERCENTAGE, values)?;
    debug!(rows = dataset.len(), "added {} column", TIP_PERCENTAGE);
    Ok(())
}
