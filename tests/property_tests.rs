//! Property-Based Tests for tipscope
//!
//! These tests verify:
//! - Categorical enum string round-trips (parse → to_string → parse)
//! - The tip percentage formula and the shape of the table after transformation
//! - Ordering invariants of the descriptive statistics

use proptest::prelude::*;

use tipscope::dataset::{BASE_COLUMNS, BillRecord, TipsDataset};
use tipscope::stats::Summary;
use tipscope::transform::{TIP_PERCENTAGE, add_tip_percentage};
use tipscope::types::{Day, MealTime, Sex, Smoker};

// =============================================================================
// Categorical Enum Property Tests
// =============================================================================

/// Strategy for generating valid Day variants
fn day_strategy() -> impl Strategy<Value = Day> {
    prop_oneof![
        Just(Day::Thursday),
        Just(Day::Friday),
        Just(Day::Saturday),
        Just(Day::Sunday),
    ]
}

proptest! {
    /// Day: to_string → parse round-trip is identity
    #[test]
    fn day_roundtrip(day in day_strategy()) {
        let s = day.to_string();
        let parsed: Day = s.parse().expect("Should parse");
        prop_assert_eq!(day, parsed);
    }

    /// Day: serde uses the same short names as Display
    #[test]
    fn day_serde_matches_display(day in day_strategy()) {
        let json = serde_json::to_string(&day).expect("Should serialize");
        prop_assert_eq!(json, format!("\"{}\"", day));
    }
}

// =============================================================================
// Transformation Property Tests
// =============================================================================

/// Strategy for bills with a positive total
fn record_strategy() -> impl Strategy<Value = BillRecord> {
    (0.01f64..500.0, 0.0f64..100.0, day_strategy(), any::<bool>(), 1u32..7).prop_map(
        |(total_bill, tip, day, lunch, size)| BillRecord {
            total_bill,
            tip,
            sex: if size % 2 == 0 { Sex::Male } else { Sex::Female },
            smoker: if lunch { Smoker::Yes } else { Smoker::No },
            day,
            time: if lunch { MealTime::Lunch } else { MealTime::Dinner },
            size,
        },
    )
}

proptest! {
    /// tip_percentage == 100 × tip / total_bill for every positive bill
    #[test]
    fn tip_percentage_matches_formula(records in prop::collection::vec(record_strategy(), 0..64)) {
        let mut ds = TipsDataset::new(records.clone());
        add_tip_percentage(&mut ds).expect("Should add column");

        let values = ds.derived_column(TIP_PERCENTAGE).expect("Column should exist");
        for (record, value) in records.iter().zip(values) {
            let expected = 100.0 * record.tip / record.total_bill;
            prop_assert!((value - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }

    /// Row count is preserved and exactly one column is added
    #[test]
    fn transformation_preserves_shape(records in prop::collection::vec(record_strategy(), 0..64)) {
        let mut ds = TipsDataset::new(records.clone());
        add_tip_percentage(&mut ds).expect("Should add column");

        prop_assert_eq!(ds.len(), records.len());
        prop_assert_eq!(ds.records(), records.as_slice());

        let mut expected: Vec<&str> = BASE_COLUMNS.to_vec();
        expected.push(TIP_PERCENTAGE);
        prop_assert_eq!(ds.columns(), expected);
    }

    /// Applying the transformation twice leaves a single column
    #[test]
    fn transformation_is_idempotent(records in prop::collection::vec(record_strategy(), 1..16)) {
        let mut ds = TipsDataset::new(records);
        add_tip_percentage(&mut ds).expect("Should add column");
        let first = ds.clone();
        add_tip_percentage(&mut ds).expect("Should replace column");
        prop_assert_eq!(ds, first);
    }
}

// =============================================================================
// Statistics Property Tests
// =============================================================================

proptest! {
    /// min ≤ 25% ≤ 50% ≤ 75% ≤ max and the mean lies within [min, max]
    #[test]
    fn summary_is_ordered(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let s = Summary::describe(&values);
        prop_assert_eq!(s.count, values.len() as f64);
        prop_assert!(s.min <= s.q25);
        prop_assert!(s.q25 <= s.q50);
        prop_assert!(s.q50 <= s.q75);
        prop_assert!(s.q75 <= s.max);
        let tol = 1e-9 * s.max.abs().max(s.min.abs()).max(1.0);
        prop_assert!(s.mean >= s.min - tol && s.mean <= s.max + tol);
    }

    /// NaN values do not count
    #[test]
    fn summary_skips_nan(
        values in prop::collection::vec(0.0f64..100.0, 0..50),
        nans in 0usize..10,
    ) {
        let mut with_nan = values.clone();
        with_nan.extend(std::iter::repeat(f64::NAN).take(nans));
        let s = Summary::describe(&with_nan);
        prop_assert_eq!(s.count, values.len() as f64);
        if values.len() >= 2 {
            prop_assert!(s.std >= 0.0);
        } else {
            prop_assert!(s.std.is_nan());
        }
    }
}
