//! Type-safe categorical columns of the tips dataset
//!
//! Each categorical column is a Rust enum instead of a raw string. The variant
//! declaration order is the level order used for legends and colour assignment.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Payer sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Sex {
    #[strum(serialize = "Male")]
    Male,
    #[strum(serialize = "Female")]
    Female,
}

/// Whether the party included smokers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Smoker {
    #[strum(serialize = "Yes")]
    Yes,
    #[strum(serialize = "No")]
    No,
}

/// Day of the week the bill was paid (the sample only covers Thursday to Sunday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Day {
    #[serde(rename = "Thur")]
    #[strum(serialize = "Thur")]
    Thursday,
    #[serde(rename = "Fri")]
    #[strum(serialize = "Fri")]
    Friday,
    #[serde(rename = "Sat")]
    #[strum(serialize = "Sat")]
    Saturday,
    #[serde(rename = "Sun")]
    #[strum(serialize = "Sun")]
    Sunday,
}

/// Meal time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum MealTime {
    #[strum(serialize = "Lunch")]
    Lunch,
    #[strum(serialize = "Dinner")]
    Dinner,
}

/// Ordered level names of a categorical enum, as they appear in the data.
pub fn levels<T: IntoEnumIterator + ToString>() -> Vec<String> {
    T::iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_day_levels_are_ordered() {
        assert_eq!(levels::<Day>(), vec!["Thur", "Fri", "Sat", "Sun"]);
        assert!(Day::Thursday < Day::Sunday);
    }

    #[test]
    fn test_display_matches_data_strings() {
        assert_eq!(Sex::Female.to_string(), "Female");
        assert_eq!(Smoker::No.to_string(), "No");
        assert_eq!(MealTime::Dinner.to_string(), "Dinner");
        assert_eq!(Day::Saturday.to_string(), "Sat");
    }

    #[test]
    fn test_parse_from_data_strings() {
        assert_eq!(Day::from_str("Thur").unwrap(), Day::Thursday);
        assert_eq!(MealTime::from_str("Lunch").unwrap(), MealTime::Lunch);
        assert!(Day::from_str("Mon").is_err());
    }

    #[test]
    fn test_serde_uses_data_strings() {
        let json = serde_json::to_string(&Day::Friday).unwrap();
        assert_eq!(json, "\"Fri\"");
        let back: Day = serde_json::from_str("\"Sun\"").unwrap();
        assert_eq!(back, Day::Sunday);
    }
}
