//! In-memory restaurant bill table.
//!
//! Rows are typed [`BillRecord`]s; computed columns are kept alongside as
//! named `f64` vectors aligned to the rows.

use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TipsError};
use crate::types::{self, Day, MealTime, Sex, Smoker};

/// Column names of the raw dataset, in file order.
pub const BASE_COLUMNS: [&str; 7] = ["total_bill", "tip", "sex", "smoker", "day", "time", "size"];

/// One restaurant bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    #[serde(deserialize_with = "nan_if_empty")]
    pub total_bill: f64,
    #[serde(deserialize_with = "nan_if_empty")]
    pub tip: f64,
    pub sex: Sex,
    pub smoker: Smoker,
    pub day: Day,
    pub time: MealTime,
    pub size: u32,
}

/// Empty numeric cells are missing values and read as `NaN`.
fn nan_if_empty<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// A computed numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// The loaded tips table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipsDataset {
    records: Vec<BillRecord>,
    derived: Vec<DerivedColumn>,
}

impl TipsDataset {
    pub fn new(records: Vec<BillRecord>) -> Self {
        Self {
            records,
            derived: Vec::new(),
        }
    }

    /// Parse CSV text with a `total_bill,tip,sex,smoker,day,time,size` header.
    ///
    /// Every base column must appear in the header. Empty `total_bill` or `tip`
    /// cells become `NaN`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?;
        if let Some(missing) = BASE_COLUMNS
            .iter()
            .find(|&&col| !headers.iter().any(|h| h == col))
        {
            return Err(TipsError::invalid_column(*missing, "missing from CSV header"));
        }

        let mut records = Vec::new();
        for row in rdr.deserialize() {
            let record: BillRecord = row?;
            records.push(record);
        }
        tracing::debug!(rows = records.len(), "parsed tips CSV");
        Ok(Self::new(records))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_csv_reader(std::io::BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[BillRecord] {
        &self.records
    }

    /// Base columns followed by derived columns in insertion order.
    pub fn columns(&self) -> Vec<&str> {
        BASE_COLUMNS
            .iter()
            .copied()
            .chain(self.derived.iter().map(|c| c.name.as_str()))
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns().contains(&name)
    }

    /// Values of a numeric column (`total_bill`, `tip`, `size` or a derived one).
    pub fn numeric_column(&self, name: &str) -> Option<Vec<f64>> {
        let pick: fn(&BillRecord) -> f64 = match name {
            "total_bill" => |r| r.total_bill,
            "tip" => |r| r.tip,
            "size" => |r| f64::from(r.size),
            _ => return self.derived_column(name).map(<[f64]>::to_vec),
        };
        Some(self.records.iter().map(pick).collect())
    }

    pub fn derived_column(&self, name: &str) -> Option<&[f64]> {
        self.derived
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// String values of a categorical column.
    pub fn category_column(&self, name: &str) -> Option<Vec<String>> {
        let pick: fn(&BillRecord) -> String = match name {
            "sex" => |r| r.sex.to_string(),
            "smoker" => |r| r.smoker.to_string(),
            "day" => |r| r.day.to_string(),
            "time" => |r| r.time.to_string(),
            _ => return None,
        };
        Some(self.records.iter().map(pick).collect())
    }

    /// Ordered levels of a categorical column.
    pub fn category_levels(&self, name: &str) -> Option<Vec<String>> {
        match name {
            "sex" => Some(types::levels::<Sex>()),
            "smoker" => Some(types::levels::<Smoker>()),
            "day" => Some(types::levels::<Day>()),
            "time" => Some(types::levels::<MealTime>()),
            _ => None,
        }
    }

    /// Attach a computed column, replacing a derived column of the same name.
    pub fn set_derived_column(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        if BASE_COLUMNS.contains(&name) {
            return Err(TipsError::invalid_column(name, "cannot overwrite a base column"));
        }
        if values.len() != self.records.len() {
            return Err(TipsError::invalid_column(
                name,
                format!(
                    "expected {} values, got {}",
                    self.records.len(),
                    values.len()
                ),
            ));
        }

        match self.derived.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.values = values,
            None => self.derived.push(DerivedColumn {
                name: name.to_string(),
                values,
            }),
        }
        Ok(())
    }
}
