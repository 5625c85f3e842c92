//! Grant records and the table that holds them
//!
//! Records are immutable input. Nothing in the crate mutates a record once
//! it has been loaded; every analysis borrows the table.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while ingesting records
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for record ingestion
pub type RecordResult<T> = Result<T, RecordError>;

/// One grant application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Year the grant was awarded
    pub year: i32,
    /// Title text; the only field that is tokenized
    pub title: String,
    /// Free-text description (carried along, never analyzed)
    #[serde(default)]
    pub description: String,
    /// Amount funded; whole or fractional, never negative
    #[serde(deserialize_with = "non_negative_amount")]
    pub amount: f64,
}

impl Record {
    pub fn new(year: i32, title: impl Into<String>, amount: impl Into<f64>) -> Self {
        Self {
            year,
            title: title.into(),
            description: String::new(),
            amount: amount.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

fn non_negative_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let amount = f64::deserialize(deserializer)?;
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(serde::de::Error::custom(format!(
            "amount must be a non-negative number, got {amount}"
        )))
    }
}

/// An ordered table of records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records.
    ///
    /// Malformed rows (missing title, non-numeric or negative amount) fail
    /// the whole table.
    pub fn from_json(json: &str) -> RecordResult<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    /// Read a JSON array of records from a file
    pub fn load(path: impl AsRef<Path>) -> RecordResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records awarded in the given year, in table order
    pub fn by_year(&self, year: i32) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter().filter(move |r| r.year == year)
    }

    /// Distinct years present in the table, ascending
    pub fn years(&self) -> BTreeSet<i32> {
        self.records.iter().map(|r| r.year).collect()
    }
}

impl From<Vec<Record>> for RecordTable {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RecordTable {
        RecordTable::new(vec![
            Record::new(2014, "Protein folding", 100),
            Record::new(2013, "Arctic ice", 50),
            Record::new(2014, "Ice cores", 75),
        ])
    }

    #[test]
    fn years_are_sorted_and_distinct() {
        let years: Vec<i32> = table().years().into_iter().collect();
        assert_eq!(years, vec![2013, 2014]);
    }

    #[test]
    fn by_year_keeps_table_order() {
        let t = table();
        let titles: Vec<&str> = t.by_year(2014).map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Protein folding", "Ice cores"]);
    }

    #[test]
    fn parses_json_without_description() {
        let json = r#"[
            {"year": 2015, "title": "Soil microbes", "amount": 1200},
            {"year": 2016, "title": "Coral reefs", "description": "Reef survey", "amount": 800}
        ]"#;
        let t = RecordTable::from_json(json).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.records()[0].description, "");
        assert_eq!(t.records()[1].description, "Reef survey");
    }

    #[test]
    fn malformed_amount_is_a_serialization_error() {
        let json = r#"[{"year": 2015, "title": "Soil", "amount": "lots"}]"#;
        let err = RecordTable::from_json(json).unwrap_err();
        assert!(matches!(err, RecordError::Serialization(_)));
    }

    #[test]
    fn float_amounts_are_accepted() {
        let json = r#"[
            {"year": 2015, "title": "Soil microbes", "amount": 1200.0},
            {"year": 2015, "title": "Peat bogs", "amount": 1200.5}
        ]"#;
        let t = RecordTable::from_json(json).unwrap();
        assert_eq!(t.records()[0].amount, 1200.0);
        assert_eq!(t.records()[1].amount, 1200.5);
    }

    #[test]
    fn negative_amount_is_a_serialization_error() {
        let json = r#"[{"year": 2015, "title": "Soil", "amount": -1.5}]"#;
        let err = RecordTable::from_json(json).unwrap_err();
        assert!(matches!(err, RecordError::Serialization(_)));
    }

    #[test]
    fn missing_title_is_rejected() {
        let json = r#"[{"year": 2015, "amount": 10}]"#;
        assert!(RecordTable::from_json(json).is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = RecordTable::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, RecordError::Io(_)));
    }
}
