//! Shared fixtures for the integration tests
//!
//! A small grant table spread over three years, with repeated words inside
//! titles and titles made only of stopwords.

#![allow(dead_code)]

use grantlex::{RecordTable, StopWords, Tokenizer};

pub const GRANTS_JSON: &str = r#"[
    {"year": 2013, "title": "Arctic sea ice: dynamics", "amount": 400000},
    {"year": 2013, "title": "Sea ice and ocean heat", "amount": 250000},
    {"year": 2013, "title": "Ice ice baby? Glacier ice cores", "amount": 90000},
    {"year": 2014, "title": "Ocean heat transport", "amount": 300000, "description": "Mooring arrays"},
    {"year": 2014, "title": "Glacier dynamics (Greenland)", "amount": 150000},
    {"year": 2014, "title": "The of and", "amount": 10000},
    {"year": 2016, "title": "Arctic ocean ice-sheet coupling", "amount": 500000},
    {"year": 2016, "title": "Sea-level rise; Greenland glacier", "amount": 200000}
]"#;

pub fn grants() -> RecordTable {
    RecordTable::from_json(GRANTS_JSON).expect("fixture parses")
}

pub fn tokenizer() -> Tokenizer {
    Tokenizer::new(StopWords::empty().with_words(["the", "of", "and", "baby"]))
}

/// Route tracing output through the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
