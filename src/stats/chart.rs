//! Chart rows for bar, animated bar and bubble charts
//!
//! Rows are assembled directly as one struct per (word, year), ready for a
//! renderer to consume.

use super::aggregate::{aggregate, StatKey, WordStats};
use crate::record::{Record, RecordTable};
use crate::text::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

/// Year a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YearLabel {
    Year(i32),
    /// Statistics over the whole table
    AllYears,
}

const ALL_YEARS: &str = "All Years";

impl Serialize for YearLabel {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Year(y) => s.serialize_i32(*y),
            Self::AllYears => s.serialize_str(ALL_YEARS),
        }
    }
}

impl<'de> Deserialize<'de> for YearLabel {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Year(i32),
            Label(String),
        }

        match Raw::deserialize(d)? {
            Raw::Year(y) => Ok(Self::Year(y)),
            Raw::Label(s) if s == ALL_YEARS => Ok(Self::AllYears),
            Raw::Label(s) => Err(serde::de::Error::custom(format!(
                "expected a year or {ALL_YEARS:?}, got {s:?}"
            ))),
        }
    }
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(y) => write!(f, "{}", y),
            Self::AllYears => f.write_str(ALL_YEARS),
        }
    }
}

/// One word's statistics for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub word: String,
    pub frequency: u64,
    pub funding: f64,
    pub avg_funding: f64,
    pub year: YearLabel,
}

/// Which rows to produce
#[derive(Debug, Clone, Default)]
pub struct ChartQuery {
    /// Keep only the highest `top_n` rows (per year when `yearly`)
    pub top_n: Option<usize>,
    /// Aggregate each year separately
    pub yearly: bool,
    /// Rank rows by this statistic, highest first. Unsorted rows come out in
    /// token order.
    pub sort_by: Option<StatKey>,
    /// Restrict rows to these words
    pub words: Option<BTreeSet<String>>,
}

impl ChartQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    pub fn yearly(mut self) -> Self {
        self.yearly = true;
        self
    }

    pub fn sorted_by(mut self, key: StatKey) -> Self {
        self.sort_by = Some(key);
        self
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    fn rows_for(&self, stats: &WordStats, year: YearLabel) -> Vec<ChartRow> {
        let mut rows: Vec<ChartRow> = stats
            .iter()
            .filter(|(word, _)| self.words.as_ref().map_or(true, |w| w.contains(*word)))
            .map(|(word, stat)| ChartRow {
                word: word.to_string(),
                frequency: stat.frequency,
                funding: stat.funding,
                avg_funding: stat.avg_funding(),
                year,
            })
            .collect();

        if let Some(key) = self.sort_by {
            rows.sort_by(|a, b| b.value(key).total_cmp(&a.value(key)));
        }
        if let Some(n) = self.top_n {
            rows.truncate(n);
        }
        rows
    }
}

impl ChartRow {
    pub fn value(&self, key: StatKey) -> f64 {
        match key {
            StatKey::Frequency => self.frequency as f64,
            StatKey::Funding => self.funding,
            StatKey::AverageFunding => self.avg_funding,
        }
    }
}

/// Build chart rows for a table.
///
/// Yearly rows come out grouped by ascending year.
pub fn chart_rows(table: &RecordTable, tokenizer: &Tokenizer, query: &ChartQuery) -> Vec<ChartRow> {
    if !query.yearly {
        let stats = aggregate(table, tokenizer, 0.0);
        return query.rows_for(&stats, YearLabel::AllYears);
    }

    let mut rows = Vec::new();
    for year in table.years() {
        let stats = aggregate(table.by_year(year), tokenizer, 0.0);
        rows.extend(query.rows_for(&stats, YearLabel::Year(year)));
    }
    debug!(rows = rows.len(), "built yearly chart rows");
    rows
}

/// Rows for an animated bar chart: each year in `years` contributes its
/// `top_n` most frequent words. Years without records contribute nothing.
///
/// Output is ordered by year ascending, then by `sort_by` descending.
pub fn animation_frames(
    table: &RecordTable,
    tokenizer: &Tokenizer,
    years: RangeInclusive<i32>,
    top_n: usize,
    sort_by: StatKey,
) -> Vec<ChartRow> {
    let query = ChartQuery::new().with_top_n(top_n).sorted_by(StatKey::Frequency);
    let mut rows = Vec::new();
    for year in years {
        let in_year: Vec<&Record> = table.by_year(year).collect();
        if in_year.is_empty() {
            continue;
        }
        let stats = aggregate(in_year, tokenizer, 0.0);
        rows.extend(query.rows_for(&stats, YearLabel::Year(year)));
    }
    rows.sort_by(|a, b| {
        a.year
            .cmp(&b.year)
            .then(b.value(sort_by).total_cmp(&a.value(sort_by)))
    });
    rows
}

/// Axis range padded on both sides by `stretch` times the maximum value.
///
/// Returns `None` for an empty series.
pub fn padded_range(values: &[f64], stretch: f64) -> Option<(f64, f64)> {
    let max = values.iter().copied().reduce(f64::max)?;
    let min = values.iter().copied().reduce(f64::min)?;
    Some((min - max * stretch, max + max * stretch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::StopWords;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(StopWords::empty())
    }

    fn table() -> RecordTable {
        RecordTable::new(vec![
            Record::new(2014, "ice sheets", 300),
            Record::new(2013, "ice cores", 100),
            Record::new(2013, "ice age", 50),
            Record::new(2013, "age dating", 20),
        ])
    }

    // === Scenario: whole-table rows ===
    #[test]
    fn overall_rows_are_labelled_all_years() {
        let rows = chart_rows(&table(), &tokenizer(), &ChartQuery::new());
        assert!(rows.iter().all(|r| r.year == YearLabel::AllYears));
        let ice = rows.iter().find(|r| r.word == "ice").unwrap();
        assert_eq!(ice.frequency, 3);
        assert_eq!(ice.funding, 450.0);
        assert_eq!(ice.avg_funding, 150.0);
    }

    #[test]
    fn sort_and_top_n_overall() {
        let query = ChartQuery::new().sorted_by(StatKey::Funding).with_top_n(2);
        let rows = chart_rows(&table(), &tokenizer(), &query);
        let words: Vec<&str> = rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["ice", "sheets"]);
    }

    #[test]
    fn words_filter_restricts_rows() {
        let query = ChartQuery::new().with_words(["age", "nope"]);
        let rows = chart_rows(&table(), &tokenizer(), &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].word, "age");
        assert_eq!(rows[0].frequency, 2);
    }

    // === Scenario: per-year rows ===
    #[test]
    fn yearly_rows_aggregate_each_year_alone() {
        let query = ChartQuery::new().yearly().sorted_by(StatKey::Frequency).with_top_n(1);
        let rows = chart_rows(&table(), &tokenizer(), &query);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, YearLabel::Year(2013));
        // "age" and "ice" both appear twice in 2013; token order breaks the tie
        assert_eq!(rows[0].word, "age");
        assert_eq!(rows[0].frequency, 2);
        assert_eq!(rows[1].year, YearLabel::Year(2014));
        assert_eq!(rows[1].frequency, 1);
    }

    #[test]
    fn animation_frames_skip_empty_years_and_order_rows() {
        let rows = animation_frames(&table(), &tokenizer(), 2012..=2014, 2, StatKey::Funding);
        let years: Vec<YearLabel> = rows.iter().map(|r| r.year).collect();
        assert_eq!(
            years,
            vec![
                YearLabel::Year(2013),
                YearLabel::Year(2013),
                YearLabel::Year(2014),
                YearLabel::Year(2014)
            ]
        );
        // 2013 top two by frequency are age (70) and ice (150); funding orders them
        assert_eq!(rows[0].word, "ice");
        assert_eq!(rows[1].word, "age");
    }

    #[test]
    fn year_label_serializes_like_a_column_value() {
        assert_eq!(serde_json::to_string(&YearLabel::Year(2015)).unwrap(), "2015");
        assert_eq!(serde_json::to_string(&YearLabel::AllYears).unwrap(), "\"All Years\"");
        assert_eq!(YearLabel::AllYears.to_string(), "All Years");
        let back: YearLabel = serde_json::from_str("\"All Years\"").unwrap();
        assert_eq!(back, YearLabel::AllYears);
        assert!(serde_json::from_str::<YearLabel>("\"Someday\"").is_err());
    }

    #[test]
    fn padded_range_stretches_by_max() {
        assert_eq!(padded_range(&[50.0, 100.0], 0.25), Some((25.0, 125.0)));
        assert_eq!(padded_range(&[50.0, 100.0], 0.0), Some((50.0, 100.0)));
        assert_eq!(padded_range(&[], 0.25), None);
    }
}
