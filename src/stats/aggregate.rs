//! Per-word frequency and funding aggregation
//!
//! One pass over the records: every distinct token in a title gains one
//! mention and the record's full amount. A token's average funding is
//! derived on demand (`funding / frequency`, rounded down) so it can never
//! drift from the two totals it comes from.

use crate::record::Record;
use crate::text::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Statistics for a single token
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WordStat {
    /// Number of records whose title contains the token
    pub frequency: u64,
    /// Sum of the amounts of those records
    pub funding: f64,
}

impl WordStat {
    /// Floor of `funding / frequency`
    pub fn avg_funding(&self) -> f64 {
        if self.frequency == 0 {
            0.0
        } else {
            (self.funding / self.frequency as f64).floor()
        }
    }

    /// Value of the chosen statistic
    pub fn get(&self, key: StatKey) -> f64 {
        match key {
            StatKey::Frequency => self.frequency as f64,
            StatKey::Funding => self.funding,
            StatKey::AverageFunding => self.avg_funding(),
        }
    }
}

/// Which statistic to rank or filter words by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    #[default]
    Frequency,
    Funding,
    AverageFunding,
}

/// Word statistics keyed by token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordStats {
    words: BTreeMap<String, WordStat>,
}

impl WordStats {
    pub fn get(&self, token: &str) -> Option<&WordStat> {
        self.words.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains_key(token)
    }

    pub fn frequency(&self, token: &str) -> Option<u64> {
        self.get(token).map(|s| s.frequency)
    }

    pub fn funding(&self, token: &str) -> Option<f64> {
        self.get(token).map(|s| s.funding)
    }

    pub fn avg_funding(&self, token: &str) -> Option<f64> {
        self.get(token).map(WordStat::avg_funding)
    }

    /// Tokens with their statistics, in token order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordStat)> {
        self.words.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keep only tokens whose total funding is at least `threshold`
    pub fn retain_funding_at_least(&mut self, threshold: f64) {
        self.words.retain(|_, stat| stat.funding >= threshold);
    }

    /// Tokens ranked by `key`, highest first; ties keep token order
    pub fn ranked(&self, key: StatKey) -> Vec<(&str, &WordStat)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.get(key).total_cmp(&a.1.get(key)));
        ranked
    }
}

/// Aggregate word statistics over `records`.
///
/// Tokens whose total funding ends up below `funding_threshold` are dropped
/// after the pass; a threshold of 0 keeps everything.
pub fn aggregate<'a, I>(records: I, tokenizer: &Tokenizer, funding_threshold: f64) -> WordStats
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut stats = WordStats::default();
    let mut scanned = 0usize;

    for record in records {
        scanned += 1;
        for token in tokenizer.tokenize(&record.title) {
            let entry = stats.words.entry(token).or_default();
            entry.frequency += 1;
            entry.funding += record.amount;
        }
    }

    let before = stats.len();
    stats.retain_funding_at_least(funding_threshold);
    debug!(
        records = scanned,
        tokens = before,
        kept = stats.len(),
        funding_threshold,
        "aggregated word statistics"
    );

    stats
}
