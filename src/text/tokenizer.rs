//! Title tokenizer
//!
//! Punctuation from a fixed set becomes whitespace, the text is split on
//! whitespace, each piece is lowercased, and stopwords are dropped. A word
//! repeated in one title is returned once.

use super::stopwords::StopWords;
use crate::record::Record;
use std::collections::BTreeSet;

/// Characters replaced by a space before splitting
pub const STRIPPED_CHARS: &str = "; ,.:;*'_#!?´-()^";

/// Turns free text into a deduplicated set of lowercase tokens
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopWords,
}

impl Tokenizer {
    pub fn new(stopwords: StopWords) -> Self {
        Self { stopwords }
    }

    /// Tokenizer using [`StopWords::standard`]
    pub fn standard() -> Self {
        Self::new(StopWords::standard())
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Tokenize one string.
    ///
    /// The set is sorted, which keeps downstream encounter order stable.
    pub fn tokenize(&self, text: &str) -> BTreeSet<String> {
        let cleaned: String = text
            .chars()
            .map(|c| if STRIPPED_CHARS.contains(c) { ' ' } else { c })
            .collect();

        cleaned
            .split_whitespace()
            .map(str::to_lowercase)
            .filter(|token| !token.is_empty() && !self.stopwords.contains(token))
            .collect()
    }

    /// Every token found in any title
    pub fn vocabulary<'a, I>(&self, records: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .flat_map(|r| self.tokenize(&r.title))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn dedups_lowercases_and_strips() {
        let tok = Tokenizer::new(StopWords::empty());
        assert_eq!(tok.tokenize("Cat, cat CAT!"), set(&["cat"]));
    }

    #[test]
    fn tokenizing_twice_is_identical() {
        let tok = Tokenizer::standard();
        let text = "Climate-driven shifts in Arctic (marine) food webs";
        assert_eq!(tok.tokenize(text), tok.tokenize(text));
    }

    #[test]
    fn hyphen_and_parentheses_split_words() {
        let tok = Tokenizer::new(StopWords::empty());
        assert_eq!(
            tok.tokenize("climate-driven (marine)"),
            set(&["climate", "driven", "marine"])
        );
    }

    #[test]
    fn stopwords_are_checked_after_lowercasing() {
        let tok = Tokenizer::new(StopWords::empty().with_words(["the"]));
        assert_eq!(tok.tokenize("The ice"), set(&["ice"]));
    }

    #[test]
    fn characters_outside_the_strip_set_survive() {
        let tok = Tokenizer::new(StopWords::empty());
        assert_eq!(tok.tokenize("CO2/N2 ratios"), set(&["co2/n2", "ratios"]));
    }

    #[test]
    fn empty_and_punctuation_only_text() {
        let tok = Tokenizer::standard();
        assert!(tok.tokenize("").is_empty());
        assert!(tok.tokenize(" ;.,!? ").is_empty());
    }

    #[test]
    fn vocabulary_spans_all_titles() {
        let tok = Tokenizer::new(StopWords::empty());
        let records = vec![
            Record::new(2013, "alpha beta", 1),
            Record::new(2014, "beta gamma", 1),
        ];
        assert_eq!(tok.vocabulary(&records), set(&["alpha", "beta", "gamma"]));
    }
}
