//! Stopword sets
//!
//! The active set is the union of a general English list, a curated list of
//! words that are noise in grant titles, and whatever lists the caller adds
//! (typically a newline-separated national-language list). Lookups are
//! case-sensitive; the tokenizer lowercases before asking.

use std::collections::HashSet;

/// General English stopwords.
const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an",
    "and", "any", "are", "aren't", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "can't", "cannot", "com",
    "could", "couldn't", "did", "didn't", "do", "does", "doesn't", "doing", "don't",
    "down", "during", "each", "else", "ever", "few", "for", "from", "further", "get",
    "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd",
    "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself", "him",
    "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm",
    "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just",
    "k", "let's", "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor",
    "not", "of", "off", "on", "once", "only", "or", "other", "otherwise", "ought",
    "our", "ours", "ourselves", "out", "over", "own", "r", "same", "shall", "shan't",
    "she", "she'd", "she'll", "she's", "should", "shouldn't", "since", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
    "then", "there", "there's", "therefore", "these", "they", "they'd", "they'll",
    "they're", "they've", "this", "those", "through", "to", "too", "under", "until",
    "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
    "weren't", "what", "what's", "when", "when's", "where", "where's", "which",
    "while", "who", "who's", "whom", "why", "why's", "with", "won't", "would",
    "wouldn't", "www", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// Words that carry no topic in grant titles, in either language.
const GRANT_NOISE: &[&str] = &[
    "-", "–", "samt", "både", "række", "hvilket", "findes", "give", "øget", "ofte",
    "giver", "del", "projektet", "udviklingen", "baseret", "studier", "within", "1",
    "1600", "1660", "1978", "1865", "1895", "19", "ranking", "academia", "novel",
    "new", "using", "effects", "impact", "materials", "targeting", "early", "function",
    "high", "role", "based", "non", "no", "s", "t", "2", "effect", "basis", "next",
    "factors", "acute", "making", "inge", "single", "long", "higher",
];

/// A read-only set of words the tokenizer drops
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// No stopwords at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// English stopwords plus the grant-title noise list
    pub fn standard() -> Self {
        let mut sw = Self::empty();
        sw.extend(ENGLISH.iter().copied());
        sw.extend(GRANT_NOISE.iter().copied());
        sw
    }

    /// Merge a newline-separated list (one word per line, blank lines ignored)
    pub fn with_list(mut self, list: &str) -> Self {
        self.extend(list.lines().map(str::trim).filter(|w| !w.is_empty()));
        self
    }

    /// Merge arbitrary words
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(words);
        self
    }

    fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::empty().with_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_covers_both_lists() {
        let sw = StopWords::standard();
        assert!(sw.contains("the"));
        assert!(sw.contains("projektet"));
        assert!(sw.contains("novel"));
        assert!(!sw.contains("protein"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let sw = StopWords::standard();
        assert!(sw.contains("the"));
        assert!(!sw.contains("The"));
    }

    #[test]
    fn newline_list_skips_blank_lines() {
        let sw = StopWords::empty().with_list("og\n\n  i \nat\n");
        assert_eq!(sw.len(), 3);
        assert!(sw.contains("i"));
        assert!(!sw.contains(""));
    }
}
