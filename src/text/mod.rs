//! Text normalization: stopwords and tokenization

mod stopwords;
mod tokenizer;

pub use stopwords::StopWords;
pub use tokenizer::{Tokenizer, STRIPPED_CHARS};
