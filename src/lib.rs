//! Grantlex: word statistics and co-occurrence graphs over grant records
//!
//! Turns a table of grant applications (year, title, funding amount) into
//! per-word statistics, chart-ready rows and word co-occurrence networks
//! with a force-directed layout.
//!
//! # Core Concepts
//!
//! - **Tokens**: lowercase title words with punctuation and stopwords removed,
//!   counted at most once per title
//! - **Word statistics**: how many titles contain a word and how much funding
//!   those titles received
//! - **Co-occurrence graphs**: words joined by edges weighted with the number
//!   of titles they share, built as ego, subset or whole-vocabulary views
//!
//! # Example
//!
//! ```
//! use grantlex::{GraphBuilder, GraphConfig, GraphView, Record, Tokenizer};
//!
//! let records = vec![
//!     Record::new(2019, "Arctic sea ice dynamics", 120_000),
//!     Record::new(2020, "Sea ice and ocean heat", 80_000),
//! ];
//! let tokenizer = Tokenizer::standard();
//! let builder = GraphBuilder::new(&records, &tokenizer);
//!
//! let config = GraphConfig { seed: Some(1), ..Default::default() };
//! let graph = builder.render_with_config(&GraphView::ego("ice", 10), &config).unwrap();
//! assert!(graph.node("sea").is_some());
//! ```

pub mod config;
pub mod graph;
pub mod record;
pub mod scale;
pub mod stats;
pub mod text;

pub use config::{ChartConfig, ConfigError, ConfigResult, GraphConfig, LexiconConfig, ValueRange, VisualConfig};
pub use graph::{
    GraphBuilder, GraphError, GraphResult, GraphView, GraphVisual, LayoutStrategy, Position, SpringLayout,
    WordEdge, WordGraph, WordNode,
};
pub use record::{Record, RecordError, RecordResult, RecordTable};
pub use scale::{bucketize, color_scale, rescale, Buckets, ColorScale};
pub use stats::{aggregate, chart_rows, ChartQuery, ChartRow, StatKey, WordStat, WordStats, YearLabel};
pub use text::{StopWords, Tokenizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
