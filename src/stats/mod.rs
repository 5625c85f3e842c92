//! Word statistics and the chart rows derived from them

mod aggregate;
mod chart;

pub use aggregate::{aggregate, StatKey, WordStat, WordStats};
pub use chart::{animation_frames, chart_rows, padded_range, ChartQuery, ChartRow, YearLabel};
