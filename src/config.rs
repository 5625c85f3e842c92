//! Tunable parameters
//!
//! Everything the pipeline treats as a knob lives here: layout spread per
//! graph view, visual output ranges and the chart year window. Values load
//! from YAML; any section or field left out keeps its default.
//!
//! ```yaml
//! graph:
//!   all_spread: 5.0
//!   seed: 42
//! chart:
//!   last_year: 2023
//! ```

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub graph: GraphConfig,
    pub visual: VisualConfig,
    pub chart: ChartConfig,
}

impl LexiconConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        Self::from_yaml_str(&std::fs::read_to_string(path)?)
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.graph.validate()?;
        self.chart.validate()
    }
}

/// Co-occurrence graph and layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Spring layout distance for single-word (ego) graphs
    pub ego_spread: f64,
    /// Spring layout distance for word-subset graphs
    pub subset_spread: f64,
    /// Spring layout distance for whole-vocabulary graphs
    pub all_spread: f64,
    pub iterations: usize,
    /// Fixed layout seed; unset means a fresh layout every run
    pub seed: Option<u64>,
    /// `top_n` for views made with `GraphView::ego_from` and `GraphView::all_from`
    pub default_top_n: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            ego_spread: 3.0,
            subset_spread: 3.0,
            all_spread: 4.0,
            iterations: 50,
            seed: None,
            default_top_n: 10,
        }
    }
}

impl GraphConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (name, spread) in [
            ("ego_spread", self.ego_spread),
            ("subset_spread", self.subset_spread),
            ("all_spread", self.all_spread),
        ] {
            if !(spread.is_finite() && spread > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "graph.{name} must be a positive number, got {spread}"
                )));
            }
        }
        if self.default_top_n == 0 {
            return Err(ConfigError::Invalid(
                "graph.default_top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Output range for one rescaled visual channel.
///
/// `start` is where the smallest input lands and `end` where the largest
/// does, so `start > end` is a descending mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub start: f64,
    pub end: f64,
}

impl ValueRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    pub node_size: ValueRange,
    pub node_font_size: ValueRange,
    pub edge_width: ValueRange,
    /// Grey level per edge: light for light edges, darker for heavy ones
    pub edge_color: ValueRange,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            node_size: ValueRange::new(20.0, 50.0),
            node_font_size: ValueRange::new(14.0, 18.0),
            edge_width: ValueRange::new(1.0, 10.0),
            edge_color: ValueRange::new(220.0, 150.0),
        }
    }
}

/// Year window and row limit for charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub first_year: i32,
    pub last_year: i32,
    pub top_n: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            first_year: 2013,
            last_year: 2022,
            top_n: 50,
        }
    }
}

impl ChartConfig {
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.first_year > self.last_year {
            return Err(ConfigError::Invalid(format!(
                "chart.first_year ({}) is after chart.last_year ({})",
                self.first_year, self.last_year
            )));
        }
        if self.top_n == 0 {
            return Err(ConfigError::Invalid(
                "chart.top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
