//! Value rescaling for visual encoding
//!
//! Raw weights, degrees and frequencies are unbounded. These transforms map
//! them onto bounded visual parameters (bubble sizes, line widths, color
//! intensities). Empty input gives empty output.

use std::collections::BTreeMap;

/// Linearly map `values` so that their minimum lands on `new_min` and their
/// maximum on `new_max`, rounding every result up.
///
/// `new_min` may exceed `new_max`, which inverts the mapping. When all values
/// are equal every output is `new_min`.
pub fn rescale(values: &[f64], new_min: f64, new_max: f64) -> Vec<i64> {
    let Some((min, max)) = min_max(values) else {
        return Vec::new();
    };
    let old_range = max - min;
    let new_range = new_max - new_min;

    values
        .iter()
        .map(|&v| {
            let z = if old_range == 0.0 {
                new_min
            } else {
                (v - min) * new_range / old_range + new_min
            };
            z.ceil() as i64
        })
        .collect()
}

/// Output levels for [`bucketize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buckets {
    pub low: i64,
    pub mid: i64,
    pub high_mid: i64,
    pub high: i64,
}

impl Default for Buckets {
    fn default() -> Self {
        Self {
            low: 2,
            mid: 4,
            high_mid: 6,
            high: 8,
        }
    }
}

/// Place each value in one of four levels.
///
/// The thresholds are 25%, 50% and 75% of the *maximum* value, not
/// percentiles of the distribution. A value equal to a threshold goes to the
/// bucket below it, except that everything at or above the 75% threshold is
/// `high`.
pub fn bucketize(values: &[f64], buckets: &Buckets) -> Vec<i64> {
    let Some((_, max)) = min_max(values) else {
        return Vec::new();
    };
    let q25 = max * 0.25;
    let q50 = max * 0.50;
    let q75 = max * 0.75;

    values
        .iter()
        .map(|&v| {
            if v >= q75 {
                buckets.high
            } else if v <= q25 {
                buckets.low
            } else if v <= q50 {
                buckets.mid
            } else {
                buckets.high_mid
            }
        })
        .collect()
}

/// Inverted color intensity range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    /// Output for the largest input
    pub min: f64,
    /// Output for the smallest input
    pub max: f64,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self { min: 15.0, max: 60.0 }
    }
}

impl ColorScale {
    /// Min-max normalize to 0..=100, invert, then map 0..=100 onto
    /// `self.min..=self.max`. Larger inputs come out closer to `self.min`.
    ///
    /// When all inputs are equal they normalize to 0 and map to `self.max`.
    pub fn apply<'a, I>(&self, values: I) -> BTreeMap<String, f64>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let values: Vec<(&str, f64)> = values.into_iter().collect();
        let raw: Vec<f64> = values.iter().map(|(_, v)| *v).collect();
        let Some((min, max)) = min_max(&raw) else {
            return BTreeMap::new();
        };
        let range = max - min;

        values
            .into_iter()
            .map(|(word, v)| {
                let pct = if range == 0.0 { 0.0 } else { (v - min) / range * 100.0 };
                (word.to_string(), self.remap(pct))
            })
            .collect()
    }

    fn remap(&self, pct: f64) -> f64 {
        let remaining = 100.0 - pct;
        remaining * (self.max - self.min) / 100.0 + self.min
    }
}

/// [`ColorScale::apply`] with the default 15..60 range
pub fn color_scale<'a, I>(values: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    ColorScale::default().apply(values)
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;
    Some((min, max))
}
