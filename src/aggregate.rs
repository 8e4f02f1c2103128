//! Named reductions of a benchmark's samples to one comparable value.

use std::{fmt, str::FromStr};

use crate::GateError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregation {
    Mean,
    Min,
    Max,
    Percentile(u8),
}

impl Aggregation {
    /// Resolves a user-facing name. Literal names take precedence over the
    /// `pNN` percentile form.
    pub fn resolve(name: &str) -> Result<Self, GateError> {
        if name.is_empty() {
            return Err(GateError::EmptyAggregationName);
        }
        match name {
            "mean" | "avg" => return Ok(Aggregation::Mean),
            "min" => return Ok(Aggregation::Min),
            "max" => return Ok(Aggregation::Max),
            _ => {}
        }
        let Some(suffix) = name.strip_prefix('p') else {
            return Err(GateError::unknown_aggregation(name));
        };
        let value: i64 = suffix
            .parse()
            .map_err(|source| GateError::InvalidPercentileSuffix {
                name: name.to_string(),
                source,
            })?;
        match u8::try_from(value) {
            Ok(p) if p <= 100 => Ok(Aggregation::Percentile(p)),
            _ => Err(GateError::PercentileOutOfRange {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Reduces `values` to one number. `values` must not be empty.
    pub fn apply(&self, values: &[f64]) -> f64 {
        debug_assert!(!values.is_empty(), "aggregation over empty samples");
        match self {
            Aggregation::Mean => mean(values),
            Aggregation::Min => min(values),
            Aggregation::Max => max(values),
            Aggregation::Percentile(p) => percentile(*p, values),
        }
    }
}

impl FromStr for Aggregation {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Aggregation::resolve(s)
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::Mean => f.write_str("mean"),
            Aggregation::Min => f.write_str("min"),
            Aggregation::Max => f.write_str("max"),
            Aggregation::Percentile(p) => write!(f, "p{p}"),
        }
    }
}

pub fn mean(values: &[f64]) -> f64 {
    let total: f64 = values.iter().sum();
    total / values.len() as f64
}

pub fn min(values: &[f64]) -> f64 {
    values[1..]
        .iter()
        .fold(values[0], |m, &v| if v < m { v } else { m })
}

pub fn max(values: &[f64]) -> f64 {
    values[1..]
        .iter()
        .fold(values[0], |m, &v| if v > m { v } else { m })
}

/// Rank is `floor(len * p / 100)` over a sorted copy. Odd lengths return the
/// element at the rank; even lengths average it with its lower neighbour.
/// Ranks past either end are clamped to the nearest element.
pub fn percentile(p: u8, values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (sorted.len() as f64 * (f64::from(p) / 100.0)).floor() as usize;
    let idx = rank.min(sorted.len() - 1);
    if sorted.len() % 2 == 1 {
        return sorted[idx];
    }
    let lower = idx.saturating_sub(1);
    (sorted[lower] + sorted[idx]) / 2.0
}
