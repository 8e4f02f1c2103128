use std::{io::Read, time::Duration};

use tracing::{debug, info};

use crate::{
    GateError,
    aggregate::Aggregation,
    collect::{SampleTable, collect},
    config::ThresholdTable,
};

/// One benchmark whose aggregated value exceeded its threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub name: String,
    pub value: f64,
    pub threshold: Duration,
}

impl Verdict {
    pub fn summary(&self, aggregation: &str) -> String {
        format!(
            "{aggregation}: {} = {:.2} ns, threshold = {}",
            self.name,
            self.value,
            crate::duration::format_duration(self.threshold)
        )
    }
}

/// Returns the offending benchmarks sorted by name. Benchmarks without a
/// threshold are exempt.
pub fn evaluate(
    aggregation: Aggregation,
    samples: &SampleTable,
    thresholds: &ThresholdTable,
) -> Vec<Verdict> {
    let mut verdicts = Vec::new();
    for (name, values) in samples {
        let Some(threshold) = thresholds.get(name) else {
            continue;
        };
        let value = aggregation.apply(values);
        // Compared at whole-nanosecond granularity; fractions are truncated.
        let exceeded = (value as u128) > threshold.as_nanos();
        debug!(benchmark = %name, samples = values.len(), value, exceeded, "evaluated");
        if exceeded {
            verdicts.push(Verdict {
                name: name.clone(),
                value,
                threshold: *threshold,
            });
        }
    }
    verdicts.sort_by(|a, b| a.name.cmp(&b.name));
    verdicts
}

#[derive(Clone, Debug, PartialEq)]
pub struct GateReport {
    pub aggregation: Aggregation,
    pub passed: bool,
    pub checked: usize,
    pub verdicts: Vec<Verdict>,
}

#[derive(Clone, Debug)]
pub struct BenchGate {
    aggregation: Aggregation,
    thresholds: ThresholdTable,
}

impl BenchGate {
    pub fn new(aggregation: Aggregation, thresholds: ThresholdTable) -> Self {
        Self {
            aggregation,
            thresholds,
        }
    }

    /// Reads benchmark output to the end, then evaluates it. A read failure
    /// aborts the check without a partial report.
    pub fn check<R: Read>(&self, reader: R) -> Result<GateReport, GateError> {
        let samples = collect(reader)?;
        Ok(self.evaluate(&samples))
    }

    pub fn evaluate(&self, samples: &SampleTable) -> GateReport {
        let checked = samples
            .keys()
            .filter(|name| self.thresholds.contains_key(*name))
            .count();
        let verdicts = evaluate(self.aggregation, samples, &self.thresholds);
        info!(
            aggregation = %self.aggregation,
            benchmarks = samples.len(),
            checked,
            offending = verdicts.len(),
            "benchmark gate evaluated"
        );
        GateReport {
            aggregation: self.aggregation,
            passed: verdicts.is_empty(),
            checked,
            verdicts,
        }
    }
}
