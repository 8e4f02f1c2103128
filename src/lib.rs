//! Benchmark regression gate for `go test -bench` style output.
//! Samples are collected per benchmark, reduced with a named aggregation, and
//! compared against per-benchmark thresholds.

pub mod aggregate;
pub mod cli;
pub mod collect;
pub mod config;
pub mod duration;
pub mod errors;
pub mod extract;
pub mod gate;
pub mod report;

pub use crate::aggregate::Aggregation;
pub use crate::collect::{SampleTable, collect};
pub use crate::config::{ThresholdTable, load_config, parse_config};
pub use crate::errors::GateError;
pub use crate::extract::extract;
pub use crate::gate::{BenchGate, GateReport, Verdict, evaluate};
