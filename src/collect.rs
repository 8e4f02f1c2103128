use std::io::{BufRead, BufReader, Read};

use ahash::AHashMap;
use tracing::debug;

use crate::{GateError, extract::extract};

/// Benchmark name -> samples in the order they were read. Every entry holds
/// at least one sample.
pub type SampleTable = AHashMap<String, Vec<f64>>;

pub fn collect<R: Read>(reader: R) -> Result<SampleTable, GateError> {
    let mut table = SampleTable::new();
    let mut lines = 0usize;
    for line in BufReader::new(reader).split(b'\n') {
        let bytes = line.map_err(GateError::StreamRead)?;
        lines += 1;
        let text = String::from_utf8_lossy(&bytes);
        let Some((name, sample)) = extract(text.trim_end_matches('\r')) else {
            continue;
        };
        match table.get_mut(name) {
            Some(samples) => samples.push(sample),
            None => {
                table.insert(name.to_string(), vec![sample]);
            }
        }
    }
    debug!(lines, benchmarks = table.len(), "collected benchmark samples");
    Ok(table)
}
