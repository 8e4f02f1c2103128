use std::{fs::File, io::Read, path::Path, time::Duration};

use ahash::AHashMap;
use serde::Deserialize;
use tracing::debug;

use crate::{GateError, duration};

pub const CONFIG_VERSION: &str = "v1";
pub const DEFAULT_CONFIG_PATH: &str = ".bunder.yml";

/// Benchmark name -> maximum accepted aggregated value.
pub type ThresholdTable = AHashMap<String, Duration>;

#[derive(Debug, Deserialize)]
struct ThresholdDocument {
    #[serde(alias = "Version", default)]
    version: String,
    #[serde(alias = "Thresholds", default)]
    thresholds: Vec<ThresholdEntry>,
}

#[derive(Debug, Deserialize)]
struct ThresholdEntry {
    #[serde(alias = "Name")]
    name: String,
    #[serde(alias = "Threshold", deserialize_with = "duration::deserialize")]
    threshold: Duration,
}

pub fn parse_config<R: Read>(reader: R) -> Result<ThresholdTable, GateError> {
    let doc: ThresholdDocument = serde_yaml::from_reader(reader).map_err(GateError::ConfigDecode)?;
    if doc.version != CONFIG_VERSION {
        return Err(GateError::ConfigVersion(doc.version));
    }
    let table: ThresholdTable = doc
        .thresholds
        .into_iter()
        .map(|entry| (entry.name, entry.threshold))
        .collect();
    debug!(thresholds = table.len(), "loaded threshold config");
    Ok(table)
}

pub fn load_config(path: &Path) -> Result<ThresholdTable, GateError> {
    let file = File::open(path).map_err(|source| GateError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(file)
}
