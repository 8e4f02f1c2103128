use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("empty aggregation name")]
    EmptyAggregationName,
    #[error("{0:?} - unknown aggregation")]
    UnknownAggregation(String),
    #[error("{name:?} - bad percentile ({source})")]
    InvalidPercentileSuffix {
        name: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{name:?} - percentile {value} outside 0..=100")]
    PercentileOutOfRange { name: String, value: i64 },
    #[error("can't scan - {0}")]
    StreamRead(#[source] io::Error),
    #[error("{path:?}: can't load config - {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("can't decode YAML - {0}")]
    ConfigDecode(#[source] serde_yaml::Error),
    #[error("unknown config version: {0:?}")]
    ConfigVersion(String),
    #[error("invalid duration: {0}")]
    InvalidDuration(String),
    #[error("{path:?}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl GateError {
    pub fn unknown_aggregation<T: Into<String>>(name: T) -> Self {
        GateError::UnknownAggregation(name.into())
    }

    pub fn invalid_duration<T: Into<String>>(msg: T) -> Self {
        GateError::InvalidDuration(msg.into())
    }

    pub fn invalid_args<T: Into<String>>(msg: T) -> Self {
        GateError::InvalidArgs(msg.into())
    }
}
