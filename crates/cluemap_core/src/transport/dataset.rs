//! Transport dataset loading.
//!
//! # Responsibility
//! - Parse the static JSON array of transport records.
//! - Surface typed errors for unreadable files or malformed payloads.
//!
//! # Invariants
//! - The dataset is loaded once by the caller and shared read-only; nothing
//!   in this crate mutates records after load.

use crate::model::transport::TransportRecord;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type DataResult<T> = Result<T, DataError>;

/// Dataset loading error.
#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read dataset: {err}"),
            Self::Json(err) => write!(f, "failed to parse dataset: {err}"),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Parses a JSON array of transport records.
pub fn parse_records(json: &str) -> DataResult<Vec<TransportRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a transport dataset file.
///
/// # Side effects
/// - Emits `dataset_load` logging events with record count and status.
pub fn load_records(path: impl AsRef<Path>) -> DataResult<Vec<TransportRecord>> {
    let path = path.as_ref();
    let result = std::fs::read_to_string(path)
        .map_err(DataError::from)
        .and_then(|text| parse_records(&text));

    match &result {
        Ok(records) => info!(
            "event=dataset_load module=transport status=ok path={} records={}",
            path.display(),
            records.len()
        ),
        Err(err) => error!(
            "event=dataset_load module=transport status=error path={} error={}",
            path.display(),
            err
        ),
    }

    result
}
