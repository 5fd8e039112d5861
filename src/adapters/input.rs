//! JSON Input Adapter
//!
//! Reads price series for the command-line tool:
//! `{"series_1": [...], "series_2": [...]}` for a pair and
//! `{"series": [...]}` for a single series.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Input loading errors
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse input JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Two aligned price series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairInput {
    pub series_1: Vec<f64>,
    pub series_2: Vec<f64>,
}

/// A single price series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInput {
    pub series: Vec<f64>,
}

/// Load a pair of series from a JSON file
pub fn load_pair<P: AsRef<Path>>(path: P) -> Result<PairInput, InputError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a single series from a JSON file
pub fn load_series<P: AsRef<Path>>(path: P) -> Result<SeriesInput, InputError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
