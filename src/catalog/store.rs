// src/catalog/store.rs
// Loading example records from a JSON catalog file.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::ExampleRecord;

/// Catalog loading error type
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog file {0} contains no records")]
    Empty(String),
}

/// Catalog loading result type
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Load a record sequence from a JSON file (an array of records).
pub fn load_file(path: &Path) -> CatalogResult<Vec<ExampleRecord>> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<ExampleRecord> = serde_json::from_str(&raw)?;
    if records.is_empty() {
        return Err(CatalogError::Empty(path.display().to_string()));
    }
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
