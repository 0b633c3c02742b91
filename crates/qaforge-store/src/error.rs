// ABOUTME: Error type shared by the scenario and script stores.
// ABOUTME: Separates "nothing persisted yet" from genuine IO and CSV failures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing persisted artifacts.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no file at {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unexpected scenario header in {}: {found}", path.display())]
    BadHeader { path: PathBuf, found: String },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
