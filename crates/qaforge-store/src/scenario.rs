// ABOUTME: CSV-backed store for the current ScenarioBatch.
// ABOUTME: Writes a fixed three-column header and one row per record, replacing any prior file.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use qaforge_core::{ScenarioBatch, ScenarioRecord};

use crate::error::StoreError;

/// Header row of the scenario file.
pub const SCENARIO_HEADER: [&str; 3] = ["Test Case ID", "Area", "Description"];

/// Persists the scenario batch as a single CSV file.
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    path: PathBuf,
}

impl ScenarioStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored batch. Creates parent directories if they do not exist.
    pub fn save(&self, batch: &ScenarioBatch) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(SCENARIO_HEADER)?;
        for record in batch.records() {
            writer.write_record([&record.id, &record.area, &record.description])?;
        }
        writer.flush()?;

        tracing::info!(path = %self.path.display(), records = batch.len(), "saved scenario batch");
        Ok(())
    }

    /// Read the stored batch in file order. Fails with `NotFound` when nothing was saved yet.
    pub fn load(&self) -> Result<ScenarioBatch, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let headers = reader.headers()?.clone();
        if headers.iter().ne(SCENARIO_HEADER) {
            return Err(StoreError::BadHeader {
                path: self.path.clone(),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(ScenarioRecord::new(&row[0], &row[1], &row[2]));
        }

        tracing::debug!(path = %self.path.display(), records = records.len(), "loaded scenario batch");
        Ok(ScenarioBatch::from_records(records))
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}
