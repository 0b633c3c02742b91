// ABOUTME: High-level storage manager tying the scenario and script stores to the data directory.
// ABOUTME: Creates the script directory up front and hands out the two stores.

use std::fs;
use std::path::Path;

use crate::error::StoreError;
use crate::scenario::ScenarioStore;
use crate::script::ScriptStore;

/// Owns both stores for one qaforge data layout.
#[derive(Debug, Clone)]
pub struct StorageManager {
    scenarios: ScenarioStore,
    script: ScriptStore,
}

impl StorageManager {
    /// Create a manager for the given scenario file and script file.
    /// Creates the script directory if it does not exist.
    pub fn new(scenario_path: &Path, script_path: &Path) -> Result<Self, StoreError> {
        let script = ScriptStore::new(script_path);
        fs::create_dir_all(script.dir())?;
        Ok(Self {
            scenarios: ScenarioStore::new(scenario_path),
            script,
        })
    }

    pub fn scenarios(&self) -> &ScenarioStore {
        &self.scenarios
    }

    pub fn script(&self) -> &ScriptStore {
        &self.script
    }
}
