// ABOUTME: Plain-text store for the single generated or hand-edited automation script.
// ABOUTME: Loading a missing script yields an empty string so the editor always has content.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Persists the script document verbatim.
#[derive(Debug, Clone)]
pub struct ScriptStore {
    path: PathBuf,
}

impl ScriptStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the script, which is also the publish working directory.
    pub fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// File name of the script relative to `dir()`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Overwrite the script, creating it and its directory if absent.
    pub fn save(&self, text: &str) -> Result<(), StoreError> {
        fs::create_dir_all(self.dir())?;
        fs::write(&self.path, text)?;
        tracing::info!(path = %self.path.display(), bytes = text.len(), "saved script");
        Ok(())
    }

    /// Read the script, or an empty string if none has been written yet.
    pub fn load(&self) -> Result<String, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_script_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = ScriptStore::new(dir.path().join("suite.py"));
        assert_eq!(store.load().unwrap(), "");
    }

    #[test]
    fn save_then_load_is_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = ScriptStore::new(dir.path().join("suite.py"));

        for text in ["", "import pytest\n", "line one\r\nline two\n\n  trailing  ", "naïve — ünïcode"] {
            store.save(text).unwrap();
            assert_eq!(store.load().unwrap(), text);
        }
    }

    #[test]
    fn save_creates_script_directory() {
        let dir = TempDir::new().unwrap();
        let store = ScriptStore::new(dir.path().join("test_scripts").join("suite.py"));

        store.save("print('hi')\n").unwrap();

        assert!(dir.path().join("test_scripts").is_dir());
        assert_eq!(store.file_name(), "suite.py");
        assert_eq!(store.dir(), dir.path().join("test_scripts"));
    }
}
