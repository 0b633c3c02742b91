// ABOUTME: Editor surface over the script store for manual viewing and editing.
// ABOUTME: Writes are unconditional overwrites; the text is never validated as code.

use qaforge_store::{ScriptStore, StoreError};

use crate::blocking::run_blocking;

/// Reads and writes the current script document.
#[derive(Debug, Clone)]
pub struct Editor {
    store: ScriptStore,
}

impl Editor {
    pub fn new(store: ScriptStore) -> Self {
        Self { store }
    }

    pub fn script_name(&self) -> String {
        self.store.file_name()
    }

    pub async fn get_content(&self) -> Result<String, StoreError> {
        let store = self.store.clone();
        run_blocking(move || store.load()).await
    }

    pub async fn set_content(&self, text: String) -> Result<(), StoreError> {
        let store = self.store.clone();
        run_blocking(move || store.save(&text)).await
    }
}
