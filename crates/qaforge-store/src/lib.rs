// ABOUTME: Persistence layer for qaforge, owning the scenario CSV and the script text file.
// ABOUTME: Each store overwrites its file wholesale; there is no locking or multi-file atomicity.

pub mod error;
pub mod manager;
pub mod scenario;
pub mod script;

pub use error::StoreError;
pub use manager::StorageManager;
pub use scenario::{SCENARIO_HEADER, ScenarioStore};
pub use script::ScriptStore;
