// ABOUTME: Defines ScenarioRecord and ScenarioBatch, the structured output of scenario generation.
// ABOUTME: A batch is replaced wholesale on every generation and may hold a single TC_ERROR sentinel.

use serde::{Deserialize, Serialize};

/// Id of the placeholder record persisted when scenario generation fails.
pub const SENTINEL_ID: &str = "TC_ERROR";

/// One QA test scenario for a feature area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub id: String,
    pub area: String,
    pub description: String,
}

impl ScenarioRecord {
    pub fn new(id: impl Into<String>, area: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            area: area.into(),
            description: description.into(),
        }
    }
}

/// The ordered set of scenarios produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioBatch {
    records: Vec<ScenarioRecord>,
}

impl ScenarioBatch {
    /// Wrap already-identified records, e.g. rows read back from disk.
    pub fn from_records(records: Vec<ScenarioRecord>) -> Self {
        Self { records }
    }

    /// Build a batch from scenario descriptions, assigning `TC_1..TC_k` in order.
    pub fn from_descriptions<I, S>(area: &str, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = descriptions
            .into_iter()
            .enumerate()
            .map(|(i, description)| ScenarioRecord::new(format!("TC_{}", i + 1), area, description))
            .collect();
        Self { records }
    }

    /// A batch holding only the `TC_ERROR` record that carries a failure diagnostic.
    pub fn sentinel(area: &str, diagnostic: &str) -> Self {
        Self {
            records: vec![ScenarioRecord::new(
                SENTINEL_ID,
                area,
                format!("Failed to generate test cases: {}", diagnostic),
            )],
        }
    }

    pub fn records(&self) -> &[ScenarioRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ScenarioRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The feature area shared by the batch, taken from its first record.
    pub fn area(&self) -> Option<&str> {
        self.records.first().map(|r| r.area.as_str())
    }

    /// True when the batch records a failed generation instead of real scenarios.
    pub fn is_sentinel(&self) -> bool {
        self.records.len() == 1 && self.records[0].id == SENTINEL_ID
    }
}
