// ABOUTME: GenerationRequest and its validation rules for incoming scenario generation input.
// ABOUTME: Rejects empty areas and non-numeric or non-positive counts before any external call.

use thiserror::Error;

/// Reasons a generation request is rejected before it runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("area must not be empty")]
    EmptyArea,

    #[error("count must be a whole number, got {0:?}")]
    InvalidCount(String),

    #[error("count must be positive, got {0}")]
    NonPositiveCount(i64),
}

/// A validated request for `count` scenarios in one feature area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub area: String,
    pub count: u32,
}

impl GenerationRequest {
    /// Validate an area and a numeric count.
    pub fn new(area: &str, count: i64) -> Result<Self, ValidationError> {
        let area = area.trim();
        if area.is_empty() {
            return Err(ValidationError::EmptyArea);
        }
        if count <= 0 {
            return Err(ValidationError::NonPositiveCount(count));
        }
        let count = u32::try_from(count).map_err(|_| ValidationError::InvalidCount(count.to_string()))?;

        Ok(Self {
            area: area.to_string(),
            count,
        })
    }

    /// Validate raw form input where the count arrives as text.
    pub fn from_form(area: &str, count: &str) -> Result<Self, ValidationError> {
        let trimmed = count.trim();
        let parsed: i64 = trimmed
            .parse()
            .map_err(|_| ValidationError::InvalidCount(trimmed.to_string()))?;
        Self::new(area, parsed)
    }
}
