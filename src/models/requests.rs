use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ExtractionResult, Suggestion};

/// Largest suggestion selection accepted for a targeted simulation
pub const MAX_SELECTED_SUGGESTIONS: usize = 200;

/// Request to analyze one extraction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(nested)]
    pub extraction: ExtractionResult,
}

/// Request to re-score an extraction with a chosen set of suggestions applied
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimulateRequest {
    #[validate(nested)]
    pub extraction: ExtractionResult,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}
