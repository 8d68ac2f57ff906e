use serde::{Deserialize, Serialize};

use crate::models::domain::{ScoringResult, Suggestion};

/// Response for the analysis endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(rename = "analysisId")]
    pub analysis_id: String,
    #[serde(flatten)]
    pub scoring: ScoringResult,
    pub suggestions: Vec<Suggestion>,
    #[serde(rename = "textSuggestions")]
    pub text_suggestions: Vec<Suggestion>,
    #[serde(rename = "keywordSuggestions")]
    pub keyword_suggestions: Vec<Suggestion>,
    #[serde(rename = "otherSuggestions")]
    pub other_suggestions: Vec<Suggestion>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
