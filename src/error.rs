use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::ErrorResponse;

/// Errors surfaced at the service boundary
///
/// The engine itself is total; these only describe input rejected before reaching it.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid extraction: {0}")]
    InvalidExtraction(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidJson(String),

    #[error("Too many suggestions: {count} (max {max})")]
    TooManySuggestions { count: usize, max: usize },
}

impl AnalysisError {
    fn code(&self) -> &'static str {
        match self {
            AnalysisError::InvalidExtraction(_) => "invalid_extraction",
            AnalysisError::InvalidJson(_) => "invalid_json",
            AnalysisError::TooManySuggestions { .. } => "too_many_suggestions",
        }
    }
}

impl ResponseError for AnalysisError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}
