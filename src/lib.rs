//! Shortlist Score - deterministic resume/job-description compatibility scoring
//!
//! Given a structured extraction of a resume measured against a job
//! description, the engine computes a reproducible 0-100 score, a callback
//! estimate and a per-dimension breakdown, proposes improvements, and
//! re-scores a simulated improved resume to project a potential score.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Analysis, Analyzer, AcronymTable, ScoreEngine, SkillMatcher};
pub use error::AnalysisError;
pub use models::{ExtractionResult, ScoreBreakdown, ScoringResult, Suggestion, SuggestionCategory};
