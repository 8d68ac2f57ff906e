// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod rules;

pub use domain::{
    DegreeLevel, EducationInfo, ExperienceInfo, ExtractionResult, FormatSignals, MatchType,
    RequiredSkill, ResponsibilityInfo, ResumeSkill, ScoreBreakdown, ScoringResult, Seniority,
    SkillType, Suggestion, SuggestionCategory, TitlesInfo,
};
pub use requests::{AnalyzeRequest, SimulateRequest};
pub use responses::{AnalysisResponse, ErrorResponse, HealthResponse};
pub use rules::{PotentialRules, ScoringRules, SuggestionRules, SuggestionTier};
