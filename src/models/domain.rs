use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// How well a resume skill satisfies the requirement it is linked to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Synonym,
    Related,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    #[default]
    Hard,
    Soft,
}

/// Seniority ladder, ordered junior < mid < senior < lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl Seniority {
    pub fn level(self) -> u8 {
        self as u8 + 1
    }
}

/// Degree scale, ordered none < diploma < bachelor < master < phd
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    #[default]
    None,
    Diploma,
    Bachelor,
    Master,
    Phd,
}

impl DegreeLevel {
    pub fn rank(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Text,
    Keyword,
    Other,
}

/// Skill requested by the job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RequiredSkill {
    pub name: String,
    /// 1 = nice-to-have, 2 = important, 3 = critical
    #[validate(range(min = 1, max = 3))]
    pub importance: u8,
    #[serde(rename = "type", default)]
    pub skill_type: SkillType,
}

impl RequiredSkill {
    pub fn new(name: impl Into<String>, importance: u8, skill_type: SkillType) -> Self {
        Self {
            name: name.into(),
            importance,
            skill_type,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.importance >= 3
    }
}

/// Skill found on the resume, optionally linked to a requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSkill {
    pub name: String,
    #[serde(rename = "linkedRequirement", alias = "jdSkillName", default)]
    pub linked_requirement: String,
    #[serde(rename = "matchType", default)]
    pub match_type: MatchType,
    #[serde(default)]
    pub locations: Vec<String>,
}

impl ResumeSkill {
    pub fn is_linked(&self) -> bool {
        !self.linked_requirement.trim().is_empty()
    }

    pub fn has_location(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l.eq_ignore_ascii_case(location))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExperienceInfo {
    #[serde(rename = "requiredYears", default)]
    #[validate(range(min = 0.0))]
    pub required_years: f64,
    /// Full-time years only, internships already excluded upstream
    #[serde(rename = "candidateYears", default)]
    #[validate(range(min = 0.0))]
    pub candidate_years: f64,
    #[serde(rename = "requiredSeniority", default)]
    pub required_seniority: Option<Seniority>,
    #[serde(rename = "candidateSeniority", default)]
    pub candidate_seniority: Option<Seniority>,
}

impl ExperienceInfo {
    /// True only when both levels are known and differ
    pub fn seniority_mismatch(&self) -> bool {
        match (self.required_seniority, self.candidate_seniority) {
            (Some(required), Some(candidate)) => required != candidate,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationInfo {
    #[serde(rename = "requiredDegreeLevel", default)]
    pub required_degree_level: DegreeLevel,
    #[serde(rename = "candidateDegreeLevel", default)]
    pub candidate_degree_level: DegreeLevel,
    #[serde(rename = "meetsMinimum", default)]
    pub meets_minimum: bool,
    #[serde(rename = "bonusTierInstitution", default)]
    pub bonus_tier_institution: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_responsibility_counts"))]
pub struct ResponsibilityInfo {
    #[serde(rename = "topJDResponsibilities", default)]
    pub top_jd_responsibilities: Vec<String>,
    #[serde(rename = "matchedResponsibilitiesCount", default)]
    pub matched_responsibilities_count: u32,
    #[serde(rename = "totalResponsibilitiesConsidered", default)]
    pub total_responsibilities_considered: u32,
}

fn validate_responsibility_counts(info: &ResponsibilityInfo) -> Result<(), ValidationError> {
    if info.matched_responsibilities_count > info.total_responsibilities_considered {
        return Err(ValidationError::new("matched_exceeds_total"));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct TitlesInfo {
    #[serde(rename = "jdTitle", default)]
    pub jd_title: String,
    #[serde(rename = "candidateCurrentTitle", default)]
    pub candidate_current_title: String,
    #[serde(rename = "candidateRecentTitles", default)]
    pub candidate_recent_titles: Vec<String>,
    #[serde(rename = "titleSimilarity", default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub title_similarity: f64,
    #[serde(rename = "suggestedTitle", default, skip_serializing_if = "Option::is_none")]
    pub suggested_title: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSignals {
    #[serde(rename = "hasStandardSections", default)]
    pub has_standard_sections: bool,
    #[serde(rename = "isParseable", default)]
    pub is_parseable: bool,
    #[serde(rename = "hasContactInfo", default)]
    pub has_contact_info: bool,
}

impl FormatSignals {
    pub fn all_present(&self) -> bool {
        self.has_standard_sections && self.is_parseable && self.has_contact_info
    }

    pub fn present_count(&self) -> u32 {
        [self.has_standard_sections, self.is_parseable, self.has_contact_info]
            .iter()
            .filter(|signal| **signal)
            .count() as u32
    }
}

/// Improvement suggestion surfaced to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub suggestion: String,
    #[serde(rename = "originalText", default)]
    pub original_text: String,
    #[serde(rename = "improvedText", default)]
    pub improved_text: String,
    pub category: SuggestionCategory,
    /// Set when the user has to confirm they actually have what is proposed
    #[serde(rename = "requiresUserConfirmation", default, skip_serializing_if = "Option::is_none")]
    pub requires_user_confirmation: Option<bool>,
}

/// Structured facts about a resume measured against a job description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExtractionResult {
    #[serde(rename = "requiredSkills", default)]
    #[validate(nested)]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(rename = "resumeSkills", default)]
    pub resume_skills: Vec<ResumeSkill>,
    #[serde(rename = "mustHaveSkills", default)]
    pub must_have_skills: Vec<String>,
    #[serde(rename = "missingSkills", default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    #[validate(nested)]
    pub experience: ExperienceInfo,
    #[serde(default)]
    pub education: EducationInfo,
    #[serde(default)]
    #[validate(nested)]
    pub responsibilities: ResponsibilityInfo,
    #[serde(default)]
    #[validate(nested)]
    pub titles: TitlesInfo,
    #[serde(rename = "formatSignals", default)]
    pub format_signals: FormatSignals,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(rename = "candidateTitle", default, skip_serializing_if = "Option::is_none")]
    pub candidate_title: Option<String>,
}

impl ExtractionResult {
    /// Look up a requirement by name, exact first then ignoring case
    pub fn required_skill(&self, name: &str) -> Option<&RequiredSkill> {
        self.required_skills
            .iter()
            .find(|r| r.name == name)
            .or_else(|| {
                self.required_skills
                    .iter()
                    .find(|r| r.name.eq_ignore_ascii_case(name))
            })
    }

    /// Title the candidate currently presents, falling back to the extracted current title
    pub fn current_title(&self) -> &str {
        match self.candidate_title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => &self.titles.candidate_current_title,
        }
    }

    /// Resume skills whose `linked_requirement` names no known requirement
    pub fn dangling_links(&self) -> Vec<&ResumeSkill> {
        self.resume_skills
            .iter()
            .filter(|s| s.is_linked() && self.required_skill(&s.linked_requirement).is_none())
            .collect()
    }

    pub fn is_must_have(&self, name: &str) -> bool {
        self.must_have_skills
            .iter()
            .any(|m| m.eq_ignore_ascii_case(name))
    }
}

/// Points per scoring dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub responsibilities: u32,
    pub title: u32,
    pub format: u32,
}

impl ScoreBreakdown {
    pub const SKILLS_MAX: u32 = 35;
    pub const EXPERIENCE_MAX: u32 = 20;
    pub const EDUCATION_MAX: u32 = 15;
    pub const RESPONSIBILITIES_MAX: u32 = 15;
    pub const TITLE_MAX: u32 = 10;
    pub const FORMAT_MAX: u32 = 5;

    pub fn total(&self) -> u32 {
        self.skills
            + self.experience
            + self.education
            + self.responsibilities
            + self.title
            + self.format
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    #[serde(rename = "structuralFit")]
    pub structural_fit: bool,
    #[serde(rename = "currentScore")]
    pub current_score: u32,
    #[serde(rename = "potentialScore")]
    pub potential_score: u32,
    #[serde(rename = "currentCallback")]
    pub current_callback: u32,
    #[serde(rename = "potentialCallback")]
    pub potential_callback: u32,
    #[serde(rename = "scoreBreakdown")]
    pub score_breakdown: ScoreBreakdown,
    #[serde(rename = "mustHavePenaltyApplied", default)]
    pub must_have_penalty_applied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_and_seniority_ordering() {
        assert!(DegreeLevel::None < DegreeLevel::Diploma);
        assert!(DegreeLevel::Bachelor < DegreeLevel::Master);
        assert!(DegreeLevel::Master < DegreeLevel::Phd);
        assert_eq!(DegreeLevel::Phd.rank(), 4);
        assert!(Seniority::Junior < Seniority::Lead);
        assert_eq!(Seniority::Senior.level(), 3);
    }

    #[test]
    fn test_resume_skill_accepts_legacy_link_name() {
        let skill: ResumeSkill = serde_json::from_str(
            r#"{"name":"React","jdSkillName":"React","matchType":"exact","locations":["skills"]}"#,
        )
        .unwrap();

        assert_eq!(skill.linked_requirement, "React");
        assert_eq!(skill.match_type, MatchType::Exact);
        assert!(skill.has_location("Skills"));
    }

    #[test]
    fn test_extraction_defaults_from_sparse_json() {
        let extraction: ExtractionResult = serde_json::from_str(
            r#"{"requiredSkills":[{"name":"SQL","importance":2,"type":"hard"}]}"#,
        )
        .unwrap();

        assert_eq!(extraction.required_skills.len(), 1);
        assert!(extraction.resume_skills.is_empty());
        assert_eq!(extraction.education.required_degree_level, DegreeLevel::None);
        assert!(!extraction.format_signals.all_present());
    }

    #[test]
    fn test_validation_rejects_out_of_range_fields() {
        let mut extraction = ExtractionResult::default();
        extraction.required_skills.push(RequiredSkill::new("Go", 5, SkillType::Hard));
        assert!(extraction.validate().is_err());

        let mut extraction = ExtractionResult::default();
        extraction.responsibilities.matched_responsibilities_count = 4;
        extraction.responsibilities.total_responsibilities_considered = 2;
        assert!(extraction.validate().is_err());

        let mut extraction = ExtractionResult::default();
        extraction.titles.title_similarity = 0.4;
        assert!(extraction.validate().is_ok());
    }

    #[test]
    fn test_dangling_links_detected() {
        let mut extraction = ExtractionResult::default();
        extraction.required_skills.push(RequiredSkill::new("Rust", 3, SkillType::Hard));
        extraction.resume_skills.push(ResumeSkill {
            name: "Golang".to_string(),
            linked_requirement: "Go".to_string(),
            match_type: MatchType::Exact,
            locations: vec![],
        });

        assert_eq!(extraction.dangling_links().len(), 1);
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = ScoreBreakdown {
            skills: 35,
            experience: 20,
            education: 15,
            responsibilities: 15,
            title: 10,
            format: 5,
        };
        assert_eq!(breakdown.total(), 100);
    }
}
