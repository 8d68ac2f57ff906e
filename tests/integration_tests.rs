// Integration tests for Shortlist Score

use shortlist_score::config::Settings;
use shortlist_score::core::{generate_suggestions, simulate_aggressive, Analyzer, ScoreEngine};
use shortlist_score::models::{
    DegreeLevel, EducationInfo, ExperienceInfo, ExtractionResult, FormatSignals, MatchType,
    RequiredSkill, ResponsibilityInfo, ResumeSkill, ScoreBreakdown, Seniority, SkillType,
    SuggestionCategory, SuggestionRules, TitlesInfo,
};

fn resume_skill(name: &str, linked: &str, match_type: MatchType, locations: &[&str]) -> ResumeSkill {
    ResumeSkill {
        name: name.to_string(),
        linked_requirement: linked.to_string(),
        match_type,
        locations: locations.iter().map(|l| l.to_string()).collect(),
    }
}

fn create_test_extraction() -> ExtractionResult {
    ExtractionResult {
        required_skills: vec![
            RequiredSkill::new("TypeScript", 3, SkillType::Hard),
            RequiredSkill::new("React", 3, SkillType::Hard),
            RequiredSkill::new("GraphQL", 2, SkillType::Hard),
            RequiredSkill::new("AWS", 2, SkillType::Hard),
            RequiredSkill::new("Mentoring", 1, SkillType::Soft),
        ],
        resume_skills: vec![
            resume_skill("TypeScript", "TypeScript", MatchType::Exact, &["skills", "recent_experience"]),
            resume_skill("React.js", "React", MatchType::Synonym, &["skills"]),
            resume_skill("Amazon Web Services", "", MatchType::Related, &["summary"]),
        ],
        must_have_skills: vec!["TypeScript".to_string()],
        missing_skills: vec!["GraphQL".to_string(), "Mentoring".to_string()],
        experience: ExperienceInfo {
            required_years: 5.0,
            candidate_years: 4.0,
            required_seniority: Some(Seniority::Senior),
            candidate_seniority: Some(Seniority::Senior),
        },
        education: EducationInfo {
            required_degree_level: DegreeLevel::Bachelor,
            candidate_degree_level: DegreeLevel::Master,
            meets_minimum: true,
            bonus_tier_institution: false,
        },
        responsibilities: ResponsibilityInfo {
            top_jd_responsibilities: vec![
                "Own the frontend architecture".to_string(),
                "Ship features end to end".to_string(),
                "Mentor junior engineers".to_string(),
                "Improve performance".to_string(),
            ],
            matched_responsibilities_count: 2,
            total_responsibilities_considered: 4,
        },
        titles: TitlesInfo {
            jd_title: "Senior Frontend Engineer".to_string(),
            candidate_current_title: "Frontend Developer".to_string(),
            candidate_recent_titles: vec!["Web Developer".to_string()],
            title_similarity: 0.6,
            suggested_title: None,
        },
        format_signals: FormatSignals {
            has_standard_sections: true,
            is_parseable: true,
            has_contact_info: false,
        },
        suggestions: vec![],
        candidate_title: Some("Frontend Developer".to_string()),
    }
}

#[test]
fn test_integration_end_to_end_analysis() {
    let analyzer = Analyzer::default();
    let extraction = create_test_extraction();

    let analysis = analyzer.analyze(&extraction);
    let scoring = analysis.scoring;

    // skills: 35 * (3*1.0 + 3*0.7 + 2*0.0 + 2*0.5 + 1*0.0) / 11 = 19.4
    assert_eq!(scoring.score_breakdown.skills, 19);
    assert_eq!(scoring.score_breakdown.experience, 16);
    assert_eq!(scoring.score_breakdown.education, 15);
    assert_eq!(scoring.score_breakdown.responsibilities, 8);
    assert_eq!(scoring.score_breakdown.title, 6);
    assert_eq!(scoring.score_breakdown.format, 3);
    assert_eq!(scoring.current_score, 67);
    assert!(!scoring.structural_fit);

    assert!(scoring.potential_score > scoring.current_score);
    assert!(scoring.potential_score <= 95);

    let keyword = analysis.by_category(SuggestionCategory::Keyword);
    assert_eq!(keyword[0].improved_text, "Skill: GraphQL");
    assert_eq!(keyword[1].improved_text, "Senior Frontend Engineer");
    assert_eq!(analysis.by_category(SuggestionCategory::Other).len(), 1);
}

#[test]
fn test_breakdown_always_within_bounds() {
    let engine = ScoreEngine::default();
    let mut extraction = create_test_extraction();

    for similarity in [0.0, 0.33, 0.5, 0.99, 1.0] {
        for matched in 0..=4 {
            extraction.titles.title_similarity = similarity;
            extraction.responsibilities.matched_responsibilities_count = matched;

            let result = engine.score(&extraction);
            let b = result.score_breakdown;

            assert!(b.skills <= ScoreBreakdown::SKILLS_MAX);
            assert!(b.experience <= ScoreBreakdown::EXPERIENCE_MAX);
            assert!(b.education <= ScoreBreakdown::EDUCATION_MAX);
            assert!(b.responsibilities <= ScoreBreakdown::RESPONSIBILITIES_MAX);
            assert!(b.title <= ScoreBreakdown::TITLE_MAX);
            assert!(b.format <= ScoreBreakdown::FORMAT_MAX);
            assert!(result.current_callback <= 100);

            if !result.must_have_penalty_applied {
                assert_eq!(b.total(), result.current_score);
            }
        }
    }
}

#[test]
fn test_degenerate_extraction_does_not_panic() {
    let analyzer = Analyzer::default();
    let analysis = analyzer.analyze(&ExtractionResult::default());

    // No requirements and no required years: neutral full credit
    assert_eq!(analysis.scoring.score_breakdown.skills, 35);
    assert_eq!(analysis.scoring.score_breakdown.experience, 20);
    assert_eq!(analysis.scoring.score_breakdown.responsibilities, 0);
    assert!(analysis.scoring.potential_callback <= 100);
}

#[test]
fn test_potential_score_improves_after_aggressive_simulation() {
    let engine = ScoreEngine::default();
    let extraction = create_test_extraction();

    let current = engine.score(&extraction);
    let improved = engine.score(&simulate_aggressive(&extraction));

    assert!(improved.current_score > current.current_score);
    assert!(improved.structural_fit);
    assert_eq!(improved.score_breakdown.responsibilities, 15);
    assert_eq!(improved.score_breakdown.format, 5);
}

#[test]
fn test_suggestions_are_deterministic() {
    let engine = ScoreEngine::default();
    let extraction = create_test_extraction();
    let scoring = engine.score(&extraction);
    let rules = SuggestionRules::default();

    let first = generate_suggestions(&extraction, &scoring, &rules);
    let second = generate_suggestions(&extraction, &scoring, &rules);

    assert_eq!(first, second);
}

#[test]
fn test_settings_build_equivalent_default_analyzer() {
    let extraction = create_test_extraction();
    let from_settings = Settings::default().analyzer().analyze(&extraction);
    let built_in = Analyzer::default().analyze(&extraction);

    assert_eq!(from_settings, built_in);
}

#[test]
fn test_extraction_json_roundtrip_through_analysis() {
    let extraction = create_test_extraction();
    let json = serde_json::to_string(&extraction).unwrap();
    let parsed: ExtractionResult = serde_json::from_str(&json).unwrap();

    let analyzer = Analyzer::default();
    assert_eq!(analyzer.analyze(&parsed), analyzer.analyze(&extraction));
}
