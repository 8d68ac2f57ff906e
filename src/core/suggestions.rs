use crate::models::{ExtractionResult, ScoringResult, Suggestion, SuggestionCategory, SuggestionRules};

/// Prefix that lets the simulator read the skill name back out of `improved_text`
pub const SKILL_PREFIX: &str = "Skill:";

/// Build the improvement suggestions for an extraction, most impactful first
///
/// Order: missing skills (critical before important), title change,
/// structural warning, missing skills section.
pub fn generate_suggestions(
    extraction: &ExtractionResult,
    scoring: &ScoringResult,
    rules: &SuggestionRules,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    // Missing skills without requirement data are kept, ranked last
    let mut missing: Vec<(u8, &str)> = extraction
        .missing_skills
        .iter()
        .map(|name| {
            let importance = extraction.required_skill(name).map(|r| r.importance);
            (importance, name.as_str())
        })
        .filter(|(importance, _)| importance.map_or(true, |i| i >= 2))
        .map(|(importance, name)| (importance.unwrap_or(0), name))
        .collect();
    missing.sort_by(|a, b| b.0.cmp(&a.0));

    for (_, name) in missing {
        suggestions.push(Suggestion {
            suggestion: format!("Add \"{}\" to your skills section if you have this skill", name),
            original_text: String::new(),
            improved_text: format!("{} {}", SKILL_PREFIX, name),
            category: SuggestionCategory::Keyword,
            requires_user_confirmation: Some(true),
        });
    }

    if extraction.titles.title_similarity < rules.title_similarity_threshold {
        let best_title = extraction
            .titles
            .suggested_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&extraction.titles.jd_title);

        let current_title = match extraction.current_title().trim() {
            "" => "Current Title",
            title => title,
        };

        suggestions.push(Suggestion {
            suggestion: format!("Update your title to match the job: \"{}\"", best_title),
            original_text: current_title.to_string(),
            improved_text: best_title.to_string(),
            category: SuggestionCategory::Keyword,
            requires_user_confirmation: None,
        });
    }

    if !scoring.structural_fit {
        suggestions.push(Suggestion {
            suggestion: structural_message(extraction),
            original_text: "Current Structure".to_string(),
            improved_text: "ATS Friendly Structure".to_string(),
            category: SuggestionCategory::Other,
            requires_user_confirmation: None,
        });
    }

    if !extraction.resume_skills.iter().any(|s| s.has_location("skills")) {
        suggestions.push(Suggestion {
            suggestion: "Add a dedicated 'Skills' section for better ATS parsing".to_string(),
            original_text: String::new(),
            improved_text: "Skills Section".to_string(),
            category: SuggestionCategory::Other,
            requires_user_confirmation: None,
        });
    }

    suggestions
}

fn structural_message(extraction: &ExtractionResult) -> String {
    let signals = &extraction.format_signals;
    let mut problems = Vec::new();
    if !signals.has_standard_sections {
        problems.push("standard sections");
    }
    if !signals.is_parseable {
        problems.push("machine-readable text");
    }
    if !signals.has_contact_info {
        problems.push("contact information");
    }

    format!(
        "Your resume structure doesn't meet ATS requirements (missing: {}). Use an ATS-friendly template.",
        problems.join(", ")
    )
}
