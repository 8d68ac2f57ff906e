use crate::core::suggestions::SKILL_PREFIX;
use crate::models::{ExtractionResult, MatchType, ResumeSkill, Suggestion, SuggestionCategory};

/// Most responsibilities a batch of text suggestions can add
const MAX_TEXT_RESPONSIBILITY_GAIN: u32 = 2;

/// Apply a chosen set of suggestions to a copy of `original`
///
/// Keyword suggestions add the named missing skill as an exact match in the
/// skills section. Text suggestions add up to two matched responsibilities
/// and fix section/parseability problems. Anything unrecognised is skipped.
pub fn simulate_targeted(original: &ExtractionResult, suggestions: &[Suggestion]) -> ExtractionResult {
    let mut improved = original.clone();

    for suggestion in suggestions
        .iter()
        .filter(|s| s.category == SuggestionCategory::Keyword)
    {
        let Some(token) = recover_skill_name(&suggestion.improved_text) else {
            tracing::trace!("No skill token in suggestion: {:?}", suggestion.improved_text);
            continue;
        };

        let Some(index) = find_missing(&improved.missing_skills, token) else {
            continue;
        };
        let missing = improved.missing_skills.remove(index);

        if let Some(required) = improved.required_skill(&missing).map(|r| r.name.clone()) {
            improved.resume_skills.push(ResumeSkill {
                name: missing,
                linked_requirement: required,
                match_type: MatchType::Exact,
                locations: vec!["skills".to_string()],
            });
        }
    }

    let text_count = suggestions
        .iter()
        .filter(|s| s.category == SuggestionCategory::Text)
        .count() as u32;

    if text_count > 0 {
        let responsibilities = &mut improved.responsibilities;
        let headroom = responsibilities
            .total_responsibilities_considered
            .saturating_sub(responsibilities.matched_responsibilities_count);
        responsibilities.matched_responsibilities_count +=
            text_count.min(MAX_TEXT_RESPONSIBILITY_GAIN).min(headroom);

        improved.format_signals.has_standard_sections = true;
        improved.format_signals.is_parseable = true;
    }

    improved
}

/// Assume every important suggestion is applied to a copy of `original`
///
/// Missing skills of importance ≥ 2 (or without requirement data) are added;
/// nice-to-haves stay missing. Responsibilities and format are maxed out.
pub fn simulate_aggressive(original: &ExtractionResult) -> ExtractionResult {
    let mut improved = original.clone();
    let mut still_missing = Vec::new();

    for name in std::mem::take(&mut improved.missing_skills) {
        let required = improved
            .required_skill(&name)
            .map(|r| (r.name.clone(), r.importance));

        match required {
            Some((_, importance)) if importance < 2 => still_missing.push(name),
            Some((required_name, _)) => improved.resume_skills.push(ResumeSkill {
                name,
                linked_requirement: required_name,
                match_type: MatchType::Exact,
                locations: vec!["skills".to_string(), "recent_experience".to_string()],
            }),
            None => {}
        }
    }
    improved.missing_skills = still_missing;

    improved.responsibilities.matched_responsibilities_count =
        improved.responsibilities.total_responsibilities_considered;

    improved.format_signals.has_standard_sections = true;
    improved.format_signals.is_parseable = true;
    improved.format_signals.has_contact_info = true;

    improved
}

/// Read a skill name out of a keyword suggestion's `improved_text`
///
/// `"Skill: Machine Learning"` yields the text after the prefix; otherwise the
/// first capitalized word-like token (letters, digits, `+`, `#`, `.`).
pub fn recover_skill_name(improved_text: &str) -> Option<&str> {
    let text = improved_text.trim();

    if let Some(rest) = text.strip_prefix(SKILL_PREFIX) {
        let rest = rest.trim();
        if !rest.is_empty() {
            return Some(rest);
        }
    }

    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .map(|token| token.trim_end_matches('.'))
        .find(|token| token.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
}

fn find_missing(missing: &[String], token: &str) -> Option<usize> {
    missing
        .iter()
        .position(|m| m == token)
        .or_else(|| missing.iter().position(|m| m.eq_ignore_ascii_case(token)))
}
