use serde::{Deserialize, Serialize};

use crate::core::{
    scoring::ScoreEngine,
    simulator::{simulate_aggressive, simulate_targeted},
    suggestions::generate_suggestions,
};
use crate::models::{
    ExtractionResult, PotentialRules, ScoringResult, Suggestion, SuggestionCategory,
    SuggestionRules,
};

/// Outcome of a full analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub scoring: ScoringResult,
    /// Deterministic suggestions first, then the pre-seeded ones
    pub suggestions: Vec<Suggestion>,
}

impl Analysis {
    pub fn by_category(&self, category: SuggestionCategory) -> Vec<Suggestion> {
        self.suggestions
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect()
    }
}

/// Analysis orchestrator - runs score, suggest, simulate, re-score
///
/// # Pipeline Stages
/// 1. Score the extraction as-is
/// 2. Generate deterministic suggestions, merge pre-seeded ones
/// 3. Simulate improvements on a copy
/// 4. Re-score the copy and derive the potential score
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    engine: ScoreEngine,
    suggestion_rules: SuggestionRules,
    potential_rules: PotentialRules,
}

impl Analyzer {
    pub fn new(
        engine: ScoreEngine,
        suggestion_rules: SuggestionRules,
        potential_rules: PotentialRules,
    ) -> Self {
        Self {
            engine,
            suggestion_rules,
            potential_rules,
        }
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Full analysis assuming every important suggestion would be applied
    pub fn analyze(&self, extraction: &ExtractionResult) -> Analysis {
        let current = self.engine.score(extraction);

        let mut suggestions = generate_suggestions(extraction, &current, &self.suggestion_rules);
        let preseeded_limit = self.suggestion_rules.preseeded_limit(current.current_score);
        suggestions.extend(extraction.suggestions.iter().take(preseeded_limit).cloned());

        let improved = simulate_aggressive(extraction);
        let scoring = self.with_potential(extraction, current, &improved);

        tracing::debug!(
            "Analysis complete: current={} potential={} suggestions={}",
            scoring.current_score,
            scoring.potential_score,
            suggestions.len()
        );

        Analysis {
            scoring,
            suggestions,
        }
    }

    /// Potential score for a user-selected subset of suggestions
    pub fn simulate(&self, extraction: &ExtractionResult, selected: &[Suggestion]) -> ScoringResult {
        let current = self.engine.score(extraction);
        let improved = simulate_targeted(extraction, selected);
        self.with_potential(extraction, current, &improved)
    }

    fn with_potential(
        &self,
        original: &ExtractionResult,
        current: ScoringResult,
        improved: &ExtractionResult,
    ) -> ScoringResult {
        let simulated = self.engine.score(improved);
        let potential_score =
            self.potential_score(current.current_score, simulated.current_score, original);

        // Callback signals come from the improved record, but a potential
        // callback never drops below the current one
        let potential_callback = self
            .engine
            .callback(potential_score, improved)
            .max(current.current_callback);

        tracing::trace!(
            "Potential: simulated={} final={} (missing before={}, after={})",
            simulated.current_score,
            potential_score,
            original.missing_skills.len(),
            improved.missing_skills.len()
        );

        ScoringResult {
            potential_score,
            potential_callback,
            ..current
        }
    }

    /// Critical gaps are judged on the record as submitted: a simulated fix
    /// of a critical skill still leaves the potential under the lower ceiling
    fn potential_score(&self, current: u32, simulated: u32, original: &ExtractionResult) -> u32 {
        let critical_missing = original
            .missing_skills
            .iter()
            .filter_map(|name| original.required_skill(name))
            .any(|r| r.is_critical());

        let ceiling = if critical_missing {
            self.potential_rules.ceiling_with_critical_missing
        } else {
            self.potential_rules.ceiling
        };

        let floor = (current + self.potential_rules.min_uplift).min(100);
        simulated.min(ceiling).max(current).max(floor)
    }
}
