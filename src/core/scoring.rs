use crate::core::skills::SkillMatcher;
use crate::models::{
    EducationInfo, ExperienceInfo, ExtractionResult, FormatSignals, MatchType, ResponsibilityInfo,
    ScoreBreakdown, ScoringResult, ScoringRules, SkillType, TitlesInfo,
};

/// Callback buckets: (score_from, score_to, callback_from, callback_to)
const CALLBACK_BUCKETS: [(u32, u32, u32, u32); 5] = [
    (0, 30, 5, 15),
    (30, 50, 15, 35),
    (50, 70, 35, 60),
    (70, 85, 60, 80),
    (85, 100, 80, 95),
];

/// Deterministic compatibility scorer
///
/// Scoring formula (points):
/// score = skills (35) + experience (20) + education (15)
///       + responsibilities (15) + title (10) + format (5)
///
/// then capped at `must_have_cap` when a must-have skill is unmatched.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    matcher: SkillMatcher,
    rules: ScoringRules,
}

impl ScoreEngine {
    pub fn new(matcher: SkillMatcher, rules: ScoringRules) -> Self {
        Self { matcher, rules }
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Score an extraction. Potential fields mirror the current ones.
    pub fn score(&self, extraction: &ExtractionResult) -> ScoringResult {
        let breakdown = self.breakdown(extraction);
        let structural_fit = extraction.format_signals.all_present();

        let mut current_score = breakdown.total().min(100);
        let must_have_missing = self.has_unmatched_must_have(extraction);
        if must_have_missing {
            current_score = current_score.min(self.rules.must_have_cap);
        }

        let current_callback = self.callback(current_score, extraction);

        tracing::debug!(
            "Scored extraction: total={} breakdown={:?} must_have_missing={} callback={}",
            current_score,
            breakdown,
            must_have_missing,
            current_callback
        );

        ScoringResult {
            structural_fit,
            current_score,
            potential_score: current_score,
            current_callback,
            potential_callback: current_callback,
            score_breakdown: breakdown,
            must_have_penalty_applied: must_have_missing,
        }
    }

    pub fn breakdown(&self, extraction: &ExtractionResult) -> ScoreBreakdown {
        ScoreBreakdown {
            skills: self.skills_score(extraction),
            experience: experience_score(&extraction.experience),
            education: education_score(&extraction.education),
            responsibilities: responsibility_score(&extraction.responsibilities),
            title: title_score(&extraction.titles),
            format: format_score(&extraction.format_signals),
        }
    }

    /// Callback estimate for a score, adjusted by the extraction's skill signals
    pub fn callback(&self, score: u32, extraction: &ExtractionResult) -> u32 {
        let mut callback = base_callback_probability(score) as i64;

        if self.has_high_demand_skill(extraction) {
            callback += self.rules.high_demand_bonus as i64;
        }
        if self.has_missing_certification(extraction) {
            callback -= self.rules.certification_penalty as i64;
        }

        callback.clamp(0, 100) as u32
    }

    /// Skills sub-score (0-35): importance-weighted match quality
    pub fn skills_score(&self, extraction: &ExtractionResult) -> u32 {
        if extraction.required_skills.is_empty() {
            return ScoreBreakdown::SKILLS_MAX;
        }

        let mut raw = 0.0;
        let mut importance_sum = 0.0;

        for required in &extraction.required_skills {
            let importance = required.importance.clamp(1, 3) as f64;
            raw += importance * self.requirement_quality(&required.name, extraction);
            importance_sum += importance;
        }

        let coverage = (raw / importance_sum).min(1.0);
        points(coverage * ScoreBreakdown::SKILLS_MAX as f64, ScoreBreakdown::SKILLS_MAX)
    }

    /// Best match quality (0.0-1.0) the resume offers for a requirement
    ///
    /// Explicitly linked resume skills decide when any exist. Otherwise
    /// unlinked skills (and skills whose link names no known requirement)
    /// are compared by name through the skill matcher.
    pub fn requirement_quality(&self, requirement: &str, extraction: &ExtractionResult) -> f64 {
        let linked: Vec<_> = extraction
            .resume_skills
            .iter()
            .filter(|s| s.linked_requirement.eq_ignore_ascii_case(requirement))
            .collect();

        if !linked.is_empty() {
            return linked
                .iter()
                .map(|s| match_quality_weight(s.match_type))
                .fold(0.0, f64::max);
        }

        extraction
            .resume_skills
            .iter()
            .filter(|s| s.match_type != MatchType::None)
            .filter(|s| !s.is_linked() || extraction.required_skill(&s.linked_requirement).is_none())
            .find(|s| self.matcher.are_skills_match(requirement, &s.name))
            .map(|s| match_quality_weight(s.match_type))
            .unwrap_or(0.0)
    }

    fn has_unmatched_must_have(&self, extraction: &ExtractionResult) -> bool {
        extraction
            .must_have_skills
            .iter()
            .any(|name| self.requirement_quality(name, extraction) <= 0.0)
    }

    fn has_high_demand_skill(&self, extraction: &ExtractionResult) -> bool {
        extraction
            .required_skills
            .iter()
            .filter(|r| self.requirement_quality(&r.name, extraction) > 0.0)
            .any(|r| {
                self.rules
                    .high_demand_skills
                    .iter()
                    .any(|hot| self.matcher.are_skills_match(&r.name, hot))
            })
    }

    /// Hard certification requirements left in `missing_skills`
    ///
    /// Must-haves are skipped: their absence is already charged by the cap.
    fn has_missing_certification(&self, extraction: &ExtractionResult) -> bool {
        extraction
            .missing_skills
            .iter()
            .filter(|name| !extraction.is_must_have(name))
            .filter_map(|name| extraction.required_skill(name))
            .filter(|r| r.skill_type == SkillType::Hard)
            .any(|r| self.is_certification(&r.name))
    }

    fn is_certification(&self, name: &str) -> bool {
        let normalized = self.matcher.normalize(name);
        self.rules.certification_markers.iter().any(|marker| {
            let marker = self.matcher.normalize(marker);
            !marker.is_empty()
                && normalized
                    .split(' ')
                    .any(|word| word == marker || (marker.len() > 4 && word.starts_with(&marker)))
        })
    }
}

/// Weight of a match type: exact 1.0, synonym 0.7, related 0.5, none 0.0
pub fn match_quality_weight(match_type: MatchType) -> f64 {
    match match_type {
        MatchType::Exact => 1.0,
        MatchType::Synonym => 0.7,
        MatchType::Related => 0.5,
        MatchType::None => 0.0,
    }
}

/// Experience sub-score (0-20), halved on seniority mismatch
///
/// No year requirement at all is full credit; fractional requirements
/// are measured against one year.
pub fn experience_score(experience: &ExperienceInfo) -> u32 {
    let ratio = if experience.required_years <= 0.0 {
        1.0
    } else {
        (experience.candidate_years.max(0.0) / experience.required_years.max(1.0)).min(1.0)
    };

    let mut score = ratio * ScoreBreakdown::EXPERIENCE_MAX as f64;
    if experience.seniority_mismatch() {
        score /= 2.0;
    }

    points(score, ScoreBreakdown::EXPERIENCE_MAX)
}

/// Education sub-score (0-15): all or nothing on the minimum
pub fn education_score(education: &EducationInfo) -> u32 {
    if education.meets_minimum {
        ScoreBreakdown::EDUCATION_MAX
    } else {
        0
    }
}

pub fn responsibility_score(responsibilities: &ResponsibilityInfo) -> u32 {
    let denom = responsibilities.total_responsibilities_considered.max(1) as f64;
    let ratio = (responsibilities.matched_responsibilities_count as f64 / denom).min(1.0);
    points(
        ratio * ScoreBreakdown::RESPONSIBILITIES_MAX as f64,
        ScoreBreakdown::RESPONSIBILITIES_MAX,
    )
}

pub fn title_score(titles: &TitlesInfo) -> u32 {
    let similarity = if titles.title_similarity.is_finite() {
        titles.title_similarity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    points(similarity * ScoreBreakdown::TITLE_MAX as f64, ScoreBreakdown::TITLE_MAX)
}

/// Format sub-score (0-5): 5/3 points per present signal
pub fn format_score(signals: &FormatSignals) -> u32 {
    let score = signals.present_count() as f64 * ScoreBreakdown::FORMAT_MAX as f64 / 3.0;
    points(score, ScoreBreakdown::FORMAT_MAX)
}

/// Bucketed callback probability, linearly interpolated inside each bucket
pub fn base_callback_probability(score: u32) -> u32 {
    let score = score.min(100);

    for (from, to, cb_from, cb_to) in CALLBACK_BUCKETS {
        if score < to || to == 100 {
            let position = (score - from) as f64 / (to - from) as f64;
            let callback = cb_from as f64 + position * (cb_to - cb_from) as f64;
            return callback.round() as u32;
        }
    }

    CALLBACK_BUCKETS[CALLBACK_BUCKETS.len() - 1].3
}

#[inline]
fn points(value: f64, max: u32) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    (value.round().max(0.0) as u32).min(max)
}
