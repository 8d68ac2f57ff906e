/// Tunable constants of the score engine
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRules {
    /// Ceiling on the total when any must-have skill is unmatched
    pub must_have_cap: u32,
    /// Skills whose presence signals a rare, in-demand profile
    pub high_demand_skills: Vec<String>,
    pub high_demand_bonus: u32,
    /// Words (or long word prefixes) that mark a requirement as a certification/licence
    pub certification_markers: Vec<String>,
    pub certification_penalty: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            must_have_cap: 65,
            high_demand_skills: [
                "kubernetes",
                "machine learning",
                "large language model",
                "rust",
                "cybersecurity",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            high_demand_bonus: 10,
            certification_markers: [
                "certified",
                "certification",
                "certificate",
                "license",
                "licence",
                "pmp",
                "cissp",
                "cpa",
                "ccna",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            certification_penalty: 5,
        }
    }
}

/// Limits applied when turning a simulated score into a potential score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotentialRules {
    pub ceiling: u32,
    /// Ceiling while critical (importance 3) skills would still be missing
    pub ceiling_with_critical_missing: u32,
    /// Potential is always at least current + this (capped at 100)
    pub min_uplift: u32,
}

impl Default for PotentialRules {
    fn default() -> Self {
        Self {
            ceiling: 95,
            ceiling_with_critical_missing: 90,
            min_uplift: 5,
        }
    }
}

/// One step of the pre-seeded suggestion budget: scores below `below` keep `limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionTier {
    pub below: u32,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRules {
    /// Below this similarity a title change is proposed
    pub title_similarity_threshold: f64,
    /// Ascending by `below`; lower scores keep more pre-seeded suggestions
    pub preseeded_tiers: Vec<SuggestionTier>,
    pub preseeded_default_limit: usize,
}

impl SuggestionRules {
    pub fn preseeded_limit(&self, current_score: u32) -> usize {
        self.preseeded_tiers
            .iter()
            .find(|tier| current_score < tier.below)
            .map(|tier| tier.limit)
            .unwrap_or(self.preseeded_default_limit)
    }
}

impl Default for SuggestionRules {
    fn default() -> Self {
        Self {
            title_similarity_threshold: 0.7,
            preseeded_tiers: vec![
                SuggestionTier { below: 50, limit: 10 },
                SuggestionTier { below: 75, limit: 7 },
                SuggestionTier { below: 90, limit: 5 },
            ],
            preseeded_default_limit: 3,
        }
    }
}
