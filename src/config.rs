use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::core::{AcronymTable, Analyzer, ScoreEngine, SkillMatcher};
use crate::models::{PotentialRules, ScoringRules, SuggestionRules, SuggestionTier};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub potential: PotentialSettings,
    #[serde(default)]
    pub suggestions: SuggestionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    /// Largest accepted JSON body, in bytes
    pub json_limit: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            json_limit: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_must_have_cap")]
    pub must_have_cap: u32,
    #[serde(default = "default_high_demand_skills")]
    pub high_demand_skills: Vec<String>,
    #[serde(default = "default_high_demand_bonus")]
    pub high_demand_bonus: u32,
    #[serde(default = "default_certification_markers")]
    pub certification_markers: Vec<String>,
    #[serde(default = "default_certification_penalty")]
    pub certification_penalty: u32,
    /// Merged over the built-in acronym table
    #[serde(default)]
    pub extra_acronyms: HashMap<String, Vec<String>>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            must_have_cap: default_must_have_cap(),
            high_demand_skills: default_high_demand_skills(),
            high_demand_bonus: default_high_demand_bonus(),
            certification_markers: default_certification_markers(),
            certification_penalty: default_certification_penalty(),
            extra_acronyms: HashMap::new(),
        }
    }
}

fn default_must_have_cap() -> u32 { ScoringRules::default().must_have_cap }
fn default_high_demand_skills() -> Vec<String> { ScoringRules::default().high_demand_skills }
fn default_high_demand_bonus() -> u32 { ScoringRules::default().high_demand_bonus }
fn default_certification_markers() -> Vec<String> { ScoringRules::default().certification_markers }
fn default_certification_penalty() -> u32 { ScoringRules::default().certification_penalty }

impl ScoringSettings {
    pub fn rules(&self) -> ScoringRules {
        ScoringRules {
            must_have_cap: self.must_have_cap.min(100),
            high_demand_skills: self.high_demand_skills.clone(),
            high_demand_bonus: self.high_demand_bonus,
            certification_markers: self.certification_markers.clone(),
            certification_penalty: self.certification_penalty,
        }
    }

    pub fn acronym_table(&self) -> AcronymTable {
        AcronymTable::default().extended_with(&self.extra_acronyms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PotentialSettings {
    #[serde(default = "default_ceiling")]
    pub ceiling: u32,
    #[serde(default = "default_ceiling_with_critical_missing")]
    pub ceiling_with_critical_missing: u32,
    #[serde(default = "default_min_uplift")]
    pub min_uplift: u32,
}

impl Default for PotentialSettings {
    fn default() -> Self {
        Self {
            ceiling: default_ceiling(),
            ceiling_with_critical_missing: default_ceiling_with_critical_missing(),
            min_uplift: default_min_uplift(),
        }
    }
}

fn default_ceiling() -> u32 { 95 }
fn default_ceiling_with_critical_missing() -> u32 { 90 }
fn default_min_uplift() -> u32 { 5 }

impl From<&PotentialSettings> for PotentialRules {
    fn from(settings: &PotentialSettings) -> Self {
        Self {
            ceiling: settings.ceiling.min(100),
            ceiling_with_critical_missing: settings.ceiling_with_critical_missing.min(100),
            min_uplift: settings.min_uplift,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    #[serde(default = "default_title_similarity_threshold")]
    pub title_similarity_threshold: f64,
    /// `[[suggestions.preseeded_tiers]]` entries of `{ below, limit }`
    #[serde(default = "default_preseeded_tiers")]
    pub preseeded_tiers: Vec<TierConfig>,
    #[serde(default = "default_preseeded_limit")]
    pub preseeded_default_limit: usize,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TierConfig {
    pub below: u32,
    pub limit: usize,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            title_similarity_threshold: default_title_similarity_threshold(),
            preseeded_tiers: default_preseeded_tiers(),
            preseeded_default_limit: default_preseeded_limit(),
        }
    }
}

fn default_title_similarity_threshold() -> f64 { 0.7 }
fn default_preseeded_limit() -> usize { 3 }
fn default_preseeded_tiers() -> Vec<TierConfig> {
    SuggestionRules::default()
        .preseeded_tiers
        .iter()
        .map(|tier| TierConfig { below: tier.below, limit: tier.limit })
        .collect()
}

impl From<&SuggestionSettings> for SuggestionRules {
    fn from(settings: &SuggestionSettings) -> Self {
        let mut tiers: Vec<SuggestionTier> = settings
            .preseeded_tiers
            .iter()
            .map(|tier| SuggestionTier { below: tier.below, limit: tier.limit })
            .collect();
        tiers.sort_by_key(|tier| tier.below);

        Self {
            title_similarity_threshold: settings.title_similarity_threshold,
            preseeded_tiers: tiers,
            preseeded_default_limit: settings.preseeded_default_limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SHORTLIST_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SHORTLIST__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SHORTLIST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("scoring.high_demand_skills")
                    .with_list_parse_key("scoring.certification_markers"),
            )
            .build()?;

        apply_platform_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SHORTLIST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Build the analyzer described by these settings
    pub fn analyzer(&self) -> Analyzer {
        let engine = ScoreEngine::new(
            SkillMatcher::new(self.scoring.acronym_table()),
            self.scoring.rules(),
        );

        Analyzer::new(
            engine,
            SuggestionRules::from(&self.suggestions),
            PotentialRules::from(&self.potential),
        )
    }
}

/// Honour the plain `PORT` variable most container platforms inject
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        builder = builder.set_override("server.port", port as i64)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_settings() {
        let scoring = ScoringSettings::default();
        assert_eq!(scoring.must_have_cap, 65);
        assert_eq!(scoring.high_demand_bonus, 10);
        assert_eq!(scoring.certification_penalty, 5);
        assert_eq!(scoring.rules(), ScoringRules::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_suggestion_tiers_sorted_on_conversion() {
        let settings = SuggestionSettings {
            title_similarity_threshold: 0.6,
            preseeded_tiers: vec![
                TierConfig { below: 80, limit: 4 },
                TierConfig { below: 40, limit: 8 },
            ],
            preseeded_default_limit: 2,
        };

        let rules = SuggestionRules::from(&settings);
        assert_eq!(rules.preseeded_limit(30), 8);
        assert_eq!(rules.preseeded_limit(60), 4);
        assert_eq!(rules.preseeded_limit(95), 2);
    }

    #[test]
    fn test_extra_acronyms_reach_matcher() {
        let mut settings = Settings::default();
        settings
            .scoring
            .extra_acronyms
            .insert("tf".to_string(), vec!["terraform".to_string()]);

        let analyzer = settings.analyzer();
        assert!(analyzer.engine().matcher().are_skills_match("TF", "Terraform"));
        assert!(analyzer.engine().matcher().are_skills_match("AWS", "Amazon Web Services"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("shortlist-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9090\n\n[scoring]\nmust_have_cap = 60\n\n[potential]\nmin_uplift = 0\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.scoring.must_have_cap, 60);
        assert_eq!(settings.potential.min_uplift, 0);
        assert_eq!(settings.potential.ceiling, 95);

        std::fs::remove_dir_all(&dir).ok();
    }
}
