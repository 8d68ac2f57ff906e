// Core engine exports
pub mod analyzer;
pub mod scoring;
pub mod simulator;
pub mod skills;
pub mod suggestions;

pub use analyzer::{Analysis, Analyzer};
pub use scoring::{base_callback_probability, match_quality_weight, ScoreEngine};
pub use simulator::{recover_skill_name, simulate_aggressive, simulate_targeted};
pub use skills::{normalize_skill, AcronymTable, SkillListMatch, SkillMatcher, SkillPair};
pub use suggestions::generate_suggestions;
