pub mod config;
pub mod scorer;
pub mod selection;
pub mod text;
pub mod transformer;
pub mod vocabulary;

use once_cell::sync::Lazy;

pub use config::{Config, ConfigError};
pub use scorer::{
    CheckResult, PatternCheck, Profile, ScoreReport, Scorer, Severity, Verdict, EXTENDED_CHECKS,
    STANDARD_CHECKS,
};
pub use selection::{
    humanize, rule_based_providers, select_best, Candidate, HumanizeReport, Paraphraser,
    ProviderError, RuleBasedParaphraser, SelectionError,
};
pub use transformer::{paraphrase, paraphrase_seeded};

static STANDARD_SCORER: Lazy<Scorer> = Lazy::new(Scorer::standard);

/// Full report from the standard checks.
pub fn score(text: &str) -> ScoreReport {
    STANDARD_SCORER.score(text)
}

/// Standard fingerprint score in `0..=100`. Higher means more AI-like.
pub fn estimate_score(text: &str) -> u8 {
    STANDARD_SCORER.estimate(text)
}
