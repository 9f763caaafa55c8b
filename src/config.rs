//! Optional TOML configuration.
//!
//! ```toml
//! [scorer]
//! profile = "extended"
//! min_chars = 50
//!
//! [transformer]
//! seed = 42
//!
//! [selection]
//! candidates = 3
//! ```
//!
//! Every key is optional. CLI flags override whatever the file sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scorer::{Profile, Scorer};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub scorer: ScorerConfig,
    pub transformer: TransformerConfig,
    pub selection: SelectionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScorerConfig {
    pub profile: Profile,
    /// Trimmed character count below which text is not scored.
    pub min_chars: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Standard,
            min_chars: 50,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransformerConfig {
    /// Fixed seed for the randomized stage. Unset means fresh randomness.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Number of paraphrase candidates generated per humanize run.
    pub candidates: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { candidates: 3 }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.selection.candidates == 0 {
            return Err(ConfigError::Invalid(
                "selection.candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn scorer(&self) -> Scorer {
        Scorer::for_profile(self.scorer.profile).with_min_chars(self.scorer.min_chars)
    }
}
