//! Multi-candidate paraphrasing: fan the input out to several paraphrasers,
//! score every candidate, keep the lowest.

use async_trait::async_trait;
use futures::future::join_all;
use serde::Serialize;

use crate::scorer::Scorer;
use crate::transformer;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider returned empty output")]
    EmptyOutput,

    #[error("provider failed: {0}")]
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("no paraphrase providers configured")]
    NoProviders,

    #[error("all {attempted} paraphrase providers failed")]
    AllProvidersFailed { attempted: usize },
}

/// Anything that can produce a paraphrase candidate.
#[async_trait]
pub trait Paraphraser: Send + Sync {
    fn name(&self) -> &str;
    async fn paraphrase(&self, text: &str) -> Result<String, ProviderError>;
}

/// The local rule pipeline as a provider. Unseeded instances draw fresh
/// randomness on every call.
#[derive(Debug, Clone)]
pub struct RuleBasedParaphraser {
    name: String,
    seed: Option<u64>,
}

impl RuleBasedParaphraser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: None,
        }
    }

    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            seed: Some(seed),
        }
    }
}

#[async_trait]
impl Paraphraser for RuleBasedParaphraser {
    fn name(&self) -> &str {
        &self.name
    }

    async fn paraphrase(&self, text: &str) -> Result<String, ProviderError> {
        let out = match self.seed {
            Some(seed) => transformer::paraphrase_seeded(text, seed),
            None => transformer::paraphrase(text),
        };
        if out.trim().is_empty() {
            return Err(ProviderError::EmptyOutput);
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub provider: String,
    pub text: String,
    pub score: u8,
}

/// Before/after view of one humanize run.
#[derive(Debug, Clone, Serialize)]
pub struct HumanizeReport {
    pub original: String,
    pub paraphrased: String,
    pub original_score: u8,
    pub new_score: u8,
    /// Positive when the paraphrase scores lower than the input.
    pub improvement: i32,
    pub provider: Option<String>,
}

/// Run every provider concurrently and return the lowest-scoring candidate.
/// Failed providers are logged and skipped; ties go to the earliest
/// provider in `providers`.
pub async fn select_best(
    providers: &[Box<dyn Paraphraser>],
    text: &str,
    scorer: &Scorer,
) -> Result<Candidate, SelectionError> {
    if providers.is_empty() {
        return Err(SelectionError::NoProviders);
    }

    let futures: Vec<_> = providers.iter().map(|p| p.paraphrase(text)).collect();
    let results = join_all(futures).await;

    let mut best: Option<Candidate> = None;
    for (provider, result) in providers.iter().zip(results) {
        let candidate = match result {
            Ok(out) if out.trim().is_empty() => Err(ProviderError::EmptyOutput),
            other => other,
        };
        let candidate = match candidate {
            Ok(out) => out,
            Err(e) => {
                tracing::warn!(provider = provider.name(), error = %e, "paraphrase provider failed");
                continue;
            }
        };
        let score = scorer.estimate(&candidate);
        tracing::debug!(provider = provider.name(), score, "candidate scored");
        if best.as_ref().map_or(true, |b| score < b.score) {
            best = Some(Candidate {
                provider: provider.name().to_string(),
                text: candidate,
                score,
            });
        }
    }

    let best = best.ok_or(SelectionError::AllProvidersFailed {
        attempted: providers.len(),
    })?;
    tracing::info!(provider = %best.provider, score = best.score, "selected candidate");
    Ok(best)
}

/// Score `text`, paraphrase it through `providers` and report the change.
pub async fn humanize(
    text: &str,
    providers: &[Box<dyn Paraphraser>],
    scorer: &Scorer,
) -> Result<HumanizeReport, SelectionError> {
    let original_score = scorer.estimate(text);
    let best = select_best(providers, text, scorer).await?;
    Ok(HumanizeReport {
        original: text.to_string(),
        improvement: i32::from(original_score) - i32::from(best.score),
        original_score,
        new_score: best.score,
        paraphrased: best.text,
        provider: Some(best.provider),
    })
}

/// `count` unseeded rule-based providers, or seeded ones derived from
/// `seed` so a whole run is reproducible.
pub fn rule_based_providers(count: usize, seed: Option<u64>) -> Vec<Box<dyn Paraphraser>> {
    (0..count)
        .map(|i| -> Box<dyn Paraphraser> {
            let name = format!("rules-{}", i + 1);
            match seed {
                Some(seed) => Box::new(RuleBasedParaphraser::seeded(name, seed.wrapping_add(i as u64))),
                None => Box::new(RuleBasedParaphraser::new(name)),
            }
        })
        .collect()
}
