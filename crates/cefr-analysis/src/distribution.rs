use cefr_core::traits::Lemmatizer;
use cefr_core::types::{LevelDistribution, WordAnalysis};

use crate::resolver::WordLevelResolver;

/// Count classifications over per-token results. Counts sum to `results.len()`.
pub fn distribute(results: &[WordAnalysis]) -> LevelDistribution {
    results.iter().map(|r| r.classification).collect()
}

/// Resolve every token and count the outcomes.
pub fn distribute_tokens<L, S>(resolver: &WordLevelResolver<L>, tokens: &[S]) -> LevelDistribution
where
    L: Lemmatizer,
    S: AsRef<str>,
{
    tokens.iter().map(|t| resolver.resolve_level(t.as_ref())).collect()
}
