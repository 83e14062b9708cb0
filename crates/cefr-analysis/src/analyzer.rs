use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use cefr_core::config::Settings;
use cefr_core::traits::{Lemmatizer, Tokenizer};
use cefr_core::types::{Classification, LevelDistribution, OverallLevel, WordAnalysis};
use cefr_core::{LexiconLoader, VocabularyLoader};
use cefr_text::{MorphyLemmatizer, WordTokenizer};

use crate::distribution::distribute;
use crate::overall::determine_overall_level;
use crate::resolver::WordLevelResolver;

/// Everything reported for one piece of feedback.
///
/// `cefr_analysis` is keyed by the token as it appeared, never by the lemma
/// that happened to match; `tokens` keeps every occurrence in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub original_text: String,
    pub tokens: Vec<WordAnalysis>,
    pub cefr_analysis: BTreeMap<String, Classification>,
    pub distribution: LevelDistribution,
    pub overall_level: OverallLevel,
}

pub struct FeedbackAnalyzer<T, L> {
    tokenizer: T,
    resolver: WordLevelResolver<L>,
}

pub type DefaultAnalyzer = FeedbackAnalyzer<WordTokenizer, MorphyLemmatizer>;

impl<T, L> FeedbackAnalyzer<T, L>
where
    T: Tokenizer,
    L: Lemmatizer,
{
    pub fn new(tokenizer: T, resolver: WordLevelResolver<L>) -> Self {
        Self { tokenizer, resolver }
    }

    pub fn resolver(&self) -> &WordLevelResolver<L> {
        &self.resolver
    }

    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let tokens: Vec<WordAnalysis> =
            self.tokenizer.tokenize(text).iter().map(|t| self.resolver.analyze_token(t)).collect();
        let cefr_analysis = tokens.iter().map(|w| (w.surface.clone(), w.classification)).collect();
        let distribution = distribute(&tokens);
        let overall_level = determine_overall_level(&distribution);
        tracing::debug!(tokens = tokens.len(), overall = %overall_level, "analyzed feedback");
        AnalysisReport { original_text: text.to_string(), tokens, cefr_analysis, distribution, overall_level }
    }
}

/// Load the configured vocabulary and lexicon and wire the default tokenizer and lemmatizer.
///
/// Fails when either table cannot be loaded; callers should not start serving then.
pub fn build_analyzer(settings: &Settings) -> anyhow::Result<DefaultAnalyzer> {
    let loader = VocabularyLoader::from_settings(&settings.vocabulary)?;
    let path = &settings.vocabulary.path;
    let vocabulary = loader
        .load(path)
        .with_context(|| format!("Failed to load CEFR vocabulary from {}", path.display()))?;
    let vocabulary = Arc::new(vocabulary);

    let path = &settings.lexicon.path;
    let lexicon = LexiconLoader::new()
        .load(path)
        .with_context(|| format!("Failed to load lemma lexicon from {}", path.display()))?;
    let lemmatizer = MorphyLemmatizer::new(Arc::new(lexicon)).with_keep(vocabulary.headwords());
    let resolver = WordLevelResolver::new(vocabulary, lemmatizer);
    Ok(FeedbackAnalyzer::new(WordTokenizer::new(&settings.tokenizer), resolver))
}
