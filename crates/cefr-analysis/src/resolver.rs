use std::sync::Arc;

use cefr_core::traits::Lemmatizer;
use cefr_core::types::{Classification, Level, PartOfSpeech, WordAnalysis};
use cefr_core::Vocabulary;

/// One lemmatize-then-lookup attempt for a word under a category hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub pos: Option<PartOfSpeech>,
    pub lemma: String,
    pub level: Option<Level>,
}

impl Probe {
    pub fn found(&self) -> bool {
        self.level.is_some()
    }

    fn into_analysis(self, surface: &str) -> WordAnalysis {
        WordAnalysis { surface: surface.to_string(), lemma: self.lemma, classification: self.level.into() }
    }
}

/// Maps single tokens to CEFR levels.
///
/// The vocabulary is shared read-only, so one resolver can serve any number of
/// concurrent callers.
pub struct WordLevelResolver<L> {
    vocabulary: Arc<Vocabulary>,
    lemmatizer: L,
}

impl<L> WordLevelResolver<L>
where
    L: Lemmatizer,
{
    pub fn new(vocabulary: Arc<Vocabulary>, lemmatizer: L) -> Self {
        Self { vocabulary, lemmatizer }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Lemmatize `word` under `pos` and look the lemma up. Pure; `word` must be normalized.
    pub fn probe(&self, word: &str, pos: Option<PartOfSpeech>) -> Probe {
        let lemma = self.lemmatizer.lemmatize(word, pos);
        let level = self.vocabulary.level_of(&lemma);
        Probe { pos, lemma, level }
    }

    pub fn resolve_level(&self, token: &str) -> Classification {
        self.analyze_token(token).classification
    }

    /// Resolve `token`, keeping it as the result's surface form whichever lemma matched.
    ///
    /// The default-category lemma is tried first. On a miss, only the first
    /// category in [`PartOfSpeech::FALLBACK_ORDER`] whose lemma differs from the
    /// token is retried.
    pub fn analyze_token(&self, token: &str) -> WordAnalysis {
        let word = token.trim().to_lowercase();
        let default = self.probe(&word, None);
        if default.found() {
            return default.into_analysis(token);
        }

        let fallback = PartOfSpeech::FALLBACK_ORDER
            .iter()
            .map(|pos| self.probe(&word, Some(*pos)))
            .find(|probe| probe.lemma != word);
        match fallback {
            Some(probe) if probe.found() => {
                tracing::debug!(token, lemma = %probe.lemma, pos = ?probe.pos, "resolved through category fallback");
                probe.into_analysis(token)
            }
            _ => default.into_analysis(token),
        }
    }

    /// Whether `word` is itself a vocabulary headword, without lemmatization.
    pub fn is_known(&self, word: &str) -> bool {
        self.vocabulary.contains(&word.trim().to_lowercase())
    }
}
