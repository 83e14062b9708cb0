use tantivy::tokenizer::{LowerCaser, TextAnalyzer, TokenStream, WhitespaceTokenizer};

use cefr_core::config::TokenizerSettings;
use cefr_core::traits::Tokenizer;

/// Lowercased word tokens with punctuation removed.
///
/// Everything except letters, digits, `_` and whitespace is deleted before
/// splitting on whitespace, so contractions collapse into one token
/// (`don't` -> `dont`) and `snake_case` stays whole. Tokens are never dropped
/// for length.
#[derive(Clone)]
pub struct WordTokenizer {
    analyzer: TextAnalyzer,
    strip_digits: bool,
}

impl WordTokenizer {
    pub fn new(settings: &TokenizerSettings) -> Self {
        let analyzer = TextAnalyzer::builder(WhitespaceTokenizer::default()).filter(LowerCaser).build();
        Self { analyzer, strip_digits: settings.strip_digits }
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new(&TokenizerSettings::default())
    }
}

// WhitespaceTokenizer only splits on ASCII whitespace
fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = strip_punctuation(text);
        // token_stream takes &mut self
        let mut analyzer = self.analyzer.clone();
        let mut stream = analyzer.token_stream(&cleaned);
        let mut tokens = Vec::new();
        while stream.advance() {
            let text = &stream.token().text;
            let token: String = if self.strip_digits {
                text.chars().filter(|c| !c.is_numeric()).collect()
            } else {
                text.clone()
            };
            if !token.is_empty() {
                tokens.push(token);
            }
        }
        tokens
    }
}
