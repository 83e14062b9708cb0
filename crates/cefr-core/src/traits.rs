use crate::types::PartOfSpeech;

/// Splits raw text into surface tokens. Normalization policy (case, punctuation,
/// digits) belongs to the implementation.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Reduces a word to its dictionary base form.
///
/// `pos = None` selects the implementation's default category. Implementations
/// return the word unchanged when no base form is known.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str, pos: Option<PartOfSpeech>) -> String;
}
