//! cefr-text
//!
//! Text collaborators for the CEFR resolver: a tantivy analyzer chain that
//! splits feedback into word tokens, and a rule-based lemmatizer checked
//! against an English lemma lexicon.
pub mod exceptions;
pub mod lemmatize;
pub mod tokenize;

pub use lemmatize::MorphyLemmatizer;
pub use tokenize::WordTokenizer;
