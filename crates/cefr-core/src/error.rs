use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Vocabulary not found: {}", .0.display())]
    VocabularyNotFound(PathBuf),

    #[error("Malformed vocabulary {}: {reason}", .path.display())]
    MalformedVocabulary { path: PathBuf, reason: String },

    #[error("Lexicon not found: {}", .0.display())]
    LexiconNotFound(PathBuf),

    #[error("Malformed lexicon {}: {reason}", .path.display())]
    MalformedLexicon { path: PathBuf, reason: String },

    #[error("Invalid CEFR level: {0:?}")]
    InvalidLevel(String),

    #[error("Invalid part of speech: {0:?}")]
    InvalidPartOfSpeech(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
