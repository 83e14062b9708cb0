#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod lexicon;
pub mod traits;
pub mod types;
pub mod vocabulary;

pub use error::{Error, Result};
pub use types::{Classification, Level, LevelDistribution, OverallLevel, PartOfSpeech, WordAnalysis};
pub use lexicon::{Lexicon, LexiconLoader};
pub use vocabulary::{Vocabulary, VocabularyLoader};
