//! General English lemma list, indexed by category.
//!
//! The lemmatizer validates candidate base forms against this list, not
//! against the CEFR table, so a suffix rule only fires when it lands on a real
//! English lemma of the requested category (`news` stays `news`).

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::PartOfSpeech;

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    by_pos: HashMap<PartOfSpeech, HashSet<String>>,
}

// Satellites are looked up in the adjective index, as WordNet does.
fn index_key(pos: PartOfSpeech) -> PartOfSpeech {
    match pos {
        PartOfSpeech::AdjectiveSatellite => PartOfSpeech::Adjective,
        other => other,
    }
}

impl Lexicon {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PartOfSpeech)>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for (lemma, pos) in entries {
            lexicon.insert(lemma.as_ref(), pos);
        }
        lexicon
    }

    fn insert(&mut self, lemma: &str, pos: PartOfSpeech) {
        let lemma = lemma.trim().to_lowercase();
        if !lemma.is_empty() {
            self.by_pos.entry(index_key(pos)).or_default().insert(lemma);
        }
    }

    /// Whether `lemma` (already lowercase) is a lemma of category `pos`.
    pub fn contains(&self, lemma: &str, pos: PartOfSpeech) -> bool {
        self.by_pos.get(&index_key(pos)).is_some_and(|lemmas| lemmas.contains(lemma))
    }

    /// Number of distinct (lemma, category) pairs.
    pub fn len(&self) -> usize {
        self.by_pos.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads a `lemma,pos` table; `pos` takes WordNet letters or full names.
#[derive(Debug, Clone, Default)]
pub struct LexiconLoader;

impl LexiconLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<Lexicon> {
        if !path.is_file() {
            return Err(Error::LexiconNotFound(path.to_path_buf()));
        }
        let lexicon = self.load_reader(File::open(path)?, path)?;
        tracing::info!(source = %path.display(), entries = lexicon.len(), "loaded lemma lexicon");
        Ok(lexicon)
    }

    pub fn load_reader<R: Read>(&self, reader: R, source: &Path) -> Result<Lexicon> {
        let malformed = |reason: String| Error::MalformedLexicon { path: source.to_path_buf(), reason };

        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).flexible(true).from_reader(reader);
        let headers = reader.headers().map_err(|e| malformed(format!("cannot read header row: {}", e)))?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| malformed(format!("missing required column '{}'", name)))
        };
        let lemma_idx = column("lemma")?;
        let pos_idx = column("pos")?;

        let mut lexicon = Lexicon::default();
        for (idx, record) in reader.records().enumerate() {
            let fallback_line = idx as u64 + 2;
            let record = record.map_err(|e| malformed(format!("line {}: {}", fallback_line, e)))?;
            let line = record.position().map_or(fallback_line, csv::Position::line);

            let lemma = record.get(lemma_idx).unwrap_or_default();
            if lemma.is_empty() {
                tracing::warn!(source = %source.display(), line, "skipping lexicon row without a lemma");
                continue;
            }
            let pos: PartOfSpeech = record
                .get(pos_idx)
                .unwrap_or_default()
                .parse()
                .map_err(|e| malformed(format!("line {}: {}", line, e)))?;
            lexicon.insert(lemma, pos);
        }
        Ok(lexicon)
    }
}
