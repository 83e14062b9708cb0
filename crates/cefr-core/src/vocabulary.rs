//! CEFR word list: loading from delimited files and read-only lookup.
//!
//! A [`Vocabulary`] is built once at startup and then only read, so it is
//! shared behind an `Arc` by every resolver without locking.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::VocabularySettings;
use crate::error::{Error, Result};
use crate::types::Level;

/// Immutable headword → level mapping plus the set of known headwords.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    levels: HashMap<String, Level>,
    headwords: Arc<HashSet<String>>,
}

impl Vocabulary {
    /// Build from `(headword, level)` pairs. Headwords are trimmed and lowercased;
    /// a later duplicate replaces an earlier one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Level)>,
        S: AsRef<str>,
    {
        let mut levels = HashMap::new();
        for (headword, level) in entries {
            let headword = normalize_headword(headword.as_ref());
            if !headword.is_empty() {
                levels.insert(headword, level);
            }
        }
        Self::from_map(levels)
    }

    fn from_map(levels: HashMap<String, Level>) -> Self {
        let headwords = Arc::new(levels.keys().cloned().collect());
        Self { levels, headwords }
    }

    /// Direct lookup of an already-normalized (lowercase) headword.
    pub fn level_of(&self, headword: &str) -> Option<Level> {
        self.levels.get(headword).copied()
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.headwords.contains(headword)
    }

    /// Shared handle to the known-headword set, e.g. as a lemmatizer lexicon.
    pub fn headwords(&self) -> Arc<HashSet<String>> {
        Arc::clone(&self.headwords)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of headwords per level; every level is present, possibly with zero.
    pub fn level_counts(&self) -> BTreeMap<Level, usize> {
        let mut counts: BTreeMap<Level, usize> = Level::ALL.iter().map(|l| (*l, 0)).collect();
        for level in self.levels.values() {
            *counts.entry(*level).or_insert(0) += 1;
        }
        counts
    }
}

fn normalize_headword(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Reads delimited word lists with a header row.
#[derive(Debug, Clone)]
pub struct VocabularyLoader {
    headword_column: String,
    level_column: String,
    delimiter: u8,
}

impl Default for VocabularyLoader {
    fn default() -> Self {
        Self { headword_column: "headword".to_string(), level_column: "CEFR".to_string(), delimiter: b',' }
    }
}

impl VocabularyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &VocabularySettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            headword_column: settings.headword_column.trim().to_string(),
            level_column: settings.level_column.trim().to_string(),
            delimiter: settings.delimiter_byte()?,
        })
    }

    pub fn with_columns(mut self, headword: &str, level: &str) -> Self {
        self.headword_column = headword.trim().to_string();
        self.level_column = level.trim().to_string();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a single file, or every word list under a directory in sorted path order.
    ///
    /// Directory entries are picked by extension: `*.tsv`/`*.tab` for a tab
    /// delimiter, `*.csv` otherwise.
    pub fn load(&self, path: &Path) -> Result<Vocabulary> {
        if !path.exists() {
            return Err(Error::VocabularyNotFound(path.to_path_buf()));
        }
        let files = if path.is_dir() {
            list_table_files(path, self.extensions())
        } else {
            vec![path.to_path_buf()]
        };
        if files.is_empty() {
            return Err(Error::VocabularyNotFound(path.to_path_buf()));
        }

        let mut levels = HashMap::new();
        for file in &files {
            let rows = self.read_into(File::open(file)?, file, &mut levels)?;
            tracing::debug!(source = %file.display(), rows, "read vocabulary file");
        }

        let vocabulary = Vocabulary::from_map(levels);
        if vocabulary.is_empty() {
            tracing::warn!(source = %path.display(), "vocabulary has no entries; every token will be uncategorized");
        } else {
            tracing::info!(source = %path.display(), files = files.len(), entries = vocabulary.len(), "loaded CEFR vocabulary");
        }
        Ok(vocabulary)
    }

    fn extensions(&self) -> &'static [&'static str] {
        match self.delimiter {
            b'\t' => &["tsv", "tab"],
            _ => &["csv"],
        }
    }

    /// Load from any reader; `source` is only used in error messages.
    pub fn load_reader<R: Read>(&self, reader: R, source: &Path) -> Result<Vocabulary> {
        let mut levels = HashMap::new();
        self.read_into(reader, source, &mut levels)?;
        Ok(Vocabulary::from_map(levels))
    }

    fn read_into<R: Read>(&self, reader: R, source: &Path, levels: &mut HashMap<String, Level>) -> Result<usize> {
        let malformed = |reason: String| Error::MalformedVocabulary { path: source.to_path_buf(), reason };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(|e| malformed(format!("cannot read header row: {}", e)))?.clone();
        let column = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
        let headword_idx = column(&self.headword_column)
            .ok_or_else(|| malformed(format!("missing required column '{}'", self.headword_column)))?;
        let level_idx = column(&self.level_column)
            .ok_or_else(|| malformed(format!("missing required column '{}'", self.level_column)))?;

        let mut rows = 0;
        for (idx, record) in reader.records().enumerate() {
            let fallback_line = idx as u64 + 2;
            let record = record.map_err(|e| malformed(format!("line {}: {}", fallback_line, e)))?;
            let line = record.position().map_or(fallback_line, csv::Position::line);

            let headword = normalize_headword(record.get(headword_idx).unwrap_or_default());
            if headword.is_empty() {
                tracing::warn!(source = %source.display(), line, "skipping vocabulary row without a headword");
                continue;
            }
            let raw_level = record
                .get(level_idx)
                .ok_or_else(|| malformed(format!("line {}: no '{}' value", line, self.level_column)))?;
            let level: Level = raw_level
                .parse()
                .map_err(|_| malformed(format!("line {}: invalid CEFR level {:?} for '{}'", line, raw_level, headword)))?;

            levels.insert(headword, level);
            rows += 1;
        }
        Ok(rows)
    }
}

fn list_table_files(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| {
            p.extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| extensions.iter().any(|wanted| ext.eq_ignore_ascii_case(wanted)))
        })
        .collect();
    files.sort();
    files
}
