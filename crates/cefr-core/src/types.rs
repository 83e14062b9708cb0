//! Domain types shared by the vocabulary loader, the resolver and the CLI.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A CEFR proficiency level. Ordering follows the framework: `A1 < ... < C2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl Level {
    pub const ALL: [Level; 6] = [Level::A1, Level::A2, Level::B1, Level::B2, Level::C1, Level::C2];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }

    /// Ordinal weight used by the overall-level estimate (`A1 = 1` .. `C2 = 6`).
    pub fn weight(self) -> u32 {
        match self {
            Level::A1 => 1,
            Level::A2 => 2,
            Level::B1 => 3,
            Level::B2 => 4,
            Level::C1 => 5,
            Level::C2 => 6,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A1" => Ok(Level::A1),
            "A2" => Ok(Level::A2),
            "B1" => Ok(Level::B1),
            "B2" => Ok(Level::B2),
            "C1" => Ok(Level::C1),
            "C2" => Ok(Level::C2),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}

/// Outcome of resolving one token: a level, or no vocabulary entry at all.
///
/// Serialized as the bare level (`"B2"`) or `"uncategorized"`, which also makes
/// it usable as a JSON object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Level(Level),
    Uncategorized,
}

impl Classification {
    pub const UNCATEGORIZED: &'static str = "uncategorized";

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Level(level) => level.as_str(),
            Classification::Uncategorized => Self::UNCATEGORIZED,
        }
    }

    pub fn level(self) -> Option<Level> {
        match self {
            Classification::Level(level) => Some(level),
            Classification::Uncategorized => None,
        }
    }
}

impl From<Option<Level>> for Classification {
    fn from(level: Option<Level>) -> Self {
        level.map_or(Classification::Uncategorized, Classification::Level)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::UNCATEGORIZED) {
            return Ok(Classification::Uncategorized);
        }
        s.parse().map(Classification::Level)
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Grammatical category hint passed to a lemmatizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    AdjectiveSatellite,
}

impl PartOfSpeech {
    /// Probe order used when the default lemma has no vocabulary entry.
    pub const FALLBACK_ORDER: [PartOfSpeech; 5] = [
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Noun,
        PartOfSpeech::Adverb,
        PartOfSpeech::AdjectiveSatellite,
    ];
}

impl FromStr for PartOfSpeech {
    type Err = Error;

    /// Accepts WordNet letters and full names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "noun" => Ok(PartOfSpeech::Noun),
            "v" | "verb" => Ok(PartOfSpeech::Verb),
            "a" | "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "r" | "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            "s" | "satellite" | "adjective_satellite" => Ok(PartOfSpeech::AdjectiveSatellite),
            _ => Err(Error::InvalidPartOfSpeech(s.to_string())),
        }
    }
}

/// Per-token result. `surface` is always the token exactly as it was passed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub surface: String,
    pub lemma: String,
    pub classification: Classification,
}

/// Occurrence counts per classification for one request.
///
/// Classifications that never occurred are absent and count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelDistribution {
    counts: BTreeMap<Classification, usize>,
}

impl LevelDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, classification: Classification) {
        *self.counts.entry(classification).or_insert(0) += 1;
    }

    pub fn count(&self, classification: Classification) -> usize {
        self.counts.get(&classification).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Classification, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }
}

impl FromIterator<Classification> for LevelDistribution {
    fn from_iter<I: IntoIterator<Item = Classification>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for classification in iter {
            distribution.record(classification);
        }
        distribution
    }
}

/// Single level summarizing a whole text, or `Unknown` when nothing was categorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallLevel {
    Level(Level),
    Unknown,
}

impl OverallLevel {
    pub const UNKNOWN: &'static str = "unknown";

    pub fn as_str(self) -> &'static str {
        match self {
            OverallLevel::Level(level) => level.as_str(),
            OverallLevel::Unknown => Self::UNKNOWN,
        }
    }
}

impl fmt::Display for OverallLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OverallLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OverallLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().eq_ignore_ascii_case(Self::UNKNOWN) {
            return Ok(OverallLevel::Unknown);
        }
        raw.parse().map(OverallLevel::Level).map_err(serde::de::Error::custom)
    }
}
