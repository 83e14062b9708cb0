use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use cefr_core::traits::Lemmatizer;
use cefr_core::types::PartOfSpeech;
use cefr_core::Lexicon;

use crate::exceptions;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Suffixes whose bare removal can leave a doubled consonant (`running` -> `runn`).
const UNDOUBLE_SUFFIXES: &[&str] = &["ing", "ed", "er", "est"];

const ALL_POS: [PartOfSpeech; 5] = [
    PartOfSpeech::Noun,
    PartOfSpeech::Verb,
    PartOfSpeech::Adjective,
    PartOfSpeech::Adverb,
    PartOfSpeech::AdjectiveSatellite,
];

fn rules_for(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// WordNet-morphy style lemmatizer checked against an English [`Lexicon`].
///
/// Candidates are the word itself plus its derived base forms (the exception
/// entry, or one application of each suffix rule). Only candidates the lexicon
/// lists under the requested category count; the shortest wins, the first one
/// on ties. Undoubling a final consonant is tried only when no candidate is
/// listed, and the word comes back unchanged when nothing is. Words in `keep`
/// (normally the CEFR headwords) are always their own lemma. The default
/// category is noun.
pub struct MorphyLemmatizer {
    lexicon: Arc<Lexicon>,
    keep: Arc<HashSet<String>>,
    exceptions: HashMap<PartOfSpeech, HashMap<&'static str, &'static str>>,
}

impl MorphyLemmatizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let exceptions = ALL_POS
            .iter()
            .map(|pos| (*pos, exceptions::for_pos(*pos).iter().copied().collect()))
            .collect();
        Self { lexicon, keep: Arc::default(), exceptions }
    }

    /// Words returned unchanged under every category.
    pub fn with_keep(mut self, words: Arc<HashSet<String>>) -> Self {
        self.keep = words;
        self
    }

    fn derived_forms(&self, word: &str, pos: PartOfSpeech) -> Vec<String> {
        if let Some(base) = self.exceptions.get(&pos).and_then(|table| table.get(word)) {
            return vec![(*base).to_string()];
        }
        rules_for(pos)
            .iter()
            .filter_map(|(suffix, replacement)| word.strip_suffix(suffix).map(|stem| format!("{stem}{replacement}")))
            .filter(|form| !form.is_empty())
            .collect()
    }

    fn shortest_known(&self, forms: Vec<String>, pos: PartOfSpeech) -> Option<String> {
        forms
            .into_iter()
            .filter(|form| self.lexicon.contains(form, pos))
            .min_by_key(|form| form.chars().count())
    }
}

fn undoubled_candidates(word: &str, pos: PartOfSpeech) -> Vec<String> {
    rules_for(pos)
        .iter()
        .filter(|(suffix, replacement)| replacement.is_empty() && UNDOUBLE_SUFFIXES.contains(suffix))
        .filter_map(|(suffix, _)| word.strip_suffix(suffix))
        .filter_map(undouble)
        .collect()
}

fn undouble(stem: &str) -> Option<String> {
    let mut tail = stem.chars().rev();
    let last = tail.next()?;
    let prev = tail.next()?;
    if last == prev && is_consonant(last) {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str, pos: Option<PartOfSpeech>) -> String {
        let word = word.trim().to_lowercase();
        let pos = pos.unwrap_or(PartOfSpeech::Noun);
        if self.keep.contains(&word) {
            return word;
        }
        let mut candidates = vec![word.clone()];
        candidates.extend(self.derived_forms(&word, pos));
        self.shortest_known(candidates, pos)
            .or_else(|| self.shortest_known(undoubled_candidates(&word, pos), pos))
            .unwrap_or(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undouble_only_strips_repeated_consonants() {
        assert_eq!(undouble("runn").as_deref(), Some("run"));
        assert_eq!(undouble("bigg").as_deref(), Some("big"));
        assert_eq!(undouble("see"), None);
        assert_eq!(undouble("a"), None);
    }

    #[test]
    fn noun_forms_keep_rule_order() {
        let lemmatizer = MorphyLemmatizer::new(Arc::new(Lexicon::default()));
        let forms = lemmatizer.derived_forms("boxes", PartOfSpeech::Noun);
        assert_eq!(forms, vec!["boxe", "box"]);
        assert_eq!(lemmatizer.derived_forms("children", PartOfSpeech::Noun), vec!["child"]);
    }
}
