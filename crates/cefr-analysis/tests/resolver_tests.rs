use std::collections::HashMap;
use std::sync::Arc;

use cefr_analysis::{distribute, distribute_tokens, WordLevelResolver};
use cefr_core::traits::Lemmatizer;
use cefr_core::types::{Classification, Level, PartOfSpeech};
use cefr_core::{Lexicon, Vocabulary};
use cefr_text::MorphyLemmatizer;

/// Lemmatizer driven by an explicit (word, category) -> lemma table.
#[derive(Default)]
struct TableLemmatizer {
    forms: HashMap<(String, Option<PartOfSpeech>), String>,
}

impl TableLemmatizer {
    fn with(mut self, word: &str, pos: Option<PartOfSpeech>, lemma: &str) -> Self {
        self.forms.insert((word.to_string(), pos), lemma.to_string());
        self
    }
}

impl Lemmatizer for TableLemmatizer {
    fn lemmatize(&self, word: &str, pos: Option<PartOfSpeech>) -> String {
        self.forms.get(&(word.to_string(), pos)).cloned().unwrap_or_else(|| word.to_string())
    }
}

fn vocabulary(entries: &[(&str, Level)]) -> Arc<Vocabulary> {
    Arc::new(Vocabulary::from_entries(entries.iter().copied()))
}

fn english_lexicon() -> Arc<Lexicon> {
    use PartOfSpeech::{Adjective, Noun, Verb};
    Arc::new(Lexicon::from_entries([
        ("run", Verb),
        ("run", Noun),
        ("running", Noun),
        ("go", Verb),
        ("house", Noun),
        ("city", Noun),
        ("glass", Noun),
        ("glasses", Noun),
        ("news", Noun),
        ("new", Adjective),
        ("vast", Adjective),
        ("vivid", Adjective),
        ("leaf", Noun),
        ("leave", Verb),
        ("be", Verb),
    ]))
}

fn morphy_resolver(entries: &[(&str, Level)]) -> WordLevelResolver<MorphyLemmatizer> {
    let vocab = vocabulary(entries);
    let lemmatizer = MorphyLemmatizer::new(english_lexicon()).with_keep(vocab.headwords());
    WordLevelResolver::new(vocab, lemmatizer)
}

const A1: Classification = Classification::Level(Level::A1);
const A2: Classification = Classification::Level(Level::A2);
const B1: Classification = Classification::Level(Level::B1);
const B2: Classification = Classification::Level(Level::B2);

#[test]
fn every_headword_resolves_to_its_recorded_level() {
    let entries = [
        ("run", Level::A1),
        ("glass", Level::A1),
        ("glasses", Level::A2),
        ("beautiful", Level::B2),
        ("better", Level::A2),
        ("ubiquitous", Level::C2),
    ];
    let resolver = morphy_resolver(&entries);
    for (headword, level) in entries {
        assert_eq!(resolver.resolve_level(&headword.to_lowercase()), Classification::Level(level), "{headword}");
    }
}

#[test]
fn irreducible_tokens_are_uncategorized() {
    let resolver = morphy_resolver(&[("run", Level::A1)]);
    for token in ["xyzzy", "runway", "qwerty", ""] {
        assert_eq!(resolver.resolve_level(token), Classification::Uncategorized, "{token:?}");
    }
}

#[test]
fn run_beautiful_xyz_distribution() {
    let resolver = morphy_resolver(&[("run", Level::A1), ("beautiful", Level::B2)]);
    let distribution = distribute_tokens(&resolver, &["running", "Beautiful", "xyzzy"]);

    assert_eq!(distribution.count(A1), 1);
    assert_eq!(distribution.count(B2), 1);
    assert_eq!(distribution.count(Classification::Uncategorized), 1);
    assert_eq!(distribution.total(), 3);
}

#[test]
fn empty_token_sequence_gives_empty_distribution() {
    let resolver = morphy_resolver(&[("run", Level::A1)]);
    let distribution = distribute_tokens::<_, &str>(&resolver, &[]);
    assert!(distribution.is_empty());
    assert_eq!(distribution.total(), 0);
    assert_eq!(distribute(&[]).total(), 0);
}

#[test]
fn counts_sum_to_token_count_including_repeats() {
    let resolver = morphy_resolver(&[("run", Level::A1), ("house", Level::A1), ("vast", Level::B2)]);
    let tokens = ["run", "runs", "houses", "vast", "vaster", "nothing", "nothing", "run"];
    let results: Vec<_> = tokens.iter().map(|t| resolver.analyze_token(t)).collect();
    let distribution = distribute(&results);

    assert_eq!(distribution.total(), tokens.len());
    assert_eq!(distribution.count(A1), 4);
    assert_eq!(distribution.count(B2), 2);
    assert_eq!(distribution.count(Classification::Uncategorized), 2);
}

#[test]
fn resolution_is_idempotent() {
    let resolver = morphy_resolver(&[("run", Level::A1)]);
    let first = resolver.analyze_token("running");
    let second = resolver.analyze_token("running");
    assert_eq!(first, second);
}

#[test]
fn suffix_stripping_does_not_invent_headwords() {
    let resolver = morphy_resolver(&[("new", Level::A1), ("i", Level::A1), ("it", Level::A1), ("be", Level::A1)]);

    let news = resolver.analyze_token("news");
    assert_eq!(news.lemma, "news");
    assert_eq!(news.classification, Classification::Uncategorized);

    assert_eq!(resolver.resolve_level("its"), Classification::Uncategorized);

    let is = resolver.analyze_token("is");
    assert_eq!(is.lemma, "be");
    assert_eq!(is.classification, A1);
}

#[test]
fn verb_lemma_outside_the_table_ends_the_fallback() {
    let resolver = morphy_resolver(&[("leaf", Level::A2)]);

    let verb = resolver.probe("leaving", Some(PartOfSpeech::Verb));
    assert_eq!(verb.lemma, "leave");
    assert!(!verb.found());

    let analysis = resolver.analyze_token("leaving");
    assert_eq!(analysis.classification, Classification::Uncategorized);
    assert_eq!(analysis.lemma, "leaving");

    assert_eq!(resolver.resolve_level("leaves"), A2, "noun exception reaches the headword");
}

#[test]
fn default_lemma_hit_skips_fallback() {
    let lemmatizer = TableLemmatizer::default()
        .with("dogs", None, "dog")
        .with("dogs", Some(PartOfSpeech::Verb), "dogged");
    let resolver = WordLevelResolver::new(vocabulary(&[("dog", Level::A1), ("dogged", Level::C1)]), lemmatizer);

    let analysis = resolver.analyze_token("dogs");
    assert_eq!(analysis.lemma, "dog");
    assert_eq!(analysis.classification, A1);
}

#[test]
fn verb_is_probed_before_other_categories() {
    let lemmatizer = TableLemmatizer::default()
        .with("flying", Some(PartOfSpeech::Verb), "fly")
        .with("flying", Some(PartOfSpeech::Adjective), "flyer");
    let resolver = WordLevelResolver::new(vocabulary(&[("fly", Level::A2), ("flyer", Level::B2)]), lemmatizer);

    let analysis = resolver.analyze_token("flying");
    assert_eq!(analysis.classification, A2);
    assert_eq!(analysis.lemma, "fly");
}

#[test]
fn categories_that_keep_the_word_are_skipped() {
    let lemmatizer = TableLemmatizer::default().with("kindest", Some(PartOfSpeech::Adjective), "kind");
    let resolver = WordLevelResolver::new(vocabulary(&[("kind", Level::B1)]), lemmatizer);

    assert_eq!(resolver.resolve_level("kindest"), B1);
}

#[test]
fn only_the_first_changed_category_is_retried() {
    let lemmatizer = TableLemmatizer::default()
        .with("leaves", Some(PartOfSpeech::Verb), "leafe")
        .with("leaves", Some(PartOfSpeech::Noun), "leaf");
    let resolver = WordLevelResolver::new(vocabulary(&[("leaf", Level::A2)]), lemmatizer);

    let analysis = resolver.analyze_token("leaves");
    assert_eq!(analysis.classification, Classification::Uncategorized);
    assert_eq!(analysis.lemma, "leaves", "uncategorized keeps the default lemma");
}

#[test]
fn fallback_result_keeps_original_token() {
    let resolver = morphy_resolver(&[("run", Level::A1), ("go", Level::A1)]);

    let running = resolver.analyze_token("Running");
    assert_eq!(running.surface, "Running");
    assert_eq!(running.lemma, "run");
    assert_eq!(running.classification, A1);

    let went = resolver.analyze_token("went");
    assert_eq!(went.surface, "went");
    assert_eq!(went.lemma, "go");
}

#[test]
fn probe_reports_lemma_and_hit() {
    let resolver = morphy_resolver(&[("run", Level::A1)]);

    let verb = resolver.probe("running", Some(PartOfSpeech::Verb));
    assert_eq!(verb.lemma, "run");
    assert!(verb.found());

    let noun = resolver.probe("running", None);
    assert_eq!(noun.lemma, "running");
    assert!(!noun.found());
}

#[test]
fn is_known_checks_headwords_only() {
    let resolver = morphy_resolver(&[("run", Level::A1)]);
    assert!(resolver.is_known("Run"));
    assert!(!resolver.is_known("running"));
}

#[test]
fn resolver_is_shared_across_threads() {
    let resolver = Arc::new(morphy_resolver(&[("run", Level::A1), ("city", Level::A1), ("vivid", Level::C1)]));
    let tokens = ["running", "cities", "vivid", "unknownish"];

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                scope.spawn(move || tokens.iter().map(|t| resolver.resolve_level(t)).collect::<Vec<_>>())
            })
            .collect();
        for handle in handles {
            let levels = handle.join().unwrap();
            assert_eq!(levels, vec![A1, A1, Classification::Level(Level::C1), Classification::Uncategorized]);
        }
    });
}
