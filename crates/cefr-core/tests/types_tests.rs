use std::collections::BTreeMap;

use cefr_core::{Classification, Level, LevelDistribution, OverallLevel};

#[test]
fn levels_parse_case_insensitively_and_order() {
    assert_eq!("b2".parse::<Level>().unwrap(), Level::B2);
    assert_eq!(" C1 ".parse::<Level>().unwrap(), Level::C1);
    assert!("D1".parse::<Level>().is_err());
    assert!(Level::A1 < Level::C2);
    assert_eq!(Level::ALL.iter().map(|l| l.weight()).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn classification_serializes_as_plain_string() {
    let json = serde_json::to_string(&Classification::Level(Level::B1)).unwrap();
    assert_eq!(json, "\"B1\"");
    let json = serde_json::to_string(&Classification::Uncategorized).unwrap();
    assert_eq!(json, "\"uncategorized\"");

    let back: Classification = serde_json::from_str("\"uncategorized\"").unwrap();
    assert_eq!(back, Classification::Uncategorized);
}

#[test]
fn distribution_serializes_as_object_keyed_by_level() {
    let distribution: LevelDistribution = [
        Classification::Level(Level::A1),
        Classification::Uncategorized,
        Classification::Level(Level::A1),
    ]
    .into_iter()
    .collect();

    let value = serde_json::to_value(&distribution).unwrap();
    assert_eq!(value, serde_json::json!({"A1": 2, "uncategorized": 1}));

    let back: BTreeMap<String, usize> = serde_json::from_value(value).unwrap();
    assert_eq!(back.values().sum::<usize>(), distribution.total());
}

#[test]
fn empty_distribution_counts_zero() {
    let distribution = LevelDistribution::new();
    assert!(distribution.is_empty());
    assert_eq!(distribution.total(), 0);
    assert_eq!(distribution.count(Classification::Level(Level::B2)), 0);
}

#[test]
fn overall_level_unknown_serializes() {
    assert_eq!(serde_json::to_string(&OverallLevel::Unknown).unwrap(), "\"unknown\"");
    let parsed: OverallLevel = serde_json::from_str("\"C1\"").unwrap();
    assert_eq!(parsed, OverallLevel::Level(Level::C1));
}
