use cefr_core::types::{Level, LevelDistribution, OverallLevel};

/// Upper bounds (inclusive) of the weighted mean for each level below C2.
const THRESHOLDS: [(f64, Level); 5] = [
    (1.5, Level::A1),
    (2.5, Level::A2),
    (3.5, Level::B1),
    (4.5, Level::B2),
    (5.5, Level::C1),
];

/// Occurrence-weighted mean level of the categorized tokens.
///
/// Uncategorized tokens carry no weight; with no categorized token at all the
/// result is [`OverallLevel::Unknown`].
pub fn determine_overall_level(distribution: &LevelDistribution) -> OverallLevel {
    let (weighted, count) = distribution
        .iter()
        .filter_map(|(classification, n)| classification.level().map(|level| (level, n)))
        .fold((0u64, 0u64), |(weighted, count), (level, n)| {
            (weighted + u64::from(level.weight()) * n as u64, count + n as u64)
        });
    if count == 0 {
        return OverallLevel::Unknown;
    }

    let mean = weighted as f64 / count as f64;
    let level = THRESHOLDS
        .iter()
        .find(|(bound, _)| mean <= *bound)
        .map_or(Level::C2, |(_, level)| *level);
    OverallLevel::Level(level)
}
