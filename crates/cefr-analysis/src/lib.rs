//! cefr-analysis
//!
//! Resolves tokens to CEFR levels against a loaded vocabulary and summarizes
//! a text as a level distribution and an overall level.
pub mod analyzer;
pub mod distribution;
pub mod overall;
pub mod resolver;

pub use analyzer::{build_analyzer, AnalysisReport, DefaultAnalyzer, FeedbackAnalyzer};
pub use distribution::{distribute, distribute_tokens};
pub use overall::determine_overall_level;
pub use resolver::{Probe, WordLevelResolver};
