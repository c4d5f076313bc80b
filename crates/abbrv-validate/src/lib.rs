//! Quality checks for journal abbreviation lists.
//!
//! [`QualityChecker`] loads each file of a directory, runs every check in
//! [`checks`] over its records and collects the findings in an
//! [`IssueAggregator`]. The abbreviation plausibility check is driven by
//! [`AbbreviationMatcher`], tuned through [`MatcherConfig`].

pub mod aggregator;
pub mod checks;
pub mod config;
pub mod engine;
pub mod matcher;

pub use aggregator::IssueAggregator;
pub use config::{CheckConfig, MatcherConfig};
pub use engine::QualityChecker;
pub use matcher::{AbbreviationMatcher, MatchDecision};
