//! Check and matcher configuration.

use serde::{Deserialize, Serialize};

/// Fraction of abbreviation parts that must match a significant word.
pub const DEFAULT_MATCH_RATIO: f64 = 0.5;

/// Minimum number of matched parts, whatever the ratio yields.
pub const DEFAULT_MIN_MATCHES: usize = 1;

/// Words dropped from full names before matching (English, German, French,
/// Spanish, Italian, Portuguese, Dutch).
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "at", "by", "for", "from", "in", "of", "on", "or", "the", "to", "with",
    "und", "der", "die", "das", "des", "dem", "den", "fur", "für", "zur", "zum", "im", "et", "de",
    "du", "la", "le", "les", "l", "d", "en", "y", "el", "los", "las", "del", "e", "di", "della",
    "delle", "dei", "il", "da", "do", "dos", "van", "voor", "het", "een",
];

/// Irregular standard abbreviations: full word and the forms it may take.
pub const DEFAULT_SPECIAL_CASES: &[(&str, &[&str])] = &[
    ("proceedings", &["p", "proc"]),
    ("spie", &["spie"]),
    ("ieee", &["ieee"]),
    ("acm", &["acm"]),
];

/// Tuning for the abbreviation plausibility heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub match_ratio: f64,
    pub min_matches: usize,
    pub stop_words: Vec<String>,
    pub special_cases: Vec<(String, Vec<String>)>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            match_ratio: DEFAULT_MATCH_RATIO,
            min_matches: DEFAULT_MIN_MATCHES,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            special_cases: DEFAULT_SPECIAL_CASES
                .iter()
                .map(|(word, forms)| {
                    (
                        (*word).to_string(),
                        forms.iter().map(|f| (*f).to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl MatcherConfig {
    #[must_use]
    pub fn with_match_ratio(mut self, ratio: f64) -> Self {
        self.match_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_min_matches(mut self, min: usize) -> Self {
        self.min_matches = min;
        self
    }
}

/// Settings for a quality-check run over a directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Field delimiter of the input files.
    pub delimiter: u8,
    /// Extension of the files to check, without the dot.
    pub extension: String,
    pub matcher: MatcherConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            extension: "csv".to_string(),
            matcher: MatcherConfig::default(),
        }
    }
}
