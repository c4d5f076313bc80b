//! Abbreviation plausibility heuristic.
//!
//! Decides whether an abbreviation could have been derived from a full
//! journal name. The goal is to catch misaligned rows and swapped columns,
//! not to enforce one abbreviation standard, so the match is deliberately
//! loose: every abbreviation part is greedily paired with an unused
//! significant word of the full name, and the abbreviation is accepted when
//! enough parts pair up.

use std::collections::{HashMap, HashSet};

use crate::config::MatcherConfig;

/// Outcome of matching one abbreviation against one full name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchDecision {
    pub valid: bool,
    /// Abbreviation parts paired with the full-name word they matched.
    pub matched: Vec<(String, String)>,
    /// Abbreviation parts left without a word.
    pub unmatched: Vec<String>,
}

impl MatchDecision {
    fn accepted() -> Self {
        Self {
            valid: true,
            ..Self::default()
        }
    }
}

/// Plausibility matcher built from a [`MatcherConfig`].
#[derive(Debug, Clone)]
pub struct AbbreviationMatcher {
    match_ratio: f64,
    min_matches: usize,
    stop_words: HashSet<String>,
    special_cases: HashMap<String, HashSet<String>>,
}

impl Default for AbbreviationMatcher {
    fn default() -> Self {
        Self::new(&MatcherConfig::default())
    }
}

impl AbbreviationMatcher {
    pub fn new(config: &MatcherConfig) -> Self {
        Self {
            match_ratio: config.match_ratio,
            min_matches: config.min_matches,
            stop_words: config.stop_words.iter().map(|w| w.to_lowercase()).collect(),
            special_cases: config
                .special_cases
                .iter()
                .map(|(word, forms)| {
                    (
                        word.to_lowercase(),
                        forms.iter().map(|f| f.to_lowercase()).collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn is_valid(&self, full_name: &str, abbreviation: &str) -> bool {
        self.evaluate(full_name, abbreviation).valid
    }

    pub fn evaluate(&self, full_name: &str, abbreviation: &str) -> MatchDecision {
        let full = normalize(full_name);
        let abbrev = normalize(abbreviation);
        if full == abbrev {
            return MatchDecision::accepted();
        }

        let words = self.significant_words(&full);
        let parts = abbreviation_parts(&abbrev);
        if self.is_special_case(&words, &parts) {
            return MatchDecision::accepted();
        }

        let mut used = vec![false; words.len()];
        let mut decision = MatchDecision::default();
        for part in parts.iter() {
            let hit = words
                .iter()
                .enumerate()
                .find(|(idx, word)| !used[*idx] && part_matches(part, word));
            match hit {
                Some((idx, word)) => {
                    used[idx] = true;
                    decision.matched.push(((*part).to_string(), (*word).to_string()));
                }
                None => decision.unmatched.push((*part).to_string()),
            }
        }
        decision.valid = decision.matched.len() >= self.required_matches(parts.len());
        decision
    }

    /// Number of parts that must match for `part_count` abbreviation parts.
    pub fn required_matches(&self, part_count: usize) -> usize {
        let by_ratio = (part_count as f64 * self.match_ratio).ceil() as usize;
        by_ratio.max(self.min_matches)
    }

    /// Words of a normalized full name minus stop words. A name made only of
    /// stop words keeps all of them.
    fn significant_words<'a>(&self, normalized: &'a str) -> Vec<&'a str> {
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let significant: Vec<&str> = words
            .iter()
            .copied()
            .filter(|word| !self.stop_words.contains(word.trim_end_matches('.')))
            .collect();
        if significant.is_empty() {
            words
        } else {
            significant
        }
    }

    /// True when every abbreviation part is a listed irregular form of some
    /// word of the full name.
    fn is_special_case(&self, words: &[&str], parts: &[&str]) -> bool {
        if parts.is_empty() {
            return false;
        }
        parts.iter().all(|part| {
            let bare = part.trim_end_matches('.');
            words.iter().any(|word| {
                self.special_cases
                    .get(word.trim_end_matches('.'))
                    .is_some_and(|forms| forms.contains(bare))
            })
        })
    }
}

/// Lowercases, replaces everything but alphanumerics, periods and spaces
/// with a space, and collapses whitespace.
pub fn normalize(value: &str) -> String {
    let replaced: String = value
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '.' || ch == ' ' {
                ch
            } else {
                ' '
            }
        })
        .collect();
    replaced
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a normalized abbreviation into compound parts, keeping each period
/// on the segment before it: `nat.forsch` becomes `["nat.", "forsch"]`.
pub fn abbreviation_parts(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .flat_map(|token| token.split_inclusive('.'))
        .filter(|part| part.chars().any(char::is_alphanumeric))
        .collect()
}

fn part_matches(part: &str, word: &str) -> bool {
    if let Some((before, after)) = part.split_once('.')
        && !before.is_empty()
        && let Some(rest) = word.strip_prefix(before)
        && (after.is_empty() || rest.contains(after))
    {
        return true;
    }
    if word.starts_with(part) {
        return true;
    }
    part.chars().count() >= 2 && part.chars().next() == word.chars().next()
}
