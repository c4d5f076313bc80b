//! Abbreviation matcher behaviour.

use abbrv_validate::{AbbreviationMatcher, MatcherConfig};
use proptest::prelude::*;

#[test]
fn known_plausible_abbreviations() {
    let matcher = AbbreviationMatcher::default();
    assert!(matcher.is_valid("Physical Review Letters", "Phys. Rev. Lett."));
    assert!(matcher.is_valid("Nature", "Nature"));
    assert!(matcher.is_valid("Zeitschrift für Naturforschung", "Z. Naturforsch."));
    assert!(matcher.is_valid("Annales de l'Institut Fourier", "Ann. Inst. Fourier"));
    assert!(matcher.is_valid("Journal of the American Chemical Society", "J. Am. Chem. Soc."));
}

#[test]
fn period_split_parts_tolerate_a_missing_word() {
    let matcher = AbbreviationMatcher::default();
    assert!(matcher.is_valid("Zeitschrift für Naturforschung", "Z. Nat.forsch"));
}

#[test]
fn unrelated_abbreviation_is_rejected() {
    let matcher = AbbreviationMatcher::default();
    assert!(!matcher.is_valid("Journal of Biological Chemistry", "XYZ"));
    assert!(!matcher.is_valid("Nature Physics", ""));
}

#[test]
fn swapped_rows_are_rejected() {
    let matcher = AbbreviationMatcher::default();
    assert!(!matcher.is_valid("Physical Review Letters", "Nat. Chem."));
}

#[test]
fn stricter_ratio_rejects_partial_matches() {
    let loose = AbbreviationMatcher::default();
    let strict = AbbreviationMatcher::new(&MatcherConfig::default().with_match_ratio(1.0));
    assert!(loose.is_valid("Journal of Biological Chemistry", "J. Biol. Zzz"));
    assert!(!strict.is_valid("Journal of Biological Chemistry", "J. Biol. Zzz"));
}

proptest! {
    #[test]
    fn identical_inputs_are_always_plausible(name in "\\PC{0,40}") {
        let matcher = AbbreviationMatcher::default();
        prop_assert!(matcher.is_valid(&name, &name));
    }

    #[test]
    fn arbitrary_inputs_never_panic(full in "\\PC{0,60}", abbrev in "\\PC{0,30}") {
        let matcher = AbbreviationMatcher::default();
        let decision = matcher.evaluate(&full, &abbrev);
        if !decision.valid {
            prop_assert!(decision.matched.len() < matcher.required_matches(
                decision.matched.len() + decision.unmatched.len()
            ));
        }
    }
}
