//! Numeral decoding tests.

use intergalactic_engine::{NumeralEvaluator, decode, encode};
use intergalactic_foundation::ErrorKind;
use intergalactic_storage::{Vocabulary, VocabularyStore};
use proptest::prelude::*;

fn rejected(roman: &str) -> bool {
    matches!(decode(roman), Err(e) if e.kind == ErrorKind::InvalidFormat)
}

// =============================================================================
// Repetition
// =============================================================================

#[test]
fn three_in_a_row_is_the_limit() {
    for letter in ["I", "X", "C", "M"] {
        assert!(decode(&letter.repeat(3)).is_ok(), "{letter} x3");
        assert!(rejected(&letter.repeat(4)), "{letter} x4");
    }
}

#[test]
fn repeat_counter_resets_between_runs() {
    // XXX, then IX, then XXX again: never more than three X in a row
    assert_eq!(decode("XXXIX").unwrap(), 39);
    assert_eq!(decode("MMMCMXCIX").unwrap(), 3999);
}

#[test]
fn v_l_d_never_repeat() {
    for roman in ["VV", "LL", "DD", "XVV", "LLX", "MDDC"] {
        assert!(rejected(roman), "{roman}");
    }
}

// =============================================================================
// Subtraction
// =============================================================================

#[test]
fn legal_subtractive_pairs() {
    assert_eq!(decode("IV").unwrap(), 4);
    assert_eq!(decode("IX").unwrap(), 9);
    assert_eq!(decode("XL").unwrap(), 40);
    assert_eq!(decode("XC").unwrap(), 90);
    assert_eq!(decode("CD").unwrap(), 400);
    assert_eq!(decode("CM").unwrap(), 900);
}

#[test]
fn every_other_smaller_before_larger_pair_fails() {
    let letters = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];
    let legal = ["IV", "IX", "XL", "XC", "CD", "CM"];
    for (i, small) in letters.iter().enumerate() {
        for large in &letters[i + 1..] {
            let pair = format!("{small}{large}");
            if !legal.contains(&pair.as_str()) {
                assert!(rejected(&pair), "{pair}");
            }
        }
    }
}

// =============================================================================
// Evaluation through the vocabulary
// =============================================================================

#[test]
fn galactic_symbols_decode_in_input_order() {
    let mut store = VocabularyStore::new();
    store.set_symbol("glob", "I");
    store.set_symbol("prok", "V");
    store.set_symbol("pish", "X");
    store.set_symbol("tegj", "L");

    let evaluator = NumeralEvaluator::new(&store);
    assert_eq!(evaluator.evaluate(&["glob", "prok"]).unwrap(), 4);
    assert_eq!(evaluator.evaluate(&["prok", "glob"]).unwrap(), 6);
    assert_eq!(evaluator.evaluate(&["pish", "tegj", "glob", "glob"]).unwrap(), 42);
}

#[test]
fn invalid_numeral_through_symbols() {
    let mut store = VocabularyStore::new();
    store.set_symbol("glob", "I");
    store.set_symbol("tegj", "L");
    store.set_symbol("rst", "M");

    let evaluator = NumeralEvaluator::new(&store);
    for symbols in [
        &["glob", "glob", "glob", "glob", "glob"][..],
        &["tegj", "rst"][..],
        &["glob", "tegj"][..],
    ] {
        let err = evaluator.evaluate(symbols).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFormat);
    }
}

proptest! {
    #[test]
    fn canonical_numerals_roundtrip(value in 1u64..=3999) {
        let roman = encode(value).unwrap();
        prop_assert_eq!(decode(&roman).unwrap(), value);
        prop_assert_eq!(decode(&roman.to_lowercase()).unwrap(), value);
    }
}
