//! Vocabulary store tests.
//!
//! Tests for teaching and looking up symbols and rates.

use intergalactic_foundation::ErrorKind;
use intergalactic_storage::{Vocabulary, VocabularyStore};

#[test]
fn rate_lookup_is_case_insensitive() {
    let mut store = VocabularyStore::new();
    store.set_rate("Silver", 17.0);

    for name in ["silver", "SILVER", "Silver", "sIlVeR"] {
        assert!((store.rate(name).unwrap() - 17.0).abs() < f64::EPSILON);
    }
}

#[test]
fn rate_overwrite() {
    let mut store = VocabularyStore::new();
    store.set_rate("gold", 14450.0);
    store.set_rate("GOLD", 14000.0);

    assert_eq!(store.rate_count(), 1);
    assert!((store.rate("gold").unwrap() - 14000.0).abs() < f64::EPSILON);
}

#[test]
fn roman_letter_is_not_validated_on_write() {
    let mut store = VocabularyStore::new();
    store.set_symbol("blub", "q");
    assert_eq!(store.symbol("blub").unwrap(), "Q");
}

#[test]
fn unknown_symbol_error() {
    let store = VocabularyStore::new();
    let err = store.symbol("Pish").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownSymbol("Pish".to_string()));
    assert_eq!(
        err.to_string(),
        "Pish unit is not defined in the intergalactic database"
    );
}

#[test]
fn store_works_through_trait_object() {
    let mut store = VocabularyStore::new();
    let vocabulary: &mut dyn Vocabulary = &mut store;
    vocabulary.set_symbol("glob", "I");
    assert_eq!(vocabulary.symbol("GLOB").unwrap(), "I");
}
