//! Currency valuation tests.

use intergalactic_engine::{CurrencyEvaluator, NumeralEvaluator, rate_from};
use intergalactic_foundation::ErrorKind;
use intergalactic_storage::{Vocabulary, VocabularyStore};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn rate_from_a_taught_total() {
    let mut store = VocabularyStore::new();
    store.set_symbol("glob", "I");
    store.set_symbol("prok", "V");

    let quantity = NumeralEvaluator::new(&store).evaluate(&["glob", "prok"]).unwrap();
    let rate = rate_from(quantity, 57800).unwrap();
    assert!(close(rate, 14450.0));

    store.set_rate("Gold", rate);
    let credits = CurrencyEvaluator::new(&store).credits_for(2, "GOLD").unwrap();
    assert!(close(credits, 28900.0));
}

#[test]
fn fractional_rates_are_kept() {
    assert!(close(rate_from(3, 10).unwrap(), 10.0 / 3.0));
}

#[test]
fn negative_credits_give_negative_rate() {
    assert!(close(rate_from(2, -34).unwrap(), -17.0));
}

#[test]
fn zero_quantity_is_division_by_zero() {
    assert_eq!(rate_from(0, 1).unwrap_err().kind, ErrorKind::DivisionByZero);
}

#[test]
fn unknown_currency() {
    let store = VocabularyStore::new();
    let err = CurrencyEvaluator::new(&store).credits_for(1, "iron").unwrap_err();
    assert_eq!(
        err.to_string(),
        "iron currency is not defined in the intergalactic database"
    );
}
