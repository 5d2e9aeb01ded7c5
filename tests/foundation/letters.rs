//! Integration tests for RomanLetter

use intergalactic_foundation::RomanLetter;

#[test]
fn every_letter_roundtrips_through_char() {
    for letter in RomanLetter::ALL {
        assert_eq!(RomanLetter::from_char(letter.as_char()), Some(letter));
        assert_eq!(
            RomanLetter::from_char(letter.as_char().to_ascii_lowercase()),
            Some(letter)
        );
    }
}

#[test]
fn only_tens_may_be_subtracted() {
    for letter in [RomanLetter::V, RomanLetter::L, RomanLetter::D, RomanLetter::M] {
        assert!(RomanLetter::ALL.iter().all(|&larger| !letter.can_precede(larger)));
    }
}

#[test]
fn subtraction_reaches_at_most_two_steps_up() {
    assert!(RomanLetter::I.can_precede(RomanLetter::X));
    assert!(!RomanLetter::I.can_precede(RomanLetter::L));
    assert!(!RomanLetter::X.can_precede(RomanLetter::D));
    assert!(!RomanLetter::C.can_precede(RomanLetter::C));
}
