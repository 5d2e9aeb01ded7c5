//! Roman numeral decoding over galactic symbols.
//!
//! Decoding scans right to left, keeping a running total, the previous
//! letter, and a repeat counter:
//!
//! - a letter equal to the previous one bumps the counter; more than three in
//!   a row, or any immediate repeat of V, L or D, is invalid
//! - a letter at least as large as the previous one is added
//! - a smaller letter is subtracted, but only for IV, IX, XL, XC, CD and CM

use intergalactic_foundation::{Error, Quantity, Result, RomanLetter};
use intergalactic_storage::Vocabulary;
use tracing::trace;

/// Longest run of one letter allowed.
pub const MAX_REPEAT: usize = 3;

/// Decodes a Roman numeral string.
///
/// The empty string decodes to 0.
///
/// # Errors
///
/// Returns an invalid-format error for letters outside the classical seven,
/// illegal repeats, and illegal subtractive pairs.
pub fn decode(roman: &str) -> Result<Quantity> {
    let mut total: Quantity = 0;
    let mut repeat = 0;
    let mut previous: Option<RomanLetter> = None;

    for ch in roman.chars().rev() {
        let current = RomanLetter::from_char(ch).ok_or_else(Error::invalid_format)?;

        if previous == Some(current) {
            repeat += 1;
            if repeat > MAX_REPEAT || !current.is_repeatable() {
                return Err(Error::invalid_format());
            }
        } else {
            repeat = 1;
        }

        match previous {
            Some(larger) if current.value() < larger.value() => {
                if !current.can_precede(larger) {
                    return Err(Error::invalid_format());
                }
                total = total
                    .checked_sub(current.value())
                    .ok_or_else(Error::invalid_format)?;
            }
            _ => total += current.value(),
        }

        previous = Some(current);
    }

    Ok(total)
}

/// Encodes a value as a minimal Roman numeral.
///
/// Returns `None` outside `1..=3999`.
#[must_use]
pub fn encode(mut value: Quantity) -> Option<String> {
    const TABLE: [(Quantity, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    if !(1..=3999).contains(&value) {
        return None;
    }

    let mut out = String::new();
    for (step, letters) in TABLE {
        while value >= step {
            out.push_str(letters);
            value -= step;
        }
    }
    Some(out)
}

/// Decodes sequences of galactic symbols through a vocabulary.
#[derive(Debug)]
pub struct NumeralEvaluator<'v, V: Vocabulary + ?Sized> {
    vocabulary: &'v V,
}

impl<'v, V: Vocabulary + ?Sized> NumeralEvaluator<'v, V> {
    /// Creates an evaluator reading from `vocabulary`.
    #[must_use]
    pub fn new(vocabulary: &'v V) -> Self {
        Self { vocabulary }
    }

    /// Resolves each symbol to its Roman letter and concatenates them in
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns the vocabulary's unknown-symbol error for the first symbol
    /// that was never taught.
    pub fn resolve<S: AsRef<str>>(&self, symbols: &[S]) -> Result<String> {
        symbols
            .iter()
            .map(|symbol| self.vocabulary.symbol(symbol.as_ref()))
            .collect()
    }

    /// Resolves and decodes a symbol sequence.
    ///
    /// # Errors
    ///
    /// Returns an unknown-symbol error or an invalid-format error.
    pub fn evaluate<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Quantity> {
        let roman = self.resolve(symbols)?;
        let value = decode(&roman)?;
        trace!(%roman, value, "numeral decoded");
        Ok(value)
    }
}
