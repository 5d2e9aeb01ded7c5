//! Relative comparison of numerals and currency amounts.

use std::cmp::Ordering;
use std::fmt;

use intergalactic_foundation::{Credits, Quantity, Result};
use intergalactic_storage::Vocabulary;

use crate::currency::CurrencyEvaluator;
use crate::numeral::NumeralEvaluator;

/// Outcome of comparing two numerals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumeralOrdering {
    /// The first numeral is larger
    Larger,
    /// The first numeral is smaller
    Smaller,
    /// Both numerals have the same value
    Equal,
}

impl From<Ordering> for NumeralOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::Larger,
            Ordering::Less => Self::Smaller,
            Ordering::Equal => Self::Equal,
        }
    }
}

impl fmt::Display for NumeralOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Larger => "larger than",
            Self::Smaller => "smaller than",
            Self::Equal => "equal to",
        })
    }
}

/// Outcome of comparing two currency amounts by credits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreditsOrdering {
    /// The first amount is worth more
    More,
    /// The first amount is worth less
    Less,
    /// Both amounts are worth the same
    Equal,
}

impl CreditsOrdering {
    fn between(first: Credits, second: Credits) -> Self {
        if first > second {
            Self::More
        } else if first < second {
            Self::Less
        } else {
            Self::Equal
        }
    }
}

impl fmt::Display for CreditsOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::More => "has more credits than",
            Self::Less => "has less credits than",
            Self::Equal => "has equal credits with",
        })
    }
}

/// Compares two symbol sequences by decoded value.
///
/// # Errors
///
/// Returns the first decoding error, left side first.
pub fn compare_numerals<V, S>(
    vocabulary: &V,
    first: &[S],
    second: &[S],
) -> Result<NumeralOrdering>
where
    V: Vocabulary + ?Sized,
    S: AsRef<str>,
{
    let (first, second) = evaluate_pair(vocabulary, first, second)?;
    Ok(first.cmp(&second).into())
}

/// Compares two currency amounts by their credits value.
///
/// Both numerals are decoded before either currency is looked up.
///
/// # Errors
///
/// Returns the first decoding or rate lookup error.
pub fn compare_credits<V, S>(
    vocabulary: &V,
    (first, first_currency): (&[S], &str),
    (second, second_currency): (&[S], &str),
) -> Result<CreditsOrdering>
where
    V: Vocabulary + ?Sized,
    S: AsRef<str>,
{
    let (first, second) = evaluate_pair(vocabulary, first, second)?;
    let currency = CurrencyEvaluator::new(vocabulary);
    let first = currency.credits_for(first, first_currency)?;
    let second = currency.credits_for(second, second_currency)?;
    Ok(CreditsOrdering::between(first, second))
}

fn evaluate_pair<V, S>(vocabulary: &V, first: &[S], second: &[S]) -> Result<(Quantity, Quantity)>
where
    V: Vocabulary + ?Sized,
    S: AsRef<str>,
{
    let numerals = NumeralEvaluator::new(vocabulary);
    Ok((numerals.evaluate(first)?, numerals.evaluate(second)?))
}
