//! Credits valuation of currency amounts.

use intergalactic_foundation::{Credits, Error, Quantity, Result};
use intergalactic_storage::Vocabulary;

/// Values decoded quantities of a currency in credits.
#[derive(Debug)]
pub struct CurrencyEvaluator<'v, V: Vocabulary + ?Sized> {
    vocabulary: &'v V,
}

impl<'v, V: Vocabulary + ?Sized> CurrencyEvaluator<'v, V> {
    /// Creates an evaluator reading rates from `vocabulary`.
    #[must_use]
    pub fn new(vocabulary: &'v V) -> Self {
        Self { vocabulary }
    }

    /// Credits worth of `quantity` units of `currency`.
    ///
    /// # Errors
    ///
    /// Returns an unknown-currency error if no rate is known.
    #[allow(clippy::cast_precision_loss)]
    pub fn credits_for(&self, quantity: Quantity, currency: &str) -> Result<Credits> {
        let rate = self.vocabulary.rate(currency)?;
        Ok(quantity as Credits * rate)
    }
}

/// Derives a credits-per-unit rate from a taught total.
///
/// # Errors
///
/// Returns a division-by-zero error when `quantity` is 0.
#[allow(clippy::cast_precision_loss)]
pub fn rate_from(quantity: Quantity, credits: i64) -> Result<Credits> {
    if quantity == 0 {
        return Err(Error::division_by_zero());
    }
    Ok(credits as Credits / quantity as Credits)
}
