//! Runtime storage for taught galactic symbols and currency rates.

use std::collections::HashMap;

use intergalactic_foundation::{Credits, Error, Result};
use tracing::debug;

/// The vocabulary store contract.
///
/// Names are addressed case-insensitively. A miss is reported as an
/// [`Error`] carrying the name exactly as the caller supplied it.
pub trait Vocabulary {
    /// Teaches a galactic symbol. The last assignment for a symbol wins.
    ///
    /// The Roman letter is not validated here; decoding rejects bad letters.
    fn set_symbol(&mut self, name: &str, roman: &str);

    /// Looks up the Roman letter for a galactic symbol.
    ///
    /// # Errors
    ///
    /// Returns an unknown-symbol error if the symbol was never taught.
    fn symbol(&self, name: &str) -> Result<String>;

    /// Sets the credits-per-unit rate of a currency.
    fn set_rate(&mut self, currency: &str, rate: Credits);

    /// Looks up the credits-per-unit rate of a currency.
    ///
    /// # Errors
    ///
    /// Returns an unknown-currency error if no rate was taught.
    fn rate(&self, currency: &str) -> Result<Credits>;
}

/// In-memory vocabulary store.
#[derive(Clone, Debug, Default)]
pub struct VocabularyStore {
    /// Galactic symbol -> Roman letter(s), uppercased
    symbols: HashMap<String, String>,
    /// Currency -> credits per unit
    rates: HashMap<String, Credits>,
}

/// Canonical key form for symbol and currency names.
fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl VocabularyStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of taught symbols.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of known currency rates.
    #[must_use]
    pub fn rate_count(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if nothing has been taught yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.rates.is_empty()
    }

    /// All taught symbols, sorted by name.
    #[must_use]
    pub fn symbols(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .symbols
            .iter()
            .map(|(name, roman)| (name.as_str(), roman.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// All known rates, sorted by currency name.
    #[must_use]
    pub fn rates(&self) -> Vec<(&str, Credits)> {
        let mut entries: Vec<_> = self
            .rates
            .iter()
            .map(|(name, rate)| (name.as_str(), *rate))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Vocabulary for VocabularyStore {
    fn set_symbol(&mut self, name: &str, roman: &str) {
        let key = fold(name);
        let roman = roman.to_uppercase();
        debug!(symbol = %key, %roman, "symbol taught");
        self.symbols.insert(key, roman);
    }

    fn symbol(&self, name: &str) -> Result<String> {
        self.symbols
            .get(&fold(name))
            .cloned()
            .ok_or_else(|| Error::unknown_symbol(name))
    }

    fn set_rate(&mut self, currency: &str, rate: Credits) {
        let key = fold(currency);
        debug!(currency = %key, rate, "rate taught");
        self.rates.insert(key, rate);
    }

    fn rate(&self, currency: &str) -> Result<Credits> {
        self.rates
            .get(&fold(currency))
            .copied()
            .ok_or_else(|| Error::unknown_currency(currency))
    }
}
