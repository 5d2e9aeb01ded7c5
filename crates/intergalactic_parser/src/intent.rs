//! Classified statement intents.
//!
//! An [`Intent`] is built fresh for every input line and consumed by the
//! session driver straight away.

use intergalactic_foundation::Error;

/// What kind of statement a line is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementKind {
    /// Teaches a symbol or a currency rate
    Assignment,
    /// Asks for the value of a numeral
    QuantityQuery,
    /// Asks for the credits value of an amount of currency
    CreditsQuery,
    /// Compares two numerals
    UnitComparison,
    /// Compares two currency amounts by credits
    CreditsComparison,
    /// Not understood
    Invalid,
}

/// What a statement talks about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Galactic symbols and their numeral values
    Numeral,
    /// Currencies and their credits
    Currency,
}

/// A numeral followed by a currency name, e.g. `glob prok Silver`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand {
    /// Galactic symbols, in input order
    pub symbols: Vec<String>,
    /// Currency name
    pub currency: String,
}

impl Operand {
    /// Creates an operand from its parts.
    #[must_use]
    pub fn new(symbols: Vec<String>, currency: impl Into<String>) -> Self {
        Self {
            symbols,
            currency: currency.into(),
        }
    }

    /// Splits a word list so the last word becomes the currency.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn from_tokens(tokens: &[&str]) -> Option<Self> {
        let (currency, symbols) = tokens.split_last()?;
        Some(Self::new(owned(symbols), *currency))
    }
}

/// The structured meaning of one input line.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// `glob is I`
    AssignSymbol {
        /// The galactic symbol being taught
        symbol: String,
        /// The Roman letter it stands for
        roman: String,
    },
    /// `glob glob Silver is 34 credits`
    AssignRate {
        /// The amount of currency the credits buy
        operand: Operand,
        /// The credits literal
        credits: i64,
    },
    /// `how much is pish tegj glob glob ?`
    QueryQuantity {
        /// Galactic symbols to decode
        symbols: Vec<String>,
    },
    /// `how many credits is glob prok Silver ?`
    QueryCredits {
        /// The amount of currency to value
        operand: Operand,
    },
    /// `is glob smaller than prok ?`
    CompareQuantities {
        /// Left-hand symbols
        first: Vec<String>,
        /// Right-hand symbols
        second: Vec<String>,
    },
    /// `does glob Silver has less credits than glob Gold ?`
    CompareCredits {
        /// Left-hand amount
        first: Operand,
        /// Right-hand amount
        second: Operand,
    },
    /// The line could not be classified.
    Invalid(Error),
}

impl Intent {
    /// Returns the statement kind.
    #[must_use]
    pub fn statement_kind(&self) -> StatementKind {
        match self {
            Self::AssignSymbol { .. } | Self::AssignRate { .. } => StatementKind::Assignment,
            Self::QueryQuantity { .. } => StatementKind::QuantityQuery,
            Self::QueryCredits { .. } => StatementKind::CreditsQuery,
            Self::CompareQuantities { .. } => StatementKind::UnitComparison,
            Self::CompareCredits { .. } => StatementKind::CreditsComparison,
            Self::Invalid(_) => StatementKind::Invalid,
        }
    }

    /// Returns the item kind, or `None` for an invalid line.
    #[must_use]
    pub fn item_kind(&self) -> Option<ItemKind> {
        match self {
            Self::AssignSymbol { .. }
            | Self::QueryQuantity { .. }
            | Self::CompareQuantities { .. } => Some(ItemKind::Numeral),
            Self::AssignRate { .. } | Self::QueryCredits { .. } | Self::CompareCredits { .. } => {
                Some(ItemKind::Currency)
            }
            Self::Invalid(_) => None,
        }
    }

    /// Returns the error cause of an invalid line.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Error> for Intent {
    fn from(err: Error) -> Self {
        Self::Invalid(err)
    }
}

/// Copies a word list into owned strings.
pub(crate) fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_string()).collect()
}
