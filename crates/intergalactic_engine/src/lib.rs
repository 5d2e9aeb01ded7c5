//! Roman numeral decoding, currency valuation, and comparisons.
//!
//! This crate provides:
//! - [`decode`] / [`encode`] - Strict Roman numeral decoding and minimal encoding
//! - [`NumeralEvaluator`] - Galactic symbols to integer values
//! - [`CurrencyEvaluator`] - Integer values to credits, and [`rate_from`]
//! - [`compare_numerals`] / [`compare_credits`] - Relative comparisons
//!
//! Every evaluator reads through the [`Vocabulary`](intergalactic_storage::Vocabulary)
//! trait and never mutates it; teaching new symbols and rates is the session's job.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compare;
pub mod currency;
pub mod numeral;

pub use compare::{CreditsOrdering, NumeralOrdering, compare_credits, compare_numerals};
pub use currency::{CurrencyEvaluator, rate_from};
pub use numeral::{NumeralEvaluator, decode, encode};
