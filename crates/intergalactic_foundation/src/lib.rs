//! Core types and errors for the intergalactic converter.
//!
//! This crate provides:
//! - [`RomanLetter`] - The seven classical Roman numeral letters
//! - [`Quantity`] and [`Credits`] - Decoded numeral values and currency amounts
//! - [`Error`] - Statement-level error types with user-facing messages

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod numeral;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use numeral::RomanLetter;

/// The integer value of a decoded numeral.
pub type Quantity = u64;

/// A credits amount: either a rate (credits per unit) or a total.
pub type Credits = f64;
