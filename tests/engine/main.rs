//! Integration tests for Layer 2: Engine
//!
//! Tests for numeral decoding rules, currency valuation, and comparisons.

mod currency;
mod numerals;
