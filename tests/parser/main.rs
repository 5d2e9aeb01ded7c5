//! Integration tests for the intergalactic_parser crate.
//!
//! Tests for line classification:
//! - Normalization and tokenization
//! - Rule precedence
//! - Every statement form and its error cases

mod tokenizer_tests;
