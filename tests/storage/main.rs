//! Integration tests for Layer 1: Storage
//!
//! Tests for the vocabulary store contract.

mod vocabulary;
