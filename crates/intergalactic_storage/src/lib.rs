//! Vocabulary store for the intergalactic converter.
//!
//! This crate provides:
//! - [`Vocabulary`] - The store contract the evaluators are written against
//! - [`VocabularyStore`] - The in-memory store used by a session
//!
//! Symbol and currency names are case-insensitive. The case policy is applied
//! inside the store on both write and read, so callers never fold case.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod vocabulary;

pub use vocabulary::{Vocabulary, VocabularyStore};
