//! Line classifier for the intergalactic converter DSL.
//!
//! This crate turns one line of English-like input into an [`Intent`]:
//!
//! ```text
//! "how many credits is glob prok Silver ?"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → "how many credits is glob prok Silver"
//! └─────────────────┘     ["how", "many", "credits", "is", "glob", "prok", "Silver"]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   CLASSIFIER    │  → first matching rule: credits-query
//! └─────────────────┘
//!          │
//!          ▼
//!   Intent::QueryCredits { operand: [glob, prok] Silver }
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Line normalization and word splitting
//! - [`intent`] - The classified statement types
//! - [`classifier`] - The ordered rule table

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classifier;
pub mod intent;
pub mod tokenizer;

pub use classifier::{RULES, Rule, classify, classify_with_rule};
pub use intent::{Intent, ItemKind, Operand, StatementKind};
