//! Intergalactic - Galactic numeral and credits converter
//!
//! This crate re-exports all layers of the converter for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: intergalactic_runtime     : Session driver, REPL, CLI
//! Layer 2: intergalactic_engine      : Numeral decoding, credits, comparisons
//!          intergalactic_parser      : Line classification
//! Layer 1: intergalactic_storage     : Vocabulary store
//! Layer 0: intergalactic_foundation  : Core types (RomanLetter, Error)
//! ```

pub use intergalactic_engine as engine;
pub use intergalactic_foundation as foundation;
pub use intergalactic_parser as parser;
pub use intergalactic_runtime as runtime;
pub use intergalactic_storage as storage;
