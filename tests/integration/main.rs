//! End-to-end tests
//!
//! Whole conversations driven through [`Session::run`], as the binary does
//! in batch mode.
//!
//! [`Session::run`]: intergalactic_runtime::Session::run

mod scenarios;

use std::io::Cursor;

use intergalactic_runtime::{Session, SessionConfig};

/// Runs `input` through a fresh session and returns the responses.
pub fn run(input: &str) -> Vec<String> {
    run_with_config(input, SessionConfig::default())
}

/// Runs `input` through a fresh session with `config`.
pub fn run_with_config(input: &str, config: SessionConfig) -> Vec<String> {
    Session::new()
        .with_config(config)
        .run(Cursor::new(input))
        .expect("in-memory input never fails to read")
}
