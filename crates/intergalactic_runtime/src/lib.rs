//! Session driver, REPL, and CLI for the intergalactic converter.
//!
//! This crate provides:
//! - [`Session`] - Reads statements, dispatches them, and collects responses
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`SessionConfig`] - Session options

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod repl;
pub mod session;

pub use config::SessionConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Flow, Repl};
pub use session::Session;
