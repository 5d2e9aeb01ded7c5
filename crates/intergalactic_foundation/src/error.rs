//! Error types for the intergalactic converter.
//!
//! Uses `thiserror` for ergonomic error definition. The `Display` output of an
//! [`Error`] is exactly the response line printed for a failed statement, so
//! the messages here are user-facing.

use std::fmt;

use thiserror::Error;

/// The main error type for converter operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about which input line caused the error.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a line that matches no known statement.
    #[must_use]
    pub fn invalid_parse() -> Self {
        Self::new(ErrorKind::InvalidParse)
    }

    /// Creates an error for a malformed numeral or comparison operand.
    #[must_use]
    pub fn invalid_format() -> Self {
        Self::new(ErrorKind::InvalidFormat)
    }

    /// Creates an error for a credits literal that is not an integer.
    #[must_use]
    pub fn invalid_credit() -> Self {
        Self::new(ErrorKind::InvalidCredit)
    }

    /// Creates an unknown galactic symbol error.
    #[must_use]
    pub fn unknown_symbol(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownSymbol(name.into()))
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCurrency(name.into()))
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::new(ErrorKind::DivisionByZero)
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns true if this error should abort the whole run rather than
    /// a single statement.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_) | ErrorKind::Internal(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The line matches no recognized statement.
    #[error("i have no idea what are you talking about")]
    InvalidParse,

    /// A numeral failed validation, or a comparison side was empty.
    #[error("requested number is in invalid format")]
    InvalidFormat,

    /// The credits literal of an assignment is not an integer.
    #[error("credits is not a number")]
    InvalidCredit,

    /// A galactic symbol has not been taught.
    #[error("{0} unit is not defined in the intergalactic database")]
    UnknownSymbol(String),

    /// A currency has no known rate.
    #[error("{0} currency is not defined in the intergalactic database")]
    UnknownCurrency(String),

    /// A rate was derived from a quantity of zero.
    #[error("cannot derive a rate from a zero quantity")]
    DivisionByZero,

    /// The input stream could not be read.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (line editor failures and the like).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Input line number (1-indexed).
    pub line: Option<usize>,
    /// The input text that produced the error.
    pub input: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the offending input text.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, &self.input) {
            (Some(line), Some(input)) => write!(f, "line {line}: {input:?}"),
            (Some(line), None) => write!(f, "line {line}"),
            (None, Some(input)) => write!(f, "{input:?}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, Error>;
