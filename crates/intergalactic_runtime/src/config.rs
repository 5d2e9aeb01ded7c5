//! Configuration for a converter session.

/// Default number of decimals printed for credit amounts.
pub const DEFAULT_PRECISION: usize = 2;

/// Configuration for a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Stop reading at the first blank line (otherwise blank lines are skipped).
    pub stop_at_blank_line: bool,

    /// Decimals printed for credit amounts.
    pub precision: usize,

    /// Lowercase each line before classifying it.
    pub lowercase_input: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stop_at_blank_line: true,
            precision: DEFAULT_PRECISION,
            lowercase_input: true,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set blank-line termination.
    #[must_use]
    pub fn with_stop_at_blank_line(mut self, stop: bool) -> Self {
        self.stop_at_blank_line = stop;
        self
    }

    /// Builder method to set credit precision.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method to set input lowercasing.
    #[must_use]
    pub fn with_lowercase_input(mut self, lowercase: bool) -> Self {
        self.lowercase_input = lowercase;
        self
    }
}
