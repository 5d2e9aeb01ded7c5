//! Input normalization and tokenization.
//!
//! Converts a raw input line into the trimmed text and word list the
//! classifier rules inspect.

/// A normalized input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line with the trailing question mark and outer whitespace removed
    pub text: &'a str,
    /// Whitespace-separated words of `text`
    pub tokens: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// Normalizes and tokenizes a raw input line.
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        let text = normalize(raw);
        Self {
            text,
            tokens: tokenize(text),
        }
    }

    /// The last word, if any.
    #[must_use]
    pub fn last_token(&self) -> Option<&'a str> {
        self.tokens.last().copied()
    }
}

/// Strips a trailing `?` (optionally preceded by a space) and surrounding
/// whitespace.
#[must_use]
pub fn normalize(raw: &str) -> &str {
    let line = raw.trim_end_matches(['\r', '\n']);
    let line = line.strip_suffix('?').unwrap_or(line);
    let line = line.strip_suffix(" ?").unwrap_or(line);
    line.trim()
}

/// Splits text into whitespace-separated words.
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
