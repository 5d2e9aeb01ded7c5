//! Session state and statement dispatch.
//!
//! A [`Session`] owns the vocabulary for one run. Each input line is
//! classified, dispatched to the evaluators, and answered with at most one
//! response line. Statement errors become response lines; only a failure to
//! read input ends a run early.

use std::io::BufRead;

use intergalactic_engine::{
    CurrencyEvaluator, NumeralEvaluator, compare_credits, compare_numerals, rate_from,
};
use intergalactic_foundation::{ErrorContext, Quantity, Result};
use intergalactic_parser::{Intent, Operand, classify_with_rule};
use intergalactic_storage::{Vocabulary, VocabularyStore};
use tracing::{debug, trace};

use crate::config::SessionConfig;

/// State for one converter run.
#[derive(Debug)]
pub struct Session<V: Vocabulary = VocabularyStore> {
    /// Taught symbols and rates.
    vocabulary: V,

    /// Output and input handling options.
    config: SessionConfig,

    /// Number of lines handed to [`Session::respond`] so far.
    line_number: usize,
}

impl Session {
    /// Creates a new session with an empty in-memory vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_vocabulary(VocabularyStore::new())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vocabulary> Session<V> {
    /// Creates a new session over the given vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: V) -> Self {
        Self {
            vocabulary,
            config: SessionConfig::default(),
            line_number: 0,
        }
    }

    /// Sets the session configuration.
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &V {
        &self.vocabulary
    }

    /// Returns the vocabulary mutably.
    pub fn vocabulary_mut(&mut self) -> &mut V {
        &mut self.vocabulary
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Executes one statement.
    ///
    /// Returns `Ok(None)` for assignments and `Ok(Some(answer))` for queries.
    ///
    /// # Errors
    ///
    /// Returns the classification or evaluation error for the statement.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>> {
        let input = if self.config.lowercase_input {
            line.to_lowercase()
        } else {
            line.to_string()
        };

        let (rule, intent) = classify_with_rule(&input);
        trace!(rule = rule.unwrap_or("none"), ?intent, "line classified");

        match intent {
            Intent::AssignSymbol { symbol, roman } => {
                self.vocabulary.set_symbol(&symbol, &roman);
                Ok(None)
            }
            Intent::AssignRate { operand, credits } => {
                let quantity = self.quantity(&operand.symbols)?;
                let rate = rate_from(quantity, credits)?;
                self.vocabulary.set_rate(&operand.currency, rate);
                Ok(None)
            }
            Intent::QueryQuantity { symbols } => {
                let quantity = self.quantity(&symbols)?;
                Ok(Some(format!("{} is {quantity}", symbols.join(" "))))
            }
            Intent::QueryCredits { operand } => {
                let quantity = self.quantity(&operand.symbols)?;
                let credits = CurrencyEvaluator::new(&self.vocabulary)
                    .credits_for(quantity, &operand.currency)?;
                Ok(Some(format!(
                    "{} is {credits:.precision$} Credits",
                    describe(&operand),
                    precision = self.config.precision,
                )))
            }
            Intent::CompareQuantities { first, second } => {
                let ordering = compare_numerals(&self.vocabulary, &first, &second)?;
                Ok(Some(format!(
                    "{} is {ordering} {}",
                    first.join(" "),
                    second.join(" ")
                )))
            }
            Intent::CompareCredits { first, second } => {
                let ordering = compare_credits(
                    &self.vocabulary,
                    (first.symbols.as_slice(), first.currency.as_str()),
                    (second.symbols.as_slice(), second.currency.as_str()),
                )?;
                Ok(Some(format!(
                    "{} {ordering} {}",
                    describe(&first),
                    describe(&second)
                )))
            }
            Intent::Invalid(err) => Err(err),
        }
    }

    fn quantity(&self, symbols: &[String]) -> Result<Quantity> {
        NumeralEvaluator::new(&self.vocabulary).evaluate(symbols)
    }

    /// Executes one statement and renders errors as response text.
    pub fn respond(&mut self, line: &str) -> Option<String> {
        self.line_number += 1;
        match self.execute(line) {
            Ok(response) => response,
            Err(err) => {
                let err = err.with_context(
                    ErrorContext::new()
                        .with_line(self.line_number)
                        .with_input(line.trim()),
                );
                if let Some(context) = &err.context {
                    debug!(%context, error = %err, "statement failed");
                }
                Some(err.to_string())
            }
        }
    }

    /// Processes lines until a blank line or end of input, passing each
    /// response to `emit` as soon as it is produced.
    ///
    /// Only a line with no characters at all is blank. A line of spaces is a
    /// statement like any other and fails to parse.
    ///
    /// Returns the number of statements processed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the input cannot be read.
    pub fn run_with<R, F>(&mut self, reader: R, mut emit: F) -> Result<usize>
    where
        R: BufRead,
        F: FnMut(String),
    {
        let mut processed = 0;
        for line in reader.lines() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.is_empty() {
                if self.config.stop_at_blank_line {
                    debug!(processed, "blank line, stopping");
                    break;
                }
                continue;
            }

            processed += 1;
            if let Some(response) = self.respond(line) {
                emit(response);
            }
        }
        Ok(processed)
    }

    /// Processes lines until a blank line or end of input and collects the
    /// responses.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the input cannot be read.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<Vec<String>> {
        let mut responses = Vec::new();
        self.run_with(reader, |response| responses.push(response))?;
        Ok(responses)
    }
}

/// Renders an operand as it appears in answers, e.g. `glob prok silver`.
fn describe(operand: &Operand) -> String {
    operand
        .symbols
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(operand.currency.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}
