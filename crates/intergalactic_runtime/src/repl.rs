//! Interactive read-eval-print loop.

use intergalactic_engine::{decode, encode};
use intergalactic_foundation::Result;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// What the loop should do after one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading, printing the response if there is one.
    Continue(Option<String>),
    /// Stop the loop.
    Exit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (vocabulary, config).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until a blank line, Ctrl+D, or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            println!("Intergalactic converter {}", env!("CARGO_PKG_VERSION"));
            println!("Type :help for help. An empty line exits.\n");
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            match self.eval(&line) {
                Flow::Continue(Some(response)) => println!("{response}"),
                Flow::Continue(None) => {}
                Flow::Exit => break,
            }
        }

        Ok(())
    }

    /// Evaluates one line of REPL input.
    pub fn eval(&mut self, line: &str) -> Flow {
        if line.is_empty() {
            return Flow::Exit;
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            self.editor.add_history(trimmed);
        }

        match trimmed.strip_prefix(':') {
            Some(command) => self.command(command),
            None => Flow::Continue(self.session.respond(trimmed)),
        }
    }

    /// Handles a `:command`.
    fn command(&self, command: &str) -> Flow {
        let mut parts = command.split_whitespace();
        let response = match (parts.next(), parts.next()) {
            (Some("quit" | "q"), _) => return Flow::Exit,
            (Some("help" | "h"), _) => HELP.trim_end().to_string(),
            (Some("symbols"), _) => self.list_symbols(),
            (Some("rates"), _) => self.list_rates(),
            (Some("roman"), Some(arg)) => roman(arg),
            (Some("roman"), None) => "usage: :roman <number|numeral>".to_string(),
            _ => format!("unknown command: :{command}"),
        };
        Flow::Continue(Some(response))
    }

    fn list_symbols(&self) -> String {
        let symbols = self.session.vocabulary().symbols();
        if symbols.is_empty() {
            return "no symbols taught".to_string();
        }
        symbols
            .iter()
            .map(|(name, roman)| format!("{name} is {roman}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn list_rates(&self) -> String {
        let rates = self.session.vocabulary().rates();
        if rates.is_empty() {
            return "no rates taught".to_string();
        }
        let precision = self.session.config().precision;
        rates
            .iter()
            .map(|(name, rate)| format!("{name} is {rate:.precision$} Credits per unit"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Converts between a number and its Roman numeral, whichever was given.
fn roman(arg: &str) -> String {
    if let Ok(value) = arg.parse() {
        return encode(value).map_or_else(
            || "only 1 to 3999 can be written as a numeral".to_string(),
            |numeral| format!("{value} is {numeral}"),
        );
    }
    match decode(arg) {
        Ok(value) => format!("{} is {value}", arg.to_uppercase()),
        Err(err) => err.to_string(),
    }
}

const HELP: &str = "
Statements:
    glob is I                                   teach a symbol
    glob glob Silver is 34 credits              teach a currency rate
    how much is glob glob ?                     value of a numeral
    how many credits is glob Silver ?           value of currency in credits
    is glob smaller than prok ?                 compare numerals
    does glob Silver has more credits than glob Gold ?

Commands:
    :symbols        list taught symbols
    :rates          list taught rates
    :roman N        convert between numbers and numerals
    :quit           exit (an empty line also exits)
";
