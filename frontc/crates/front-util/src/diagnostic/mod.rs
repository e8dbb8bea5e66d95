//! Recoverable error reporting.
//!
//! Scanning never aborts on a lexical problem. The scanner builds a
//! [`Diagnostic`] and emits it into a [`Handler`]; whoever owns the handler
//! inspects or renders the collection once scanning is done.
//!
//! # Examples
//!
//! ```
//! use front_util::diagnostic::{DiagnosticCode, Handler};
//! use front_util::Span;
//!
//! let handler = Handler::new();
//! handler
//!     .build_error(Span::new(2, 3, 1, 3), "unexpected character `%`")
//!     .code(DiagnosticCode::E_UNEXPECTED_CHAR)
//!     .emit(&handler);
//!
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "error[E0002]: unexpected character `%`\n --> 1:3"
//! );
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;
use std::io;

/// One reported problem.
///
/// Every diagnostic is an error: the input is wrong, but the scan still runs
/// to the end.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Main message
    pub message: String,
    /// Where it happened; [`Span::DUMMY`] when nowhere in particular
    pub span: Span,
    /// Stable code, if any
    pub code: Option<DiagnosticCode>,
    /// Context lines
    pub notes: Vec<String>,
    /// Suggestions
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with just a message and location.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }
}

/// Renders as:
///
/// ```text
/// error[E0001]: lexeme is too long
///  --> 1:1
///   = note: lexeme capacity is 99 characters; 50 dropped
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;

        if !self.span.is_dummy() {
            write!(f, "\n --> {}", self.span)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Collects diagnostics in the order they are emitted.
///
/// Emission takes `&self`, so a scanner can hold a shared reference while
/// its caller still reads counts between tokens. The `RefCell` inside makes
/// a handler `!Sync`; each thread scanning its own stream uses its own.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// An empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Starts an error diagnostic at `span`, to be finished with
    /// [`DiagnosticBuilder::emit`].
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Number of diagnostics carrying `code`.
    pub fn count_code(&self, code: DiagnosticCode) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.code == Some(code))
            .count()
    }

    /// Snapshot of everything emitted so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Writes every diagnostic to `out`, each followed by a newline.
    pub fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for diag in self.diagnostics.borrow().iter() {
            writeln!(out, "{}", diag)?;
        }
        Ok(())
    }
}
