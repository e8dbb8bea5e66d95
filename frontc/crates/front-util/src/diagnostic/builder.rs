//! Fluent construction of diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Span;

/// Chains the optional parts of a [`Diagnostic`] onto its message.
///
/// # Examples
///
/// ```
/// use front_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use front_util::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected character `%`")
///     .code(DiagnosticCode::E_UNEXPECTED_CHAR)
///     .span(Span::new(2, 3, 1, 3))
///     .help("expected one of `+ - * / ( )`")
///     .build();
///
/// assert_eq!(diag.code, Some(DiagnosticCode::E_UNEXPECTED_CHAR));
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[must_use = "a diagnostic does nothing until it is emitted or built"]
pub struct DiagnosticBuilder {
    diag: Diagnostic,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diag: Diagnostic::error(message, Span::DUMMY),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diag.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.diag.span = span;
        self
    }

    /// Context rendered as `= note: ...`.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diag.notes.push(note.into());
        self
    }

    /// Suggestion rendered as `= help: ...`.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diag.helps.push(help.into());
        self
    }

    /// Finish without emitting
    pub fn build(self) -> Diagnostic {
        self.diag
    }

    /// Hands the finished diagnostic to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_location() {
        let diag = DiagnosticBuilder::error("bad").build();
        assert!(diag.span.is_dummy());
        assert_eq!(diag.code, None);
        assert!(diag.notes.is_empty());
    }

    #[test]
    fn test_parts_accumulate_in_order() {
        let diag = DiagnosticBuilder::error("w")
            .note("first")
            .note("second")
            .help("try this")
            .build();
        assert_eq!(diag.notes, ["first", "second"]);
        assert_eq!(diag.helps, ["try this"]);
    }

    #[test]
    fn test_emit_reaches_handler() {
        let handler = Handler::new();
        DiagnosticBuilder::error("gone")
            .code(DiagnosticCode::E_READ_FAILED)
            .emit(&handler);
        assert_eq!(handler.count_code(DiagnosticCode::E_READ_FAILED), 1);
    }
}
