//! Operator lexing.
//!
//! Handles the single-character operators `+ - * / ( )` and anything else
//! that lands in [`CharClass::Other`](crate::source::CharClass::Other)
//! without being whitespace.

use std::io::Read;

use front_util::{DiagnosticCode, Span};

use super::core::{ScanState, Scanner, UnrecognizedPolicy};
use crate::token::TokenKind;

/// Maps an operator character to its kind.
///
/// Returns `None` for every character outside the operator set,
/// `=` included.
///
/// # Examples
///
/// ```
/// use front_lex::{classify_operator, TokenKind};
///
/// assert_eq!(classify_operator('*'), Some(TokenKind::Star));
/// assert_eq!(classify_operator('='), None);
/// ```
pub fn classify_operator(ch: char) -> Option<TokenKind> {
    match ch {
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Star),
        '/' => Some(TokenKind::Slash),
        _ => None,
    }
}

/// Printable form of a byte for messages: ASCII escaped the way Rust
/// escapes a `char`, anything else as `\xNN`.
fn describe_byte(byte: u8) -> String {
    if byte.is_ascii() {
        char::from(byte).escape_default().to_string()
    } else {
        format!("\\x{:02X}", byte)
    }
}

impl<'a, R: Read> Scanner<'a, R> {
    /// Lexes the `Other` lookahead as an operator.
    ///
    /// The character always becomes the lexeme. The caller fetches past it.
    pub(super) fn lex_operator(&mut self) -> TokenKind {
        self.state = ScanState::AtOperator;
        self.add_char();

        let Some(byte) = self.source.current_byte() else {
            return TokenKind::EndOfInput;
        };
        if let Some(kind) = classify_operator(char::from(byte)) {
            return kind;
        }

        self.report_unrecognized(byte);
        match self.config.unrecognized {
            UnrecognizedPolicy::Emit => TokenKind::Unrecognized,
            UnrecognizedPolicy::Terminate => {
                self.state = ScanState::AtEnd;
                TokenKind::EndOfInput
            },
        }
    }

    fn report_unrecognized(&self, byte: u8) {
        let start = self.source.position();
        let span = Span::new(start, start + 1, self.source.line(), self.source.column());

        let mut builder = self
            .handler
            .build_error(span, format!("unexpected character `{}`", describe_byte(byte)))
            .code(DiagnosticCode::E_UNEXPECTED_CHAR)
            .help("expected one of `+ - * / ( )`");
        if self.config.unrecognized == UnrecognizedPolicy::Terminate {
            builder = builder.note("scanning stops at the first unrecognized character");
        }
        builder.emit(self.handler);
    }
}
