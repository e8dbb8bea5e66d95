//! Identifier lexing.

use std::io::Read;

use super::core::{ScanState, Scanner};
use crate::source::CharClass;
use crate::token::TokenKind;

impl<'a, R: Read> Scanner<'a, R> {
    /// Lexes an identifier.
    ///
    /// Expects a `Letter` lookahead. Takes the maximal run of letters and
    /// digits, leaving the first character after it as the lookahead.
    pub(super) fn lex_identifier(&mut self) -> TokenKind {
        self.state = ScanState::InIdentifier;
        self.add_char();
        self.source.fetch();

        while matches!(self.source.class(), CharClass::Letter | CharClass::Digit) {
            self.add_char();
            self.source.fetch();
        }

        TokenKind::Identifier
    }
}
