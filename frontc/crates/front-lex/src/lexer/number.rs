//! Integer literal lexing.
//!
//! Literals are digit runs kept as text. No value is computed, so leading
//! zeros and arbitrarily long runs survive unchanged (up to the lexeme
//! capacity).

use std::io::Read;

use super::core::{ScanState, Scanner};
use crate::source::CharClass;
use crate::token::TokenKind;

impl<'a, R: Read> Scanner<'a, R> {
    /// Lexes an integer literal from a `Digit` lookahead.
    pub(super) fn lex_number(&mut self) -> TokenKind {
        self.state = ScanState::InNumber;
        self.add_char();
        self.source.fetch();

        while self.source.class() == CharClass::Digit {
            self.add_char();
            self.source.fetch();
        }

        TokenKind::IntegerLiteral
    }
}
