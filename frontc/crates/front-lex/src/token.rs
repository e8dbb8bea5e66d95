//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact text it was scanned
//! from. Tokens own their lexeme; the scanner keeps nothing once a token has
//! been handed out.

use serde::Serialize;
use std::fmt;

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A run of decimal digits, kept verbatim
    IntegerLiteral,
    /// A letter followed by letters or digits
    Identifier,
    /// `=` (reserved; the operator set never produces it)
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// End of the stream, or a stop forced by the `terminate` policy
    EndOfInput,
    /// A single character outside the operator set
    Unrecognized,
}

impl TokenKind {
    /// Every kind, in legacy code order.
    pub const ALL: [TokenKind; 11] = [
        TokenKind::IntegerLiteral,
        TokenKind::Identifier,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::EndOfInput,
        TokenKind::Unrecognized,
    ];

    /// Numeric code printed by the legacy output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use front_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Plus.code(), 21);
    /// assert_eq!(TokenKind::EndOfInput.code(), -1);
    /// ```
    pub const fn code(self) -> i32 {
        match self {
            TokenKind::IntegerLiteral => 10,
            TokenKind::Identifier => 11,
            TokenKind::Assign => 20,
            TokenKind::Plus => 21,
            TokenKind::Minus => 22,
            TokenKind::Star => 23,
            TokenKind::Slash => 24,
            TokenKind::LeftParen => 25,
            TokenKind::RightParen => 26,
            TokenKind::EndOfInput => -1,
            TokenKind::Unrecognized => 99,
        }
    }

    /// Variant name, as used by the plain output format.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::Identifier => "Identifier",
            TokenKind::Assign => "Assign",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified unit of source text.
///
/// # Examples
///
/// ```
/// use front_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "sum");
/// assert_eq!(token.to_string(), "Identifier, sum");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// What was recognized
    pub kind: TokenKind,
    /// The source text it was recognized from
    pub lexeme: String,
}

impl Token {
    /// Fixed lexeme carried by end-of-input tokens.
    pub const EOF_LEXEME: &'static str = "EOF";

    /// Create a token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The end-of-input token with its fixed lexeme.
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, Self::EOF_LEXEME)
    }

    /// Check if this token ends the stream.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.kind, self.lexeme)
    }
}
