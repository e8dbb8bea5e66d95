//! front-lex - Scanner for simple arithmetic expressions
//!
//! This crate turns a character stream into a sequence of classified tokens:
//! integer literals, identifiers, the six single-character operators
//! `+ - * / ( )`, and a final end-of-input marker.
//!
//! # Example Usage
//!
//! ```
//! use front_lex::{Scanner, Token, TokenKind};
//! use front_util::Handler;
//!
//! let handler = Handler::new();
//! let mut scanner = Scanner::from_text("(sum + 47) / total", &handler);
//!
//! assert_eq!(scanner.next_token(), Token::new(TokenKind::LeftParen, "("));
//! assert_eq!(scanner.next_token(), Token::new(TokenKind::Identifier, "sum"));
//!
//! // The rest, up to and including end of input
//! let rest: Vec<_> = scanner.map(|t| t.kind).collect();
//! assert_eq!(rest.last(), Some(&TokenKind::EndOfInput));
//! ```
//!
//! # Module Structure
//!
//! - [`source`] - Byte stream with one character of classified lookahead
//! - [`lexeme`] - Bounded buffer for the token being recognized
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - The scanner state machine
//!
//! # Token Categories
//!
//! | Kind             | Code | Lexeme                          |
//! |------------------|------|---------------------------------|
//! | `IntegerLiteral` | 10   | `[0-9]+`                        |
//! | `Identifier`     | 11   | `[A-Za-z][A-Za-z0-9]*`          |
//! | `Assign`         | 20   | reserved, never produced        |
//! | `Plus` .. `RightParen` | 21-26 | `+ - * / ( )`           |
//! | `EndOfInput`     | -1   | `EOF`                           |
//! | `Unrecognized`   | 99   | any other non-blank character   |
//!
//! Whitespace separates tokens and never produces one. A non-ASCII byte is
//! unrecognized on its own and its lexeme reads `\xNN`, e.g. `\xC3`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexeme;
pub mod lexer;
pub mod source;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use lexeme::{LexemeBuffer, LexemeOverflow, DEFAULT_CAPACITY};
pub use lexer::{classify_operator, tokenize, ScanState, Scanner, ScannerConfig, UnrecognizedPolicy};
pub use source::{CharClass, CharSource};
pub use token::{Token, TokenKind};
