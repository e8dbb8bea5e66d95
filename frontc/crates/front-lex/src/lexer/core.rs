//! Core scanner implementation.
//!
//! This module contains the Scanner struct, its configuration, and the
//! dispatch that turns one lookahead character into one token.

use std::io::{self, Read};
use std::iter::FusedIterator;

use front_util::{DiagnosticCode, Handler, Span};
use serde::{Deserialize, Serialize};

use crate::lexeme::{LexemeBuffer, DEFAULT_CAPACITY};
use crate::source::{CharClass, CharSource};
use crate::token::{Token, TokenKind};

/// What to do with a character outside the operator set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedPolicy {
    /// Emit an `Unrecognized` token and keep scanning.
    #[default]
    Emit,
    /// Emit `EndOfInput` carrying the character, then stop for good.
    Terminate,
}

/// Scanner settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Maximum lexeme length in characters.
    pub lexeme_capacity: usize,
    /// Handling of characters outside the operator set.
    pub unrecognized: UnrecognizedPolicy,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            lexeme_capacity: DEFAULT_CAPACITY,
            unrecognized: UnrecognizedPolicy::default(),
        }
    }
}

/// Where the state machine is.
///
/// `SkippingWhitespace` is entered at the top of every step; the other
/// states name the recognition path the last step took. `AtEnd` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Discarding blanks ahead of the next token
    SkippingWhitespace,
    /// Reading a letter-led run
    InIdentifier,
    /// Reading a digit run
    InNumber,
    /// Classifying a single `Other` character
    AtOperator,
    /// Input is over; every further step yields `EndOfInput`
    AtEnd,
}

/// Scanner for arithmetic expressions.
///
/// Owns its character source and lexeme buffer, so independent scanners
/// never share state. Lexical problems go to the borrowed [`Handler`].
///
/// # Example
///
/// ```
/// use front_lex::{Scanner, Token, TokenKind};
/// use front_util::Handler;
///
/// let handler = Handler::new();
/// let mut scanner = Scanner::from_text("x1 + 2", &handler);
///
/// assert_eq!(scanner.next_token(), Token::new(TokenKind::Identifier, "x1"));
/// assert_eq!(scanner.next_token(), Token::new(TokenKind::Plus, "+"));
/// assert_eq!(scanner.next_token(), Token::new(TokenKind::IntegerLiteral, "2"));
/// assert!(scanner.next_token().is_end());
/// ```
pub struct Scanner<'a, R> {
    /// Lookahead character source.
    pub(super) source: CharSource<R>,

    /// Text of the token being recognized.
    pub(super) lexeme: LexemeBuffer,

    /// Diagnostic sink.
    pub(super) handler: &'a Handler,

    pub(super) config: ScannerConfig,

    pub(super) state: ScanState,

    /// Whether the first character has been fetched.
    primed: bool,

    /// Characters rejected by the lexeme buffer during the current step.
    dropped: usize,

    /// Span of the token most recently produced.
    token_span: Span,

    /// Set once the iterator has yielded `EndOfInput`.
    exhausted: bool,
}

impl<'a> Scanner<'a, &'a [u8]> {
    /// Creates a scanner over in-memory text with the default config.
    pub fn from_text(text: &'a str, handler: &'a Handler) -> Self {
        Self::new(text.as_bytes(), handler)
    }
}

impl<'a, R: Read> Scanner<'a, R> {
    /// Creates a scanner over `reader` with the default config.
    pub fn new(reader: R, handler: &'a Handler) -> Self {
        Self::with_config(reader, handler, ScannerConfig::default())
    }

    /// Creates a scanner over `reader`.
    ///
    /// Nothing is read until the first [`next_token`](Self::next_token).
    pub fn with_config(reader: R, handler: &'a Handler, config: ScannerConfig) -> Self {
        Self {
            source: CharSource::new(reader),
            lexeme: LexemeBuffer::with_capacity(config.lexeme_capacity),
            handler,
            config,
            state: ScanState::SkippingWhitespace,
            primed: false,
            dropped: 0,
            token_span: Span::DUMMY,
            exhausted: false,
        }
    }

    /// Returns the next token from the stream.
    ///
    /// Skips whitespace, then dispatches on the class of the lookahead.
    /// Once end of input has been reached (or forced by
    /// [`UnrecognizedPolicy::Terminate`]), every call returns
    /// `EndOfInput` with the lexeme `"EOF"`.
    pub fn next_token(&mut self) -> Token {
        if self.state == ScanState::AtEnd {
            return Token::end_of_input();
        }

        self.prime();
        self.lexeme.reset();
        self.dropped = 0;

        self.state = ScanState::SkippingWhitespace;
        self.skip_whitespace();

        let start = self.source.position();
        let line = self.source.line();
        let column = self.source.column();

        let kind = match self.source.class() {
            CharClass::Letter => self.lex_identifier(),
            CharClass::Digit => self.lex_number(),
            CharClass::Other => {
                let kind = self.lex_operator();
                if self.state != ScanState::AtEnd {
                    self.source.fetch();
                }
                kind
            },
            CharClass::EndOfInput => {
                self.state = ScanState::AtEnd;
                self.token_span = Span::new(start, start, line, column);
                self.report_read_error();
                return Token::end_of_input();
            },
        };

        self.token_span = Span::new(start, self.source.position(), line, column);
        if self.dropped > 0 {
            self.report_overflow();
        }

        let token = Token::new(kind, self.lexeme.as_str());
        tracing::trace!(kind = %token.kind, lexeme = %token.lexeme, span = %self.token_span, "token");
        token
    }

    /// Fetches the first character, once.
    pub(super) fn prime(&mut self) {
        if !self.primed {
            self.source.fetch();
            self.primed = true;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.source.is_whitespace() {
            self.source.fetch();
        }
    }

    /// Appends the lookahead to the lexeme, counting a rejection.
    pub(super) fn add_char(&mut self) {
        let Some(byte) = self.source.current_byte() else {
            return;
        };
        if let Err(overflow) = self.lexeme.append_byte(byte) {
            if self.dropped == 0 {
                tracing::debug!(capacity = overflow.capacity, "lexeme buffer full");
            }
            self.dropped += 1;
        }
    }

    fn report_overflow(&self) {
        self.handler
            .build_error(self.token_span, "lexeme is too long")
            .code(DiagnosticCode::E_LEXEME_TOO_LONG)
            .note(format!(
                "lexeme capacity is {} characters; {} dropped",
                self.lexeme.capacity(),
                self.dropped
            ))
            .emit(self.handler);
    }

    fn report_read_error(&self) {
        if let Some(err) = self.source.error() {
            self.handler
                .build_error(self.token_span, format!("failed to read input: {}", err))
                .code(DiagnosticCode::E_READ_FAILED)
                .note("scanning stopped as if the input had ended")
                .emit(self.handler);
        }
    }

    /// State after the most recent step.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Span of the token most recently returned.
    pub fn token_span(&self) -> Span {
        self.token_span
    }

    /// Line of the lookahead (1-based).
    pub fn line(&self) -> u32 {
        self.source.line()
    }

    /// Column of the lookahead (1-based).
    pub fn column(&self) -> u32 {
        self.source.column()
    }

    /// Takes the read failure that cut the input short, if any.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.source.take_error()
    }
}

/// Yields every token up to and including the first `EndOfInput`.
impl<'a, R: Read> Iterator for Scanner<'a, R> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.exhausted = true;
        }
        Some(token)
    }
}

impl<'a, R: Read> FusedIterator for Scanner<'a, R> {}

/// Scans `text` to completion with the default config.
///
/// # Example
///
/// ```
/// use front_lex::{tokenize, TokenKind};
/// use front_util::Handler;
///
/// let handler = Handler::new();
/// let kinds: Vec<_> = tokenize("(a)", &handler).into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::LeftParen, TokenKind::Identifier, TokenKind::RightParen, TokenKind::EndOfInput]
/// );
/// ```
pub fn tokenize(text: &str, handler: &Handler) -> Vec<Token> {
    Scanner::from_text(text, handler).collect()
}
