//! Character source over a read-once byte stream.
//!
//! [`CharSource`] holds exactly one character of lookahead: the byte most
//! recently fetched and its [`CharClass`]. Every [`CharSource::fetch`] moves
//! to the next byte and reclassifies it. There is no seeking and no
//! re-reading; the stream is consumed strictly in order.
//!
//! Classification is ASCII-only. Bytes outside ASCII fall into
//! [`CharClass::Other`] and surface as unrecognized characters.

use std::io::{self, BufReader, Bytes, Read};

/// Coarse category used to pick a recognition path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII `a-z` or `A-Z`
    Letter,
    /// ASCII `0-9`
    Digit,
    /// Anything else, whitespace included
    Other,
    /// The stream is exhausted
    EndOfInput,
}

/// Classify a fetched byte, `None` meaning the stream ran out.
///
/// # Examples
///
/// ```
/// use front_lex::source::{classify, CharClass};
///
/// assert_eq!(classify(Some(b'q')), CharClass::Letter);
/// assert_eq!(classify(Some(b'7')), CharClass::Digit);
/// assert_eq!(classify(Some(b' ')), CharClass::Other);
/// assert_eq!(classify(None), CharClass::EndOfInput);
/// ```
pub fn classify(byte: Option<u8>) -> CharClass {
    match byte {
        Some(b) if b.is_ascii_alphabetic() => CharClass::Letter,
        Some(b) if b.is_ascii_digit() => CharClass::Digit,
        None => CharClass::EndOfInput,
        Some(_) => CharClass::Other,
    }
}

/// The `isspace` set: space, tab, newline, vertical tab, form feed, carriage return.
#[inline]
pub fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Supplies one classified character at a time from an [`io::Read`].
///
/// Before the first [`fetch`](CharSource::fetch) there is no current
/// character and the class reads as [`CharClass::EndOfInput`].
///
/// # Example
///
/// ```
/// use front_lex::source::{CharClass, CharSource};
///
/// let mut source = CharSource::new("a1".as_bytes());
/// source.fetch();
/// assert_eq!(source.current(), Some('a'));
/// assert_eq!(source.class(), CharClass::Letter);
///
/// source.fetch();
/// assert_eq!(source.class(), CharClass::Digit);
///
/// source.fetch();
/// source.fetch();
/// assert_eq!(source.class(), CharClass::EndOfInput);
/// ```
pub struct CharSource<R> {
    /// Underlying byte stream.
    bytes: Bytes<BufReader<R>>,

    /// The lookahead byte, `None` before priming or at end of stream.
    current: Option<u8>,

    /// Class of `current`.
    class: CharClass,

    /// Byte offset of `current` in the stream.
    position: usize,

    /// Line of `current` (1-based).
    line: u32,

    /// Column of `current` (1-based).
    column: u32,

    /// Set once the stream has run out; further fetches are no-ops.
    exhausted: bool,

    /// A read failure that ended the stream early.
    error: Option<io::Error>,
}

impl<R: Read> CharSource<R> {
    /// Wraps `reader` without reading from it.
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            current: None,
            class: CharClass::EndOfInput,
            position: 0,
            line: 1,
            column: 1,
            exhausted: false,
            error: None,
        }
    }

    /// Advances to the next byte and reclassifies.
    ///
    /// Once the stream is exhausted this keeps the class at
    /// [`CharClass::EndOfInput`] and does nothing else.
    pub fn fetch(&mut self) {
        if self.exhausted {
            return;
        }

        if let Some(prev) = self.current {
            self.position += 1;
            if prev == b'\n' {
                self.line = self.line.saturating_add(1);
                self.column = 1;
            } else {
                self.column = self.column.saturating_add(1);
            }
        }

        self.current = self.read_byte();
        self.class = classify(self.current);
        if self.current.is_none() {
            self.exhausted = true;
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        loop {
            match self.bytes.next()? {
                Ok(byte) => return Some(byte),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(error = %e, offset = self.position, "input read failed");
                    self.error = Some(e);
                    return None;
                }
            }
        }
    }

    /// The lookahead character, if any.
    ///
    /// Bytes are widened one-to-one into `char`, so a non-ASCII byte comes
    /// back as a code point in `U+0080..=U+00FF`. Use
    /// [`current_byte`](Self::current_byte) to get at the raw byte.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current.map(char::from)
    }

    /// The lookahead byte, if any.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.current
    }

    /// Class of the lookahead character.
    #[inline]
    pub fn class(&self) -> CharClass {
        self.class
    }

    /// Check if the lookahead is whitespace.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.current.is_some_and(is_blank)
    }

    /// Byte offset of the lookahead.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Line of the lookahead (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the lookahead (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The read failure that ended the stream, if one happened.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Takes the read failure, leaving `None` behind.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}
