//! Bounded lexeme accumulator.
//!
//! The buffer is allocated once and reused for every token. Capacity is
//! counted in characters; an append that would go past it is rejected and
//! the text already collected stays as it was.

use thiserror::Error;

/// Default capacity: a 100-byte buffer minus its terminator.
pub const DEFAULT_CAPACITY: usize = 99;

/// An append was rejected because the buffer is full.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("lexeme is too long (capacity {capacity})")]
pub struct LexemeOverflow {
    /// Capacity of the buffer that rejected the append
    pub capacity: usize,
}

/// Text of the token currently being recognized.
///
/// # Examples
///
/// ```
/// use front_lex::lexeme::LexemeBuffer;
///
/// let mut buf = LexemeBuffer::with_capacity(2);
/// assert!(buf.append('a').is_ok());
/// assert!(buf.append('b').is_ok());
/// assert!(buf.append('c').is_err());
/// assert_eq!(buf.as_str(), "ab");
///
/// buf.reset();
/// assert!(buf.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct LexemeBuffer {
    text: String,
    len: usize,
    capacity: usize,
}

impl LexemeBuffer {
    /// A buffer holding at most `capacity` characters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            len: 0,
            capacity,
        }
    }

    /// Adds one character, or rejects it if the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns [`LexemeOverflow`] when the buffer already holds `capacity`
    /// characters. The buffer is left unchanged.
    pub fn append(&mut self, ch: char) -> Result<(), LexemeOverflow> {
        if self.is_full() {
            return Err(LexemeOverflow {
                capacity: self.capacity,
            });
        }
        self.text.push(ch);
        self.len += 1;
        Ok(())
    }

    /// Adds one input byte as one character.
    ///
    /// ASCII bytes go in as themselves. Any other byte is written as a
    /// `\xNN` escape, which still takes a single slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use front_lex::lexeme::LexemeBuffer;
    ///
    /// let mut buf = LexemeBuffer::with_capacity(2);
    /// buf.append_byte(b'a').unwrap();
    /// buf.append_byte(0xC3).unwrap();
    /// assert_eq!(buf.as_str(), "a\\xC3");
    /// assert!(buf.is_full());
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`append`](Self::append).
    pub fn append_byte(&mut self, byte: u8) -> Result<(), LexemeOverflow> {
        if byte.is_ascii() {
            return self.append(char::from(byte));
        }
        if self.is_full() {
            return Err(LexemeOverflow {
                capacity: self.capacity,
            });
        }
        self.text.push_str(&format!("\\x{:02X}", byte));
        self.len += 1;
        Ok(())
    }

    /// Logically empties the buffer, keeping its storage.
    pub fn reset(&mut self) {
        self.text.clear();
        self.len = 0;
    }

    /// The accumulated text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing has been appended since the last reset.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of characters.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if further appends will be rejected.
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }
}

impl Default for LexemeBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        let buf = LexemeBuffer::default();
        assert_eq!(buf.capacity(), 99);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_append_and_read() {
        let mut buf = LexemeBuffer::default();
        for ch in "total".chars() {
            buf.append(ch).unwrap();
        }
        assert_eq!(buf.as_str(), "total");
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn test_fills_to_exact_capacity() {
        let mut buf = LexemeBuffer::default();
        for _ in 0..DEFAULT_CAPACITY {
            buf.append('z').unwrap();
        }
        assert!(buf.is_full());
        assert_eq!(buf.len(), 99);
    }

    #[test]
    fn test_overflow_preserves_content() {
        let mut buf = LexemeBuffer::with_capacity(3);
        buf.append('a').unwrap();
        buf.append('b').unwrap();
        buf.append('c').unwrap();

        let err = buf.append('d').unwrap_err();
        assert_eq!(err, LexemeOverflow { capacity: 3 });
        assert_eq!(err.to_string(), "lexeme is too long (capacity 3)");
        assert_eq!(buf.as_str(), "abc");

        assert!(buf.append('e').is_err());
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_reset_allows_reuse() {
        let mut buf = LexemeBuffer::with_capacity(1);
        buf.append('x').unwrap();
        assert!(buf.append('y').is_err());

        buf.reset();
        assert!(buf.is_empty());
        buf.append('y').unwrap();
        assert_eq!(buf.as_str(), "y");
    }

    #[test]
    fn test_non_ascii_byte_escaped() {
        let mut buf = LexemeBuffer::with_capacity(2);
        buf.append_byte(0xC3).unwrap();
        buf.append_byte(0xA9).unwrap();
        assert_eq!(buf.as_str(), "\\xC3\\xA9");
        assert_eq!(buf.len(), 2);
        assert!(buf.append_byte(0x80).is_err());
        assert!(buf.append_byte(b'a').is_err());
    }

    #[test]
    fn test_ascii_byte_kept_verbatim() {
        let mut buf = LexemeBuffer::default();
        buf.append_byte(b'%').unwrap();
        buf.append_byte(0).unwrap();
        assert_eq!(buf.as_str(), "%\0");
    }
}
