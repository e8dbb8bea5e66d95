//! Source locations.
//!
//! The scanner reads its input once, so a [`Span`] counts bytes consumed
//! from the stream rather than indexing into a retained buffer. The line and
//! column are those of the first byte.

use std::fmt;

/// Byte range in the input plus the 1-based position where it starts.
///
/// # Examples
///
/// ```
/// use front_util::span::Span;
///
/// let span = Span::new(4, 7, 1, 5);
/// assert_eq!(span.len(), 3);
/// assert_eq!(span.to_string(), "1:5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first byte
    pub start: usize,
    /// Offset one past the last byte
    pub end: usize,
    /// Line of the first byte (1-based)
    pub line: u32,
    /// Column of the first byte (1-based)
    pub column: u32,
}

impl Span {
    /// Location-less span. Line 0 never occurs in real input.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a span
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Bytes covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if no bytes are covered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether this is [`Span::DUMMY`].
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_saturates() {
        assert_eq!(Span::new(10, 20, 1, 1).len(), 10);
        assert_eq!(Span::new(5, 2, 1, 1).len(), 0);
        assert!(Span::new(3, 3, 1, 4).is_empty());
    }

    #[test]
    fn test_dummy() {
        assert!(Span::DUMMY.is_dummy());
        assert_eq!(Span::default(), Span::DUMMY);
        assert!(!Span::new(0, 0, 1, 1).is_dummy());
    }

    #[test]
    fn test_display_is_line_column() {
        assert_eq!(Span::new(0, 1, 12, 34).to_string(), "12:34");
    }
}
