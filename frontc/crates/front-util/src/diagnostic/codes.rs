//! Diagnostic codes.
//!
//! Every problem the scanner can report has a stable code, rendered as `E`
//! followed by four digits.

use std::fmt;

/// Stable identifier of a kind of diagnostic.
///
/// # Examples
///
/// ```
/// use front_util::diagnostic::DiagnosticCode;
///
/// assert_eq!(DiagnosticCode::E_LEXEME_TOO_LONG.to_string(), "E0001");
/// assert_eq!(DiagnosticCode::E_READ_FAILED.number(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagnosticCode(u16);

impl DiagnosticCode {
    /// A lexeme outgrew the buffer and was truncated.
    pub const E_LEXEME_TOO_LONG: Self = Self(1);

    /// A character outside the operator set.
    pub const E_UNEXPECTED_CHAR: Self = Self(2);

    /// The input stream failed mid-read.
    pub const E_READ_FAILED: Self = Self(3);

    /// The numeric part
    #[inline]
    pub const fn number(self) -> u16 {
        self.0
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.0)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        assert_eq!(DiagnosticCode::E_LEXEME_TOO_LONG.to_string(), "E0001");
        assert_eq!(DiagnosticCode::E_UNEXPECTED_CHAR.to_string(), "E0002");
        assert_eq!(
            format!("{:?}", DiagnosticCode::E_READ_FAILED),
            "DiagnosticCode(E0003)"
        );
    }

    #[test]
    fn test_codes_are_ordered() {
        assert!(DiagnosticCode::E_LEXEME_TOO_LONG < DiagnosticCode::E_UNEXPECTED_CHAR);
        assert!(DiagnosticCode::E_UNEXPECTED_CHAR < DiagnosticCode::E_READ_FAILED);
    }
}
