//! front-util - Shared foundation types for the `front` scanner.
//!
//! This crate holds the pieces every other crate in the workspace leans on:
//!
//! - [`span`] - source locations (byte offsets plus 1-based line/column)
//! - [`diagnostic`] - recoverable error reporting through a [`Handler`]
//!
//! Nothing here knows about tokens. The scanner reports lexical problems by
//! building a [`Diagnostic`] and emitting it into a [`Handler`] owned by the
//! caller; the driver renders whatever was collected once scanning is done.
//!
//! # Example
//!
//! ```
//! use front_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("lexeme is too long")
//!     .code(DiagnosticCode::E_LEXEME_TOO_LONG)
//!     .span(Span::new(3, 4, 1, 4))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use span::Span;
