//! Error types for the front driver.
//!
//! Lexical problems never show up here; they are diagnostics collected by a
//! [`front_util::Handler`]. These errors end a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The input could not be opened. Nothing was scanned.
    #[error("cannot open {}", path.display())]
    InputUnavailable {
        /// Path that was requested
        path: PathBuf,
        /// Why opening failed
        #[source]
        source: io::Error,
    },

    /// The input failed in the middle of the stream.
    #[error("failed to read input")]
    Read(#[source] io::Error),

    /// The configuration file is missing, malformed or out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Writing tokens or diagnostics failed.
    #[error("failed to write output")]
    Io(#[from] io::Error),

    /// A token could not be encoded as JSON.
    #[error("failed to encode token: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_input_unavailable_display() {
        let err = DriverError::InputUnavailable {
            path: PathBuf::from("front.in"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "cannot open front.in");
        assert_eq!(err.source().map(|e| e.to_string()), Some("no such file".into()));
    }

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("lexeme_capacity must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: lexeme_capacity must be at least 1"
        );
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = DriverError::Read(io::Error::new(io::ErrorKind::Other, "device gone"));
        assert_eq!(err.to_string(), "failed to read input");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DriverError = json_err.into();
        assert!(matches!(err, DriverError::Json(_)));
    }
}
