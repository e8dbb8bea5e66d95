//! front-drv - Driver for the `front` scanner
//!
//! Opens the input, runs a [`Scanner`] over it to completion, prints one
//! line per token and renders the collected diagnostics.
//!
//! # Example
//!
//! ```
//! use front_drv::{scan, OutputFormat};
//! use front_lex::ScannerConfig;
//! use front_util::Handler;
//!
//! let handler = Handler::new();
//! let mut out = Vec::new();
//! let summary = scan(
//!     "a + 1".as_bytes(),
//!     &mut out,
//!     OutputFormat::Plain,
//!     ScannerConfig::default(),
//!     &handler,
//! )
//! .unwrap();
//!
//! assert_eq!(summary.tokens, 4);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Identifier, a\nPlus, +\nIntegerLiteral, 1\nEndOfInput, EOF\n"
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod output;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use front_lex::{Scanner, ScannerConfig};
use front_util::Handler;

pub use config::Config;
pub use error::{DriverError, Result};
pub use output::{write_token, OutputFormat};

/// Input read when no path is given.
pub const DEFAULT_INPUT: &str = "front.in";

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Everything a run needs, after config and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Input path, or `-` for stdin
    pub input: PathBuf,
    /// Token line format
    pub format: OutputFormat,
    /// Scanner settings
    pub scanner: ScannerConfig,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            format: OutputFormat::default(),
            scanner: ScannerConfig::default(),
        }
    }
}

/// What a completed scan produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Tokens written, end of input included
    pub tokens: usize,
    /// Errors reported while scanning
    pub errors: usize,
}

/// Opens `path` for reading, `-` meaning stdin.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|source| DriverError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(file))
}

/// Scans `reader` to completion, writing each token to `out`.
///
/// Stops after the first `EndOfInput`. A read failure in the middle of the
/// stream is returned as [`DriverError::Read`] once the end-of-input line
/// has been written.
pub fn scan<R: Read, W: Write>(
    reader: R,
    out: &mut W,
    format: OutputFormat,
    config: ScannerConfig,
    handler: &Handler,
) -> Result<ScanSummary> {
    let mut scanner = Scanner::with_config(reader, handler, config);
    let mut tokens = 0;

    loop {
        let token = scanner.next_token();
        write_token(out, &token, format)?;
        tokens += 1;
        if token.is_end() {
            break;
        }
    }
    out.flush()?;

    if let Some(err) = scanner.take_io_error() {
        return Err(DriverError::Read(err));
    }

    Ok(ScanSummary {
        tokens,
        errors: handler.error_count(),
    })
}

/// Runs the driver: tokens to stdout, diagnostics to stderr.
pub fn run(options: &RunOptions) -> Result<ScanSummary> {
    let reader = open_input(&options.input)?;
    tracing::debug!(
        input = %options.input.display(),
        format = %options.format,
        capacity = options.scanner.lexeme_capacity,
        "scanning"
    );

    let handler = Handler::new();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = scan(reader, &mut out, options.format, options.scanner, &handler);

    handler.render(&mut io::stderr().lock())?;

    let summary = result?;
    if summary.errors > 0 {
        tracing::info!(errors = summary.errors, "scan finished with diagnostics");
    }
    Ok(summary)
}
