//! Token output formats.

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use front_lex::Token;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How each token is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Next token is: 21, Next lexeme is +`
    #[default]
    Legacy,
    /// `Plus, +`
    Plain,
    /// `{"kind":"Plus","lexeme":"+"}`
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Legacy => write!(f, "legacy"),
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Writes one token as one line.
pub fn write_token<W: Write>(out: &mut W, token: &Token, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Legacy => writeln!(
            out,
            "Next token is: {}, Next lexeme is {}",
            token.kind.code(),
            token.lexeme
        )?,
        OutputFormat::Plain => writeln!(out, "{}", token)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, token)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
