//! front - scan an arithmetic expression file and print its tokens.
//!
//! Parses command-line arguments, initializes logging, merges the
//! configuration file with the flags and hands over to [`front_drv::run`].

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use front_drv::{run, Config, DriverError, OutputFormat, RunOptions, DEFAULT_INPUT};
use front_lex::UnrecognizedPolicy;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// front - A lexical scanner for simple arithmetic expressions
///
/// Reads INPUT and prints one line per token, ending with the
/// end-of-input token. Lexical problems are reported on stderr.
#[derive(Parser, Debug)]
#[command(name = "front")]
#[command(author = "Fax Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A lexical scanner for simple arithmetic expressions", long_about = None)]
struct Cli {
    /// File to scan, `-` for stdin
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Maximum characters kept per lexeme
    #[arg(long)]
    capacity: Option<NonZeroUsize>,

    /// Handling of characters outside `+ - * / ( )`
    #[arg(long, value_enum)]
    unrecognized: Option<PolicyArg>,

    /// Enable verbose output
    #[arg(short, long, env = "FRONT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "FRONT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "FRONT_NO_COLOR")]
    no_color: bool,

    /// Write the effective configuration to PATH and exit without scanning
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,
}

/// Command-line spelling of [`UnrecognizedPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Report the character as an `Unrecognized` token and continue
    Emit,
    /// Stop scanning at the character, as the legacy scanner did
    Terminate,
}

impl From<PolicyArg> for UnrecognizedPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Emit => UnrecognizedPolicy::Emit,
            PolicyArg::Terminate => UnrecognizedPolicy::Terminate,
        }
    }
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(path) = cli.save_config.as_deref() {
        apply_flags(&cli, &mut config)?;
        config
            .save_to_path(path)
            .with_context(|| format!("saving {}", path.display()))?;
        tracing::info!(path = %path.display(), "configuration written");
        return Ok(());
    }

    let options = merge_options(cli, config)?;

    let summary = run(&options)?;
    tracing::debug!(tokens = summary.tokens, errors = summary.errors, "done");
    Ok(())
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Apply command-line flags on top of the file configuration.
fn apply_flags(cli: &Cli, config: &mut Config) -> anyhow::Result<()> {
    if let Some(capacity) = cli.capacity {
        config.scanner.lexeme_capacity = capacity.get();
    }
    if let Some(policy) = cli.unrecognized {
        config.scanner.unrecognized = policy.into();
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    config.validate()?;
    Ok(())
}

fn merge_options(cli: Cli, mut config: Config) -> anyhow::Result<RunOptions> {
    apply_flags(&cli, &mut config)?;
    Ok(RunOptions {
        input: cli.input,
        format: config.output.format,
        scanner: config.scanner_config(),
    })
}
