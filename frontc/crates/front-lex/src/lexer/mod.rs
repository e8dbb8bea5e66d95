//! Scanner module.
//!
//! The scanner is split by recognition path:
//! - `core` - Scanner struct, configuration and the per-step dispatch
//! - `identifier` - letter-led runs
//! - `number` - digit runs
//! - `operator` - single-character operators and the unrecognized policy

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::{tokenize, ScanState, Scanner, ScannerConfig, UnrecognizedPolicy};
pub use self::operator::classify_operator;
