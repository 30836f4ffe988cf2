//! Command-line resolution for `fold`.
//!
//! Supported forms:
//!   fold
//!   fold -w WIDTH | --width WIDTH   (repeatable, last one wins)
//!   fold -h | --help                (stops scanning)
//!
//! Anything else is a usage error. WIDTH is read the way C `atoi` reads it.

use std::io::Write;

use tracing::{debug, warn};

use crate::common::UsageError;
use crate::config::{BreakColumn, FoldConfig};

pub const USAGE: &str = "\
usage:
    fold
        Wrap standard input lines at the 80th column, and print the result to
        standard output.
    fold --width WIDTH
    fold -w WIDTH
        Wrap standard input lines at the WIDTH column, and print the result to
        standard output.
    fold --help
    fold -h
        Print this message to standard output.
";

/// Outcome of scanning the invocation arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Fold with this configuration.
    Continue(FoldConfig),
    /// Help was printed; exit successfully without folding.
    Help,
    /// Usage was printed to the error destination; exit with failure.
    Failure(UsageError),
}

/// Scan `args` (program name excluded) left to right.
///
/// Usage text is written to `out` for help and to `err` for failures, at most
/// once, and never when the outcome is [`Resolution::Continue`].
pub fn resolve<O, E>(args: &[String], out: &mut O, err: &mut E) -> Resolution
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let mut config = FoldConfig::default();
    let mut idx = 0;

    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                print_usage(out);
                return Resolution::Help;
            }
            flag @ ("-w" | "--width") => {
                idx += 1;
                let Some(token) = args.get(idx) else {
                    print_usage(err);
                    return Resolution::Failure(UsageError::MissingWidth { flag: flag.to_string() });
                };
                let value = parse_width_lenient(token);
                let Some(break_column) = to_break_column(value) else {
                    print_usage(err);
                    return Resolution::Failure(UsageError::InvalidWidth {
                        token: token.clone(),
                        value,
                    });
                };
                config.break_column = break_column;
            }
            other => {
                print_usage(err);
                return Resolution::Failure(UsageError::UnrecognizedArgument(other.to_string()));
            }
        }
        idx += 1;
    }

    debug!(break_column = %config.break_column, "resolved fold configuration");
    Resolution::Continue(config)
}

fn to_break_column(value: i64) -> Option<BreakColumn> {
    if value < 0 {
        return None;
    }
    BreakColumn::new(usize::try_from(value).unwrap_or(usize::MAX))
}

/// Parse an integer prefix like C `atoi`: leading whitespace, an optional
/// sign, then digits up to the first non-digit. No digits yields 0; values
/// out of range saturate.
pub fn parse_width_lenient(token: &str) -> i64 {
    let bytes = token.as_bytes();
    let mut pos = bytes
        .iter()
        .position(|&b| !matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r'))
        .unwrap_or(bytes.len());

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for &b in bytes[pos..].iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

/// Write the usage text to `dest`. A failed write is logged and otherwise
/// ignored; it does not change the resolver's outcome.
pub fn print_usage<W: Write + ?Sized>(dest: &mut W) {
    if let Err(e) = dest.write_all(USAGE.as_bytes()).and_then(|()| dest.flush()) {
        warn!(error = %e, "failed to write usage text");
    }
}
