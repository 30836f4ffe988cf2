//! `fold` command – resolve arguments, then fold input into output.

use std::io::{Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, error};

use crate::args::{resolve, Resolution};
use crate::fold::fold;

/// Process outcome of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// Run `fold` with `args` (program name excluded) over the given streams.
///
/// Usage errors print usage to `err`; I/O errors print nothing. Both exit
/// with [`Exit::Failure`].
pub fn fold_cli<R, W, E>(args: &[String], input: R, mut out: W, mut err: E) -> Exit
where
    R: Read,
    W: Write,
    E: Write,
{
    let config = match resolve(args, &mut out, &mut err) {
        Resolution::Continue(config) => config,
        Resolution::Help => return Exit::Success,
        Resolution::Failure(reason) => {
            debug!(%reason, "rejected command line");
            return Exit::Failure;
        }
    };

    match fold(input, out, config.break_column)
        .with_context(|| format!("fold at column {} failed", config.break_column))
    {
        Ok(_) => Exit::Success,
        Err(e) => {
            error!("{e:#}");
            Exit::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::USAGE;
    use std::io::{self, Cursor};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(list: &[&str], input: &str) -> (Exit, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let exit = fold_cli(&args(list), Cursor::new(input), &mut out, &mut err);
        (
            exit,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn folds_with_resolved_width() {
        let (exit, out, err) = run(&["-w", "4"], "abcdefg\nhi");
        assert_eq!(exit, Exit::Success);
        assert_eq!(out, "abc\ndef\ng\nhi");
        assert!(err.is_empty());
    }

    #[test]
    fn help_skips_folding() {
        let (exit, out, err) = run(&["--help", "-w", "abc"], "never read");
        assert_eq!(exit, Exit::Success);
        assert_eq!(out, USAGE);
        assert!(err.is_empty());
    }

    #[test]
    fn usage_error_skips_folding() {
        let (exit, out, err) = run(&["-w", "1"], "abc");
        assert_eq!(exit, Exit::Failure);
        assert!(out.is_empty());
        assert_eq!(err, USAGE);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn io_error_fails_without_usage() {
        let mut err = Vec::new();
        let exit = fold_cli(&[], Cursor::new("abc"), ClosedPipe, &mut err);
        assert_eq!(exit, Exit::Failure);
        assert!(err.is_empty());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Exit::Success.code(), 0);
        assert_eq!(Exit::Failure.code(), 1);
    }
}
