//! ui::output
//!
//! User-facing output.
//!
//! Everything the user is meant to read goes through here and respects
//! `--quiet`; diagnostics go through the `log` facade instead. Errors are
//! always shown.

use std::fmt::Display;

/// Whether normal output is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Messages, echoed and dry-run command lines
    Normal,
}

impl Verbosity {
    /// Verbosity for the `--quiet` flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message to stdout unless quiet.
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print command lines to stdout, one per line, unless quiet.
///
/// Used for echoed aliases and `--dry-run`.
pub fn command_lines<T: Display>(lines: &[T], verbosity: Verbosity) {
    for line in lines {
        print(line, verbosity);
    }
}

/// Print an error to stderr.
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning to stderr unless quiet.
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}
