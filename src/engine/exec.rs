//! engine::exec
//!
//! Runs rendered command lines.
//!
//! # Executor Contract
//!
//! An executor MUST:
//! 1. Run lines strictly in the order given
//! 2. Stop at the first line that fails, running nothing after it
//! 3. Report which line failed and how
//!
//! Retrying and recovery are not part of the contract; a failure ends the
//! invocation.
//!
//! # Example
//!
//! ```no_run
//! use gitshort::engine::exec::{Executor, ShellExecutor};
//! use gitshort::translate::ShellStyle;
//!
//! let mut executor = ShellExecutor::new(ShellStyle::Posix, None);
//! executor.execute(&["git status".to_string()])?;
//! # Ok::<(), gitshort::engine::exec::ExecuteError>(())
//! ```

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

use crate::translate::ShellStyle;

/// Errors from execution.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The host shell could not be started.
    #[error("failed to start `{command}`")]
    Spawn {
        /// The line being run
        command: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A line ran and exited unsuccessfully.
    #[error("`{command}` failed with {status}")]
    Failed {
        /// The line that failed
        command: String,
        /// Exit status description
        status: String,
        /// Zero-based position of the line
        index: usize,
    },
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteResult {
    /// Number of lines that ran.
    pub executed: usize,
}

/// Something that runs command lines in order.
pub trait Executor {
    /// Run every line in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the failure of the first line that did not succeed.
    fn execute(&mut self, lines: &[String]) -> Result<ExecuteResult, ExecuteError>;
}

/// Runs lines through the host shell, inheriting stdio.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: ShellStyle,
    cwd: Option<PathBuf>,
}

impl ShellExecutor {
    /// Create an executor for a shell style, optionally in a working directory.
    pub fn new(shell: ShellStyle, cwd: Option<PathBuf>) -> Self {
        Self { shell, cwd }
    }

    fn command_for(&self, line: &str) -> Command {
        let (program, args) = self.shell.host_invocation();
        let mut cmd = Command::new(program);
        cmd.args(args);
        push_line(&mut cmd, self.shell, line);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }
}

impl Executor for ShellExecutor {
    fn execute(&mut self, lines: &[String]) -> Result<ExecuteResult, ExecuteError> {
        for (index, line) in lines.iter().enumerate() {
            log::debug!("exec [{}/{}]: {}", index + 1, lines.len(), line);

            let status = self
                .command_for(line)
                .status()
                .map_err(|source| ExecuteError::Spawn {
                    command: line.clone(),
                    source,
                })?;

            if !status.success() {
                return Err(ExecuteError::Failed {
                    command: line.clone(),
                    status: status.to_string(),
                    index,
                });
            }
        }

        Ok(ExecuteResult {
            executed: lines.len(),
        })
    }
}

// cmd.exe does its own quote parsing, so the line must reach it untouched.
#[cfg(windows)]
fn push_line(cmd: &mut Command, shell: ShellStyle, line: &str) {
    use std::os::windows::process::CommandExt;

    match shell {
        ShellStyle::Windows => {
            cmd.raw_arg(format!("\"{}\"", line));
        }
        ShellStyle::Posix => {
            cmd.arg(line);
        }
    }
}

#[cfg(not(windows))]
fn push_line(cmd: &mut Command, _shell: ShellStyle, line: &str) {
    cmd.arg(line);
}

/// Records lines instead of running them.
///
/// Used for `--dry-run` and in tests. `fail_at` makes the line at that
/// position fail, so short-circuiting can be observed.
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    /// Lines that "ran", in order
    pub lines: Vec<String>,
    /// Position of a line to fail on
    pub fail_at: Option<usize>,
}

impl RecordingExecutor {
    /// Create a recorder that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that fails at the given position.
    pub fn failing_at(index: usize) -> Self {
        Self {
            lines: Vec::new(),
            fail_at: Some(index),
        }
    }
}

impl Executor for RecordingExecutor {
    fn execute(&mut self, lines: &[String]) -> Result<ExecuteResult, ExecuteError> {
        for (index, line) in lines.iter().enumerate() {
            if self.fail_at == Some(index) {
                return Err(ExecuteError::Failed {
                    command: line.clone(),
                    status: "exit status: 1".to_string(),
                    index,
                });
            }
            self.lines.push(line.clone());
        }

        Ok(ExecuteResult {
            executed: lines.len(),
        })
    }
}
