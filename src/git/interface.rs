//! git::interface
//!
//! Process-backed implementation of [`GitQuery`].

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

use super::GitQuery;

/// Errors from git queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GitError {
    /// git could not be spawned or exited unsuccessfully.
    #[error("failed to execute shell command: {message}")]
    Command {
        /// What went wrong (spawn error or exit status plus stderr)
        message: String,
    },

    /// git succeeded but printed something unusable.
    #[error("unexpected git output: {0}")]
    UnexpectedOutput(String),
}

impl GitError {
    /// Create a command failure from any message.
    pub fn command(message: impl Into<String>) -> Self {
        GitError::Command {
            message: message.into(),
        }
    }
}

/// Runs queries by spawning the `git` binary.
#[derive(Debug, Clone, Default)]
pub struct ProcessGit {
    cwd: Option<PathBuf>,
}

impl ProcessGit {
    /// Create a runner, optionally pinned to a working directory.
    pub fn new(cwd: Option<PathBuf>) -> Self {
        Self { cwd }
    }
}

impl GitQuery for ProcessGit {
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        log::debug!("query: git {}", args.join(" "));

        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd
            .output()
            .map_err(|e| GitError::command(format!("git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                format!("git {} exited with {}", args.join(" "), output.status)
            } else {
                format!("git {} exited with {}: {}", args.join(" "), output.status, stderr)
            };
            return Err(GitError::Command { message });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}
