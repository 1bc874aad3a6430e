//! git
//!
//! Read-only queries against the `git` CLI.
//!
//! # Architecture
//!
//! Some aliases need information from the repository before their command
//! sequence can be built: the last commit message (`redo`) or the short
//! repository name (`checkout-main`, `merge-main`, `diff -m`). Those reads go
//! through the [`GitQuery`] trait so the translator can be driven by scripted
//! responses in tests ([`mock::FakeGit`]) and by the real `git` binary at
//! runtime ([`ProcessGit`]).
//!
//! Queries never mutate the repository. Everything that does is emitted as
//! text in a command sequence and run by [`crate::engine::exec`].
//!
//! # Example
//!
//! ```no_run
//! use gitshort::git::{GitQuery, ProcessGit};
//!
//! let git = ProcessGit::new(None);
//! let message = git.last_commit_message()?;
//! let repo = git.repo_name()?;
//! # Ok::<(), gitshort::git::GitError>(())
//! ```

mod interface;
pub mod mock;

pub use interface::{GitError, ProcessGit};

use crate::core::types::RepoName;

/// Arguments of the query that reads the last commit message.
pub const LAST_MESSAGE_ARGS: [&str; 3] = ["log", "-1", "--pretty=%B"];

/// Arguments of the query that reads the origin remote URL.
pub const REMOTE_URL_ARGS: [&str; 3] = ["config", "--get", "remote.origin.url"];

/// Arguments of the query that reads the working tree's top-level path.
pub const TOPLEVEL_ARGS: [&str; 2] = ["rev-parse", "--show-toplevel"];

/// A runner for read-only git invocations.
pub trait GitQuery {
    /// Run `git <args>` and return its standard output, trailing whitespace
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Command` if git cannot be spawned or exits non-zero.
    fn run(&self, args: &[&str]) -> Result<String, GitError>;

    /// Read the full message of the most recent commit.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the underlying `git log` query.
    fn last_commit_message(&self) -> Result<String, GitError> {
        self.run(&LAST_MESSAGE_ARGS)
    }

    /// Resolve the short name of the current repository.
    ///
    /// Uses the `origin` remote URL when one is configured and falls back to
    /// the working tree's top-level directory name otherwise.
    ///
    /// # Errors
    ///
    /// Returns the error of the last query attempted, or
    /// `GitError::UnexpectedOutput` if no name can be derived.
    fn repo_name(&self) -> Result<RepoName, GitError> {
        let source = match self.run(&REMOTE_URL_ARGS) {
            Ok(url) if !url.trim().is_empty() => url,
            Ok(_) => {
                log::debug!("origin remote URL is empty, using top-level directory");
                self.run(&TOPLEVEL_ARGS)?
            }
            Err(err) => {
                log::debug!("no origin remote ({err}), using top-level directory");
                self.run(&TOPLEVEL_ARGS)?
            }
        };

        RepoName::from_remote(&source).map_err(|e| GitError::UnexpectedOutput(e.to_string()))
    }
}
