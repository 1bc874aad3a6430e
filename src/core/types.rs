//! core::types
//!
//! Strong types for the few domain values gitshort validates.
//!
//! # Types
//!
//! - [`BranchName`] - Validated Git branch name (used for configured branches)
//! - [`RepoName`] - Short repository name derived from a remote URL or path
//!
//! Branch names typed on the command line are passed to git verbatim; only
//! names that end up in the configuration file go through [`BranchName`].
//!
//! # Examples
//!
//! ```
//! use gitshort::core::types::{BranchName, RepoName};
//!
//! let branch = BranchName::new("release/1.x").unwrap();
//! assert_eq!(branch.as_str(), "release/1.x");
//! assert!(BranchName::new("bad..name").is_err());
//!
//! let repo = RepoName::from_remote("git@github.com:acme/test-repo.git").unwrap();
//! assert_eq!(repo.as_str(), "test-repo");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("cannot derive repository name from '{0}'")]
    InvalidRepoName(String),
}

/// A validated Git branch name.
///
/// Follows the subset of `git check-ref-format` rules that matter for
/// branches a user would configure:
/// - Cannot be empty or exactly `@`
/// - Cannot start with `.` or `-`
/// - Cannot end with `.lock` or `/`
/// - Cannot contain `..`, `@{`, `//`, control characters, or any of
///   `` ~^:\?*[`` and space
/// - No path component may start with `.` or end with `.lock`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates Git's refname rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        let reject = |why: &str| Err(TypeError::InvalidBranchName(why.to_string()));

        if name.is_empty() {
            return reject("branch name cannot be empty");
        }
        if name == "@" {
            return reject("branch name cannot be '@' (reserved)");
        }
        if name.starts_with('.') || name.starts_with('-') {
            return reject("branch name cannot start with '.' or '-'");
        }
        if name.ends_with(".lock") || name.ends_with('/') {
            return reject("branch name cannot end with '.lock' or '/'");
        }
        for bad in ["..", "@{", "//"] {
            if name.contains(bad) {
                return Err(TypeError::InvalidBranchName(format!(
                    "branch name cannot contain '{bad}'"
                )));
            }
        }

        const INVALID_CHARS: [char; 8] = [' ', '~', '^', ':', '\\', '?', '*', '['];
        if let Some(c) = name
            .chars()
            .find(|c| INVALID_CHARS.contains(c) || c.is_ascii_control())
        {
            return Err(TypeError::InvalidBranchName(format!(
                "branch name cannot contain {c:?}"
            )));
        }

        for component in name.split('/') {
            if component.starts_with('.') || component.ends_with(".lock") {
                return reject("path component cannot start with '.' or end with '.lock'");
            }
        }

        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short name of a repository, used as the key for per-repo main branches.
///
/// Derived from the last path segment of a remote URL (`.git` suffix
/// stripped) or of the working tree's top-level directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepoName(String);

impl RepoName {
    /// Wrap an already-short repository name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TypeError::InvalidRepoName(name));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Derive the short name from a remote URL or filesystem path.
    ///
    /// Handles `https://host/owner/name.git`, `git@host:owner/name.git`,
    /// `ssh://...`, Windows paths and plain names.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoName` if no non-empty segment remains.
    pub fn from_remote(url: &str) -> Result<Self, TypeError> {
        let trimmed = url.trim().trim_end_matches(['/', '\\']);
        let last = trimmed
            .rsplit(['/', '\\', ':'])
            .next()
            .unwrap_or(trimmed);
        let name = last.strip_suffix(".git").unwrap_or(last);
        if name.is_empty() {
            return Err(TypeError::InvalidRepoName(url.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Get the repository name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RepoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepoName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
