//! git::mock
//!
//! Scripted [`GitQuery`] implementation for deterministic testing.
//!
//! # Design
//!
//! `FakeGit` answers queries from a queue of canned responses, in order, and
//! records every invocation so tests can assert exactly which queries ran.
//! Running out of responses is reported as a command failure.
//!
//! # Example
//!
//! ```
//! use gitshort::git::mock::FakeGit;
//! use gitshort::git::GitQuery;
//!
//! let git = FakeGit::new().respond("my previous commit message");
//! assert_eq!(git.last_commit_message().unwrap(), "my previous commit message");
//! assert_eq!(git.calls(), vec![vec!["log", "-1", "--pretty=%B"]]);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{GitError, GitQuery};

/// Scripted git query runner.
///
/// Clones share the same response queue and call log.
#[derive(Debug, Clone, Default)]
pub struct FakeGit {
    inner: Arc<Mutex<FakeGitInner>>,
}

#[derive(Debug, Default)]
struct FakeGitInner {
    responses: VecDeque<Result<String, GitError>>,
    calls: Vec<Vec<String>>,
}

impl FakeGit {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn respond(self, stdout: impl Into<String>) -> Self {
        self.push(Ok(stdout.into()));
        self
    }

    /// Queue a failing response with the given message.
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Err(GitError::command(message)));
        self
    }

    fn push(&self, response: Result<String, GitError>) {
        self.inner
            .lock()
            .expect("lock poisoned")
            .responses
            .push_back(response);
    }

    /// Every invocation seen so far, as argument lists.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.inner.lock().expect("lock poisoned").calls.clone()
    }

    /// Number of scripted responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inner.lock().expect("lock poisoned").responses.len()
    }
}

impl GitQuery for FakeGit {
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut inner = self.inner.lock().expect("lock poisoned");
        inner
            .calls
            .push(args.iter().map(|a| (*a).to_string()).collect());
        inner.responses.pop_front().unwrap_or_else(|| {
            Err(GitError::command(format!(
                "no scripted response for `git {}`",
                args.join(" ")
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{REMOTE_URL_ARGS, TOPLEVEL_ARGS};

    #[test]
    fn responses_are_consumed_in_order() {
        let git = FakeGit::new().respond("first").fail("oops");
        assert_eq!(git.run(&["a"]).unwrap(), "first");
        assert_eq!(
            git.run(&["b"]).unwrap_err().to_string(),
            "failed to execute shell command: oops"
        );
        assert_eq!(git.remaining(), 0);
        assert_eq!(git.calls(), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn exhausted_queue_fails() {
        let git = FakeGit::new();
        let err = git.run(&["status"]).unwrap_err();
        assert!(err.to_string().contains("no scripted response for `git status`"));
    }

    #[test]
    fn repo_name_uses_remote_url() {
        let git = FakeGit::new().respond("git@github.com:acme/test-repo.git");
        assert_eq!(git.repo_name().unwrap().as_str(), "test-repo");
        assert_eq!(git.calls(), vec![REMOTE_URL_ARGS.to_vec()]);
    }

    #[test]
    fn repo_name_falls_back_to_toplevel_on_failure() {
        let git = FakeGit::new().fail("no remote").respond("/work/test-repo");
        assert_eq!(git.repo_name().unwrap().as_str(), "test-repo");
        assert_eq!(
            git.calls(),
            vec![REMOTE_URL_ARGS.to_vec(), TOPLEVEL_ARGS.to_vec()]
        );
    }

    #[test]
    fn repo_name_falls_back_to_toplevel_on_empty_url() {
        let git = FakeGit::new().respond("").respond("/work/other");
        assert_eq!(git.repo_name().unwrap().as_str(), "other");
    }

    #[test]
    fn repo_name_reports_last_failure() {
        let git = FakeGit::new().fail("no remote").fail("not a repo");
        assert_eq!(
            git.repo_name().unwrap_err().to_string(),
            "failed to execute shell command: not a repo"
        );
    }
}
