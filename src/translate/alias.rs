//! translate::alias
//!
//! The closed set of aliases and the inputs each one takes.

use std::fmt;

/// Sub-token accepted by the `rebase` alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum RebaseAction {
    /// `a`: abort the rebase in progress
    #[value(name = "a")]
    Abort,
    /// `c`: continue the rebase in progress
    #[value(name = "c")]
    Continue,
}

/// One parsed alias invocation.
///
/// Built by the CLI layer from clap's output and never modified afterwards.
/// Positional lists are kept verbatim; the translator does its own arity
/// checks so it can be driven without clap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Alias {
    /// List branches.
    Branch,
    /// Start the SSH agent, then pull.
    Pull,
    /// Fetch from the default remote.
    Fetch,
    /// Undo the last commit and recommit everything with its message.
    Redo,
    /// Show the most recent log entries.
    Log { count: u32 },
    /// Check out the repository's main branch.
    CheckoutMain,
    /// Merge the repository's main branch into the current one.
    MergeMain,
    /// Commit staged changes, optionally pushing afterwards.
    Commit {
        message: Vec<String>,
        no_verify: bool,
        push: bool,
    },
    /// Commit staged changes and push.
    CommitAndPush { message: Vec<String>, no_verify: bool },
    /// Check out (or create) a branch.
    CheckoutBranch {
        branch: String,
        new_branch: bool,
        extra: Vec<String>,
    },
    /// Delete a branch.
    DeleteBranch {
        branch: String,
        force: bool,
        extra: Vec<String>,
    },
    /// Unstage files.
    UndoAdd { files: Vec<String> },
    /// Discard working tree changes to files.
    UndoChange { files: Vec<String> },
    /// Show status, optionally for specific files.
    Status { files: Vec<String> },
    /// Stage files, or everything.
    Add { files: Vec<String> },
    /// Show a diff against the working tree, the main branch or `HEAD~1`.
    Diff {
        files: Vec<String>,
        main: bool,
        prev_commit: bool,
        ignore_whitespace: bool,
    },
    /// Abort or continue a rebase.
    Rebase { action: RebaseAction },
}

impl Alias {
    /// The subcommand name of this alias.
    pub fn name(&self) -> &'static str {
        match self {
            Alias::Branch => "branch",
            Alias::Pull => "pull",
            Alias::Fetch => "fetch",
            Alias::Redo => "redo",
            Alias::Log { .. } => "log",
            Alias::CheckoutMain => "checkout-main",
            Alias::MergeMain => "merge-main",
            Alias::Commit { .. } => "commit",
            Alias::CommitAndPush { .. } => "commit-and-push",
            Alias::CheckoutBranch { .. } => "checkout-branch",
            Alias::DeleteBranch { .. } => "delete-branch",
            Alias::UndoAdd { .. } => "undo-add",
            Alias::UndoChange { .. } => "undo-change",
            Alias::Status { .. } => "status",
            Alias::Add { .. } => "add",
            Alias::Diff { .. } => "diff",
            Alias::Rebase { .. } => "rebase",
        }
    }

    /// Whether translating this alias resolves the main branch from config.
    pub fn reads_config(&self) -> bool {
        matches!(
            self,
            Alias::CheckoutMain | Alias::MergeMain | Alias::Diff { .. }
        )
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
