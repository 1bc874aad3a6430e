//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run git in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--dry-run`: Print the command lines instead of running them
//!
//! Every alias is a first-level subcommand with a short visible alias
//! (`commit` / `c`, `checkout-branch` / `ch`, ...).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::translate::{OsFamily, RebaseAction};

/// gitshort - short aliases that expand into git command sequences
#[derive(Parser, Debug)]
#[command(name = "g")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run git as if started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the command lines instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Render commands for this OS family instead of the host's
    #[arg(long, global = true, value_enum, hide = true)]
    pub os: Option<OsFamily>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List branches
    #[command(name = "branch", visible_alias = "b")]
    Branch,

    /// Start the SSH agent and pull
    #[command(name = "pull", visible_alias = "l")]
    Pull,

    /// Fetch from the default remote
    #[command(name = "fetch", visible_alias = "f")]
    Fetch,

    /// Undo the last commit and recommit everything with the same message
    #[command(
        name = "redo",
        visible_alias = "edo",
        long_about = "Undo the last commit and recommit everything with the same message.\n\n\
            Reads the previous commit message, soft-resets the last commit, stages \
            all changes and commits again with the original message. Useful after \
            fixing something the last commit missed."
    )]
    Redo,

    /// Show the most recent log entries
    #[command(name = "log", visible_alias = "lg")]
    Log {
        /// Number of entries to show
        #[arg(
            value_name = "N",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        count: u32,
    },

    /// Check out the main branch of this repository
    #[command(
        name = "checkout-main",
        visible_alias = "m",
        long_about = "Check out the main branch of this repository.\n\n\
            The branch is the per-repository override from the config file if one \
            exists, else the configured default branch, else 'main'.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Switch back to main after finishing a feature
    g m

    # Use 'master' for this repository from now on
    g config main-branch master"
    )]
    CheckoutMain,

    /// Merge the main branch of this repository into the current branch
    #[command(name = "merge-main", visible_alias = "mm")]
    MergeMain,

    /// Commit staged changes
    #[command(
        name = "commit",
        visible_alias = "c",
        long_about = "Commit staged changes.\n\n\
            All MESSAGE words are joined with single spaces into one commit message, \
            so quoting is optional. With --push the SSH agent is started first and \
            the commit is pushed afterwards.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Commit without quoting the message
    g c fix flaky retry test

    # Skip hooks and push in one go
    g c -np hotfix for login redirect"
    )]
    Commit {
        /// Commit message words
        #[arg(value_name = "MESSAGE", required = true, num_args = 1..)]
        message: Vec<String>,

        /// Skip commit hooks
        #[arg(short = 'n', long)]
        no_verify: bool,

        /// Push after committing
        #[arg(short, long)]
        push: bool,
    },

    /// Commit staged changes and push
    #[command(name = "commit-and-push", visible_alias = "cp")]
    CommitAndPush {
        /// Commit message words
        #[arg(value_name = "MESSAGE", required = true, num_args = 1..)]
        message: Vec<String>,

        /// Skip commit hooks
        #[arg(short = 'n', long)]
        no_verify: bool,
    },

    /// Check out a branch
    #[command(name = "checkout-branch", visible_alias = "ch")]
    CheckoutBranch {
        /// Branch to check out
        #[arg(value_name = "BRANCH")]
        branch: String,

        /// Create the branch first
        #[arg(short = 'n', long)]
        new_branch: bool,

        #[arg(hide = true)]
        extra: Vec<String>,
    },

    /// Delete a branch
    #[command(name = "delete-branch", visible_alias = "bd")]
    DeleteBranch {
        /// Branch to delete
        #[arg(value_name = "BRANCH")]
        branch: String,

        /// Delete even if not fully merged
        #[arg(short, long)]
        force: bool,

        #[arg(hide = true)]
        extra: Vec<String>,
    },

    /// Unstage files
    #[command(name = "undo-add", visible_alias = "ua")]
    UndoAdd {
        /// Files to unstage
        #[arg(value_name = "FILE", required = true, num_args = 1..)]
        files: Vec<String>,
    },

    /// Discard working tree changes to files
    #[command(name = "undo-change", visible_alias = "uc")]
    UndoChange {
        /// Files to restore
        #[arg(value_name = "FILE", required = true, num_args = 1..)]
        files: Vec<String>,
    },

    /// Show working tree status
    #[command(name = "status", visible_alias = "s")]
    Status {
        /// Restrict status to these files
        #[arg(value_name = "FILE")]
        files: Vec<String>,
    },

    /// Stage files (everything when none are given)
    #[command(name = "add", visible_alias = "a")]
    Add {
        /// Files to stage
        #[arg(value_name = "FILE")]
        files: Vec<String>,
    },

    /// Show changes
    #[command(
        name = "diff",
        visible_alias = "d",
        after_help = "\
WORKFLOW EXAMPLES:
    # Everything not yet staged
    g d

    # What this branch changes compared to main, ignoring whitespace
    g d -m -w

    # Changes to one file since the previous commit
    g d -c src/lib.rs"
    )]
    Diff {
        /// Restrict the diff to these files
        #[arg(value_name = "FILE")]
        files: Vec<String>,

        /// Diff against the main branch
        #[arg(short, long)]
        main: bool,

        /// Diff against the previous commit
        #[arg(short = 'c', long = "commit")]
        prev_commit: bool,

        /// Ignore whitespace changes
        #[arg(short = 'w', long = "whitespace")]
        ignore_whitespace: bool,
    },

    /// Abort (a) or continue (c) a rebase
    #[command(name = "rebase", visible_alias = "rb")]
    Rebase {
        /// a = abort, c = continue
        #[arg(value_enum)]
        action: RebaseAction,
    },

    /// Show or change gitshort configuration
    #[command(
        name = "config",
        after_help = "\
WORKFLOW EXAMPLES:
    # Most repositories use 'develop'
    g config default-branch develop

    # ...except this one
    g config main-branch main

    # Inspect the result
    g config show"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    g completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    g completion zsh >> ~/.zshrc

    # Fish
    g completion fish > ~/.config/fish/completions/g.fish

    # PowerShell
    g completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommand actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the loaded configuration
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the fallback main branch
    DefaultBranch {
        /// Branch name
        branch: String,
    },
    /// Set the main branch for the current repository
    MainBranch {
        /// Branch name
        branch: String,
    },
    /// Remove the main branch override for the current repository
    UnsetMainBranch,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
