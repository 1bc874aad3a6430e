//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Alias subcommands are converted into a [`crate::translate::Alias`] and handed to
//! [`engine::run_alias`] together with the loaded configuration, a
//! process-backed git query runner and an executor (the real shell, or a
//! recorder for `--dry-run`).
//!
//! `config` and `completion` are handled here directly; they never produce
//! a command sequence.

mod completion;
mod config_cmd;

pub use completion::completion;
pub use config_cmd::{set_default_branch, set_main_branch, show, unset_main_branch};

use crate::cli::args::Command;
use crate::core::config::Config;
use crate::engine::{self, Context, RecordingExecutor, ShellExecutor};
use crate::git::ProcessGit;
use crate::translate::Alias;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    let alias = match command {
        Command::Config { action } => return config_cmd::config(ctx, action),
        Command::Completion { shell } => return completion::completion(shell),

        Command::Branch => Alias::Branch,
        Command::Pull => Alias::Pull,
        Command::Fetch => Alias::Fetch,
        Command::Redo => Alias::Redo,
        Command::Log { count } => Alias::Log { count },
        Command::CheckoutMain => Alias::CheckoutMain,
        Command::MergeMain => Alias::MergeMain,
        Command::Commit {
            message,
            no_verify,
            push,
        } => Alias::Commit {
            message,
            no_verify,
            push,
        },
        Command::CommitAndPush { message, no_verify } => {
            Alias::CommitAndPush { message, no_verify }
        }
        Command::CheckoutBranch {
            branch,
            new_branch,
            extra,
        } => Alias::CheckoutBranch {
            branch,
            new_branch,
            extra,
        },
        Command::DeleteBranch {
            branch,
            force,
            extra,
        } => Alias::DeleteBranch {
            branch,
            force,
            extra,
        },
        Command::UndoAdd { files } => Alias::UndoAdd { files },
        Command::UndoChange { files } => Alias::UndoChange { files },
        Command::Status { files } => Alias::Status { files },
        Command::Add { files } => Alias::Add { files },
        Command::Diff {
            files,
            main,
            prev_commit,
            ignore_whitespace,
        } => Alias::Diff {
            files,
            main,
            prev_commit,
            ignore_whitespace,
        },
        Command::Rebase { action } => Alias::Rebase { action },
    };

    run(ctx, &alias)
}

/// Translate and run one alias against the real repository.
fn run(ctx: &Context, alias: &Alias) -> Result<()> {
    let config = load_config_for(alias)?;
    let git = ProcessGit::new(ctx.cwd.clone());

    if ctx.dry_run {
        let mut recorder = RecordingExecutor::new();
        let translation = engine::run_alias(ctx, &config, &git, &mut recorder, alias)?;
        // Echoing aliases already printed their lines.
        if !translation.echo {
            output::command_lines(&recorder.lines, ctx.verbosity());
        }
        return Ok(());
    }

    let mut executor = ShellExecutor::new(ctx.os.shell(), ctx.cwd.clone());
    let translation = engine::run_alias(ctx, &config, &git, &mut executor, alias)?;
    log::debug!("{} finished", translation.alias);
    Ok(())
}

/// Load the config file for aliases that resolve a main branch; every other
/// alias runs on defaults without reading it.
fn load_config_for(alias: &Alias) -> Result<Config> {
    if alias.reads_config() {
        Config::load().context("Failed to load config")
    } else {
        log::debug!("{} does not read config", alias);
        Ok(Config::default())
    }
}
