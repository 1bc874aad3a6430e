//! engine
//!
//! Runs one alias invocation end to end.
//!
//! # Lifecycle
//!
//! ```text
//! Alias -> Translate (queries git if needed) -> Render -> [Echo] -> Execute
//! ```
//!
//! # Invariants
//!
//! - Nothing is executed unless translation succeeded completely
//! - Lines are executed in order and execution stops at the first failure
//! - Configuration is read-only for the whole run

pub mod exec;

pub use exec::{ExecuteError, ExecuteResult, Executor, RecordingExecutor, ShellExecutor};

use std::path::PathBuf;

use anyhow::Result;

use crate::core::config::Config;
use crate::git::GitQuery;
use crate::translate::{Alias, OsFamily, Translation, Translator};
use crate::ui::output::{self, Verbosity};

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Print lines instead of running them.
    pub dry_run: bool,
    /// OS family commands are rendered for.
    pub os: OsFamily,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: None,
            quiet: false,
            dry_run: false,
            os: OsFamily::current(),
        }
    }
}

impl Context {
    /// Output verbosity implied by the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_quiet(self.quiet)
    }
}

/// Translate an alias and hand the result to an executor.
///
/// Echoes the lines first when the alias asks for it (`rebase`).
///
/// # Errors
///
/// Returns the translation error, or the first execution failure.
pub fn run_alias<Q, E>(
    ctx: &Context,
    config: &Config,
    git: &Q,
    executor: &mut E,
    alias: &Alias,
) -> Result<Translation>
where
    Q: GitQuery + ?Sized,
    E: Executor + ?Sized,
{
    let translator = Translator::new(config, git, ctx.os.shell());
    let translation = translator.translate(alias)?;

    if translation.echo {
        output::command_lines(&translation.lines, ctx.verbosity());
    }

    executor.execute(&translation.lines)?;
    Ok(translation)
}
