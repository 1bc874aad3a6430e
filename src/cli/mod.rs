//! cli
//!
//! Command-line interface layer for gitshort.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialize logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`commands`], which turn aliases into [`crate::translate::Alias`] values
//! for the [`crate::engine`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::engine;
use crate::translate::{OsFamily, TranslateError};
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let ctx = engine::Context {
        cwd: cli.cwd.clone(),
        quiet: cli.quiet,
        dry_run: cli.dry_run,
        os: cli.os.unwrap_or_else(OsFamily::current),
    };
    log::debug!("rendering for {}", ctx.os.name());

    commands::dispatch(cli.command, &ctx)
}

/// Exit status for an error returned by [`run`].
///
/// Usage errors from translation share clap's status 2; everything else is 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<TranslateError>() {
        Some(e) if e.is_usage() => USAGE_EXIT_CODE,
        _ => 1,
    }
}

/// Exit status clap uses for usage errors.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Set up `env_logger`.
///
/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting to
/// warnings only.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).format_target(false);
    // A logger may already be installed when running under a test harness.
    let _ = builder.try_init();
}
