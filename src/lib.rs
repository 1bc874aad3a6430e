//! gitshort - short aliases that expand into git command sequences
//!
//! `g c fix the thing -p` becomes "start the SSH agent, commit with the
//! message `fix the thing`, push, report success". gitshort turns a fixed set
//! of short aliases into ordered shell command sequences, consulting git
//! (last commit message, repository name) where the sequence depends on it.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`translate`] - Alias-to-command-sequence translation and per-OS rendering
//! - [`engine`] - Runs a translation through an executor
//! - [`core`] - Configuration and validated domain types
//! - [`git`] - Read-only git queries
//! - [`ui`] - User-facing output
//!
//! # Invariants
//!
//! 1. Translation is deterministic for a given alias, config and query output
//! 2. Configuration is read-only during translation
//! 3. Nothing runs unless translation fully succeeded
//! 4. Execution stops at the first failing command

pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
pub mod translate;
pub mod ui;
