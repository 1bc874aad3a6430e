//! ui
//!
//! What the user sees on stdout and stderr.

pub mod output;
