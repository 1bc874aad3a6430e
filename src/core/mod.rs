//! core
//!
//! Configuration and validated domain types for gitshort.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BranchName, RepoName
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing keeps unvalidated names out of configuration
//! - Schemas are strict and self-describing

pub mod config;
pub mod types;
