//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! gitshort keeps a single user-level file holding a fallback main branch
//! and per-repository main branch overrides. The translator only ever reads
//! it; the `config` subcommand is the only writer.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$GITSHORT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitshort/config.toml`
//! 3. `~/.gitshort/config.toml` (canonical write location)
//!
//! # Main branch resolution
//!
//! For a repository name, the main branch is the per-repo override if one
//! exists, else `default_branch`, else [`FALLBACK_MAIN_BRANCH`].
//!
//! # Example
//!
//! ```no_run
//! use gitshort::core::config::Config;
//! use gitshort::core::types::RepoName;
//!
//! let config = Config::load().unwrap();
//! let repo = RepoName::new("test-repo").unwrap();
//! println!("main branch: {}", config.main_branch(&repo));
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::{BranchName, RepoName};

/// Main branch used when nothing is configured.
pub const FALLBACK_MAIN_BRANCH: &str = "main";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GITSHORT_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}'")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration plus where it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Parsed file contents (defaults when no file exists)
    pub file: FileConfig,
    /// Path the configuration was loaded from, if any
    path: Option<PathBuf>,
}

impl Config {
    /// Build a configuration directly from its values.
    pub fn new(file: FileConfig) -> Self {
        Self { file, path: None }
    }

    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_existing() {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        log::debug!("loaded config from {}", path.display());
        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    fn find_existing() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitshort/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".gitshort/config.toml"))
            .filter(|path| path.exists())
    }

    /// Where a write should go.
    ///
    /// The file the config was loaded from, else `$GITSHORT_CONFIG`, else
    /// `~/.gitshort/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if no location can be determined.
    pub fn write_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".gitshort/config.toml"))
    }

    /// Validate and persist the configuration atomically.
    ///
    /// Creates parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the file cannot be written.
    pub fn save(&mut self) -> Result<PathBuf, ConfigError> {
        self.file.validate()?;
        let path = self.write_path()?;
        write_atomic(&path, &self.file)?;
        self.path = Some(path.clone());
        Ok(path)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the configured fallback branch, if any.
    pub fn default_branch(&self) -> Option<&str> {
        self.file.default_branch.as_deref()
    }

    /// Get the override configured for a repository, if any.
    pub fn main_branch_override(&self, repo: &RepoName) -> Option<&str> {
        self.file.main_branches.get(repo.as_str()).map(String::as_str)
    }

    /// Resolve the main branch for a repository.
    pub fn main_branch(&self, repo: &RepoName) -> &str {
        self.main_branch_override(repo)
            .or_else(|| self.default_branch())
            .unwrap_or(FALLBACK_MAIN_BRANCH)
    }

    /// Get the path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // =========================================================================
    // Mutators (config subcommand only)
    // =========================================================================

    /// Set the fallback branch.
    pub fn set_default_branch(&mut self, branch: BranchName) {
        self.file.default_branch = Some(branch.into());
    }

    /// Set the main branch override for a repository.
    ///
    /// Returns the previous override, if any.
    pub fn set_main_branch(&mut self, repo: &RepoName, branch: BranchName) -> Option<String> {
        self.file
            .main_branches
            .insert(repo.as_str().to_string(), branch.into())
    }

    /// Remove the main branch override for a repository.
    ///
    /// Returns the removed override, if any.
    pub fn unset_main_branch(&mut self, repo: &RepoName) -> Option<String> {
        self.file.main_branches.remove(repo.as_str())
    }
}

/// Write a config file atomically (temp file in the same directory, then rename).
fn write_atomic<T: serde::Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_error(path))?;
        }
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

    let temp_path = path.with_extension("toml.tmp");
    let mut file = fs::File::create(&temp_path).map_err(write_error(&temp_path))?;
    file.write_all(contents.as_bytes())
        .map_err(write_error(&temp_path))?;
    file.sync_all().map_err(write_error(&temp_path))?;

    fs::rename(&temp_path, path).map_err(write_error(path))?;

    Ok(())
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError {
    let path = path.to_path_buf();
    move |source| ConfigError::WriteError { path, source }
}
