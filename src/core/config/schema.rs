//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: every configured branch must
//! be a valid branch name, and repository keys cannot be blank.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::BranchName;

/// Persisted gitshort settings.
///
/// # Example
///
/// ```toml
/// default_branch = "develop"
///
/// [main_branches]
/// legacy-service = "master"
/// website = "trunk"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Fallback main branch for repositories without an override
    pub default_branch: Option<String>,

    /// Repository name -> main branch override
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub main_branches: BTreeMap<String, String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(branch) = &self.default_branch {
            BranchName::new(branch.as_str()).map_err(|e| {
                ConfigError::InvalidValue(format!("invalid default_branch: {}", e))
            })?;
        }

        for (repo, branch) in &self.main_branches {
            if repo.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "main_branches keys cannot be empty".to_string(),
                ));
            }
            BranchName::new(branch.as_str()).map_err(|e| {
                ConfigError::InvalidValue(format!("invalid main branch for '{}': {}", repo, e))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let parsed: FileConfig = toml::from_str(
            r#"
            default_branch = "mainer"

            [main_branches]
            test-repo = "mainest"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.default_branch.as_deref(), Some("mainer"));
        assert_eq!(
            parsed.main_branches.get("test-repo").map(String::as_str),
            Some("mainest")
        );
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        let parsed: FileConfig = toml::from_str("").unwrap();
        assert_eq!(parsed, FileConfig::default());
    }

    #[test]
    fn unknown_fields_rejected() {
        let parsed: Result<FileConfig, _> = toml::from_str("trunk = \"main\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn invalid_branch_rejected() {
        let config = FileConfig {
            main_branches: BTreeMap::from([("repo".to_string(), "bad..name".to_string())]),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'repo'"));
    }

    #[test]
    fn blank_repo_key_rejected() {
        let config = FileConfig {
            main_branches: BTreeMap::from([(" ".to_string(), "main".to_string())]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_map_not_serialized() {
        let config = FileConfig {
            default_branch: Some("develop".to_string()),
            ..Default::default()
        };
        let out = toml::to_string_pretty(&config).unwrap();
        assert!(!out.contains("main_branches"));
        assert!(out.contains("default_branch = \"develop\""));
    }
}
