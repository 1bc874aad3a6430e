//! config command - Show or change the main branch configuration

use crate::cli::args::ConfigAction;
use crate::core::config::Config;
use crate::core::types::{BranchName, RepoName};
use crate::engine::Context;
use crate::git::{GitQuery, ProcessGit};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Run a config action against the user's config file.
pub fn config(ctx: &Context, action: ConfigAction) -> Result<()> {
    let mut config = Config::load().context("Failed to load config")?;
    let verbosity = ctx.verbosity();

    match action {
        ConfigAction::Show { json } => {
            output::print(show(&config, json)?, verbosity);
        }
        ConfigAction::DefaultBranch { branch } => {
            set_default_branch(&mut config, &branch)?;
            let path = config.save().context("Failed to write config")?;
            log::debug!("wrote {}", path.display());
            output::print(format!("Set default_branch = {}", branch), verbosity);
        }
        ConfigAction::MainBranch { branch } => {
            let git = ProcessGit::new(ctx.cwd.clone());
            let repo = set_main_branch(&mut config, &git, &branch)?;
            config.save().context("Failed to write config")?;
            output::print(format!("Set main branch for {} = {}", repo, branch), verbosity);
        }
        ConfigAction::UnsetMainBranch => {
            let git = ProcessGit::new(ctx.cwd.clone());
            let (repo, removed) = unset_main_branch(&mut config, &git)?;
            match removed {
                Some(branch) => {
                    config.save().context("Failed to write config")?;
                    output::print(
                        format!("Removed main branch for {} (was {})", repo, branch),
                        verbosity,
                    );
                }
                None => output::warn(
                    format!("no main branch configured for {}", repo),
                    verbosity,
                ),
            }
        }
    }

    Ok(())
}

/// Render the configuration as TOML (or JSON) with a header naming its source.
pub fn show(config: &Config, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(&config.file).context("Failed to serialize config");
    }

    let source = match config.loaded_from() {
        Some(path) => format!("# loaded from {}", path.display()),
        None => "# no config file found, using defaults".to_string(),
    };
    let body = toml::to_string_pretty(&config.file).context("Failed to serialize config")?;
    let body = body.trim_end();
    if body.is_empty() {
        Ok(source)
    } else {
        Ok(format!("{}\n{}", source, body))
    }
}

/// Validate and set the fallback main branch.
pub fn set_default_branch(config: &mut Config, branch: &str) -> Result<()> {
    let branch = BranchName::new(branch).context("Invalid branch name")?;
    config.set_default_branch(branch);
    Ok(())
}

/// Validate and set the main branch of the repository `git` runs in.
///
/// Returns the repository the override was recorded for.
pub fn set_main_branch<Q: GitQuery + ?Sized>(
    config: &mut Config,
    git: &Q,
    branch: &str,
) -> Result<RepoName> {
    let branch = BranchName::new(branch).context("Invalid branch name")?;
    let repo = git.repo_name().context("Failed to get repository name")?;
    if let Some(previous) = config.set_main_branch(&repo, branch) {
        log::debug!("replacing main branch {} for {}", previous, repo);
    }
    Ok(repo)
}

/// Remove the main branch override of the repository `git` runs in.
///
/// Returns the repository and the removed branch, if there was one.
pub fn unset_main_branch<Q: GitQuery + ?Sized>(
    config: &mut Config,
    git: &Q,
) -> Result<(RepoName, Option<String>)> {
    let repo = git.repo_name().context("Failed to get repository name")?;
    let removed = config.unset_main_branch(&repo);
    Ok((repo, removed))
}
