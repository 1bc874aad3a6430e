//! translate
//!
//! Alias-to-command-sequence translation.
//!
//! # Architecture
//!
//! The translator is the only part of gitshort with decision logic. Given an
//! [`Alias`], the read-only [`Config`], a [`GitQuery`] runner and the
//! [`ShellStyle`] of the host, it produces a [`Translation`]: the ordered
//! [`CommandSequence`] plus the lines rendered for the host shell.
//!
//! ```text
//! Alias -> [query git if needed] -> CommandSequence -> ShellStyle::render -> lines
//! ```
//!
//! # Invariants
//!
//! - Configuration is never mutated here
//! - Step order is exactly the order documented per alias
//! - A failed query aborts translation; no partial sequence is returned
//! - Translating the same alias twice against the same query responses
//!   yields identical output
//!
//! # Example
//!
//! ```
//! use gitshort::core::config::Config;
//! use gitshort::git::mock::FakeGit;
//! use gitshort::translate::{Alias, OsFamily, Translator};
//!
//! let config = Config::default();
//! let git = FakeGit::new().respond("git@github.com:acme/test-repo.git");
//! let translator = Translator::new(&config, &git, OsFamily::Linux.shell());
//!
//! let translation = translator.translate(&Alias::CheckoutMain).unwrap();
//! assert_eq!(translation.lines, vec!["git checkout main"]);
//! ```

pub mod alias;
pub mod sequence;
pub mod shell;

pub use alias::{Alias, RebaseAction};
pub use sequence::{CommandSequence, Step};
pub use shell::{OsFamily, ShellStyle};

use thiserror::Error;

use crate::core::config::Config;
use crate::git::{GitError, GitQuery};

/// Final step of every commit sequence.
pub const SUCCESS_NOTIFICATION: &str = "echo Success!";

/// Diff target selected by `diff -c`.
pub const PREVIOUS_COMMIT: &str = "HEAD~1";

/// Errors from translating an alias.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A required variadic argument was empty.
    #[error("Argument \"{name}\" requires at least 1 argument, got 0")]
    MissingArgument {
        /// Usage name of the argument
        name: &'static str,
    },

    /// An argument had an unusable value.
    #[error("Argument \"{name}\" must be {expected}, got {value}")]
    InvalidArgument {
        /// Usage name of the argument
        name: &'static str,
        /// What was expected
        expected: &'static str,
        /// What was given
        value: String,
    },

    /// More positional arguments than the alias accepts.
    ///
    /// Carries the branch that was parsed before the surplus.
    #[error("Unprocessed extra args: [{}]", extra.join(" "))]
    ExtraArgs {
        /// The branch argument that was accepted
        branch: String,
        /// Arguments left over after it
        extra: Vec<String>,
    },

    /// A git query needed to build the sequence failed.
    #[error("failed to get {what}: {cause}")]
    Query {
        /// What was being looked up
        what: &'static str,
        /// The underlying failure
        cause: GitError,
    },
}

impl TranslateError {
    /// Whether this is a usage error (bad arguments) rather than a failed query.
    pub fn is_usage(&self) -> bool {
        !matches!(self, TranslateError::Query { .. })
    }
}

/// Result of translating one alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Name of the alias that was translated
    pub alias: &'static str,
    /// Steps in execution order
    pub sequence: CommandSequence,
    /// Lines rendered for the host shell
    pub lines: Vec<String>,
    /// Whether the lines should be echoed to stdout before running
    pub echo: bool,
}

/// Translates aliases into command sequences.
#[derive(Debug)]
pub struct Translator<'a, Q: GitQuery + ?Sized> {
    config: &'a Config,
    git: &'a Q,
    shell: ShellStyle,
}

impl<'a, Q: GitQuery + ?Sized> Translator<'a, Q> {
    /// Create a translator over read-only configuration.
    pub fn new(config: &'a Config, git: &'a Q, shell: ShellStyle) -> Self {
        Self { config, git, shell }
    }

    /// Translate an alias into its command sequence.
    ///
    /// # Errors
    ///
    /// Returns a usage error for bad arguments, or `TranslateError::Query`
    /// if a git query the alias depends on fails.
    pub fn translate(&self, alias: &Alias) -> Result<Translation, TranslateError> {
        let sequence = self.sequence(alias)?;
        let lines = self.shell.render(&sequence);
        log::debug!("{} -> [{}], {} line(s)", alias, sequence, lines.len());

        Ok(Translation {
            alias: alias.name(),
            sequence,
            lines,
            echo: matches!(alias, Alias::Rebase { .. }),
        })
    }

    /// Build the shell-independent step list for an alias.
    ///
    /// # Errors
    ///
    /// Same as [`Translator::translate`].
    pub fn sequence(&self, alias: &Alias) -> Result<CommandSequence, TranslateError> {
        let seq = CommandSequence::new();
        let seq = match alias {
            Alias::Branch => seq.run("git branch"),
            Alias::Pull => seq.start_agent().run("git pull"),
            Alias::Fetch => seq.run("git fetch"),
            Alias::Redo => self.redo()?,
            Alias::Log { count } => {
                if *count == 0 {
                    return Err(TranslateError::InvalidArgument {
                        name: "N",
                        expected: "a positive integer",
                        value: count.to_string(),
                    });
                }
                seq.run(format!("git log -n {}", count))
            }
            Alias::CheckoutMain => seq.run(format!("git checkout {}", self.main_branch()?)),
            Alias::MergeMain => seq.run(format!("git merge {}", self.main_branch()?)),
            Alias::Commit {
                message,
                no_verify,
                push,
            } => self.commit(message, *no_verify, *push)?,
            Alias::CommitAndPush { message, no_verify } => {
                self.commit(message, *no_verify, true)?
            }
            Alias::CheckoutBranch {
                branch,
                new_branch,
                extra,
            } => {
                reject_extra(branch, extra)?;
                if *new_branch {
                    seq.run(format!("git checkout -b {}", branch))
                } else {
                    seq.run(format!("git checkout {}", branch))
                }
            }
            Alias::DeleteBranch {
                branch,
                force,
                extra,
            } => {
                reject_extra(branch, extra)?;
                let flag = if *force { "-D" } else { "-d" };
                seq.run(format!("git branch {} {}", flag, branch))
            }
            Alias::UndoAdd { files } => {
                require("FILE", files)?;
                seq.run(format!("git reset {}", files.join(" ")))
            }
            Alias::UndoChange { files } => {
                require("FILE", files)?;
                seq.run(format!("git checkout -- {}", files.join(" ")))
            }
            Alias::Status { files } => seq.run(join_words("git status", files)),
            Alias::Add { files } => {
                if files.is_empty() {
                    seq.run("git add .")
                } else {
                    seq.run(join_words("git add", files))
                }
            }
            Alias::Diff {
                files,
                main,
                prev_commit,
                ignore_whitespace,
            } => self.diff(files, *main, *prev_commit, *ignore_whitespace)?,
            Alias::Rebase { action } => match action {
                RebaseAction::Abort => seq.run("git rebase --abort"),
                RebaseAction::Continue => seq.run("git rebase --continue"),
            },
        };
        Ok(seq)
    }

    fn redo(&self) -> Result<CommandSequence, TranslateError> {
        let message = self
            .git
            .last_commit_message()
            .map_err(|cause| TranslateError::Query {
                what: "previous commit message",
                cause,
            })?;
        let message = message.trim();

        Ok(CommandSequence::new()
            .run("git reset --soft HEAD~1")
            .run("git add .")
            .run(format!("git commit -m {}", self.shell.quote(message))))
    }

    fn main_branch(&self) -> Result<String, TranslateError> {
        let repo = self.git.repo_name().map_err(|cause| TranslateError::Query {
            what: "repository name",
            cause,
        })?;
        let branch = self.config.main_branch(&repo);
        log::debug!("main branch for {} is {}", repo, branch);
        Ok(branch.to_string())
    }

    fn commit(
        &self,
        message: &[String],
        no_verify: bool,
        push: bool,
    ) -> Result<CommandSequence, TranslateError> {
        require("MESSAGE", message)?;

        let mut commit = String::from("git commit");
        if no_verify {
            commit.push_str(" --no-verify");
        }
        commit.push_str(" -m ");
        commit.push_str(&self.shell.quote(&message.join(" ")));

        let mut seq = CommandSequence::new();
        if push {
            seq.push(Step::StartAgent);
        }
        seq.push(Step::Run(commit));
        if push {
            seq.push(Step::run("git push"));
        }
        seq.push(Step::run(SUCCESS_NOTIFICATION));
        Ok(seq)
    }

    fn diff(
        &self,
        files: &[String],
        main: bool,
        prev_commit: bool,
        ignore_whitespace: bool,
    ) -> Result<CommandSequence, TranslateError> {
        // Resolved for every diff so a repository problem aborts before anything runs.
        let main_branch = self.main_branch()?;

        let mut words = vec!["git".to_string(), "diff".to_string()];
        if ignore_whitespace {
            words.push("-w".to_string());
        }
        if main {
            words.push(main_branch);
        } else if prev_commit {
            words.push(PREVIOUS_COMMIT.to_string());
        }
        words.push("--".to_string());
        words.extend(files.iter().cloned());

        Ok(CommandSequence::new().run(words.join(" ")))
    }
}

fn require(name: &'static str, values: &[String]) -> Result<(), TranslateError> {
    if values.is_empty() {
        return Err(TranslateError::MissingArgument { name });
    }
    Ok(())
}

fn reject_extra(branch: &str, extra: &[String]) -> Result<(), TranslateError> {
    if branch.is_empty() {
        return Err(TranslateError::MissingArgument { name: "BRANCH" });
    }
    if !extra.is_empty() {
        return Err(TranslateError::ExtraArgs {
            branch: branch.to_string(),
            extra: extra.to_vec(),
        });
    }
    Ok(())
}

fn join_words(command: &str, args: &[String]) -> String {
    if args.is_empty() {
        command.to_string()
    } else {
        format!("{} {}", command, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FileConfig;
    use crate::git::mock::FakeGit;
    use crate::git::{LAST_MESSAGE_ARGS, REMOTE_URL_ARGS};
    use std::collections::BTreeMap;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn steps(config: &Config, git: &FakeGit, alias: Alias) -> Vec<Step> {
        Translator::new(config, git, ShellStyle::Posix)
            .sequence(&alias)
            .unwrap()
            .steps()
            .to_vec()
    }

    fn run(s: &str) -> Step {
        Step::run(s)
    }

    fn configured() -> Config {
        Config::new(FileConfig {
            default_branch: Some("mainer".to_string()),
            main_branches: BTreeMap::from([("test-repo".to_string(), "mainest".to_string())]),
        })
    }

    // =========================================================================
    // Simple aliases
    // =========================================================================

    #[test]
    fn simple_aliases() {
        let config = Config::default();
        let git = FakeGit::new();
        assert_eq!(steps(&config, &git, Alias::Branch), vec![run("git branch")]);
        assert_eq!(steps(&config, &git, Alias::Fetch), vec![run("git fetch")]);
        assert_eq!(
            steps(&config, &git, Alias::Pull),
            vec![Step::StartAgent, run("git pull")]
        );
        assert!(git.calls().is_empty());
    }

    #[test]
    fn log_count() {
        let config = Config::default();
        let git = FakeGit::new();
        assert_eq!(
            steps(&config, &git, Alias::Log { count: 1 }),
            vec![run("git log -n 1")]
        );
        assert_eq!(
            steps(&config, &git, Alias::Log { count: 4 }),
            vec![run("git log -n 4")]
        );
    }

    #[test]
    fn log_rejects_zero() {
        let config = Config::default();
        let git = FakeGit::new();
        let err = Translator::new(&config, &git, ShellStyle::Posix)
            .translate(&Alias::Log { count: 0 })
            .unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("positive integer"));
    }

    // =========================================================================
    // Redo
    // =========================================================================

    #[test]
    fn redo_recommits_with_previous_message() {
        let config = Config::default();
        let git = FakeGit::new().respond("my previous commit message\n\n");
        assert_eq!(
            steps(&config, &git, Alias::Redo),
            vec![
                run("git reset --soft HEAD~1"),
                run("git add ."),
                run("git commit -m \"my previous commit message\""),
            ]
        );
        assert_eq!(git.calls(), vec![LAST_MESSAGE_ARGS.to_vec()]);
    }

    #[test]
    fn redo_query_failure() {
        let config = Config::default();
        let git = FakeGit::new().fail("oops");
        let err = Translator::new(&config, &git, ShellStyle::Posix)
            .translate(&Alias::Redo)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to get previous commit message: failed to execute shell command: oops"
        );
        assert!(!err.is_usage());
    }

    // =========================================================================
    // Main branch resolution
    // =========================================================================

    #[test]
    fn checkout_main_resolution() {
        let repo_git = || FakeGit::new().respond("test-repo");

        let git = repo_git();
        assert_eq!(
            steps(&configured(), &git, Alias::CheckoutMain),
            vec![run("git checkout mainest")]
        );
        assert_eq!(git.calls(), vec![REMOTE_URL_ARGS.to_vec()]);

        let mut only_default = configured();
        only_default.file.main_branches.clear();
        assert_eq!(
            steps(&only_default, &repo_git(), Alias::CheckoutMain),
            vec![run("git checkout mainer")]
        );

        assert_eq!(
            steps(&Config::default(), &repo_git(), Alias::CheckoutMain),
            vec![run("git checkout main")]
        );
    }

    #[test]
    fn merge_main_resolution() {
        let repo_git = || FakeGit::new().respond("https://example.com/acme/test-repo.git");
        assert_eq!(
            steps(&configured(), &repo_git(), Alias::MergeMain),
            vec![run("git merge mainest")]
        );
        assert_eq!(
            steps(&Config::default(), &repo_git(), Alias::MergeMain),
            vec![run("git merge main")]
        );
    }

    #[test]
    fn repo_name_failure_aborts() {
        let config = configured();
        let git = FakeGit::new().fail("no remote").fail("not a git repository");
        let err = Translator::new(&config, &git, ShellStyle::Posix)
            .translate(&Alias::MergeMain)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to get repository name: failed to execute shell command: not a git repository"
        );
    }

    // =========================================================================
    // Commit
    // =========================================================================

    #[test]
    fn commit_variants() {
        let config = Config::default();
        let git = FakeGit::new();
        let commit = |no_verify, push| Alias::Commit {
            message: words("did things"),
            no_verify,
            push,
        };

        assert_eq!(
            steps(&config, &git, commit(false, false)),
            vec![run("git commit -m \"did things\""), run(SUCCESS_NOTIFICATION)]
        );
        assert_eq!(
            steps(&config, &git, commit(true, false)),
            vec![
                run("git commit --no-verify -m \"did things\""),
                run(SUCCESS_NOTIFICATION)
            ]
        );
        assert_eq!(
            steps(&config, &git, commit(false, true)),
            vec![
                Step::StartAgent,
                run("git commit -m \"did things\""),
                run("git push"),
                run(SUCCESS_NOTIFICATION)
            ]
        );
        assert_eq!(
            steps(&config, &git, commit(true, true)),
            vec![
                Step::StartAgent,
                run("git commit --no-verify -m \"did things\""),
                run("git push"),
                run(SUCCESS_NOTIFICATION)
            ]
        );
    }

    #[test]
    fn commit_and_push_forces_push() {
        let config = Config::default();
        let git = FakeGit::new();
        assert_eq!(
            steps(
                &config,
                &git,
                Alias::CommitAndPush {
                    message: words("did things"),
                    no_verify: false
                }
            ),
            steps(
                &config,
                &git,
                Alias::Commit {
                    message: words("did things"),
                    no_verify: false,
                    push: true
                }
            )
        );
    }

    #[test]
    fn commit_requires_message() {
        let config = Config::default();
        let git = FakeGit::new();
        let err = Translator::new(&config, &git, ShellStyle::Posix)
            .translate(&Alias::Commit {
                message: vec![],
                no_verify: false,
                push: false,
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Argument \"MESSAGE\" requires at least 1 argument, got 0"
        );
    }

    #[test]
    fn commit_message_is_escaped() {
        let config = Config::default();
        let git = FakeGit::new();
        let seq = steps(
            &config,
            &git,
            Alias::Commit {
                message: vec!["fix".to_string(), "\"quoted\"".to_string()],
                no_verify: false,
                push: false,
            },
        );
        assert_eq!(seq[0], run("git commit -m \"fix \\\"quoted\\\"\""));
    }

    // =========================================================================
    // Branches
    // =========================================================================

    #[test]
    fn checkout_branch() {
        let config = Config::default();
        let git = FakeGit::new();
        let checkout = |new_branch| Alias::CheckoutBranch {
            branch: "tree".to_string(),
            new_branch,
            extra: vec![],
        };
        assert_eq!(
            steps(&config, &git, checkout(false)),
            vec![run("git checkout tree")]
        );
        assert_eq!(
            steps(&config, &git, checkout(true)),
            vec![run("git checkout -b tree")]
        );
    }

    #[test]
    fn delete_branch() {
        let config = Config::default();
        let git = FakeGit::new();
        let delete = |force| Alias::DeleteBranch {
            branch: "tree".to_string(),
            force,
            extra: vec![],
        };
        assert_eq!(
            steps(&config, &git, delete(false)),
            vec![run("git branch -d tree")]
        );
        assert_eq!(
            steps(&config, &git, delete(true)),
            vec![run("git branch -D tree")]
        );
    }

    #[test]
    fn extra_branch_args_rejected_with_parsed_branch() {
        let config = Config::default();
        let git = FakeGit::new();
        let translator = Translator::new(&config, &git, ShellStyle::Posix);

        for alias in [
            Alias::CheckoutBranch {
                branch: "tree".to_string(),
                new_branch: false,
                extra: words("limb"),
            },
            Alias::DeleteBranch {
                branch: "tree".to_string(),
                force: false,
                extra: words("limb"),
            },
        ] {
            let err = translator.translate(&alias).unwrap_err();
            assert_eq!(err.to_string(), "Unprocessed extra args: [limb]");
            assert_eq!(
                err,
                TranslateError::ExtraArgs {
                    branch: "tree".to_string(),
                    extra: words("limb"),
                }
            );
        }
    }

    // =========================================================================
    // File aliases
    // =========================================================================

    #[test]
    fn file_aliases() {
        let config = Config::default();
        let git = FakeGit::new();
        let files = words("file.one some/where/file.2");

        assert_eq!(
            steps(&config, &git, Alias::UndoAdd { files: files.clone() }),
            vec![run("git reset file.one some/where/file.2")]
        );
        assert_eq!(
            steps(&config, &git, Alias::UndoChange { files: files.clone() }),
            vec![run("git checkout -- file.one some/where/file.2")]
        );
        assert_eq!(
            steps(&config, &git, Alias::Status { files: files.clone() }),
            vec![run("git status file.one some/where/file.2")]
        );
        assert_eq!(
            steps(&config, &git, Alias::Status { files: vec![] }),
            vec![run("git status")]
        );
        assert_eq!(
            steps(&config, &git, Alias::Add { files }),
            vec![run("git add file.one some/where/file.2")]
        );
        assert_eq!(
            steps(&config, &git, Alias::Add { files: vec![] }),
            vec![run("git add .")]
        );
    }

    #[test]
    fn undo_aliases_require_files() {
        let config = Config::default();
        let git = FakeGit::new();
        let translator = Translator::new(&config, &git, ShellStyle::Posix);
        for alias in [
            Alias::UndoAdd { files: vec![] },
            Alias::UndoChange { files: vec![] },
        ] {
            assert_eq!(
                translator.translate(&alias).unwrap_err(),
                TranslateError::MissingArgument { name: "FILE" }
            );
        }
    }

    // =========================================================================
    // Diff
    // =========================================================================

    fn diff(files: &str, main: bool, prev_commit: bool, ignore_whitespace: bool) -> Alias {
        Alias::Diff {
            files: words(files),
            main,
            prev_commit,
            ignore_whitespace,
        }
    }

    fn test_repo() -> FakeGit {
        FakeGit::new().respond("test-repo")
    }

    #[test]
    fn diff_targets() {
        let config = configured();

        let git = test_repo();
        assert_eq!(
            steps(&config, &git, diff("", false, false, false)),
            vec![run("git diff --")]
        );
        assert_eq!(git.calls(), vec![REMOTE_URL_ARGS.to_vec()]);

        assert_eq!(
            steps(&config, &test_repo(), diff("this.file that/file/txt", false, false, false)),
            vec![run("git diff -- this.file that/file/txt")]
        );
        assert_eq!(
            steps(&config, &test_repo(), diff("", false, true, false)),
            vec![run("git diff HEAD~1 --")]
        );

        let git = test_repo();
        assert_eq!(
            steps(&config, &git, diff("", true, false, false)),
            vec![run("git diff mainest --")]
        );
        assert_eq!(git.calls(), vec![REMOTE_URL_ARGS.to_vec()]);
    }

    #[test]
    fn diff_aborts_when_repo_name_query_fails() {
        let config = Config::default();
        for alias in [
            diff("", false, false, false),
            diff("a.rs", false, true, true),
            diff("", true, false, false),
        ] {
            let git = FakeGit::new()
                .fail("not a git repository")
                .fail("not a git repository");
            let err = Translator::new(&config, &git, ShellStyle::Posix)
                .translate(&alias)
                .unwrap_err();

            assert!(matches!(
                err,
                TranslateError::Query {
                    what: "repository name",
                    ..
                }
            ));
            assert!(err
                .to_string()
                .starts_with("failed to get repository name: failed to execute shell command:"));
            assert_eq!(git.calls()[0], REMOTE_URL_ARGS.to_vec());
        }
    }

    #[test]
    fn diff_main_wins_over_previous_commit() {
        assert_eq!(
            steps(&Config::default(), &test_repo(), diff("a.rs", true, true, false)),
            vec![run("git diff main -- a.rs")]
        );
    }

    #[test]
    fn diff_whitespace_is_independent_of_target() {
        let config = Config::default();
        assert_eq!(
            steps(&config, &test_repo(), diff("", false, false, true)),
            vec![run("git diff -w --")]
        );
        assert_eq!(
            steps(&config, &test_repo(), diff("", false, true, true)),
            vec![run("git diff -w HEAD~1 --")]
        );
        assert_eq!(
            steps(&config, &test_repo(), diff("x", true, false, true)),
            vec![run("git diff -w main -- x")]
        );
    }

    // =========================================================================
    // Rebase
    // =========================================================================

    #[test]
    fn rebase_actions_echo() {
        let config = Config::default();
        let git = FakeGit::new();
        let translator = Translator::new(&config, &git, ShellStyle::Posix);

        let abort = translator
            .translate(&Alias::Rebase {
                action: RebaseAction::Abort,
            })
            .unwrap();
        assert!(abort.echo);
        assert_eq!(abort.lines, vec!["git rebase --abort"]);

        let cont = translator
            .translate(&Alias::Rebase {
                action: RebaseAction::Continue,
            })
            .unwrap();
        assert_eq!(cont.lines, vec!["git rebase --continue"]);

        assert!(!translator.translate(&Alias::Branch).unwrap().echo);
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    #[test]
    fn translation_is_repeatable() {
        let config = configured();
        let alias = diff("x", true, false, true);
        let first = Translator::new(&config, &FakeGit::new().respond("test-repo"), ShellStyle::Windows)
            .translate(&alias)
            .unwrap();
        let second = Translator::new(&config, &FakeGit::new().respond("test-repo"), ShellStyle::Windows)
            .translate(&alias)
            .unwrap();
        assert_eq!(first, second);
    }
}
