//! translate::sequence
//!
//! Ordered command sequences produced by the translator.
//!
//! Order is significant: later steps may rely on the side effects of earlier
//! ones (staging before committing, the agent before pushing).

use std::fmt;

/// One step of a command sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// A command line handed to the shell as-is.
    Run(String),
    /// Start the SSH authentication agent and load keys.
    ///
    /// The actual command line depends on the shell it is rendered for.
    StartAgent,
}

impl Step {
    /// Create a `Run` step.
    pub fn run(command: impl Into<String>) -> Self {
        Step::Run(command.into())
    }

    /// The command text of a `Run` step.
    pub fn command(&self) -> Option<&str> {
        match self {
            Step::Run(command) => Some(command),
            Step::StartAgent => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Run(command) => f.write_str(command),
            Step::StartAgent => f.write_str("<start ssh agent>"),
        }
    }
}

/// Ordered list of steps for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CommandSequence {
    steps: Vec<Step>,
}

impl CommandSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command line.
    pub fn run(mut self, command: impl Into<String>) -> Self {
        self.steps.push(Step::run(command));
        self
    }

    /// Append the agent step.
    pub fn start_agent(mut self) -> Self {
        self.steps.push(Step::StartAgent);
        self
    }

    /// Append a step.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// The steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether any step carries a double-quoted argument.
    pub fn has_quoted_argument(&self) -> bool {
        self.steps
            .iter()
            .filter_map(Step::command)
            .any(|command| command.contains('"'))
    }
}

impl FromIterator<Step> for CommandSequence {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CommandSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
