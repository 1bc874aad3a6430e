//! translate::shell
//!
//! Per-OS rendering of command sequences.
//!
//! # Design
//!
//! A [`ShellStyle`] is picked once per run from the [`OsFamily`] and owns
//! every OS-dependent decision: how an argument is quoted, what the agent
//! step looks like, whether steps are wrapped in a `cmd` invocation, and how
//! the executor hands a line to the host.
//!
//! - **Posix**: all steps are joined with ` && ` into one line, so an agent
//!   started by the first step is still there for `git push`, and execution
//!   stops at the first failing step.
//! - **Windows**: one line per step. If any step carries a quoted argument,
//!   every non-agent step is wrapped as `cmd /S /C "<step>"` so `cmd` keeps
//!   the quoting intact. The executor hands each line to its own
//!   `cmd /S /C`, so `& | < > ^` outside quotes at either level are escaped
//!   with `^`.

use super::sequence::{CommandSequence, Step};

/// Operating system family the process runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum OsFamily {
    Linux,
    Macos,
    Windows,
}

impl OsFamily {
    /// Detect the family of the running process.
    ///
    /// Unix-likes other than macOS are treated as Linux.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => OsFamily::Windows,
            "macos" => OsFamily::Macos,
            _ => OsFamily::Linux,
        }
    }

    /// Lowercase name, as accepted by `--os`.
    pub fn name(self) -> &'static str {
        match self {
            OsFamily::Linux => "linux",
            OsFamily::Macos => "macos",
            OsFamily::Windows => "windows",
        }
    }

    /// The shell style used on this family.
    pub fn shell(self) -> ShellStyle {
        match self {
            OsFamily::Linux | OsFamily::Macos => ShellStyle::Posix,
            OsFamily::Windows => ShellStyle::Windows,
        }
    }
}

/// Agent step on POSIX shells: start an agent in this shell and load keys.
pub const POSIX_AGENT_COMMAND: &str = "eval \"$(ssh-agent -s)\" > /dev/null && ssh-add";

/// Agent step on Windows, where the OpenSSH agent runs as a service.
pub const WINDOWS_AGENT_COMMAND: &str = "ssh-add";

/// How command lines are quoted, wrapped and launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellStyle {
    /// `sh`-compatible shells.
    Posix,
    /// `cmd.exe`.
    Windows,
}

impl ShellStyle {
    /// Quote a value as a single double-quoted argument.
    pub fn quote(self, value: &str) -> String {
        match self {
            ShellStyle::Posix => quote_posix(value),
            ShellStyle::Windows => quote_windows(value),
        }
    }

    /// Command line of the agent step.
    pub fn agent_command(self) -> &'static str {
        match self {
            ShellStyle::Posix => POSIX_AGENT_COMMAND,
            ShellStyle::Windows => WINDOWS_AGENT_COMMAND,
        }
    }

    /// Wrap a step in this shell's interpreter invocation.
    ///
    /// POSIX lines are never wrapped. A Windows line is parsed by `cmd` twice,
    /// once by the executor's own `cmd /S /C "<line>"` and once by the wrapper,
    /// so metacharacters left unquoted at either level get a `^`.
    pub fn wrap(self, command: &str) -> String {
        match self {
            ShellStyle::Posix => command.to_string(),
            ShellStyle::Windows => {
                let inner = escape_cmd(command);
                escape_cmd(&format!("cmd /S /C \"{}\"", inner))
            }
        }
    }

    /// Program and leading arguments used to run one rendered line.
    pub fn host_invocation(self) -> (&'static str, &'static [&'static str]) {
        match self {
            ShellStyle::Posix => ("sh", &["-c"]),
            ShellStyle::Windows => ("cmd", &["/S", "/C"]),
        }
    }

    /// Render a sequence into the lines handed to the executor.
    pub fn render(self, sequence: &CommandSequence) -> Vec<String> {
        if sequence.is_empty() {
            return Vec::new();
        }

        match self {
            ShellStyle::Posix => {
                let line = sequence
                    .steps()
                    .iter()
                    .map(|step| self.step_text(step))
                    .collect::<Vec<_>>()
                    .join(" && ");
                vec![line]
            }
            ShellStyle::Windows => {
                let wrap = sequence.has_quoted_argument();
                sequence
                    .steps()
                    .iter()
                    .map(|step| match step {
                        Step::Run(command) if wrap => self.wrap(command),
                        _ => self.step_text(step).to_string(),
                    })
                    .collect()
            }
        }
    }

    fn step_text<'a>(self, step: &'a Step) -> &'a str {
        match step {
            Step::Run(command) => command,
            Step::StartAgent => self.agent_command(),
        }
    }
}

fn quote_posix(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

// `cmd` flips its quote state at every `"` and only honours carets outside
// quotes.
fn escape_cmd(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quoted = false;
    for c in line.chars() {
        match c {
            '"' => quoted = !quoted,
            '&' | '|' | '<' | '>' | '^' if !quoted => out.push('^'),
            _ => {}
        }
        out.push(c);
    }
    out
}

// Follows the MSVC argv rules: backslashes are literal unless they precede a
// quote, in which case they are doubled.
fn quote_windows(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut backslashes = 0;
    for c in value.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                out.extend(std::iter::repeat('\\').take(backslashes * 2 + 1));
                out.push('"');
                backslashes = 0;
            }
            _ => {
                out.extend(std::iter::repeat('\\').take(backslashes));
                out.push(c);
                backslashes = 0;
            }
        }
    }
    out.extend(std::iter::repeat('\\').take(backslashes * 2));
    out.push('"');
    out
}
