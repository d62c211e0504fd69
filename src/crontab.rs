use std::process::Command;
use std::ptr;

use crate::token::{Job, Token};

/// Shell used when the crontab does not override it.
const DEFAULT_SHELL: &str = "/bin/sh";

/// Variable identifier that overrides the shell for the jobs
/// below it.
const SHELL_VARIABLE: &str = "SHELL";

/// Classifies a run error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// The job handed to [`Crontab::run`] is not one of this
    /// crontab's own entries. Two structurally equal jobs are still
    /// distinct entries, so a lookalike built elsewhere is rejected.
    #[error("job is not an entry of this crontab")]
    UnknownJob,
    /// The invoking user's home directory could not be determined.
    #[error("could not determine the home directory")]
    NoHomeDirectory,
    /// The shell process could not be started at all.
    #[error("failed to launch {shell}: {message}")]
    SpawnFailed { shell: String, message: String },
}

/// A runnable shell invocation assembled for one job.
///
/// The launcher is expected to invoke `[shell, "-c", script]` with
/// the working directory set to the user's home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    /// Shell executable, `/bin/sh` unless a `SHELL` variable above
    /// the job overrode it.
    pub shell: String,
    /// Script body: variable declarations in crontab order, then the
    /// job's command, joined with `;`.
    pub script: String,
}

/// Outcome of a completed [`Crontab::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// The child's exit code, or `None` if it was killed by a
    /// signal.
    pub exit_code: Option<i32>,
}

impl RunResult {
    /// Whether the job ran and exited with code 0.
    #[must_use]
    pub const fn was_successful(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// A parsed crontab: the token sequence plus the logic to re-create
/// the execution environment cron would use for any one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crontab {
    tokens: Vec<Token>,
}

impl Crontab {
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The full token sequence, in file order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The jobs, and only the jobs, in file order.
    ///
    /// The returned references borrow the crontab's own entries;
    /// hand one of them to [`run()`](Crontab::run) to select that
    /// exact entry, even when another entry looks identical.
    #[must_use]
    pub fn jobs(&self) -> Vec<&Job> {
        self.tokens
            .iter()
            .filter_map(|token| {
                if let Token::Job(job) = token {
                    Some(job)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Whether there is anything to run at all. A crontab can hold
    /// only variables, comments or unrecognized lines.
    #[must_use]
    pub fn has_jobs(&self) -> bool {
        self.tokens.iter().any(|token| matches!(token, Token::Job(_)))
    }

    /// Assemble the shell invocation cron would perform for `job`.
    ///
    /// Walks the token sequence from the top. Every variable above
    /// the job becomes an `identifier=value` statement, and a
    /// `SHELL` variable additionally swaps the shell for this call
    /// only. Variables and jobs below the target are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::UnknownJob`] if `job` is not one of this
    /// crontab's own entries (identity, not equality).
    pub fn shell_command(&self, job: &Job) -> Result<ShellCommand, RunError> {
        let mut shell = String::from(DEFAULT_SHELL);
        let mut statements: Vec<String> = Vec::new();

        for token in &self.tokens {
            match token {
                Token::Variable(variable) => {
                    if variable.identifier == SHELL_VARIABLE {
                        shell.clone_from(&variable.value);
                    }
                    statements.push(format!("{}={}", variable.identifier, variable.value));
                }
                Token::Job(candidate) if ptr::eq(candidate, job) => {
                    statements.push(candidate.command.clone());
                    return Ok(ShellCommand {
                        shell,
                        script: statements.join(";"),
                    });
                }
                _ => {}
            }
        }

        Err(RunError::UnknownJob)
    }

    /// Run a job the way cron would.
    ///
    /// Launches the assembled script under the active shell with the
    /// working directory set to the user's home directory, and waits
    /// for it to finish.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::UnknownJob`] for a job that is not an
    /// entry of this crontab, [`RunError::NoHomeDirectory`] if the
    /// home directory cannot be determined, and
    /// [`RunError::SpawnFailed`] if the shell cannot be started
    /// (e.g., the `SHELL` override points at nothing).
    pub fn run(&self, job: &Job) -> Result<RunResult, RunError> {
        let command = self.shell_command(job)?;
        let home = dirs::home_dir().ok_or(RunError::NoHomeDirectory)?;

        let status = Command::new(&command.shell)
            .arg("-c")
            .arg(&command.script)
            .current_dir(home)
            .status()
            .map_err(|error| RunError::SpawnFailed {
                shell: command.shell.clone(),
                message: error.to_string(),
            })?;

        Ok(RunResult {
            exit_code: status.code(),
        })
    }
}
