//! Crontab tokenizer and manual job runner.
//!
//! A typed token model for crontab text, with the logic to re-create
//! the exact shell invocation cron would perform for any one entry:
//! the variable declarations above it, the `SHELL` override if there
//! is one, and the job's command, run from the home directory.
//!
//! # Quick start
//!
//! ## Tokenize a crontab and list its jobs
//!
//! ```
//! use cronpick::{Crontab, tokenize};
//!
//! let input = "## Update.\n30 20 * * * echo hi\n";
//! let crontab = Crontab::new(tokenize(input));
//!
//! let jobs = crontab.jobs();
//! assert_eq!(jobs[0].command, "echo hi");
//! assert_eq!(jobs[0].description.as_deref(), Some("Update."));
//! ```
//!
//! ## Assemble the command cron would run
//!
//! ```
//! use cronpick::{Crontab, tokenize};
//!
//! let crontab = Crontab::new(tokenize("FOO=bar\n@daily echo $FOO\n"));
//! let job = crontab.jobs()[0];
//!
//! let command = crontab.shell_command(job).unwrap();
//! assert_eq!(command.shell, "/bin/sh");
//! assert_eq!(command.script, "FOO=bar;echo $FOO");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod crontab;
pub mod lexer;
pub mod reader;
pub mod token;

pub use crontab::{Crontab, RunError, RunResult, ShellCommand};
pub use lexer::tokenize;
pub use reader::ReadError;
pub use token::{Comment, Job, Token, Unrecognized, Variable};

/// Unified error type covering both reading and running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The crontab could not be read.
    #[error("{0}")]
    Read(#[from] ReadError),
    /// A job could not be run.
    #[error("{0}")]
    Run(#[from] RunError),
}

/// Read and tokenize the current user's crontab in one step.
///
/// ```no_run
/// let crontab = cronpick::user_crontab().unwrap();
/// for job in crontab.jobs() {
///     println!("{} {}", job.schedule, job.command);
/// }
/// ```
pub fn user_crontab() -> Result<Crontab, Error> {
    let text = reader::read()?;
    Ok(Crontab::new(tokenize(&text)))
}
