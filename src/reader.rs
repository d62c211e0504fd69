use std::process::{Command, Output};

/// Error produced while reading the user's crontab.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// The `crontab` executable could not be invoked at all.
    #[error("unable to locate the crontab executable on the system")]
    CrontabNotFound,
    /// `crontab -l` ran but exited non-zero (no crontab for the
    /// user, bad permissions, ...). Carries whatever diagnostic the
    /// command produced.
    #[error("cannot read the crontab of the current user")]
    CommandFailed {
        /// The command's exit code, or `None` if it was killed.
        exit_code: Option<i32>,
        /// Standard error, or `None` if it was empty.
        stderr: Option<String>,
    },
}

/// Read the current user's crontab to a `String`.
///
/// Runs `crontab -l` and captures its output. The result can be fed
/// to [`tokenize`](crate::tokenize).
///
/// # Errors
///
/// Returns [`ReadError::CrontabNotFound`] if the executable cannot
/// be invoked, and [`ReadError::CommandFailed`] if it ran but exited
/// non-zero.
pub fn read() -> Result<String, ReadError> {
    let output = Command::new("crontab").arg("-l").output();
    match output {
        Ok(output) => interpret_output(&output),
        Err(_) => Err(ReadError::CrontabNotFound),
    }
}

/// An `Output` means the executable ran; it does NOT mean the
/// command succeeded.
fn interpret_output(output: &Output) -> Result<String, ReadError> {
    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    Err(ReadError::CommandFailed {
        exit_code: output.status.code(),
        stderr: if stderr.is_empty() {
            None
        } else {
            Some(stderr)
        },
    })
}
