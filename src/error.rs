//! The error taxonomy shared by all execution operations, plus the
//! classification of a reaped child's exit status.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Every way an execution call can fail, one variant per distinct cause.
///
/// All errors are terminal for the call that raised them; there is no retry
/// policy here. The caller decides whether to retry and whether to surface
/// the failure to an end user.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("No command specified to run.")]
    EmptyCommand,
    #[error("Program path '{0}' is not absolute; no path search is performed.")]
    ProgramNotAbsolute(String),
    #[error("The platform shell is unavailable.")]
    ShellUnavailable,
    #[error("The shell could not be launched: {0}")]
    LaunchFailed(#[source] std::io::Error),
    #[error("Process '{program}' could not be spawned: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed while waiting for the child process: {0}")]
    WaitFailed(#[source] std::io::Error),
    #[error("Command exited with non-zero status {0}.")]
    CommandFailed(i32),
    #[error("Child process terminated abnormally: {0}")]
    AbnormalTermination(String),
    #[error("Could not open output file '{path}' for redirection: {source}")]
    OutputRedirectFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a completed child process terminated.
///
/// Only two terminal states are modeled: a normal exit with a code, or an
/// abnormal termination (signal, crash). Stopped/suspended children are not
/// tracked; callers always wait for full termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The child exited normally with the given status code.
    Exited(i32),
    /// The child was terminated abnormally; the payload is the OS's
    /// description of the status (on Unix this names the signal).
    Abnormal(String),
}

impl ExitOutcome {
    /// Classifies a reaped child's [`ExitStatus`].
    pub fn classify(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Exited(code),
            None => Self::Abnormal(status.to_string()),
        }
    }

    /// Maps this outcome to the call's result: only a clean zero exit is
    /// success.
    pub fn into_result(self) -> Result<(), ExecError> {
        match self {
            Self::Exited(0) => Ok(()),
            Self::Exited(code) => Err(ExecError::CommandFailed(code)),
            Self::Abnormal(status) => Err(ExecError::AbnormalTermination(status)),
        }
    }
}
