//! Command execution through the platform shell.
//!
//! The command string is handed to the interpreter verbatim, so the full
//! shell feature set (globbing, pipes, redirection) is available. Callers
//! that do not want shell interpretation should use [`crate::spawn`] instead.

use crate::error::{ExecError, ExitOutcome};
use std::process::Command;

/// Exit code by which `sh -c` (and `system(3)`) signals that the command
/// interpreter itself could not be executed.
const SHELL_UNAVAILABLE_CODE: i32 = 127;

/// Runs `cmd` through the platform shell (`/bin/sh -c` on Unix, `cmd /C` on
/// Windows) and blocks until it finishes.
///
/// Success requires both that the shell launched and that the invoked
/// command's own exit status was zero. An empty or blank command is rejected
/// as [`ExecError::EmptyCommand`] rather than being handed to the shell.
///
/// # Errors
///
/// - [`ExecError::EmptyCommand`] if `cmd` is empty or whitespace-only.
/// - [`ExecError::LaunchFailed`] if the shell process could not be started.
/// - [`ExecError::ShellUnavailable`] if the shell reports exit code 127,
///   the reserved sentinel for "interpreter missing".
/// - [`ExecError::CommandFailed`] for any other non-zero exit code.
/// - [`ExecError::AbnormalTermination`] if the shell was killed by a signal.
pub fn execute_via_shell(cmd: &str) -> Result<(), ExecError> {
    if cmd.trim().is_empty() {
        return Err(ExecError::EmptyCommand);
    }

    let mut shell = if cfg!(target_os = "windows") {
        let mut shell = Command::new("cmd");
        shell.arg("/C").arg(cmd);
        shell
    } else {
        let mut shell = Command::new("/bin/sh");
        shell.arg("-c").arg(cmd);
        shell
    };

    log::debug!("Running through the shell: {}", cmd);
    let status = shell.status().map_err(ExecError::LaunchFailed)?;

    match ExitOutcome::classify(status) {
        ExitOutcome::Exited(SHELL_UNAVAILABLE_CODE) => {
            log::warn!("Shell reported exit code 127 for: {}", cmd);
            Err(ExecError::ShellUnavailable)
        }
        outcome => outcome.into_result(),
    }
}
