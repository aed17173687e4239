//! Direct (shell-less) process execution from an argument vector.
//!
//! Nothing here is interpreted: no globbing, no word splitting, no path
//! search. The first element of the argument vector must be the absolute
//! path of the executable, and the remaining elements are passed to it
//! untouched. Fork-then-replace-image is modeled as a single atomic spawn,
//! so a missing or non-executable program surfaces as a spawn error in the
//! parent instead of a sentinel exit inside the child.

use crate::error::{ExecError, ExitOutcome};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::process::{Command, Stdio};

/// Spawns the executable at `argv[0]` with `argv[1..]` as its arguments and
/// blocks until the child terminates.
///
/// Standard streams are inherited from the caller. Exactly one child is
/// outstanding for the duration of the call, and it is always reaped before
/// this function returns.
///
/// # Errors
///
/// - [`ExecError::EmptyCommand`] if `argv` is empty.
/// - [`ExecError::ProgramNotAbsolute`] if `argv[0]` is not an absolute path;
///   supplying one is a deliberate contract, not an oversight.
/// - [`ExecError::SpawnFailed`] if the child could not be created or the
///   executable could not be launched.
/// - [`ExecError::WaitFailed`] if waiting on the child failed.
/// - [`ExecError::CommandFailed`] if the child exited with a non-zero code.
/// - [`ExecError::AbnormalTermination`] if the child was killed by a signal.
pub fn execute_direct(argv: &[String]) -> Result<(), ExecError> {
    let (program, args) = split_argv(argv)?;
    run_to_completion(Command::new(program).args(args), program)
}

/// Like [`execute_direct`], but the child's standard output is redirected to
/// the file at `output_path` before the child starts.
///
/// The file is created if absent and truncated if present, with permission
/// bits 0644 on Unix, so repeated calls overwrite rather than append. The
/// handle is owned by the child alone; the parent keeps no copy and the
/// child's standard error still goes wherever the caller's does. If the file
/// cannot be opened, no child is spawned at all.
///
/// # Errors
///
/// [`ExecError::OutputRedirectFailed`] if the output file cannot be opened;
/// otherwise identical to [`execute_direct`].
pub fn execute_with_output_redirect(output_path: &Path, argv: &[String]) -> Result<(), ExecError> {
    let (program, args) = split_argv(argv)?;

    let output = open_output_file(output_path).map_err(|source| ExecError::OutputRedirectFailed {
        path: output_path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Redirecting child stdout to '{}' for '{}'",
        output_path.display(),
        program
    );

    run_to_completion(
        Command::new(program).args(args).stdout(Stdio::from(output)),
        program,
    )
}

/// Validates the argument vector and splits it into program and arguments.
fn split_argv(argv: &[String]) -> Result<(&String, &[String]), ExecError> {
    let (program, args) = argv.split_first().ok_or(ExecError::EmptyCommand)?;
    if !Path::new(program).is_absolute() {
        return Err(ExecError::ProgramNotAbsolute(program.clone()));
    }
    Ok((program, args))
}

/// Opens the redirection target: create if absent, truncate if present,
/// owner read/write and group/other read.
fn open_output_file(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}

/// Spawns the configured command, waits for the child, and classifies its
/// outcome. The child is reaped on every path out of this function.
fn run_to_completion(command: &mut Command, program: &str) -> Result<(), ExecError> {
    let mut child = command.spawn().map_err(|source| ExecError::SpawnFailed {
        program: program.to_string(),
        source,
    })?;
    log::debug!("Spawned '{}' (PID: {})", program, child.id());

    let status = child.wait().map_err(ExecError::WaitFailed)?;
    let outcome = ExitOutcome::classify(status);
    log::debug!("Child '{}' finished: {:?}", program, outcome);
    outcome.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // --- Helper to create a Vec<String> from &str slices ---
    fn to_argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_argv_is_a_caller_error() {
        assert!(matches!(
            execute_direct(&[]),
            Err(ExecError::EmptyCommand)
        ));
        assert!(matches!(
            execute_with_output_redirect(Path::new("out.txt"), &[]),
            Err(ExecError::EmptyCommand)
        ));
    }

    #[test]
    fn relative_program_paths_are_rejected() {
        let err = execute_direct(&to_argv(&["true"])).unwrap_err();
        assert!(matches!(err, ExecError::ProgramNotAbsolute(ref p) if p == "true"));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_reports_success() {
        assert!(execute_direct(&to_argv(&["/bin/true"])).is_ok());
        assert!(execute_direct(&to_argv(&["/usr/bin/test", "-d", "/"])).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_code_is_preserved() {
        assert!(matches!(
            execute_direct(&to_argv(&["/bin/false"])),
            Err(ExecError::CommandFailed(1))
        ));
        assert!(matches!(
            execute_direct(&to_argv(&["/bin/sh", "-c", "exit 42"])),
            Err(ExecError::CommandFailed(42))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn missing_executable_fails_without_hanging() {
        assert!(matches!(
            execute_direct(&to_argv(&["/bin/does-not-exist"])),
            Err(ExecError::SpawnFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn redirect_captures_exactly_the_child_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        execute_with_output_redirect(&out, &to_argv(&["/bin/echo", "hello"])).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn redirect_truncates_on_reuse() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        execute_with_output_redirect(&out, &to_argv(&["/bin/echo", "a much longer first line"]))
            .unwrap();
        execute_with_output_redirect(&out, &to_argv(&["/bin/echo", "short"])).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "short\n");
    }

    #[cfg(unix)]
    #[test]
    fn redirect_leaves_stderr_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        execute_with_output_redirect(
            &out,
            &to_argv(&["/bin/sh", "-c", "echo to-stdout; echo to-stderr 1>&2"]),
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "to-stdout\n");
    }

    #[cfg(unix)]
    #[test]
    fn redirect_creates_a_plain_rw_file() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        execute_with_output_redirect(&out, &to_argv(&["/bin/true"])).unwrap();
        // 0644 requested at open; the umask may clear group/other bits.
        let mode = fs::metadata(&out).unwrap().permissions().mode();
        assert_eq!(mode & 0o600, 0o600);
        assert_eq!(mode & 0o111, 0);
    }

    #[cfg(unix)]
    #[test]
    fn unopenable_output_file_prevents_the_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing-subdir").join("out.txt");
        assert!(matches!(
            execute_with_output_redirect(&out, &to_argv(&["/bin/echo", "hello"])),
            Err(ExecError::OutputRedirectFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn failing_child_still_writes_what_it_printed() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let result = execute_with_output_redirect(
            &out,
            &to_argv(&["/bin/sh", "-c", "echo partial; exit 7"]),
        );
        assert!(matches!(result, Err(ExecError::CommandFailed(7))));
        assert_eq!(fs::read_to_string(&out).unwrap(), "partial\n");
    }
}
