//! # spawnkit
//!
//! Thin, predictable wrappers around process execution, meant to be called
//! from a host program. Three independent, stateless operations are exposed:
//!
//! - [`execute_via_shell`]: run a command string through the platform shell,
//!   with full shell interpretation (globbing, pipes, redirection).
//! - [`execute_direct`]: spawn a child from an absolute executable path and a
//!   fixed argument vector, with no shell interpretation and no path search.
//! - [`execute_with_output_redirect`]: like [`execute_direct`], but the
//!   child's standard output is redirected to a file before it starts.
//!
//! Every call is synchronous: the calling thread blocks until the child has
//! terminated and been reaped. There is no timeout or cancellation; a hung
//! child blocks the caller indefinitely. Calls share no state, so concurrent
//! invocations from different threads are safe.
//!
//! Failures are never collapsed into a boolean: each distinct cause maps to
//! its own [`ExecError`] variant so callers can react (or retry) per cause.

pub mod error;
pub mod shell;
pub mod spawn;

pub use error::{ExecError, ExitOutcome};
pub use shell::execute_via_shell;
pub use spawn::{execute_direct, execute_with_output_redirect};
