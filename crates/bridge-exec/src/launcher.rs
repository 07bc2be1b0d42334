//! Process launching primitives.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::error::LaunchError;
use crate::plan::NativeInvocation;

/// Locates and starts the processes a dispatch resolves to.
///
/// Implemented by [`SystemLauncher`] for real use; tests substitute a
/// recording implementation.
pub trait ProcessLauncher {
    /// Find a binary named `name` on the host `PATH`.
    fn find_native(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }

    /// Replace the current process with a native binary.
    ///
    /// Only returns on failure: on success the calling process no longer
    /// exists in its prior form.
    fn replace(&self, invocation: &NativeInvocation) -> LaunchError;

    /// Spawn `program` with inherited stdio, wait, and return its exit code.
    fn spawn_wait(&self, program: &str, args: &[String]) -> Result<i32, LaunchError>;
}

/// Launcher backed by `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    #[cfg(unix)]
    fn replace(&self, invocation: &NativeInvocation) -> LaunchError {
        use std::os::unix::process::CommandExt;

        let mut cmd = Command::new(&invocation.program);
        if let Some((arg0, rest)) = invocation.argv.split_first() {
            cmd.arg0(arg0).args(rest);
        }

        tracing::debug!(program = %invocation.program.display(), "Replacing process image");
        let source = cmd.exec();
        LaunchError::Exec {
            program: invocation.program.clone(),
            source,
        }
    }

    #[cfg(not(unix))]
    fn replace(&self, invocation: &NativeInvocation) -> LaunchError {
        // No exec(2): run the binary to completion and leave with its code.
        let args = invocation.argv.get(1..).unwrap_or_default();
        match Command::new(&invocation.program).args(args).status() {
            Ok(status) => std::process::exit(exit_code(status)),
            Err(source) => LaunchError::Exec {
                program: invocation.program.clone(),
                source,
            },
        }
    }

    fn spawn_wait(&self, program: &str, args: &[String]) -> Result<i32, LaunchError> {
        tracing::debug!(program, ?args, "Spawning child process");
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let code = exit_code(status);
        tracing::debug!(program, code, "Child process exited");
        Ok(code)
    }
}

/// Map an exit status to a shell-style exit code.
///
/// A child killed by a signal reports `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    crate::error::EXIT_FAILURE
}
