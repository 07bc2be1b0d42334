//! Error types for dispatch operations.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for a command that is neither configured nor on the host `PATH`.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code for local failures (config, launch, wrapper I/O).
pub const EXIT_FAILURE: i32 = 1;

/// A process could not be started.
///
/// Distinct from a started process exiting non-zero, which is forwarded.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Spawning a child process failed.
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// Replacing the current process image failed.
    #[error("failed to exec '{}': {source}", .program.display())]
    Exec {
        program: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that end a single dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No command name was supplied.
    #[error("no command specified")]
    NoCommand,

    /// Not configured and not found on the host.
    #[error("command '{name}' not found in config and not available natively")]
    NotFound { name: String },

    /// The target process could not be started.
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl DispatchError {
    /// Process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::NotFound { .. } => EXIT_NOT_FOUND,
            DispatchError::NoCommand | DispatchError::Launch(_) => EXIT_FAILURE,
        }
    }
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

/// Errors from generating wrapper symlinks.
#[derive(Debug, Error)]
pub enum WrapperError {
    /// The launcher the symlinks should point at does not exist.
    #[error("dispatcher not found at {}", .path.display())]
    LauncherMissing { path: PathBuf },

    /// A filesystem operation failed.
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}
