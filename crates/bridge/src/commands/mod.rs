//! CLI command handlers.

use std::path::PathBuf;

use anyhow::Result;
use bridge_config::BridgeConfig;
use bridge_exec::{DispatchError, EXIT_FAILURE};

pub mod exec;
pub mod wrappers;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Config file given with `--config`, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Discover and load the bridge config.
    pub fn load_config(&self) -> Result<BridgeConfig> {
        let config = bridge_config::load_config(self.config_path.as_deref())?;
        tracing::debug!(
            commands = config.commands.len(),
            overrides = config.overrides.len(),
            "Config loaded"
        );
        Ok(config)
    }
}

/// Process exit code for a failed command.
///
/// Dispatch errors carry their own code (127 for unknown commands); every
/// other failure is a local error.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DispatchError>()
        .map_or(EXIT_FAILURE, DispatchError::exit_code)
}

/// Whether the failure was a bare `bridge` with nothing to run.
pub fn is_missing_command(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<DispatchError>(),
        Some(DispatchError::NoCommand)
    )
}
