//! Exec command - routes a tool invocation to its sidecar or host binary.

use anyhow::Result;
use bridge_exec::{Dispatcher, StdTerminal, SystemLauncher};

use super::Context;

/// Run `argv` (command name first) and return the exit code to forward.
///
/// Native commands replace this process and never return on success.
pub fn run(argv: &[String], ctx: &Context) -> Result<i32> {
    let config = ctx.load_config()?;
    let dispatcher = Dispatcher::new(&config, SystemLauncher, StdTerminal);
    Ok(dispatcher.run(argv)?)
}
