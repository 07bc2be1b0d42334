//! Command resolution and dispatch for the bridge.
//!
//! Given a command line such as `composer install`, this crate decides where
//! the tool runs and builds the invocation:
//!
//! - **Native override** → the current process is replaced by a host binary
//! - **Sidecar mapping** → `docker exec` into the mapped container, with path
//!   arguments and the working directory rewritten into the container's view
//! - **Unmapped** → the default container if configured, else a host `PATH`
//!   lookup, else "command not found" (exit 127)
//!
//! # Example
//!
//! ```no_run
//! use bridge_config::load_config;
//! use bridge_exec::{Dispatcher, StdTerminal, SystemLauncher};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config(None)?;
//!     let dispatcher = Dispatcher::new(&config, SystemLauncher, StdTerminal);
//!
//!     let argv = vec!["composer".to_string(), "install".to_string()];
//!     let code = dispatcher.run(&argv)?;
//!     std::process::exit(code);
//! }
//! ```

mod dispatcher;
mod error;
mod launcher;
mod plan;
mod resolver;
mod terminal;
mod workdir;
mod wrappers;

pub use dispatcher::Dispatcher;
pub use error::{
    DispatchError, DispatchResult, EXIT_FAILURE, EXIT_NOT_FOUND, LaunchError, WrapperError,
};
pub use launcher::{ProcessLauncher, SystemLauncher};
pub use plan::{DEFAULT_SANDBOX_TOOL, ExecutionPlan, NativeInvocation, SandboxInvocation};
pub use resolver::{Resolution, resolve_command};
pub use terminal::{StdTerminal, TerminalProbe};
pub use workdir::resolve_workdir;
pub use wrappers::{LAUNCHER_NAME, WrapperReport, init_wrappers};
