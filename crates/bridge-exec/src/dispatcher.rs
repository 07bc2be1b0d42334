//! Dispatch orchestration: config + command line → launched process.

use std::path::PathBuf;

use bridge_config::{BridgeConfig, CommandMapping};

use crate::error::{DispatchError, DispatchResult};
use crate::launcher::ProcessLauncher;
use crate::plan::{DEFAULT_SANDBOX_TOOL, ExecutionPlan, NativeInvocation, SandboxInvocation};
use crate::resolver::{Resolution, resolve_command};
use crate::terminal::TerminalProbe;
use crate::workdir::resolve_workdir;

/// Turns command lines into execution plans and runs them.
///
/// Borrows the config for its whole lifetime; one dispatcher serves one
/// invocation in the binary but can plan any number of command lines.
pub struct Dispatcher<'a, L, T> {
    config: &'a BridgeConfig,
    launcher: L,
    terminal: T,
    sandbox_tool: String,
    current_dir: Option<String>,
}

impl<'a, L, T> Dispatcher<'a, L, T>
where
    L: ProcessLauncher,
    T: TerminalProbe,
{
    /// Create a dispatcher using the process's current directory.
    ///
    /// A current directory that cannot be read, or is not valid UTF-8, is
    /// treated as unavailable.
    pub fn new(config: &'a BridgeConfig, launcher: L, terminal: T) -> Self {
        let current_dir = std::env::current_dir()
            .ok()
            .and_then(|dir| dir.to_str().map(str::to_string));
        Self {
            config,
            launcher,
            terminal,
            sandbox_tool: DEFAULT_SANDBOX_TOOL.to_string(),
            current_dir,
        }
    }

    /// Use a different sandbox CLI than `docker`.
    pub fn with_sandbox_tool(mut self, tool: impl Into<String>) -> Self {
        self.sandbox_tool = tool.into();
        self
    }

    /// Override the current directory seen by working-directory resolution.
    pub fn with_current_dir(mut self, dir: Option<String>) -> Self {
        self.current_dir = dir;
        self
    }

    /// Resolve a command line into an execution plan without launching it.
    ///
    /// `argv[0]` is the command name; the rest are its arguments.
    pub fn plan(&self, argv: &[String]) -> DispatchResult<ExecutionPlan> {
        let (name, args) = argv.split_first().ok_or(DispatchError::NoCommand)?;

        match resolve_command(self.config, name) {
            Resolution::Native { path } => {
                tracing::debug!(command = %name, native = %path, "Resolved native override");
                Ok(native_plan(PathBuf::from(path), argv))
            }
            Resolution::Sandboxed(mapping) => Ok(self.sandbox_plan(&mapping, args)),
            Resolution::Unresolved => match self.launcher.find_native(name) {
                Some(path) => {
                    tracing::debug!(
                        command = %name,
                        native = %path.display(),
                        "Command not configured, using host binary"
                    );
                    Ok(native_plan(path, argv))
                }
                None => Err(DispatchError::NotFound { name: name.clone() }),
            },
        }
    }

    /// Plan and launch a command line.
    ///
    /// For a sandboxed command, returns the child's exit code unchanged,
    /// whatever its value. A native command replaces this process, so this
    /// only returns for it on failure.
    pub fn run(&self, argv: &[String]) -> DispatchResult<i32> {
        match self.plan(argv)? {
            ExecutionPlan::Native(invocation) => Err(self.launcher.replace(&invocation).into()),
            ExecutionPlan::Sandboxed(invocation) => {
                let line = invocation.command_line();
                tracing::debug!(
                    tool = %invocation.tool,
                    args = ?line,
                    "Dispatching into sidecar"
                );
                Ok(self.launcher.spawn_wait(&invocation.tool, &line)?)
            }
        }
    }

    fn sandbox_plan(&self, mapping: &CommandMapping, args: &[String]) -> ExecutionPlan {
        let container = self.config.resolve_container(&mapping.container).to_string();
        let working_dir = resolve_workdir(mapping, self.current_dir.as_deref());
        let args = mapping.translate_args(args);

        tracing::debug!(
            container = %container,
            executable = %mapping.executable,
            workdir = %working_dir,
            "Resolved sidecar command"
        );

        ExecutionPlan::Sandboxed(SandboxInvocation {
            tool: self.sandbox_tool.clone(),
            container,
            executable: mapping.executable.clone(),
            args,
            working_dir,
            tty: self.terminal.wants_tty(),
        })
    }
}

fn native_plan(program: PathBuf, argv: &[String]) -> ExecutionPlan {
    ExecutionPlan::Native(NativeInvocation {
        program,
        argv: argv.to_vec(),
    })
}
