//! Execution plans: the fully resolved form of one dispatch.

use std::path::PathBuf;

/// Sandbox tool used to exec into containers.
pub const DEFAULT_SANDBOX_TOOL: &str = "docker";

/// What to launch for one command line. Built per invocation, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionPlan {
    /// Replace this process with a host binary.
    Native(NativeInvocation),
    /// Run the tool inside a sidecar container and forward its exit code.
    Sandboxed(SandboxInvocation),
}

/// A host binary to exec in place of the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeInvocation {
    /// Resolved binary path.
    pub program: PathBuf,
    /// Full argument vector; `argv[0]` is the original command name.
    pub argv: Vec<String>,
}

/// A `<tool> exec` into a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxInvocation {
    /// Sandbox CLI (`docker` unless overridden).
    pub tool: String,
    /// Concrete container name, after alias resolution.
    pub container: String,
    /// Binary to run inside the container.
    pub executable: String,
    /// Arguments after path translation.
    pub args: Vec<String>,
    /// Working directory inside the container.
    pub working_dir: String,
    /// Allocate a pseudo-terminal (`-t`).
    pub tty: bool,
}

impl SandboxInvocation {
    /// Arguments passed to the sandbox tool.
    ///
    /// `exec -i [-t] -w <working_dir> <container> <executable> <args...>`
    pub fn command_line(&self) -> Vec<String> {
        let mut line = Vec::with_capacity(self.args.len() + 7);
        line.push("exec".to_string());
        line.push("-i".to_string());
        if self.tty {
            line.push("-t".to_string());
        }
        line.push("-w".to_string());
        line.push(self.working_dir.clone());
        line.push(self.container.clone());
        line.push(self.executable.clone());
        line.extend(self.args.iter().cloned());
        line
    }
}
