//! Terminal detection for pseudo-terminal allocation.

use std::io::IsTerminal;

/// Reports whether the standard streams are attached to a terminal.
pub trait TerminalProbe {
    /// Standard input is an interactive terminal.
    fn stdin_is_terminal(&self) -> bool;

    /// Standard output is an interactive terminal.
    fn stdout_is_terminal(&self) -> bool;

    /// A pseudo-terminal is requested only when both streams are terminals,
    /// so piped output stays free of terminal control sequences.
    fn wants_tty(&self) -> bool {
        self.stdin_is_terminal() && self.stdout_is_terminal()
    }
}

/// Probe backed by the process's real stdin and stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTerminal;

impl TerminalProbe for StdTerminal {
    fn stdin_is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn stdout_is_terminal(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}
