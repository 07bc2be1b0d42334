//! Bridge - run development tools in sidecar containers
//!
//! Main entry point for the bridge CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;

mod commands;

use commands::{exec, wrappers};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

const AFTER_HELP: &str = "\
Examples:
  bridge npm install                          Run npm install in its mapped container
  bridge php artisan migrate                  Run php artisan migrate in the PHP container
  bridge --config ./my.yaml npm test
  bridge --init-wrappers /scripts/wrappers    Generate symlinks at startup

The bridge reads configuration from $SIDECAR_CONFIG_DIR/bridge.yaml (or the
BRIDGE_CONFIG env var). SIDECAR_CONFIG_DIR defaults to $PWD/.sidecar if not set.
Set BRIDGE_LOG (e.g. BRIDGE_LOG=debug) to control diagnostic output.";

/// Execute commands in sidecar containers
#[derive(Parser, Debug)]
#[command(name = "bridge")]
#[command(about, long_about = None, after_help = AFTER_HELP)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Path to bridge config file (default: $SIDECAR_CONFIG_DIR/bridge.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Generate dispatcher symlinks in the specified directory
    #[arg(long, value_name = "DIR")]
    pub init_wrappers: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "BRIDGE_LOG";

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("bridge version {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.verbose);

    let ctx = commands::Context {
        config_path: cli.config,
    };

    let result = match cli.init_wrappers {
        Some(dir) => wrappers::run(&dir, &ctx),
        None => exec::run(&cli.command, &ctx),
    };

    match result {
        Ok(code) => exit_code(code),
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red().bold().for_stderr());
            if commands::is_missing_command(&err) {
                eprintln!("Run 'bridge --help' for usage");
            }
            exit_code(commands::exit_code_for(&err))
        }
    }
}

/// Logs go to stderr only; stdout belongs to the dispatched tool.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "bridge=debug,bridge_exec=debug,bridge_config=debug,warn"
        } else {
            "warn"
        })
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
