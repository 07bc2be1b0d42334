//! Init-wrappers command - generates one dispatcher symlink per command.

use std::path::Path;

use anyhow::Result;
use console::Style;

use super::Context;

/// Create the wrapper symlinks in `dir` and report what changed on stderr.
pub fn run(dir: &Path, ctx: &Context) -> Result<i32> {
    let config = ctx.load_config()?;
    let report = bridge_exec::init_wrappers(&config, dir)?;

    let dim = Style::new().dim().for_stderr();
    let mut line = format!("Created {} symlinks in {}", report.created, dir.display());
    if report.skipped > 0 {
        line.push_str(&format!(
            " {}",
            dim.apply_to(format!("({} already existed)", report.skipped))
        ));
    }
    eprintln!("{line}");

    Ok(0)
}
