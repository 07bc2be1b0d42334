//! Wrapper symlink generation.
//!
//! A wrappers directory holds one launcher script (`dispatcher`) plus one
//! symlink per configured command pointing at it, so putting the directory
//! on `PATH` routes every configured tool through the bridge. Generation is
//! idempotent and safe to run at every container start.

use std::io::ErrorKind;
use std::path::Path;

use bridge_config::BridgeConfig;

use crate::error::WrapperError;

/// File name of the launcher inside the wrappers directory.
pub const LAUNCHER_NAME: &str = "dispatcher";

/// Outcome of a wrapper generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WrapperReport {
    /// Symlinks created, including stale ones replaced.
    pub created: usize,
    /// Entries left alone: correct symlinks and non-symlink files.
    pub skipped: usize,
}

/// Ensure `dir` has a symlink to the launcher for every configured command.
///
/// - a symlink already pointing at the launcher is skipped
/// - a symlink pointing elsewhere is replaced (counted as created)
/// - a regular file or directory at the name is never touched (skipped)
///
/// New symlinks are relative, so the directory can be mounted anywhere.
pub fn init_wrappers(config: &BridgeConfig, dir: &Path) -> Result<WrapperReport, WrapperError> {
    let launcher = dir.join(LAUNCHER_NAME);
    match std::fs::metadata(&launcher) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(WrapperError::LauncherMissing { path: launcher });
        }
        Err(source) => {
            return Err(WrapperError::Io {
                action: "failed to inspect",
                path: launcher,
                source,
            });
        }
    }

    let mut report = WrapperReport::default();

    for name in config.command_names() {
        let link = dir.join(name);

        match std::fs::read_link(&link) {
            Ok(target) if points_at_launcher(&target, &launcher) => {
                report.skipped += 1;
                continue;
            }
            Ok(target) => {
                tracing::debug!(
                    link = %link.display(),
                    target = %target.display(),
                    "Replacing stale wrapper symlink"
                );
                std::fs::remove_file(&link).map_err(|source| WrapperError::Io {
                    action: "failed to remove existing symlink",
                    path: link.clone(),
                    source,
                })?;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(_) => {
                // Present but not a symlink: leave the user's file alone.
                if link.symlink_metadata().is_ok() {
                    tracing::debug!(path = %link.display(), "Skipping non-symlink entry");
                    report.skipped += 1;
                    continue;
                }
            }
        }

        create_symlink(Path::new(LAUNCHER_NAME), &link).map_err(|source| WrapperError::Io {
            action: "failed to create symlink",
            path: link.clone(),
            source,
        })?;
        report.created += 1;
    }

    tracing::debug!(
        dir = %dir.display(),
        created = report.created,
        skipped = report.skipped,
        "Wrapper generation finished"
    );
    Ok(report)
}

fn points_at_launcher(target: &Path, launcher: &Path) -> bool {
    target == Path::new(LAUNCHER_NAME) || target == launcher
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
fn create_symlink(_target: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::from(ErrorKind::Unsupported))
}
