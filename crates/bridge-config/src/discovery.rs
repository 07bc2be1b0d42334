//! Config file discovery and loading.
//!
//! Resolution order (first hit wins):
//! 1. Explicit path (the `--config` flag)
//! 2. `BRIDGE_CONFIG` environment variable
//! 3. `$SIDECAR_CONFIG_DIR/bridge.yaml`
//! 4. `./.sidecar/bridge.yaml`

use std::path::{Path, PathBuf};

use crate::{BridgeConfig, ConfigError, ParseOrInvalid, Result};

/// Config filename within the config directory.
const CONFIG_FILE: &str = "bridge.yaml";

/// Config directory name used when `SIDECAR_CONFIG_DIR` is unset.
const DEFAULT_CONFIG_DIR: &str = ".sidecar";

/// Environment variable naming the config file directly.
pub const CONFIG_PATH_ENV: &str = "BRIDGE_CONFIG";

/// Environment variable naming the config directory.
pub const CONFIG_DIR_ENV: &str = "SIDECAR_CONFIG_DIR";

/// Pick the config file path from the explicit flag and environment values.
///
/// Empty strings are treated as unset.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    config_path_env: Option<&str>,
    config_dir_env: Option<&str>,
    cwd: &Path,
) -> PathBuf {
    if let Some(path) = explicit
        && !path.as_os_str().is_empty()
    {
        return path.to_path_buf();
    }
    if let Some(path) = config_path_env.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    match config_dir_env.filter(|d| !d.is_empty()) {
        Some(dir) => Path::new(dir).join(CONFIG_FILE),
        None => cwd.join(DEFAULT_CONFIG_DIR).join(CONFIG_FILE),
    }
}

/// Resolve the config path using the process environment.
pub fn config_path_from_env(explicit: Option<&Path>) -> PathBuf {
    let config_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config_dir = std::env::var(CONFIG_DIR_ENV).ok();
    resolve_config_path(
        explicit,
        config_path.as_deref(),
        config_dir.as_deref(),
        &current_dir_or_dot(),
    )
}

/// Discover, read, parse and validate the config.
pub fn load_config(explicit: Option<&Path>) -> Result<BridgeConfig> {
    let path = config_path_from_env(explicit);
    tracing::debug!(path = %path.display(), "Loading bridge config");
    load_config_file(&path).inspect_err(|e| {
        tracing::debug!(path = %e.path().display(), error = %e, "Failed to load bridge config");
    })
}

/// Load config from a specific file path (no discovery).
pub fn load_config_file(path: &Path) -> Result<BridgeConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    BridgeConfig::from_yaml(&contents).map_err(|e| match e {
        ParseOrInvalid::Parse(message) => ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        },
        ParseOrInvalid::Invalid(source) => ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn current_dir_or_dot() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    const VALID: &str = "version: \"1\"\ncommands:\n  npm:\n    container: node\n    exec: npm\n";

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("bridge.yaml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(
            Some(Path::new("/explicit.yaml")),
            Some("/env.yaml"),
            Some("/dir"),
            Path::new("/cwd"),
        );
        assert_eq!(path, PathBuf::from("/explicit.yaml"));
    }

    #[test]
    fn test_config_env_beats_dir_env() {
        let path = resolve_config_path(None, Some("/env.yaml"), Some("/dir"), Path::new("/cwd"));
        assert_eq!(path, PathBuf::from("/env.yaml"));
    }

    #[test]
    fn test_dir_env_used() {
        let path = resolve_config_path(None, None, Some("/dir"), Path::new("/cwd"));
        assert_eq!(path, PathBuf::from("/dir/bridge.yaml"));
    }

    #[test]
    fn test_default_under_cwd() {
        let path = resolve_config_path(None, Some(""), Some(""), Path::new("/cwd"));
        assert_eq!(path, PathBuf::from("/cwd/.sidecar/bridge.yaml"));
    }

    #[test]
    fn test_empty_explicit_falls_through() {
        let path = resolve_config_path(Some(Path::new("")), Some("/env.yaml"), None, Path::new("/"));
        assert_eq!(path, PathBuf::from("/env.yaml"));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), VALID);
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.command("npm").unwrap().executable, "npm");
    }

    #[test]
    fn test_explicit_path_loads_without_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), VALID);
        let config = load_config(Some(&path)).unwrap();
        assert!(config.command("npm").is_some());
    }

    #[test]
    fn test_load_config_reports_resolved_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_file(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_bad_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "version: \"1\"\ncommands: {npm: [\n");
        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("invalid YAML"));
    }

    #[test]
    fn test_invalid_config_carries_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "version: \"2\"\ncommands:\n  a:\n    container: c\n    exec: a\n",
        );
        match load_config_file(&path).unwrap_err() {
            ConfigError::Invalid { source, .. } => assert_eq!(
                source,
                ValidationError::UnsupportedVersion {
                    found: "2".to_string()
                }
            ),
            other => panic!("unexpected error: {other}"),
        }
    }
}
