//! Configuration error types.

use std::path::PathBuf;

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Example configuration referenced when no config file can be found.
pub const EXAMPLE_CONFIG_PATH: &str = "demos/claude-bridge.yaml";

/// Errors that can occur while locating, reading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No file exists at the resolved config path.
    #[error(
        "config file not found: {}\nSee {example} for an example configuration",
        .path.display(),
        example = EXAMPLE_CONFIG_PATH
    )]
    NotFound { path: PathBuf },

    /// The config file exists but could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid YAML or does not match the schema.
    #[error("invalid YAML in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// The file parsed but failed validation.
    #[error("invalid config in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    /// Path of the config file this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::NotFound { path }
            | ConfigError::ReadFile { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

/// Validation failures for a parsed [`BridgeConfig`](crate::BridgeConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `version` is absent or empty.
    #[error("missing required field 'version'")]
    MissingVersion,

    /// `version` is present but not a supported schema.
    #[error("unsupported config version '{found}', expected '{}'", crate::SCHEMA_VERSION)]
    UnsupportedVersion { found: String },

    /// `commands` is absent or empty.
    #[error("missing required field 'commands' (must have at least one command)")]
    NoCommands,

    /// A command mapping has no container.
    #[error("command '{command}': missing required field 'container'")]
    MissingContainer { command: String },

    /// A command mapping has no executable.
    #[error("command '{command}': missing required field 'exec'")]
    MissingExecutable { command: String },

    /// A native override has no binary path.
    #[error("override '{name}': missing required field 'native'")]
    MissingNative { name: String },
}

/// Failure from [`BridgeConfig::from_yaml`](crate::BridgeConfig::from_yaml),
/// before a file path is attached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseOrInvalid {
    /// The YAML could not be deserialized.
    #[error("{0}")]
    Parse(String),

    /// The YAML deserialized but failed validation.
    #[error("{0}")]
    Invalid(ValidationError),
}
