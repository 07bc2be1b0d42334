//! Configuration types mapping to the YAML schema.
//!
//! ```yaml
//! version: "1"
//! default_container: php
//! containers:
//!   php: myproject-php-1
//! commands:
//!   composer:
//!     container: php
//!     exec: composer
//!     workdir: /var/www/html
//!     paths:
//!       /workspaces/myproject: /var/www/html
//! overrides:
//!   git:
//!     native: /usr/bin/git
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::error::{ParseOrInvalid, ValidationError};
use crate::paths::{self, PathRules, Translation};

/// The only supported value of the `version` field.
pub const SCHEMA_VERSION: &str = "1";

// ─────────────────────────────────────────────────────────────────────────────
// Top-level Config
// ─────────────────────────────────────────────────────────────────────────────

/// Root configuration structure.
///
/// Loaded once at startup and read-only afterwards; components borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Schema version. Must equal [`SCHEMA_VERSION`].
    #[serde(deserialize_with = "deserialize_version")]
    pub version: String,

    /// Container used for commands absent from both `commands` and `overrides`.
    pub default_container: Option<String>,

    /// Logical container name → concrete container name.
    pub containers: HashMap<String, String>,

    /// Command name → sidecar mapping.
    pub commands: HashMap<String, CommandMapping>,

    /// Command name → native host binary. Wins over `commands`.
    pub overrides: HashMap<String, NativeOverride>,
}

/// How one command is dispatched into a sidecar container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommandMapping {
    /// Logical container name (resolved through `containers`).
    pub container: String,

    /// Binary to invoke inside the container.
    #[serde(rename = "exec")]
    pub executable: String,

    /// Static working directory used when no path rule matches the cwd.
    pub workdir: Option<String>,

    /// Host path prefix → container path prefix.
    #[serde(rename = "paths")]
    pub path_rules: PathRules,
}

/// A command that runs a host binary instead of a sidecar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NativeOverride {
    /// Absolute path to the host executable.
    pub native: String,
}

/// Accept `version: 1` as well as `version: "1"`.
///
/// A bare `version:` (null) becomes an empty string so validation reports it
/// as missing.
fn deserialize_version<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawVersion {
        Text(String),
        Number(u64),
    }

    Ok(match Option::<RawVersion>::deserialize(deserializer)? {
        Some(RawVersion::Text(s)) => s,
        Some(RawVersion::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

impl BridgeConfig {
    /// Parse a config from a YAML string and validate it.
    ///
    /// Parse failures are returned as a message; callers attach the file path.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ParseOrInvalid> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ParseOrInvalid::Parse(e.to_string()))?;
        config.validate().map_err(ParseOrInvalid::Invalid)?;
        Ok(config)
    }

    /// Check required fields across the whole config.
    ///
    /// Every command and override is inspected. When several entries are
    /// invalid, which one is reported is unspecified.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.version.is_empty() {
            return Err(ValidationError::MissingVersion);
        }
        if self.version != SCHEMA_VERSION {
            return Err(ValidationError::UnsupportedVersion {
                found: self.version.clone(),
            });
        }
        if self.commands.is_empty() {
            return Err(ValidationError::NoCommands);
        }

        for (name, cmd) in &self.commands {
            if cmd.container.is_empty() {
                return Err(ValidationError::MissingContainer {
                    command: name.clone(),
                });
            }
            if cmd.executable.is_empty() {
                return Err(ValidationError::MissingExecutable {
                    command: name.clone(),
                });
            }
        }

        for (name, over) in &self.overrides {
            if over.native.is_empty() {
                return Err(ValidationError::MissingNative { name: name.clone() });
            }
        }

        Ok(())
    }

    /// Resolve a logical container name to the concrete one.
    ///
    /// Names absent from `containers` resolve to themselves.
    pub fn resolve_container<'a>(&'a self, name: &'a str) -> &'a str {
        self.containers.get(name).map_or(name, String::as_str)
    }

    /// Look up a command mapping by name.
    pub fn command(&self, name: &str) -> Option<&CommandMapping> {
        self.commands.get(name)
    }

    /// Look up a native override by name.
    pub fn native_override(&self, name: &str) -> Option<&NativeOverride> {
        self.overrides.get(name)
    }

    /// Default container, treating an empty string as unset.
    pub fn default_container(&self) -> Option<&str> {
        self.default_container.as_deref().filter(|c| !c.is_empty())
    }

    /// All configured command names, sorted.
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl CommandMapping {
    /// Create a mapping with no workdir and no path rules.
    pub fn new(container: impl Into<String>, executable: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            executable: executable.into(),
            workdir: None,
            path_rules: PathRules::new(),
        }
    }

    /// Set the static working directory.
    pub fn with_workdir(mut self, workdir: impl Into<String>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }

    /// Add a host → container prefix rule.
    pub fn with_path_rule(mut self, host: impl Into<String>, container: impl Into<String>) -> Self {
        self.path_rules.insert(host.into(), container.into());
        self
    }

    /// Static workdir, treating an empty string as unset.
    pub fn static_workdir(&self) -> Option<&str> {
        self.workdir.as_deref().filter(|w| !w.is_empty())
    }

    /// Translate one path through this mapping's rules.
    pub fn translate_path(&self, path: &str) -> Translation {
        paths::translate_path(&self.path_rules, path)
    }

    /// Translate an argument vector through this mapping's rules.
    pub fn translate_args(&self, args: &[String]) -> Vec<String> {
        paths::translate_args(&self.path_rules, args)
    }
}

impl NativeOverride {
    /// Create an override pointing at a host binary.
    pub fn new(native: impl Into<String>) -> Self {
        Self {
            native: native.into(),
        }
    }
}
