//! Command classification.
//!
//! Precedence for a command name:
//! 1. `overrides` → [`Resolution::Native`]
//! 2. `commands` → [`Resolution::Sandboxed`]
//! 3. `default_container` (if set) → [`Resolution::Sandboxed`] running the
//!    command under its own name, with no path rules and no static workdir
//! 4. otherwise [`Resolution::Unresolved`]; the dispatcher then tries the host
//!    `PATH` before giving up with exit 127
//!
//! Classification is pure: it depends only on the config and the name.

use std::borrow::Cow;

use bridge_config::{BridgeConfig, CommandMapping};

/// How a command name should be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Run a host binary in place of this process.
    Native { path: &'a str },

    /// Run inside a sidecar container.
    Sandboxed(Cow<'a, CommandMapping>),

    /// Not configured; the caller falls back to a host lookup.
    Unresolved,
}

/// Classify `name` against `config`.
pub fn resolve_command<'a>(config: &'a BridgeConfig, name: &str) -> Resolution<'a> {
    if let Some(over) = config.native_override(name) {
        return Resolution::Native {
            path: over.native.as_str(),
        };
    }

    if let Some(mapping) = config.command(name) {
        return Resolution::Sandboxed(Cow::Borrowed(mapping));
    }

    if let Some(container) = config.default_container() {
        return Resolution::Sandboxed(Cow::Owned(CommandMapping::new(container, name)));
    }

    Resolution::Unresolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_config::{NativeOverride, SCHEMA_VERSION};

    fn config() -> BridgeConfig {
        let mut config = BridgeConfig {
            version: SCHEMA_VERSION.to_string(),
            ..Default::default()
        };
        config.commands.insert(
            "composer".to_string(),
            CommandMapping::new("php", "composer"),
        );
        config
            .commands
            .insert("git".to_string(), CommandMapping::new("tools", "git"));
        config
            .overrides
            .insert("git".to_string(), NativeOverride::new("/usr/bin/git"));
        config
    }

    #[test]
    fn test_override_beats_command() {
        let config = config();
        assert_eq!(
            resolve_command(&config, "git"),
            Resolution::Native {
                path: "/usr/bin/git"
            }
        );
    }

    #[test]
    fn test_command_is_sandboxed() {
        let config = config();
        match resolve_command(&config, "composer") {
            Resolution::Sandboxed(mapping) => {
                assert!(matches!(mapping, Cow::Borrowed(_)));
                assert_eq!(mapping.container, "php");
                assert_eq!(mapping.executable, "composer");
            }
            other => panic!("expected sandboxed, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_is_unresolved() {
        let config = config();
        assert_eq!(resolve_command(&config, "cargo"), Resolution::Unresolved);
    }

    #[test]
    fn test_default_container_catches_unmapped() {
        let mut config = config();
        config.default_container = Some("workspace".to_string());

        match resolve_command(&config, "cargo") {
            Resolution::Sandboxed(mapping) => {
                assert_eq!(mapping.container, "workspace");
                assert_eq!(mapping.executable, "cargo");
                assert!(mapping.workdir.is_none());
                assert!(mapping.path_rules.is_empty());
            }
            other => panic!("expected sandboxed, got {other:?}"),
        }

        // Explicit entries still take precedence over the default container.
        assert_eq!(
            resolve_command(&config, "git"),
            Resolution::Native {
                path: "/usr/bin/git"
            }
        );
        assert!(matches!(
            resolve_command(&config, "composer"),
            Resolution::Sandboxed(Cow::Borrowed(_))
        ));
    }

    #[test]
    fn test_empty_default_container_is_ignored() {
        let mut config = config();
        config.default_container = Some(String::new());
        assert_eq!(resolve_command(&config, "cargo"), Resolution::Unresolved);
    }

    #[test]
    fn test_override_only_name() {
        let mut config = config();
        config
            .overrides
            .insert("node".to_string(), NativeOverride::new("/opt/node/bin/node"));
        assert_eq!(
            resolve_command(&config, "node"),
            Resolution::Native {
                path: "/opt/node/bin/node"
            }
        );
    }
}
