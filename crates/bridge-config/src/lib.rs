//! Configuration system for the bridge command dispatcher.
//!
//! Provides YAML-based configuration with:
//! - Command mappings that route a tool into a sidecar container
//! - Native overrides that run a host binary instead
//! - Logical container aliases (`php` → `myproject-php-1`)
//! - Per-command path rules rewriting host paths into container paths
//!
//! Config file discovery:
//! - `--config` flag, then `BRIDGE_CONFIG`
//! - `$SIDECAR_CONFIG_DIR/bridge.yaml`, then `./.sidecar/bridge.yaml`

pub mod discovery;
pub mod error;
pub mod paths;
pub mod types;

pub use discovery::{config_path_from_env, load_config, load_config_file, resolve_config_path};
pub use error::{ConfigError, ParseOrInvalid, Result, ValidationError};
pub use paths::{PathRules, Translation, translate_args, translate_path};
pub use types::*;
