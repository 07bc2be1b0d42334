//! Working directory selection for sidecar commands.

use bridge_config::CommandMapping;

/// Directory used when neither the cwd nor a static workdir is available.
const ROOT_DIR: &str = "/";

/// Pick the directory a sidecar command starts in.
///
/// Priority:
/// 1. The cwd translated by the mapping's path rules, if any rule matched
///    (identity rules included)
/// 2. The mapping's static `workdir`
/// 3. The cwd unchanged
///
/// `cwd` is `None` when the current directory could not be read; the static
/// workdir or `/` is used then.
pub fn resolve_workdir(mapping: &CommandMapping, cwd: Option<&str>) -> String {
    let Some(cwd) = cwd else {
        return mapping.static_workdir().unwrap_or(ROOT_DIR).to_string();
    };

    let translated = mapping.translate_path(cwd);
    if translated.matched {
        return translated.path;
    }

    mapping.static_workdir().unwrap_or(cwd).to_string()
}
