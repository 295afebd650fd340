//! Per-app config directory resolution.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use webshell_common::ConfigError;

use crate::options::ShellOptions;

/// Returns the platform config directory that app directories live under.
///
/// - macOS: `~/Library/Application Support`
/// - Linux: `$XDG_CONFIG_HOME` (defaults to `~/.config`)
/// - Windows: `%APPDATA%`
pub fn default_config_root() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .ok_or_else(|| ConfigError::PathError("could not determine config directory".into()))
}

/// Returns `<root>/<name>` without touching the filesystem.
pub fn app_config_dir(root: &Path, name: &str) -> PathBuf {
    root.join(name)
}

/// Resolves the app directory for `name` and creates it if absent.
///
/// Uses `options.config_root` when set, otherwise [`default_config_root`].
pub fn ensure_app_dir(options: &ShellOptions, name: &str) -> Result<PathBuf, ConfigError> {
    let root = match &options.config_root {
        Some(root) => root.clone(),
        None => default_config_root()?,
    };
    let dir = app_config_dir(&root, name);

    if !dir.is_dir() {
        fs::create_dir_all(&dir).map_err(|e| {
            ConfigError::PathError(format!(
                "failed to create config directory {}: {e}",
                dir.display()
            ))
        })?;
        info!(path = %dir.display(), "created app config directory");
    }

    Ok(dir)
}
