//! Write a bounds record to disk.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place so a
//! crash mid-write never leaves a truncated record behind.

use std::path::Path;

use webshell_common::{ConfigError, WindowBounds};

/// Write `bounds` to `path` as pretty-printed JSON.
///
/// Creates parent directories if they don't exist.
pub fn save_bounds(bounds: &WindowBounds, path: &Path) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(bounds)
        .map_err(|e| ConfigError::WriteError(format!("failed to serialize bounds: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json).map_err(|e| {
        ConfigError::WriteError(format!("failed to write {}: {e}", tmp_path.display()))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename can fail on Windows when the target is held open.
        tracing::debug!(error = %e, "rename failed, falling back to direct write");
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, &json).map_err(|e| {
            ConfigError::WriteError(format!("failed to write {}: {e}", path.display()))
        })?;
    }

    tracing::debug!(path = %path.display(), "window bounds saved");
    Ok(())
}
