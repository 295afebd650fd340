//! Read a persisted bounds record from disk.

use std::path::Path;

use tracing::{debug, info};
use webshell_common::{ConfigError, WindowBounds};

/// Load a bounds record from `path`.
pub fn load_bounds(path: &Path) -> Result<WindowBounds, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let bounds: WindowBounds = serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse {}: {e}", path.display())))?;

    info!(path = %path.display(), "loaded window bounds");
    Ok(bounds)
}

/// Load the saved bounds, or fall back to `{0, 0, width, height, normal}`.
///
/// A saved record keeps its own width and height; the arguments only size
/// a window that has never been persisted. Missing and malformed files are
/// treated the same.
pub fn load_or_default(path: &Path, width: i32, height: i32) -> WindowBounds {
    match load_bounds(path) {
        Ok(bounds) => bounds,
        Err(e) => {
            debug!(error = %e, "no usable window bounds, using defaults");
            WindowBounds::with_size(width, height)
        }
    }
}
