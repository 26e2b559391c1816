//! Locates where tickbox keeps its local state.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Resolve the directory all application data lives under.
///
/// `TICKBOX_DATA_DIR` overrides the platform default
/// (e.g. `~/.local/share/tickbox`).
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(overridden) = env::var("TICKBOX_DATA_DIR") {
        return Ok(PathBuf::from(overridden));
    }

    let base = dirs::data_local_dir().ok_or(PathError::DataDirUnavailable)?;
    let root = base.join("tickbox");

    // create_dir_all is a no-op when the directory already exists
    fs::create_dir_all(&root).map_err(|e| PathError::CreateDir {
        path: root.clone(),
        reason: e.to_string(),
    })?;

    Ok(root)
}
