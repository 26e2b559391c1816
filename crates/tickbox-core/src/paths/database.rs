//! Where the todos database lives on disk.

use std::fs;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// Get the full path to the `SQLite` database file,
/// `<data root>/data/todos.db`.
///
/// Creates the parent directory if it does not exist yet.
pub fn database_path() -> Result<PathBuf, PathError> {
    let dir = data_root()?.join("data");

    fs::create_dir_all(&dir).map_err(|e| PathError::CreateDir {
        path: dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(dir.join("todos.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_ends_with_todos_db() {
        let path = database_path().unwrap();
        assert!(path.to_string_lossy().ends_with("todos.db"));
    }
}
