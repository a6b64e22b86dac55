//! Lock directory layout and lock name resolution

use super::LockError;
use crate::config::consts::lock::{LOCK_DIR_NAME, LOCK_FILE_EXTENSION};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Directory holding the lock files of one deployment
///
/// Every process that must contend on a lock name has to use the same
/// `LockDir`. Two directories never contend with each other, which is what
/// tests rely on for isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockDir {
    root: PathBuf,
}

impl LockDir {
    /// Lock directory at an explicit location
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Process-wide default: `<system temp dir>/brainstormbuddy_locks`
    pub fn system() -> Self {
        Self::new(std::env::temp_dir().join(LOCK_DIR_NAME))
    }

    /// Root directory of this lock directory
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolves `lock_name` to `<root>/<lock_name>.lock`
    ///
    /// # Errors
    ///
    /// Returns `LockError::InvalidName` if the name is not a single,
    /// non-empty file name component.
    pub fn lock_file(&self, lock_name: &str) -> Result<PathBuf, LockError> {
        validate_lock_name(lock_name)?;
        Ok(self.root.join(format!("{lock_name}.{LOCK_FILE_EXTENSION}")))
    }

    /// Creates the directory if it does not exist yet
    ///
    /// Safe to race with other processes creating the same directory.
    pub fn ensure(&self) -> Result<(), LockError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| LockError::io(e, &self.root, "create lock directory"))
    }
}

impl Default for LockDir {
    fn default() -> Self {
        Self::system()
    }
}

/// Checks that a lock name maps to exactly one file inside the lock directory
pub(crate) fn validate_lock_name(name: &str) -> Result<(), LockError> {
    if name.is_empty() {
        return Err(LockError::invalid_name(name, "name cannot be empty"));
    }

    // Reject both separators regardless of platform so names stay portable
    if name.contains(['/', '\\']) {
        return Err(LockError::invalid_name(
            name,
            "name cannot contain path separators",
        ));
    }

    if name.contains('\0') {
        return Err(LockError::invalid_name(name, "name cannot contain NUL"));
    }

    let mut normal_count = 0;
    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) => normal_count += 1,
            Component::CurDir => {
                return Err(LockError::invalid_name(
                    name,
                    "name cannot be the current directory (.)",
                ));
            }
            Component::ParentDir => {
                return Err(LockError::invalid_name(
                    name,
                    "name cannot be the parent directory (..)",
                ));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(LockError::invalid_name(name, "name cannot be a path root"));
            }
        }
    }

    if normal_count != 1 {
        return Err(LockError::invalid_name(
            name,
            "name must be a single file name",
        ));
    }

    Ok(())
}
