//! RAII lock guard for automatic lock release

use super::FileLock;
use std::path::Path;

/// RAII guard for a held [`FileLock`]
///
/// When this guard is dropped, the lock is released. This covers normal
/// scope exit, early returns through `?`, and panics unwinding through the
/// critical section.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard {
    lock: FileLock,
}

impl LockGuard {
    pub(crate) fn new(lock: FileLock) -> Self {
        debug_assert!(lock.is_held());
        Self { lock }
    }

    /// Logical name of the held lock
    pub fn lock_name(&self) -> &str {
        self.lock.lock_name()
    }

    /// Path of the backing lock file
    pub fn lock_file(&self) -> &Path {
        self.lock.lock_file()
    }

    /// Releases the lock before the end of the scope
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}
