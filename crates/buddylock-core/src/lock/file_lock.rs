//! Named file lock with bounded-wait acquisition

use super::acquire::acquire_with_timeout;
use super::probe;
use super::{LockDir, LockError, LockGuard};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Exclusive advisory lock over `<lock dir>/<lock_name>.lock`
///
/// Construction only prepares the lock directory. [`FileLock::acquire`]
/// polls for the lock, [`FileLock::release`] gives it back, and dropping the
/// instance releases it as well. For a scoped critical section prefer
/// [`FileLock::lock`], which returns a [`LockGuard`].
///
/// Exclusivity is enforced by the operating system per open file
/// description, so it holds between threads of one process as well as
/// between processes. The instance's own `held` state only mirrors what it
/// believes about itself.
#[derive(Debug)]
pub struct FileLock {
    lock_name: String,
    timeout: Duration,
    lock_file: PathBuf,
    held: Option<File>,
}

impl FileLock {
    /// Prepares a lock without acquiring it
    ///
    /// `base_dir` defaults to [`LockDir::system`]. The directory is created if
    /// missing; an existing directory is not an error.
    ///
    /// # Errors
    ///
    /// - `LockError::InvalidName` if `lock_name` is not a single file name
    /// - `LockError::Io` if the lock directory cannot be created
    pub fn new(
        lock_name: impl Into<String>,
        timeout: Duration,
        base_dir: Option<&Path>,
    ) -> Result<Self, LockError> {
        let dir = base_dir.map(LockDir::new).unwrap_or_default();
        Self::in_dir(&dir, lock_name, timeout)
    }

    pub(crate) fn in_dir(
        dir: &LockDir,
        lock_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LockError> {
        let lock_name = lock_name.into();
        let lock_file = dir.lock_file(&lock_name)?;
        dir.ensure()?;

        Ok(Self {
            lock_name,
            timeout,
            lock_file,
            held: None,
        })
    }

    /// Logical name of the lock
    pub fn lock_name(&self) -> &str {
        &self.lock_name
    }

    /// Maximum time [`FileLock::acquire`] waits
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Path of the backing lock file
    pub fn lock_file(&self) -> &Path {
        &self.lock_file
    }

    /// Whether this instance currently holds the lock
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Waits up to the configured timeout for the lock
    ///
    /// Returns `Ok(true)` once the lock is held and `Ok(false)` if another
    /// holder kept it for the whole timeout.
    ///
    /// # Errors
    ///
    /// - `LockError::AlreadyHeld` if this instance already holds the lock
    /// - `LockError::Io` if the lock file cannot be opened or locked for a
    ///   reason other than contention (including a lock directory removed
    ///   since construction)
    pub fn acquire(&mut self) -> Result<bool, LockError> {
        if self.held.is_some() {
            return Err(LockError::AlreadyHeld {
                lock_name: self.lock_name.clone(),
            });
        }

        self.held = acquire_with_timeout(&self.lock_file, &self.lock_name, self.timeout)?;
        Ok(self.held.is_some())
    }

    /// Releases the lock if held
    ///
    /// Idempotent and infallible. Unlock failures are logged and ignored,
    /// since release usually runs while another error is being propagated.
    pub fn release(&mut self) {
        let Some(file) = self.held.take() else {
            return;
        };

        if let Err(e) = probe::unlock(&file) {
            log::debug!(
                "ignoring unlock failure for lock '{}' ({}): {}",
                self.lock_name,
                self.lock_file.display(),
                e
            );
        }

        // Closing the handle drops any lock the unlock call could not
        drop(file);
        log::debug!("released lock '{}'", self.lock_name);
    }

    /// Acquires the lock for a scoped critical section
    ///
    /// The returned guard releases the lock when dropped, on normal exit,
    /// early return, or panic.
    ///
    /// # Errors
    ///
    /// - `LockError::Timeout` if the lock stayed held elsewhere for the
    ///   whole timeout
    /// - any error from [`FileLock::acquire`]
    pub fn lock(mut self) -> Result<LockGuard, LockError> {
        if self.acquire()? {
            Ok(LockGuard::new(self))
        } else {
            Err(LockError::Timeout {
                lock_name: self.lock_name.clone(),
                timeout: self.timeout,
                path: self.lock_file.clone(),
            })
        }
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        self.release();
    }
}
