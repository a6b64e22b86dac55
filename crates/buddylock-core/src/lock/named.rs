//! Named-resource lock factories
//!
//! Each resource kind owns a prefix of the lock name space, so a project and
//! a slug with the same base name never contend for the same lock file.

use super::acquire::open_lock_file;
use super::probe::{self, Probe};
use super::{FileLock, LockDir, LockError, LockGuard};
use crate::config::consts::resource::{
    PROJECT_LOCK_TIMEOUT, PROJECT_PREFIX, SLUG_LOCK_TIMEOUT, SLUG_PREFIX,
};
use std::fmt;
use std::time::Duration;

/// Category of logical resource serialized by a named lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Project scaffolding (`project_<slug>`)
    Project,
    /// Unique slug generation (`slug_<base>`)
    Slug,
}

impl ResourceKind {
    /// Lock name prefix reserved for this kind
    pub fn prefix(self) -> &'static str {
        match self {
            ResourceKind::Project => PROJECT_PREFIX,
            ResourceKind::Slug => SLUG_PREFIX,
        }
    }

    /// Wait budget tuned to the expected critical section length
    pub fn default_timeout(self) -> Duration {
        match self {
            ResourceKind::Project => PROJECT_LOCK_TIMEOUT,
            ResourceKind::Slug => SLUG_LOCK_TIMEOUT,
        }
    }

    /// Lock name for `base` within this kind's namespace
    pub fn lock_name(self, base: &str) -> String {
        format!("{}{}", self.prefix(), base)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Project => write!(f, "project"),
            ResourceKind::Slug => write!(f, "slug"),
        }
    }
}

impl LockDir {
    /// Prepares a [`FileLock`] named `lock_name` in this directory
    pub fn file_lock(
        &self,
        lock_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<FileLock, LockError> {
        FileLock::in_dir(self, lock_name, timeout)
    }

    /// Scoped lock over `base` in the namespace of `kind`
    pub fn resource_lock(
        &self,
        kind: ResourceKind,
        base: &str,
        timeout: Duration,
    ) -> Result<LockGuard, LockError> {
        log::debug!("acquiring {} lock for '{}'", kind, base);
        self.file_lock(kind.lock_name(base), timeout)?.lock()
    }

    /// Scoped lock serializing creation of the project `project_slug`
    pub fn project_creation_lock(
        &self,
        project_slug: &str,
        timeout: Duration,
    ) -> Result<LockGuard, LockError> {
        self.resource_lock(ResourceKind::Project, project_slug, timeout)
    }

    /// Scoped lock serializing unique slug generation from `base_slug`
    pub fn slug_generation_lock(
        &self,
        base_slug: &str,
        timeout: Duration,
    ) -> Result<LockGuard, LockError> {
        self.resource_lock(ResourceKind::Slug, base_slug, timeout)
    }

    /// Reports whether some other handle currently holds `lock_name`
    ///
    /// Makes a single non-blocking attempt. If the attempt succeeds the lock
    /// is given back immediately, so the answer may be stale by the time the
    /// caller reads it.
    pub fn is_locked(&self, lock_name: &str) -> Result<bool, LockError> {
        let path = self.lock_file(lock_name)?;
        self.ensure()?;

        let file = open_lock_file(&path)?;
        let outcome =
            probe::try_lock_exclusive(&file).map_err(|e| LockError::io(e, &path, "probe lock"))?;

        match outcome {
            Probe::Acquired => {
                if let Err(e) = probe::unlock(&file) {
                    log::debug!(
                        "ignoring unlock failure after probing lock '{}' ({}): {}",
                        lock_name,
                        path.display(),
                        e
                    );
                }
                Ok(false)
            }
            Probe::Contended => Ok(true),
        }
    }
}

/// Serializes creation of `project_slug` across threads and processes
///
/// Uses the system lock directory. `timeout` is usually
/// [`PROJECT_LOCK_TIMEOUT`].
///
/// # Examples
///
/// ```no_run
/// use buddylock_core::config::consts::resource::PROJECT_LOCK_TIMEOUT;
/// use buddylock_core::project_creation_lock;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let _guard = project_creation_lock("my-project", PROJECT_LOCK_TIMEOUT)?;
/// // Create project directories and files
/// # Ok(())
/// # }
/// ```
pub fn project_creation_lock(
    project_slug: &str,
    timeout: Duration,
) -> Result<LockGuard, LockError> {
    LockDir::system().project_creation_lock(project_slug, timeout)
}

/// Serializes unique slug generation from `base_slug`
///
/// Uses the system lock directory. `timeout` is usually
/// [`SLUG_LOCK_TIMEOUT`].
pub fn slug_generation_lock(base_slug: &str, timeout: Duration) -> Result<LockGuard, LockError> {
    LockDir::system().slug_generation_lock(base_slug, timeout)
}
