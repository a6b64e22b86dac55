//! CLI command implementations

pub mod path;
pub mod run;
pub mod status;

use buddylock_core::config::consts::lock::DEFAULT_TIMEOUT;
use buddylock_core::{LockDir, ResourceKind};
use std::path::PathBuf;
use std::time::Duration;

/// Which lock a command runs under
pub enum Target {
    /// Plain lock name
    Named(String),
    /// Project creation lock for a slug
    Project(String),
    /// Slug generation lock for a base slug
    Slug(String),
}

impl Target {
    /// Wait budget when `--timeout` is not given
    pub fn default_timeout(&self) -> Duration {
        match self {
            Target::Named(_) => DEFAULT_TIMEOUT,
            Target::Project(_) => ResourceKind::Project.default_timeout(),
            Target::Slug(_) => ResourceKind::Slug.default_timeout(),
        }
    }
}

/// Resolves the `--lock-dir` option to a lock directory
pub fn lock_dir(option: Option<PathBuf>) -> LockDir {
    option.map(LockDir::new).unwrap_or_default()
}
