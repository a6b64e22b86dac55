//! Constants used throughout the lock subsystem

/// Lock acquisition and lock file layout
pub mod lock {
    use std::time::Duration;

    /// Name of the application directory created under the system temp dir
    pub const LOCK_DIR_NAME: &str = "brainstormbuddy_locks";

    /// Extension appended to every lock name to form its file name
    pub const LOCK_FILE_EXTENSION: &str = "lock";

    /// Wait budget used when the caller has no better estimate
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Sleep between two non-blocking lock attempts
    pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

    /// Waits longer than this emit a single progress message
    pub const PROGRESS_MESSAGE_THRESHOLD: Duration = Duration::from_secs(2);
}

/// Named-resource lock categories
pub mod resource {
    use std::time::Duration;

    /// Prefix for project creation locks
    pub const PROJECT_PREFIX: &str = "project_";

    /// Prefix for slug generation locks
    pub const SLUG_PREFIX: &str = "slug_";

    /// Default wait for project creation (directory scaffolding is slow)
    pub const PROJECT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

    /// Default wait for slug generation (read-check-write is fast)
    pub const SLUG_LOCK_TIMEOUT: Duration = Duration::from_secs(2);
}
