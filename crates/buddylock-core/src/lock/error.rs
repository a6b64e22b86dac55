//! Error types for file locking

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Error type for lock operations
#[derive(Error, Debug)]
pub enum LockError {
    /// The bounded wait expired while another holder kept the lock
    #[error(
        "Timeout waiting for lock '{lock_name}' after {:.3}s ({})",
        .timeout.as_secs_f64(),
        .path.display()
    )]
    Timeout {
        /// Logical lock name
        lock_name: String,
        /// Configured wait budget that elapsed
        timeout: Duration,
        /// Path to the lock file
        path: PathBuf,
    },

    /// I/O error while preparing or locking the backing file
    #[error("I/O error during {operation} on {}: {source}", .path.display())]
    Io {
        /// The underlying I/O error
        source: std::io::Error,
        /// Path involved in the failed operation
        path: PathBuf,
        /// Operation that failed
        operation: String,
    },

    /// The lock name cannot be mapped to a single file in the lock directory
    #[error("Invalid lock name '{name}': {reason}")]
    InvalidName {
        /// Rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// `acquire` was called on an instance that already holds its lock
    #[error("Lock '{lock_name}' is already held by this instance")]
    AlreadyHeld {
        /// Logical lock name
        lock_name: String,
    },
}

impl LockError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>, operation: &str) -> Self {
        LockError::Io {
            source,
            path: path.into(),
            operation: operation.to_string(),
        }
    }

    pub(crate) fn invalid_name(name: &str, reason: &str) -> Self {
        LockError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns true when the error means "busy, try later"
    pub fn is_timeout(&self) -> bool {
        matches!(self, LockError::Timeout { .. })
    }
}
