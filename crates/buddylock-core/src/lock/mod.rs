//! File locking module for process-level mutual exclusion
//!
//! This module provides named advisory file locks using the fs2 crate so
//! that threads and processes on one machine can serialize work on the same
//! logical resource.
//!
//! A lock name maps to `<lock dir>/<name>.lock`. The file is a zero-byte
//! rendezvous point: it is created on first use and never deleted, and only
//! its OS lock state carries meaning.
//!
//! # Examples
//!
//! ```no_run
//! use buddylock_core::lock::FileLock;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lock = FileLock::new("reindex", Duration::from_secs(5), None)?;
//! let guard = lock.lock()?;
//! // Critical section here
//! drop(guard); // Explicit drop (automatic on scope exit)
//! # Ok(())
//! # }
//! ```

mod acquire;
mod dir;
mod error;
mod file_lock;
mod guard;
mod named;
mod probe;

pub use dir::LockDir;
pub use error::LockError;
pub use file_lock::FileLock;
pub use guard::LockGuard;
pub use named::{ResourceKind, project_creation_lock, slug_generation_lock};
