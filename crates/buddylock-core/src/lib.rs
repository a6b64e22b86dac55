//! Cross-process named file locks with bounded waiting
//!
//! The [`lock`] module provides an advisory, exclusive lock per lock name,
//! backed by a zero-byte file in a shared lock directory. Acquisition polls
//! with a non-blocking probe until a timeout elapses, and release is
//! guaranteed through an RAII guard.

pub mod config;
pub mod lock;

pub use lock::{
    FileLock, LockDir, LockError, LockGuard, ResourceKind, project_creation_lock,
    slug_generation_lock,
};
