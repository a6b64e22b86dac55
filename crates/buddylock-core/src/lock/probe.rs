//! Platform lock probe
//!
//! Single seam between the poll loop and the OS advisory lock call.
//! `fs2` maps this to `flock(2)` on Unix and `LockFileEx` on Windows.

use fs2::FileExt;
use std::fs::File;
use std::io;

/// Outcome of one non-blocking exclusive lock attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// This handle now holds the lock
    Acquired,
    /// Another handle holds the lock
    Contended,
}

/// Tries to take an exclusive lock on `file` without blocking
///
/// Contention is reported as `Ok(Probe::Contended)`. Every other failure
/// is returned as an error for the caller to treat as fatal.
pub(crate) fn try_lock_exclusive(file: &File) -> io::Result<Probe> {
    match file.try_lock_exclusive() {
        Ok(()) => Ok(Probe::Acquired),
        Err(e) if is_contended(&e) => Ok(Probe::Contended),
        Err(e) => Err(e),
    }
}

/// Drops the advisory lock held through `file`
pub(crate) fn unlock(file: &File) -> io::Result<()> {
    FileExt::unlock(file)
}

fn is_contended(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::WouldBlock {
        return true;
    }

    // Windows reports ERROR_LOCK_VIOLATION rather than WouldBlock
    let contended = fs2::lock_contended_error();
    err.raw_os_error().is_some() && err.raw_os_error() == contended.raw_os_error()
}
