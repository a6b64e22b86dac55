//! Lock acquisition logic with polling and timeout

use super::LockError;
use super::probe::{self, Probe};
use crate::config::consts::lock::{POLL_INTERVAL, PROGRESS_MESSAGE_THRESHOLD};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

/// Opens the lock file for writing, creating it if needed
///
/// Each call yields a new file description, so two handles in the same
/// process contend with each other just like two processes do.
pub(crate) fn open_lock_file(lock_path: &Path) -> Result<File, LockError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)
        .map_err(|e| LockError::io(e, lock_path, "open lock file"))
}

/// Polls for an exclusive lock until it is obtained or `timeout` elapses
///
/// Returns `Ok(Some(file))` holding the lock, or `Ok(None)` once the
/// timeout has elapsed (the file is closed before returning). Errors other
/// than contention are returned immediately.
pub(crate) fn acquire_with_timeout(
    lock_path: &Path,
    lock_name: &str,
    timeout: Duration,
) -> Result<Option<File>, LockError> {
    let file = open_lock_file(lock_path)?;

    let start = Instant::now();
    let mut progress_shown = false;

    loop {
        let outcome = probe::try_lock_exclusive(&file)
            .map_err(|e| LockError::io(e, lock_path, "acquire lock"))?;

        match outcome {
            Probe::Acquired => {
                log::debug!(
                    "acquired lock '{}' after {:?} ({})",
                    lock_name,
                    start.elapsed(),
                    lock_path.display()
                );
                return Ok(Some(file));
            }
            Probe::Contended => {
                let elapsed = start.elapsed();

                if elapsed >= timeout {
                    log::debug!(
                        "timed out after {:?} waiting for lock '{}' ({})",
                        elapsed,
                        lock_name,
                        lock_path.display()
                    );
                    return Ok(None);
                }

                if !progress_shown && elapsed >= PROGRESS_MESSAGE_THRESHOLD {
                    log::info!(
                        "Waiting for lock '{}' on {}...",
                        lock_name,
                        lock_path.display()
                    );
                    progress_shown = true;
                }

                // Never oversleep the deadline by more than one poll interval
                thread::sleep(POLL_INTERVAL.min(timeout - elapsed));
            }
        }
    }
}
