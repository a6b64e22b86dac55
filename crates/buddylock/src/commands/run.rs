//! Run command - execute a child process inside a lock's critical section

use super::Target;
use crate::cli::ExecArgs;
use anyhow::{Context, Result, bail};
use buddylock_core::LockDir;
use std::process::{Command, ExitStatus};

/// Acquires the target lock, runs the command, and returns its exit code
///
/// The lock is released after the child exits, whether it succeeded or
/// not. A lock timeout is returned as `LockError::Timeout` so the caller can
/// map it to a dedicated exit status.
pub fn run(lock_dir: &LockDir, target: Target, exec: ExecArgs) -> Result<i32> {
    let timeout = exec.timeout.unwrap_or_else(|| target.default_timeout());

    let guard = match &target {
        Target::Named(name) => lock_dir.file_lock(name.as_str(), timeout)?.lock()?,
        Target::Project(slug) => lock_dir.project_creation_lock(slug, timeout)?,
        Target::Slug(base) => lock_dir.slug_generation_lock(base, timeout)?,
    };

    let Some((program, args)) = exec.command.split_first() else {
        bail!("No command given");
    };

    log::debug!(
        "running '{}' under lock '{}' ({})",
        program,
        guard.lock_name(),
        guard.lock_file().display()
    );

    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run '{}'", program))?;

    guard.release();
    Ok(exit_code(status))
}

/// Exit code to forward from the child, following shell conventions
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
