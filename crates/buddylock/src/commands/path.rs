//! Path command - print the lock file for a lock name

use crate::output::print_line;
use anyhow::Result;
use buddylock_core::LockDir;

pub fn run(lock_dir: &LockDir, name: &str) -> Result<i32> {
    let path = lock_dir.lock_file(name)?;
    print_line(&path.display().to_string())?;
    Ok(0)
}
