//! Status command - probe whether a lock is currently held

use crate::output::{print_json, print_line};
use anyhow::Result;
use buddylock_core::LockDir;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct LockStatus<'a> {
    name: &'a str,
    path: &'a Path,
    held: bool,
}

/// Prints `held` or `free` for `name`
///
/// The answer comes from a single non-blocking probe and can change right
/// after it is printed.
pub fn run(lock_dir: &LockDir, name: &str, json: bool) -> Result<i32> {
    let path = lock_dir.lock_file(name)?;
    let held = lock_dir.is_locked(name)?;

    if json {
        let status = LockStatus {
            name,
            path: &path,
            held,
        };
        print_json(&status)?;
    } else {
        let state = if held {
            "held".red().bold()
        } else {
            "free".green().bold()
        };
        print_line(&format!("{} {} ({})", name, state, path.display()))?;
    }

    Ok(0)
}
