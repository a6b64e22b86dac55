//! Helper binary that acquires a lock, records entry and exit, then releases
//!
//! Usage: lock_holder <lock_dir> <lock_name> <marker_path> <process_id>
//!
//! Appends `enter <id>` after acquiring and `exit <id>` before releasing.
//! When several holders run at once, a correct lock yields strictly
//! alternating enter/exit pairs in the marker file.

use buddylock_core::{FileLock, LockDir};
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn append(marker_path: &Path, line: &str) {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(marker_path)
        .expect("Failed to open marker file");
    writeln!(file, "{}", line).expect("Failed to write marker");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!("Usage: lock_holder <lock_dir> <lock_name> <marker_path> <process_id>");
        std::process::exit(1);
    }

    let lock_dir = LockDir::new(&args[1]);
    let lock_name = &args[2];
    let marker_path = PathBuf::from(&args[3]);
    let process_id = &args[4];

    let guard = lock_dir
        .file_lock(lock_name.as_str(), Duration::from_secs(30))
        .and_then(FileLock::lock)
        .expect("Failed to acquire lock");

    append(&marker_path, &format!("enter {}", process_id));

    // Hold lock for a bit so other holders pile up behind it
    std::thread::sleep(Duration::from_millis(100));

    append(&marker_path, &format!("exit {}", process_id));
    guard.release();

    println!("Process {} completed", process_id);
}
