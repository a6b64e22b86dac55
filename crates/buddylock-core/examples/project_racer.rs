//! Helper binary racing other processes to create the same project
//!
//! Usage: project_racer <lock_dir> <project_dir> <worker_id>
//!
//! Takes `project_creation_lock("same-project")` with a 500ms budget, then
//! checks whether `<project_dir>` exists and creates it after a delay if it
//! does not. Prints exactly one of `created`, `skipped`, or `timeout`.

use buddylock_core::LockDir;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: project_racer <lock_dir> <project_dir> <worker_id>");
        std::process::exit(1);
    }

    let lock_dir = LockDir::new(&args[1]);
    let project_dir = PathBuf::from(&args[2]);
    let worker_id = &args[3];

    let guard = match lock_dir.project_creation_lock("same-project", Duration::from_millis(500)) {
        Ok(guard) => guard,
        Err(e) if e.is_timeout() => {
            println!("timeout");
            return;
        }
        Err(e) => {
            eprintln!("worker {}: {}", worker_id, e);
            std::process::exit(1);
        }
    };

    if project_dir.exists() {
        println!("skipped");
        return;
    }

    // Simulate slow scaffolding
    std::thread::sleep(Duration::from_millis(100));
    fs::create_dir(&project_dir).expect("Failed to create project directory");
    fs::write(project_dir.join("creator"), worker_id).expect("Failed to write creator marker");

    drop(guard);
    println!("created");
}
