//! Counter helper WITH file locking
//!
//! Usage: counter_child_locked <lock_dir> <counter_path> <iterations>
//!
//! Performs read-modify-write operations on a counter file, each one under
//! the named lock `counter` in `<lock_dir>`. No increment may be lost.

use buddylock_core::LockDir;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: counter_child_locked <lock_dir> <counter_path> <iterations>");
        std::process::exit(1);
    }

    let lock_dir = LockDir::new(&args[1]);
    let counter_path = PathBuf::from(&args[2]);
    let iterations: usize = args[3].parse().expect("iterations must be a number");

    for _ in 0..iterations {
        let _guard = lock_dir
            .file_lock("counter", Duration::from_secs(10))
            .and_then(|lock| lock.lock())
            .expect("Failed to acquire lock");

        // Read current value
        let content = fs::read_to_string(&counter_path).expect("Failed to read counter file");
        let value: u32 = content
            .trim()
            .parse()
            .expect("Counter file should contain a number");

        // Increment (sleep to increase contention)
        std::thread::sleep(Duration::from_micros(10));
        let new_value = value + 1;

        // Write back (protected by lock)
        fs::write(&counter_path, new_value.to_string()).expect("Failed to write counter file");

        // Lock auto-released via Drop
    }

    println!("Counter child completed {} iterations", iterations);
}
