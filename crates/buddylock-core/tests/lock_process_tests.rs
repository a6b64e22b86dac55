//! Process-level file locking tests
//!
//! These tests verify that locks work across process boundaries, not just
//! thread boundaries. Helper binaries live in `examples/` and are built by
//! `cargo test`.

use buddylock_core::{LockDir, LockError};
use buddylock_testkit::{example_bin, temp_dir_in_workspace};
use std::fs;
use std::process::Command;
use std::thread;
use std::time::Duration;

/// Verifies that file locks prevent lost updates across processes.
///
/// Spawns 5 processes that each perform 20 read-modify-write operations on
/// a shared counter file under the same lock name. All 100 updates must be
/// preserved. Only the positive direction is checked: showing that unlocked
/// writers lose updates depends on timing and would make the test flaky.
#[test]
fn test_counter_with_lock_no_lost_updates() {
    let temp = temp_dir_in_workspace();
    let lock_dir = temp.path().join("locks");
    let counter_path = temp.path().join("counter.txt");
    fs::write(&counter_path, "0").unwrap();

    const NUM_PROCESSES: usize = 5;
    const ITERATIONS_PER_PROCESS: usize = 20;

    let handles: Vec<_> = (0..NUM_PROCESSES)
        .map(|_| {
            let lock_dir = lock_dir.clone();
            let counter_path = counter_path.clone();
            thread::spawn(move || {
                let status = Command::new(example_bin("counter_child_locked"))
                    .arg(&lock_dir)
                    .arg(&counter_path)
                    .arg(ITERATIONS_PER_PROCESS.to_string())
                    .status()
                    .expect("Failed to execute counter_child_locked");

                assert!(
                    status.success(),
                    "counter_child_locked should exit successfully"
                );
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let final_count: u32 = fs::read_to_string(&counter_path)
        .unwrap()
        .trim()
        .parse()
        .unwrap();

    let expected = (NUM_PROCESSES * ITERATIONS_PER_PROCESS) as u32;
    assert_eq!(
        final_count, expected,
        "With locks, should have no lost updates: got {}, expected {}",
        final_count, expected
    );
}

#[test]
fn test_cross_process_exclusive_locking() {
    let temp = temp_dir_in_workspace();
    let lock_dir = temp.path().join("locks");
    let marker_path = temp.path().join("marker.txt");

    const NUM_PROCESSES: usize = 3;

    let handles: Vec<_> = (0..NUM_PROCESSES)
        .map(|id| {
            let lock_dir = lock_dir.clone();
            let marker_path = marker_path.clone();
            thread::spawn(move || {
                let status = Command::new(example_bin("lock_holder"))
                    .arg(&lock_dir)
                    .arg("exclusive")
                    .arg(&marker_path)
                    .arg(id.to_string())
                    .status()
                    .expect("Failed to execute lock_holder");

                assert!(status.success(), "lock_holder should exit successfully");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Every holder must leave before the next one enters
    let content = fs::read_to_string(&marker_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), NUM_PROCESSES * 2, "marker: {:?}", lines);

    let mut seen = Vec::new();
    for pair in lines.chunks(2) {
        let id = pair[0]
            .strip_prefix("enter ")
            .unwrap_or_else(|| panic!("Expected enter line, got {:?}", lines));
        assert_eq!(
            pair[1],
            format!("exit {}", id),
            "Holders overlapped: {:?}",
            lines
        );
        seen.push(id.to_string());
    }

    seen.sort();
    assert_eq!(seen, vec!["0", "1", "2"]);
}

#[test]
fn test_lock_held_by_other_process_times_out() {
    let temp = temp_dir_in_workspace();
    let lock_dir = temp.path().join("locks");
    let marker_path = temp.path().join("marker.txt");

    let mut child = Command::new(example_bin("lock_holder"))
        .arg(&lock_dir)
        .arg("held_elsewhere")
        .arg(&marker_path)
        .arg("0")
        .spawn()
        .expect("Failed to execute lock_holder");

    // Wait until the child has entered its critical section
    let dir = LockDir::new(&lock_dir);
    for _ in 0..1000 {
        if fs::read_to_string(&marker_path).is_ok_and(|c| c.contains("enter 0")) {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }

    let result = dir
        .file_lock("held_elsewhere", Duration::from_millis(20))
        .and_then(|lock| lock.lock());
    let was_locked = matches!(result, Err(LockError::Timeout { .. }));
    drop(result);

    assert!(child.wait().unwrap().success());
    assert!(was_locked, "Lock held by another process should time out");

    // Released by process exit
    assert!(!dir.is_locked("held_elsewhere").unwrap());
}

/// Three processes race to create the same project.
///
/// Exactly one observes the project missing and creates it; the others
/// either time out or find it already created.
#[test]
fn test_duplicate_project_creation_across_processes() {
    let temp = temp_dir_in_workspace();
    let lock_dir = temp.path().join("locks");
    let project_dir = temp.path().join("same-project");

    let handles: Vec<_> = (0..3)
        .map(|id| {
            let lock_dir = lock_dir.clone();
            let project_dir = project_dir.clone();
            thread::spawn(move || {
                let output = Command::new(example_bin("project_racer"))
                    .arg(&lock_dir)
                    .arg(&project_dir)
                    .arg(id.to_string())
                    .output()
                    .expect("Failed to execute project_racer");

                assert!(output.status.success(), "project_racer should exit 0");
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            })
        })
        .collect();

    let outcomes: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let created = outcomes.iter().filter(|o| *o == "created").count();
    assert_eq!(created, 1, "Exactly one creator expected: {:?}", outcomes);
    assert!(
        outcomes
            .iter()
            .all(|o| o == "created" || o == "skipped" || o == "timeout"),
        "Unexpected outcome: {:?}",
        outcomes
    );
    assert!(project_dir.join("creator").exists());
}
