//! Test utilities for buddylock
//!
//! This crate provides shared testing utilities used across the buddylock workspace.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

static NAME_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// This keeps test lock directories and marker files in one gitignored place
/// that is easy to inspect when a cross-process test fails.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use buddylock_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let lock_dir = temp.path().join("locks");
/// std::fs::create_dir_all(&lock_dir).unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
///
/// Use this variant when you need proper error handling instead of panics.
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Lock name that no other test, test binary, or concurrent test run uses
///
/// Needed for tests that go through the shared system lock directory,
/// where a fixed name could contend with a parallel `cargo test`.
pub fn unique_lock_name(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let seq = NAME_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}-{}", prefix, std::process::id(), nanos, seq)
}

/// Get the path to a compiled example binary
///
/// This helper locates example binaries compiled by cargo test.
/// Example binaries are in the `target/debug/examples/` directory.
///
/// # Panics
///
/// Panics if unable to determine the current executable path
///
/// # Examples
///
/// ```no_run
/// use buddylock_testkit::example_bin;
/// use std::process::Command;
///
/// // Example test function (not executed in doctest)
/// fn test_with_example() {
///     let status = Command::new(example_bin("lock_holder"))
///         .args(["locks", "name", "marker.txt", "0"])
///         .status()
///         .unwrap();
///     assert!(status.success());
/// }
/// ```
pub fn example_bin(name: &str) -> PathBuf {
    let mut path = std::env::current_exe().expect("Failed to get current executable path");

    // Navigate from target/debug/deps/test_binary to target/debug/examples/
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("examples");
    path.push(name);

    // Add .exe extension on Windows
    if cfg!(target_os = "windows") {
        path.set_extension("exe");
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_in_workspace_creates_in_tmp() {
        let temp = temp_dir_in_workspace();
        let path = temp.path();

        assert!(
            path.to_string_lossy().contains(".tmp"),
            "Path should contain .tmp, got: {}",
            path.display()
        );
        assert!(path.is_dir(), "Path should be a directory");
    }

    #[test]
    fn test_temp_dir_auto_cleanup() {
        let path = {
            let temp = temp_dir_in_workspace();
            let p = temp.path().to_path_buf();
            assert!(p.exists(), "Directory should exist before drop");
            p
        }; // temp dropped here

        assert!(
            !path.exists(),
            "Directory should not exist after drop: {}",
            path.display()
        );
    }

    #[test]
    fn test_try_temp_dir_in_workspace_returns_ok() {
        let temp = try_temp_dir_in_workspace().unwrap();
        assert!(temp.path().exists());
        assert!(temp.path().to_string_lossy().contains(".tmp"));
    }

    #[test]
    fn test_unique_lock_names_differ() {
        let a = unique_lock_name("t");
        let b = unique_lock_name("t");

        assert_ne!(a, b);
        assert!(a.starts_with("t-"));
        assert!(!a.contains('/'), "Name must stay a single path component");
    }

    #[test]
    fn test_example_bin_returns_correct_path() {
        let path = example_bin("test_example");

        assert!(
            path.to_string_lossy().contains("examples"),
            "Path should contain 'examples' directory"
        );

        let file_name = path.file_name().unwrap().to_string_lossy();
        assert!(
            file_name.starts_with("test_example"),
            "File name should start with 'test_example'"
        );

        #[cfg(target_os = "windows")]
        assert!(
            file_name.ends_with(".exe"),
            "File should have .exe extension on Windows"
        );

        #[cfg(not(target_os = "windows"))]
        assert!(
            !file_name.ends_with(".exe"),
            "File should not have .exe extension on Unix"
        );
    }
}
