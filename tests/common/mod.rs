//! Shared testing utilities for swapnext CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated rotation root.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("show");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the rotation root used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `swapnext` binary within the rotation root.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `swapnext` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("swapnext").expect("Failed to locate swapnext binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG");
        cmd
    }

    pub fn cursor_path(&self) -> PathBuf {
        self.work_dir.join("current.txt")
    }

    pub fn current_dir_slot(&self) -> PathBuf {
        self.work_dir.join("Current")
    }

    pub fn current_file_slot(&self) -> PathBuf {
        self.work_dir.join("Rendered/current.mp4")
    }

    /// Write the cursor file verbatim.
    pub fn write_cursor(&self, content: &str) {
        fs::write(self.cursor_path(), content).expect("Failed to write cursor");
    }

    /// Read the cursor file, if present.
    pub fn read_cursor(&self) -> Option<String> {
        fs::read_to_string(self.cursor_path()).ok()
    }

    /// Create `Rendered/<index>/frame.txt` containing `asset <index>`.
    pub fn add_dir_asset(&self, index: u64) {
        let dir = self.work_dir.join("Rendered").join(index.to_string());
        fs::create_dir_all(dir.join("layers")).expect("Failed to create asset directory");
        fs::write(dir.join("frame.txt"), format!("asset {}", index)).unwrap();
        fs::write(dir.join("layers/overlay.txt"), format!("overlay {}", index)).unwrap();
    }

    /// Create `Rendered/<index>.mp4` containing `video <index>`.
    pub fn add_file_asset(&self, index: u64) {
        let dir = self.work_dir.join("Rendered");
        fs::create_dir_all(&dir).expect("Failed to create Rendered directory");
        fs::write(dir.join(format!("{}.mp4", index)), format!("video {}", index)).unwrap();
    }

    /// Populate `Current/` with content unrelated to any asset.
    pub fn seed_current_dir(&self) {
        let slot = self.current_dir_slot();
        fs::create_dir_all(&slot).unwrap();
        fs::write(slot.join("frame.txt"), "previous").unwrap();
        fs::write(slot.join("leftover.txt"), "leftover").unwrap();
    }

    /// Assert that `Current/` mirrors `Rendered/<index>/`.
    pub fn assert_current_dir_is(&self, index: u64) {
        let slot = self.current_dir_slot();
        assert_eq!(
            fs::read_to_string(slot.join("frame.txt")).expect("Current/frame.txt should exist"),
            format!("asset {}", index)
        );
        assert_eq!(
            fs::read_to_string(slot.join("layers/overlay.txt")).unwrap(),
            format!("overlay {}", index)
        );
        assert!(!slot.join("leftover.txt").exists(), "stale entries should be gone");
    }

    /// Assert that `Rendered/current.mp4` matches `Rendered/<index>.mp4`.
    pub fn assert_current_file_is(&self, index: u64) {
        assert_eq!(
            fs::read_to_string(self.current_file_slot()).expect("current.mp4 should exist"),
            format!("video {}", index)
        );
    }

    /// Names in the rotation root, sorted.
    pub fn root_entries(&self) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(&self.work_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
