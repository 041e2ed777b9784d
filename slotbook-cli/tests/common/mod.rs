//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test run.
const ISOLATED_VARS: [&str; 8] = [
    "SLOTBOOK_DATA_DIR",
    "SLOTBOOK_BUSY_TIMEOUT",
    "SLOTBOOK_DATABASE_FILE",
    "SLOTBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
    "SLOTBOOK_LIST_WINDOW_DAYS",
    "SLOTBOOK_OUTPUT_FORMAT",
    "SLOTBOOK_DISABLE_AUTOINIT",
    "SLOTBOOK_LOG_MODE",
];

/// Test environment with an isolated data directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the slotbook data directory (created on first use)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("slotbook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Command with only the binary and a scrubbed environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("slotbook").expect("Failed to find slotbook binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("slotbook.db")
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Book a date and return the parsed JSON booking.
    ///
    /// # Panics
    /// Panics if the command fails or prints something other than JSON.
    pub fn book(&self, date: &str, name: Option<&str>) -> serde_json::Value {
        let mut cmd = self.command();
        cmd.arg("book").arg(date);
        if let Some(name) = name {
            cmd.arg("--name").arg(name);
        }

        let output = cmd.output().expect("Failed to run book command");
        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Book output is not JSON")
    }

    /// List a range as JSON and return the parsed array.
    pub fn list_json(&self, from: &str, to: &str) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .args(["list", "--from", from, "--to", to, "--format", "json"])
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("List output is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
