//! Common test utilities for Confplan integration tests

use std::path::PathBuf;
use tempfile::TempDir;

use assert_cmd::Command;

/// Catalog used by the pricing scenarios: two rooms at 300, one projector
/// at 100, one per-person lunch at 25.
#[allow(dead_code)]
pub const SAMPLE_CATALOG: &str = r#"venue:
  - name: "Main Hall"
    cost: 300
av:
  - name: "Projector"
    cost: 100
meals:
  - name: "Lunch"
    cost: 25
"#;

/// A scratch directory for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the directory root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new scratch directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file under the directory, creating parents as needed
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write the sample catalog and return its path
    pub fn write_sample_catalog(&self, name: &str) -> PathBuf {
        self.write_file(name, SAMPLE_CATALOG)
    }

    /// A confplan invocation isolated from the host environment
    ///
    /// Runs in this directory, with catalog discovery pinned away from the
    /// host user's configuration and any ambient CONFPLAN_CATALOG.
    pub fn confplan(&self) -> Command {
        let mut cmd = confplan_cmd();
        cmd.current_dir(&self.path)
            .env_remove("CONFPLAN_CATALOG")
            .env("XDG_CONFIG_HOME", self.path.join("xdg-config"));
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn confplan_cmd() -> Command {
    Command::cargo_bin("confplan").unwrap()
}
