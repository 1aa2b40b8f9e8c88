//! Common test utilities for merge-yaml integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Base document in the default location
pub const BASE: &str = "openapi.yml";
/// Header document in the default location
pub const HEADER: &str = "openapi_header.yml";
/// Output document in the default location
pub const OUTPUT: &str = "merged_openapi.yml";

/// A scratch directory holding the documents of one test
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Decode a YAML file from workspace
    #[allow(dead_code)]
    pub fn read_yaml(&self, path: &str) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read_file(path)).expect("Failed to parse YAML")
    }

    /// Write the base and header documents under their default names
    #[allow(dead_code)]
    pub fn write_inputs(&self, base: &str, header: &str) {
        self.write_file(BASE, base);
        self.write_file(HEADER, header);
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse YAML text, panicking on malformed input
#[allow(dead_code)]
pub fn yaml(text: &str) -> serde_yaml::Value {
    serde_yaml::from_str(text).expect("Failed to parse YAML")
}

/// Command running the real merge-yaml binary inside `workspace`
///
/// Environment overrides are cleared so a developer's shell cannot leak in.
#[allow(deprecated)]
pub fn merge_cmd_for_workspace(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("merge-yaml").expect("Failed to find merge-yaml binary");
    cmd.current_dir(&workspace.path);
    cmd.env_remove("MERGE_YAML_BASE");
    cmd.env_remove("MERGE_YAML_HEADER");
    cmd.env_remove("MERGE_YAML_OUTPUT");
    cmd.env_remove("RUST_LOG");
    cmd
}
