//! Common test utilities for assetline integration tests.
//!
//! Provides `TestEnv`, an isolated project directory plus helpers to write
//! fixture files and run the `assetline` binary inside it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an assetline CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as one JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not a JSON event: {line}: {e}"))
            })
            .collect()
    }
}

/// A vendor + application project with every framing file present
pub const APP_CONFIG: &str = r#"
name = "my-app"

[[bundle]]
kind = "vendor"
output_file = "assets/vendor.js"
files = ["vendor/loader.js"]

[[bundle]]
kind = "application"
output_file = "assets/my-app.js"
"#;

pub const APP_FILES: &[(&str, &str)] = &[
    ("vendor/loader.js", "var loader = {};"),
    (
        "addon-tree-output/lib/used.js",
        "define(\"lib/used\", [\"exports\"], function (_exports) {});",
    ),
    (
        "addon-tree-output/lib/unused.js",
        "define(\"lib/unused\", [\"exports\"], function (_exports) {});",
    ),
    ("vendor/ember-cli/vendor-suffix.js", "// vendor suffix"),
    ("vendor/ember-cli/app-prefix.js", "// app prefix"),
    ("my-app/app.js", "import used from 'lib/used';"),
    ("my-app/router.js", "import App from './app';"),
    ("vendor/ember-cli/app-suffix.js", "// app suffix"),
    ("vendor/ember-cli/app-config.js", "// app config"),
    ("vendor/ember-cli/app-boot.js", "// app boot"),
];

/// Isolated project directory
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_assetline")),
        }
    }

    /// Project with `APP_CONFIG` and `APP_FILES`
    pub fn app() -> Self {
        let env = Self::new();
        env.write("assetline.toml", APP_CONFIG);
        env.write_all(APP_FILES);
        env
    }

    /// Get path relative to project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn write_all(&self, files: &[(&str, &str)]) {
        for (path, content) in files {
            self.write(path, content);
        }
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.path(relative)).expect("Failed to remove file");
    }

    /// Run the assetline CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("ASSETLINE_OUTPUT")
            .env_remove("ASSETLINE_TREE_SHAKING")
            .env_remove("ASSETLINE_SOURCE_MAPS");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute assetline");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Names in a directory, sorted
pub fn list(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {e}", dir.display()))
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
