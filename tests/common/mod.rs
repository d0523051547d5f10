#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the cc-style-guard binary.
#[macro_export]
macro_rules! cc_style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("cc-style-guard"))
    };
}

/// A scan root plus a config file living next to it (outside the root).
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir_all(dir.path().join("code")).expect("Failed to create scan root");
        Self { dir }
    }

    /// Root of the tree under analysis.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("code")
    }

    /// Location of the engine configuration.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    /// Creates a file with the given content under the scan root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        write_file(&self.root().join(relative_path), content.as_bytes());
    }

    /// Creates a file with raw bytes under the scan root.
    pub fn create_binary_file(&self, relative_path: &str, content: &[u8]) {
        write_file(&self.root().join(relative_path), content);
    }

    /// Writes the engine configuration.
    pub fn create_config(&self, content: &str) {
        write_file(&self.config_path(), content.as_bytes());
    }

    /// Writes a configuration scanning the given include paths.
    pub fn create_config_with_paths(&self, include_paths: &[&str]) {
        let config = serde_json::json!({ "include_paths": include_paths });
        self.create_config(&config.to_string());
    }

    /// Command line arguments pointing the binary at this fixture.
    pub fn args(&self) -> Vec<String> {
        vec![
            "--config".to_string(),
            self.config_path().display().to_string(),
            "--root".to_string(),
            self.root().display().to_string(),
        ]
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Splits raw stdout into the JSON issues it carries, checking the framing.
pub fn parse_issues(stdout: &[u8]) -> Vec<serde_json::Value> {
    let text = std::str::from_utf8(stdout).expect("stdout is not UTF-8");
    let mut lines = text.split('\n');
    let mut issues = Vec::new();

    while let Some(line) = lines.next() {
        if line.is_empty() {
            continue;
        }
        issues.push(serde_json::from_str(line).expect("issue line is not JSON"));
        assert_eq!(lines.next(), Some("\0"), "issue must be followed by a NUL line");
    }

    issues
}

/// A header with a correct include guard.
pub const GUARDED_HEADER: &str = "/*\n * Copyright\n */\n#ifndef __FOO_H__\n#define __FOO_H__\n\nint foo();\n\n#endif // __FOO_H__\n";
