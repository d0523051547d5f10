use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::path_utils::relative_display;

/// Where the hosting environment mounts the tree under analysis.
pub const DEFAULT_SCAN_ROOT: &str = "/code";

/// Process-wide scan parameters, built once at startup and passed to the
/// scanner and checkers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanContext {
    root: PathBuf,
    include_paths: Vec<String>,
}

impl ScanContext {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            root: root.into(),
            include_paths: config.include_paths.clone(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn include_paths(&self) -> &[String] {
        &self.include_paths
    }

    /// Absolute directories to walk, in configuration order.
    pub fn scan_dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.include_paths.iter().map(|p| self.root.join(p))
    }

    /// Root-relative, `/`-separated form of `path` as reported in issues.
    #[must_use]
    pub fn relative_path(&self, path: &Path) -> String {
        relative_display(&self.root, path)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
