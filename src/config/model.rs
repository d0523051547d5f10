use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleGuardError};

/// Engine configuration as handed over by the hosting environment.
///
/// Only `include_paths` is read; any other keys the host adds (`enabled`,
/// `channel`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directories to scan, relative to the scan root. Order only affects
    /// the order in which issues are emitted.
    pub include_paths: Vec<String>,
}

impl Config {
    /// Check that every include path stays inside the scan root.
    ///
    /// # Errors
    /// Returns a configuration error for absolute paths or paths that climb
    /// out of the root with `..`.
    pub fn validate(&self) -> Result<()> {
        for (i, include) in self.include_paths.iter().enumerate() {
            let path = Path::new(include);
            if path.is_absolute() || path.has_root() {
                return Err(StyleGuardError::Config(format!(
                    "include_paths[{i}] must be relative to the scan root, got '{include}'"
                )));
            }
            if path.components().any(|c| matches!(c, Component::ParentDir)) {
                return Err(StyleGuardError::Config(format!(
                    "include_paths[{i}] must not leave the scan root, got '{include}'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
