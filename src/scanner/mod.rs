mod filter;

pub use filter::{FileFilter, FileKind, HEADER_SUFFIXES, SOURCE_SUFFIXES, SuffixFilter};

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::context::ScanContext;
use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory or any entry below it cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn is_candidate(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if file_type.is_file() {
            return true;
        }
        // Directory symlinks are not descended into; anything else that is
        // not a directory (file symlinks, dangling links) is a candidate.
        file_type.is_symlink() && !entry.path().is_dir()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if Self::is_candidate(&entry) && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// Files discovered under the include paths, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSets {
    /// Implementation and header files.
    pub sources: Vec<PathBuf>,
    /// Header files only.
    pub headers: Vec<PathBuf>,
}

/// Walk every include path of `ctx` and split the results into the source and
/// header sets.
///
/// # Errors
/// Any walk error (missing include path, permission denied, symlink loop)
/// aborts discovery.
pub fn discover(ctx: &ScanContext) -> Result<SourceSets> {
    let scanner = DirectoryScanner::new(SuffixFilter::sources());
    let mut sets = SourceSets::default();

    for dir in ctx.scan_dirs() {
        let files = scanner.scan(&dir)?;
        log::debug!("{}: {} source file(s)", dir.display(), files.len());
        for file in files {
            if FileKind::of(&file).is_some_and(FileKind::is_header) {
                sets.headers.push(file.clone());
            }
            sets.sources.push(file);
        }
    }

    Ok(sets)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
