use std::path::Path;

/// Suffixes of files checked for line length and trailing whitespace.
pub const SOURCE_SUFFIXES: &[&str] = &[".h", ".cc", ".H", ".C", ".hpp", ".cpp"];

/// Suffixes of files additionally checked for include guards.
pub const HEADER_SUFFIXES: &[&str] = &[".h", ".H", ".hpp"];

/// Classification of a discovered file, decided by filename suffix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Implementation file (`.cc`, `.C`, `.cpp`).
    Implementation,
    /// Header file (`.h`, `.H`, `.hpp`); also part of the source set.
    Header,
}

impl FileKind {
    /// Classify a path by its file name. Matching is case-sensitive.
    #[must_use]
    pub fn of(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        if has_suffix(&name, HEADER_SUFFIXES) {
            Some(Self::Header)
        } else if has_suffix(&name, SOURCE_SUFFIXES) {
            Some(Self::Implementation)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_header(self) -> bool {
        matches!(self, Self::Header)
    }
}

fn has_suffix(name: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| name.ends_with(s))
}

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose name ends with one of a fixed set of suffixes.
#[derive(Debug, Clone, Copy)]
pub struct SuffixFilter {
    suffixes: &'static [&'static str],
}

impl SuffixFilter {
    #[must_use]
    pub const fn new(suffixes: &'static [&'static str]) -> Self {
        Self { suffixes }
    }

    /// Filter for the source set (implementation and header files).
    #[must_use]
    pub const fn sources() -> Self {
        Self::new(SOURCE_SUFFIXES)
    }

    /// Filter for the header-only set.
    #[must_use]
    pub const fn headers() -> Self {
        Self::new(HEADER_SUFFIXES)
    }
}

impl FileFilter for SuffixFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| has_suffix(&name.to_string_lossy(), self.suffixes))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
