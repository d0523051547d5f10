use md5::{Digest, Md5};

use crate::path_utils::flatten_path;

/// Category attached to every issue.
pub const CATEGORY: &str = "Style";

/// Severity attached to every issue.
pub const SEVERITY: &str = "normal";

/// Which check produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    LineTooLong,
    TrailingWhitespace,
    MultiIncludeProtection,
}

impl CheckKind {
    /// Name reported in the `check_name` field.
    #[must_use]
    pub const fn check_name(self) -> &'static str {
        match self {
            Self::LineTooLong => "Line Too Long",
            Self::TrailingWhitespace => "Trailing whitespace",
            Self::MultiIncludeProtection => "Multi-include protection",
        }
    }
}

/// Inclusive line span of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub begin: usize,
    pub end: usize,
}

impl LineRange {
    #[must_use]
    pub const fn single(line: usize) -> Self {
        Self {
            begin: line,
            end: line,
        }
    }
}

/// One finding, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: CheckKind,
    pub description: String,
    /// Root-relative, `/`-separated.
    pub path: String,
    pub lines: LineRange,
    pub fingerprint: String,
}

impl Diagnostic {
    /// Finding tied to the exact text of one line.
    #[must_use]
    pub fn for_line(
        kind: CheckKind,
        description: impl Into<String>,
        path: &str,
        line_number: usize,
        line_text: &str,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            path: path.to_string(),
            lines: LineRange::single(line_number),
            fingerprint: line_fingerprint(path, line_text),
        }
    }

    /// File-level finding, reported on line 1.
    #[must_use]
    pub fn for_file(kind: CheckKind, description: impl Into<String>, path: &str) -> Self {
        Self {
            kind,
            description: description.into(),
            path: path.to_string(),
            lines: LineRange::single(1),
            fingerprint: file_fingerprint(path),
        }
    }

    #[must_use]
    pub const fn check_name(&self) -> &'static str {
        self.kind.check_name()
    }
}

/// `<flattened path>___<md5 of the line text>`.
///
/// MD5 keeps fingerprints identical to those already stored by the
/// aggregator for earlier runs.
#[must_use]
pub fn line_fingerprint(path: &str, line_text: &str) -> String {
    format!(
        "{}___{:x}",
        flatten_path(path),
        Md5::digest(line_text.as_bytes())
    )
}

/// Flattened path only; independent of file content.
#[must_use]
pub fn file_fingerprint(path: &str) -> String {
    flatten_path(path)
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
