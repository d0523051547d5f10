mod diagnostic;
mod include_guard;
mod line_length;
mod lines;
mod trailing_whitespace;

pub use diagnostic::{
    CATEGORY, CheckKind, Diagnostic, LineRange, SEVERITY, file_fingerprint, line_fingerprint,
};
pub use include_guard::{GuardOutcome, GuardPatterns, GuardState, IncludeGuardChecker};
pub use line_length::LineLengthChecker;
pub use lines::{SourceLines, strip_terminator};
pub use trailing_whitespace::TrailingWhitespaceChecker;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::context::ScanContext;
use crate::error::{Result, StyleGuardError};
use crate::output::DiagnosticSink;

pub trait Checker {
    /// Which check this is.
    fn kind(&self) -> CheckKind;

    /// Scan the lines of one file and emit every finding into `sink`.
    ///
    /// - `path`: root-relative path reported in diagnostics
    /// - `lines`: file lines with terminators
    ///
    /// Returns the number of diagnostics emitted.
    ///
    /// # Errors
    /// Propagates read errors from `lines` and write errors from `sink`.
    fn check<I>(&self, path: &str, lines: I, sink: &mut dyn DiagnosticSink) -> Result<usize>
    where
        I: Iterator<Item = Result<String>>;
}

/// Run `checker` over `files` one at a time, each file opened and closed
/// before the next.
///
/// # Errors
/// The first unreadable file aborts the pass.
pub fn check_files<C: Checker>(
    checker: &C,
    ctx: &ScanContext,
    files: &[PathBuf],
    sink: &mut dyn DiagnosticSink,
) -> Result<usize> {
    let mut emitted = 0;
    for path in files {
        let file = File::open(path).map_err(|source| StyleGuardError::FileRead {
            path: path.clone(),
            source,
        })?;
        let lines = SourceLines::new(path, BufReader::new(file));
        let relative = ctx.relative_path(path);
        let found = checker.check(&relative, lines, sink)?;
        if found > 0 {
            log::debug!(
                "{relative}: {found} {} issue(s)",
                checker.kind().check_name()
            );
        }
        emitted += found;
    }
    Ok(emitted)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
