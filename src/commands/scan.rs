use crate::checker::{
    IncludeGuardChecker, LineLengthChecker, TrailingWhitespaceChecker, check_files,
};
use crate::context::ScanContext;
use crate::error::Result;
use crate::output::DiagnosticSink;
use crate::scanner::discover;

/// Counts gathered during one run. Only logged; never part of the issue stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub sources: usize,
    pub headers: usize,
    pub long_lines: usize,
    pub trailing_whitespace: usize,
    pub unguarded_headers: usize,
}

impl ScanSummary {
    #[must_use]
    pub const fn total_issues(&self) -> usize {
        self.long_lines + self.trailing_whitespace + self.unguarded_headers
    }
}

/// Discover files under the include paths of `ctx` and run every check,
/// streaming issues into `sink`.
///
/// Order: line length over sources, trailing whitespace over sources, include
/// guards over headers.
///
/// # Errors
/// Stops at the first walk, read or write error; issues already emitted stay
/// emitted.
pub fn run_scan(ctx: &ScanContext, sink: &mut dyn DiagnosticSink) -> Result<ScanSummary> {
    let sets = discover(ctx)?;
    log::info!(
        "found {} source file(s), {} header(s) under {}",
        sets.sources.len(),
        sets.headers.len(),
        ctx.root().display()
    );

    let mut summary = ScanSummary {
        sources: sets.sources.len(),
        headers: sets.headers.len(),
        ..ScanSummary::default()
    };

    summary.long_lines = check_files(&LineLengthChecker::new(), ctx, &sets.sources, sink)?;
    summary.trailing_whitespace =
        check_files(&TrailingWhitespaceChecker::new(), ctx, &sets.sources, sink)?;
    summary.unguarded_headers =
        check_files(&IncludeGuardChecker::new(), ctx, &sets.headers, sink)?;

    Ok(summary)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
