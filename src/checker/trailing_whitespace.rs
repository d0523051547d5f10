use regex::Regex;

use crate::error::Result;
use crate::output::DiagnosticSink;

use super::{CheckKind, Checker, Diagnostic};

const DESCRIPTION: &str = "Line contains trailing whitespace.";

/// Flags lines ending in spaces or tabs.
///
/// Lines are numbered from 0 here, unlike [`super::LineLengthChecker`];
/// consumers of the issue stream already depend on this.
pub struct TrailingWhitespaceChecker {
    pattern: Regex,
}

impl Default for TrailingWhitespaceChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailingWhitespaceChecker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"[ \t]+\n?$").expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn has_trailing_whitespace(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

impl Checker for TrailingWhitespaceChecker {
    fn kind(&self) -> CheckKind {
        CheckKind::TrailingWhitespace
    }

    fn check<I>(&self, path: &str, lines: I, sink: &mut dyn DiagnosticSink) -> Result<usize>
    where
        I: Iterator<Item = Result<String>>,
    {
        let mut emitted = 0;
        for (index, line) in lines.enumerate() {
            let line = line?;
            if self.has_trailing_whitespace(&line) {
                sink.emit(&Diagnostic::for_line(
                    self.kind(),
                    DESCRIPTION,
                    path,
                    index,
                    &line,
                ))?;
                emitted += 1;
            }
        }
        Ok(emitted)
    }
}

#[cfg(test)]
#[path = "trailing_whitespace_tests.rs"]
mod tests;
