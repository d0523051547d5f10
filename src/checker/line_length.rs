use crate::MAX_LINE_LENGTH;
use crate::error::Result;
use crate::output::DiagnosticSink;

use super::{CheckKind, Checker, Diagnostic};

/// Flags lines longer than a fixed number of characters.
///
/// Length is counted in characters with the line terminator included, and
/// lines are numbered from 1.
#[derive(Debug, Clone, Copy)]
pub struct LineLengthChecker {
    max_length: usize,
}

impl Default for LineLengthChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl LineLengthChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: MAX_LINE_LENGTH,
        }
    }

    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    #[must_use]
    pub fn is_too_long(&self, line: &str) -> bool {
        line.chars().count() > self.max_length
    }

    fn description(&self) -> String {
        format!("Line longer than {} characters.", self.max_length)
    }
}

impl Checker for LineLengthChecker {
    fn kind(&self) -> CheckKind {
        CheckKind::LineTooLong
    }

    fn check<I>(&self, path: &str, lines: I, sink: &mut dyn DiagnosticSink) -> Result<usize>
    where
        I: Iterator<Item = Result<String>>,
    {
        let mut emitted = 0;
        for (index, line) in lines.enumerate() {
            let line = line?;
            if self.is_too_long(&line) {
                sink.emit(&Diagnostic::for_line(
                    self.kind(),
                    self.description(),
                    path,
                    index + 1,
                    &line,
                ))?;
                emitted += 1;
            }
        }
        Ok(emitted)
    }
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
