use std::io::Write;

use serde::Serialize;

use crate::checker::{CATEGORY, Diagnostic, SEVERITY};
use crate::error::Result;

use super::DiagnosticSink;

/// Written after every issue: a line holding a single NUL byte.
pub const RECORD_SEPARATOR: &[u8] = b"\0\n";

/// Writes issues in the Code Climate engine format: one compact JSON object
/// per line, each followed by [`RECORD_SEPARATOR`].
pub struct CodeClimateWriter<W: Write> {
    writer: W,
    written: usize,
}

#[derive(Serialize)]
struct Issue<'a> {
    #[serde(rename = "type")]
    issue_type: &'static str,
    check_name: &'static str,
    description: &'a str,
    categories: [&'static str; 1],
    location: Location<'a>,
    severity: &'static str,
    fingerprint: &'a str,
}

#[derive(Serialize)]
struct Location<'a> {
    path: &'a str,
    lines: Lines,
}

#[derive(Serialize)]
struct Lines {
    begin: usize,
    end: usize,
}

impl<'a> From<&'a Diagnostic> for Issue<'a> {
    fn from(diagnostic: &'a Diagnostic) -> Self {
        Self {
            issue_type: "issue",
            check_name: diagnostic.check_name(),
            description: &diagnostic.description,
            categories: [CATEGORY],
            location: Location {
                path: &diagnostic.path,
                lines: Lines {
                    begin: diagnostic.lines.begin,
                    end: diagnostic.lines.end,
                },
            },
            severity: SEVERITY,
            fingerprint: &diagnostic.fingerprint,
        }
    }
}

impl<W: Write> CodeClimateWriter<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of issues written so far.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for CodeClimateWriter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &Issue::from(diagnostic))
            .map_err(std::io::Error::from)?;
        self.writer.write_all(b"\n")?;
        self.writer.write_all(RECORD_SEPARATOR)?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "codeclimate_tests.rs"]
mod tests;
