mod codeclimate;

pub use codeclimate::{CodeClimateWriter, RECORD_SEPARATOR};

use crate::checker::Diagnostic;
use crate::error::Result;

/// Destination for diagnostics as checkers produce them.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    ///
    /// # Errors
    /// Returns an error if the diagnostic cannot be written.
    fn emit(&mut self, diagnostic: &Diagnostic) -> Result<()>;

    /// Push any buffered output to its destination.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        self.push(diagnostic.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
