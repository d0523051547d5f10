use std::collections::VecDeque;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGuardError};

/// Iterator over the lines of one file, terminators included.
///
/// `\r\n` and a lone `\r` both end a line and are folded to `\n`. Read failures, including content
/// that is not valid UTF-8, are reported once with the file path attached and
/// end the iteration.
pub struct SourceLines<R> {
    reader: R,
    path: PathBuf,
    pending: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> SourceLines<R> {
    pub fn new(path: &Path, reader: R) -> Self {
        Self {
            reader,
            path: path.to_path_buf(),
            pending: VecDeque::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }
        if self.done {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if line.ends_with("\r\n") {
                    line.truncate(line.len() - 2);
                    line.push('\n');
                }
                if !line.contains('\r') {
                    return Some(Ok(line));
                }
                self.pending.extend(
                    line.split_inclusive('\r')
                        .map(|part| match part.strip_suffix('\r') {
                            Some(text) => format!("{text}\n"),
                            None => part.to_string(),
                        }),
                );
                self.pending.pop_front().map(Ok)
            }
            Err(source) => {
                self.done = true;
                Some(Err(StyleGuardError::FileRead {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

/// Line text without its trailing `\n`.
#[must_use]
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
