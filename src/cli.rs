use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::context::DEFAULT_SCAN_ROOT;

#[derive(Parser, Debug)]
#[command(name = "cc-style-guard")]
#[command(
    author,
    version,
    about = "Style checks for C/C++ trees, reported as Code Climate issues"
)]
#[command(long_about = "Scans the configured include paths for lines longer than \
    80 characters, trailing whitespace and headers without a well-formed \
    include guard. Issues are written to stdout as JSON objects, each \
    followed by a line holding a single NUL byte.\n\n\
    Exit codes:\n  \
    0 - Scan completed (issues or not)\n  \
    1 - Failed to walk, read or write\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Path to the JSON engine configuration
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Root of the tree under analysis; include paths are relative to it
    #[arg(long, default_value = DEFAULT_SCAN_ROOT)]
    pub root: PathBuf,

    /// Increase log verbosity on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level implied by `--verbose`.
    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
