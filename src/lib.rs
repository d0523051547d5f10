pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod path_utils;
pub mod scanner;

pub use context::ScanContext;
pub use error::{Result, StyleGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Lines longer than this many characters, terminator included, are reported.
pub const MAX_LINE_LENGTH: usize = 80;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
