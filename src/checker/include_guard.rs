use regex::Regex;

use crate::error::Result;
use crate::output::DiagnosticSink;

use super::lines::strip_terminator;
use super::{CheckKind, Checker, Diagnostic};

/// Line patterns the guard scan recognizes.
pub struct GuardPatterns {
    comment_open: Regex,
    comment_close: Regex,
    ifndef: Regex,
}

impl Default for GuardPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl GuardPatterns {
    #[must_use]
    pub fn new() -> Self {
        Self {
            comment_open: Regex::new(r"^\s*/\*").expect("Invalid regex"),
            comment_close: Regex::new(r"\*/\s*$").expect("Invalid regex"),
            ifndef: Regex::new(r"^#ifndef (__.*__)$").expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn opens_comment(&self, line: &str) -> bool {
        self.comment_open.is_match(line)
    }

    #[must_use]
    pub fn closes_comment(&self, line: &str) -> bool {
        self.comment_close.is_match(line)
    }

    /// Token of a `#ifndef __TOKEN__` line. Tokens must start and end with a
    /// double underscore.
    #[must_use]
    pub fn guard_token(&self, line: &str) -> Option<String> {
        self.ifndef
            .captures(strip_terminator(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

fn defines(line: &str, token: &str) -> bool {
    line.strip_prefix("#define ")
        .is_some_and(|rest| rest.starts_with(token))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Close {
    /// `#endif` naming the guard token, e.g. `#endif // __FOO_H__`.
    Named,
    /// `#endif` with nothing after it.
    Bare,
}

fn closes_guard(line: &str, token: &str) -> Option<Close> {
    let rest = line.strip_prefix("#endif")?;
    if rest.contains(token) {
        Some(Close::Named)
    } else if rest.trim().is_empty() {
        Some(Close::Bare)
    } else {
        None
    }
}

/// State of the include-guard scan over one header.
///
/// The numbered states are reported by [`GuardState::code`]; the two comment
/// states are sub-states of 1 and 4 that swallow the body of a block comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// 0: looking for a leading block comment or the `#ifndef` line.
    AwaitingGuardOrComment,
    /// Inside the leading block comment.
    LeadingComment,
    /// 1: leading comment seen, looking for `#ifndef`.
    CommentOrGuard,
    /// 2: looking for `#define <token>`.
    AwaitingDefine { token: String },
    /// 3: looking for the `#endif` that closes the guard.
    ///
    /// `reopened` is set once code followed a bare `#endif`; if no later
    /// `#endif` closes the guard, that bare one was the close and the code
    /// after it is trailing content.
    AwaitingEndif { token: String, reopened: bool },
    /// 4: guard closed; only blank lines and block comments may follow.
    ///
    /// `tentative` is set when the close was a bare `#endif`. Code after a
    /// tentative close resumes the search for the real close instead of
    /// failing.
    TrailingCommentAllowed { token: String, tentative: bool },
    /// Inside a block comment after the guard.
    TrailingComment { token: String, tentative: bool },
    /// 5: code after the closing `#endif`.
    Failed,
}

impl GuardState {
    /// Advance the scan by one line. Pure: the result depends only on the
    /// current state and `line`.
    #[must_use]
    pub fn step(self, line: &str, patterns: &GuardPatterns) -> Self {
        match self {
            Self::AwaitingGuardOrComment => {
                if patterns.opens_comment(line) {
                    Self::LeadingComment
                } else if let Some(token) = patterns.guard_token(line) {
                    Self::AwaitingDefine { token }
                } else {
                    Self::AwaitingGuardOrComment
                }
            }
            Self::LeadingComment => {
                if patterns.closes_comment(line) {
                    Self::CommentOrGuard
                } else {
                    Self::LeadingComment
                }
            }
            Self::CommentOrGuard => patterns
                .guard_token(line)
                .map_or(Self::CommentOrGuard, |token| Self::AwaitingDefine { token }),
            Self::AwaitingDefine { token } => {
                if defines(line, &token) {
                    Self::AwaitingEndif {
                        token,
                        reopened: false,
                    }
                } else {
                    Self::AwaitingDefine { token }
                }
            }
            Self::AwaitingEndif { token, reopened } => match closes_guard(line, &token) {
                Some(close) => Self::TrailingCommentAllowed {
                    token,
                    tentative: close == Close::Bare,
                },
                None => Self::AwaitingEndif { token, reopened },
            },
            Self::TrailingCommentAllowed { token, tentative } => {
                if patterns.opens_comment(line) {
                    Self::TrailingComment { token, tentative }
                } else if line.trim().is_empty() {
                    Self::TrailingCommentAllowed { token, tentative }
                } else if tentative {
                    Self::AwaitingEndif {
                        token,
                        reopened: true,
                    }
                    .step(line, patterns)
                } else {
                    Self::Failed
                }
            }
            Self::TrailingComment { token, tentative } => {
                if patterns.closes_comment(line) {
                    Self::TrailingCommentAllowed { token, tentative }
                } else {
                    Self::TrailingComment { token, tentative }
                }
            }
            Self::Failed => Self::Failed,
        }
    }

    /// Numeric state code, 0 through 5.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::AwaitingGuardOrComment => 0,
            Self::LeadingComment | Self::CommentOrGuard => 1,
            Self::AwaitingDefine { .. } => 2,
            Self::AwaitingEndif { .. } => 3,
            Self::TrailingCommentAllowed { .. } | Self::TrailingComment { .. } => 4,
            Self::Failed => 5,
        }
    }

    /// Classification of a header whose scan ended in this state.
    #[must_use]
    pub const fn outcome(&self) -> GuardOutcome {
        match self {
            Self::AwaitingGuardOrComment => GuardOutcome::NoLeadingComment,
            Self::LeadingComment | Self::CommentOrGuard | Self::AwaitingDefine { .. } => {
                GuardOutcome::NoProtection
            }
            Self::AwaitingEndif {
                reopened: false, ..
            } => GuardOutcome::NoMatchingEndif,
            Self::TrailingCommentAllowed { .. } | Self::TrailingComment { .. } => {
                GuardOutcome::Protected
            }
            Self::AwaitingEndif { reopened: true, .. } | Self::Failed => {
                GuardOutcome::TrailingContent
            }
        }
    }
}

/// Result of the include-guard scan for one header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Protected,
    NoLeadingComment,
    NoProtection,
    NoMatchingEndif,
    TrailingContent,
}

impl GuardOutcome {
    /// Issue description, or `None` for a protected header.
    #[must_use]
    pub const fn description(self) -> Option<&'static str> {
        match self {
            Self::Protected => None,
            Self::NoLeadingComment => Some("No leading comment block"),
            Self::NoProtection => Some("No multi-include protection found"),
            Self::NoMatchingEndif => Some("No matching close #endif found"),
            Self::TrailingContent => Some("Non-comment stuff after closing #endif"),
        }
    }
}

/// Verifies that each header is wrapped in a `#ifndef`/`#define`/`#endif`
/// guard. At most one file-level issue per header.
#[derive(Default)]
pub struct IncludeGuardChecker {
    patterns: GuardPatterns,
}

impl IncludeGuardChecker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the state machine over already-read lines.
    pub fn scan<I, S>(&self, lines: I) -> GuardState
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .fold(GuardState::AwaitingGuardOrComment, |state, line| {
                state.step(line.as_ref(), &self.patterns)
            })
    }
}

impl Checker for IncludeGuardChecker {
    fn kind(&self) -> CheckKind {
        CheckKind::MultiIncludeProtection
    }

    fn check<I>(&self, path: &str, lines: I, sink: &mut dyn DiagnosticSink) -> Result<usize>
    where
        I: Iterator<Item = Result<String>>,
    {
        let mut state = GuardState::AwaitingGuardOrComment;
        for line in lines {
            state = state.step(&line?, &self.patterns);
        }

        let Some(description) = state.outcome().description() else {
            return Ok(0);
        };
        sink.emit(&Diagnostic::for_file(self.kind(), description, path))?;
        Ok(1)
    }
}

#[cfg(test)]
#[path = "include_guard_tests.rs"]
mod tests;
