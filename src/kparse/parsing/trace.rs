//! Parse trace
//!
//! Every production attempt can leave a line in the trace, indented two spaces
//! per active production:
//!
//! ```text
//!     --- at 밥:NNG looking for objectPhrase
//!         recursion on same token encountered, failing
//!         nope, backtracking to 밥:NNG
//!     * found ObjectPhrase [...] at 밥:NNG phrase -> mainClause -> sentence -> input
//! ```
//!
//! Replays from the memo table are silent. The driver adds a header listing the
//! input and a footer with the outcome.

use crate::kparse::lexing::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of the search is written to the trace
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    /// Header and outcome only
    Quiet,
    /// Successful productions
    Matches,
    /// Plus every production attempt
    Attempts,
    /// Plus recursion cutoffs and backtracking
    #[default]
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLog {
    level: TraceLevel,
    lines: Vec<String>,
}

impl TraceLog {
    pub fn new(level: TraceLevel) -> Self {
        TraceLog {
            level,
            lines: Vec::new(),
        }
    }

    /// Whether lines at `level` are being kept
    pub fn enabled(&self, level: TraceLevel) -> bool {
        level <= self.level
    }

    /// Unconditionally append a line
    pub fn note(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append a line if `level` is enabled, at the given nesting depth
    pub fn at(&mut self, level: TraceLevel, depth: usize, line: impl fmt::Display) {
        if self.enabled(level) {
            self.lines.push(format!("{}{}", "  ".repeat(depth), line));
        }
    }

    pub(crate) fn header(&mut self, tokens: &[Token]) {
        let descriptors: Vec<String> = tokens.iter().map(Token::to_string).collect();
        self.note(format!("Input tokens: [{}]", descriptors.join(", ")));
        self.note("");
        self.note("Parse log:");
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines containing `needle`, for diagnostics and tests
    pub fn matching<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(move |line| line.contains(needle))
    }
}

impl fmt::Display for TraceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// How a token is shown in trace lines
pub(crate) fn describe_token(token: Option<&Token>) -> String {
    match token {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_filter_lines() {
        let mut log = TraceLog::new(TraceLevel::Matches);
        log.at(TraceLevel::Matches, 1, "* found");
        log.at(TraceLevel::Attempts, 1, "--- at");
        assert_eq!(log.lines(), &["  * found".to_string()]);
    }

    #[test]
    fn test_header_lists_input() {
        let mut log = TraceLog::new(TraceLevel::Quiet);
        log.header(&["빵:NNG".parse().unwrap(), ".:SF".parse().unwrap()]);
        assert_eq!(log.lines()[0], "Input tokens: [빵:NNG, .:SF]");
        assert_eq!(log.to_string(), "Input tokens: [빵:NNG, .:SF]\n\nParse log:\n");
    }

    #[test]
    fn test_default_level_is_full() {
        assert_eq!(TraceLevel::default(), TraceLevel::Full);
        assert!(TraceLog::new(TraceLevel::default()).enabled(TraceLevel::Full));
    }

    #[test]
    fn test_describe_end_of_input() {
        assert_eq!(describe_token(None), "end of input");
    }
}
