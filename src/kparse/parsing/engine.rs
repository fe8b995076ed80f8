//! Parse driver
//!
//! Runs the start production over a token sequence and classifies the result:
//!
//! 1. No match at all: a degenerate flat tree of every token before the first
//!    sentence-final token, with [`ParseError::ParseFailed`].
//! 2. A match that does not stop right before a sentence-final token: the same
//!    degenerate tree, with [`ParseError::IncompleteParse`]. The partial tree is
//!    written to the trace only.
//! 3. A match followed by a sentence-final token: the matched tree, no error.
//!
//! Every path returns a tree and the trace. Nothing here panics or returns `Err`.

use super::grammar;
use super::parser::Parser;
use super::state::ParseStats;
use super::trace::{describe_token, TraceLevel, TraceLog};
use crate::kparse::ast::ParseTree;
use crate::kparse::formats::bracket::to_bracket_str;
use crate::kparse::lexing::tags::SENTENCE_FINAL;
use crate::kparse::lexing::Token;
use serde::Serialize;
use thiserror::Error;

/// Label of the root of a degenerate tree
pub const UNRECOGNIZED: &str = "Unrecognized";

/// Caller-visible parse errors; both still come with a usable tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum ParseError {
    #[error("parse failed")]
    #[serde(rename = "parse failed")]
    ParseFailed,
    #[error("incomplete parsing")]
    #[serde(rename = "incomplete parsing")]
    IncompleteParse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub trace: TraceLevel,
}

#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub tree: ParseTree,
    pub error: Option<ParseError>,
    pub trace: TraceLog,
    pub stats: ParseStats,
}

impl ParseOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse with the full trace
pub fn parse(tokens: &[Token]) -> ParseOutcome {
    parse_with(tokens, ParseOptions::default())
}

/// Parse a token sequence.
///
/// # Arguments
///
/// * `tokens` - the tagged morphemes of one sentence, normally ending in a
///   sentence-final token
/// * `options` - trace verbosity
///
/// # Returns
///
/// The tree, the optional error classification, the trace and work counters
pub fn parse_with(tokens: &[Token], options: ParseOptions) -> ParseOutcome {
    let mut parser = Parser::new(tokens.to_vec(), options.trace);
    let matched = grammar::input(&mut parser);
    let root = matched.nodes().first().copied();
    let stats = parser.stats();

    let (tree, error) = match root {
        None => {
            parser.trace_mut().note("");
            parser.trace_mut().note("*** parse failed");
            (degenerate(tokens), Some(ParseError::ParseFailed))
        }
        Some(root) if !parser.at(&SENTENCE_FINAL) => {
            let partial = parser.build_tree(root);
            let last_tried = describe_token(parser.last_tried());
            let trace = parser.trace_mut();
            trace.note("");
            trace.note(format!("*** incomplete parsing, last tried token = {last_tried}"));
            trace.note("");
            trace.note("Partial parse tree:");
            for line in to_bracket_str(&partial).lines() {
                trace.note(line);
            }
            (degenerate(tokens), Some(ParseError::IncompleteParse))
        }
        Some(root) => {
            let tree = parser.build_tree(root);
            let trace = parser.trace_mut();
            for line in to_bracket_str(&tree).lines() {
                trace.note(line);
            }
            (tree, None)
        }
    };

    ParseOutcome {
        tree,
        error,
        trace: parser.into_trace(),
        stats,
    }
}

/// Every token before the first sentence-final token, under one flat root
fn degenerate(tokens: &[Token]) -> ParseTree {
    let end = tokens
        .iter()
        .position(|token| SENTENCE_FINAL.contains(token.tag()))
        .unwrap_or(tokens.len());
    ParseTree::degenerate(UNRECOGNIZED, &tokens[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kparse::lexing::token::parse_descriptors;

    fn run(input: &str) -> ParseOutcome {
        parse(&parse_descriptors(input).unwrap())
    }

    #[test]
    fn test_accepted_sentence() {
        let outcome = run("빵:NNG 을:JKO 주:VV 세요:EF .:SF");
        assert!(outcome.is_ok());
        assert_eq!(outcome.tree.span(outcome.tree.root()), 0..4);
        assert!(outcome.trace.lines().iter().any(|l| l == "Input ("));
    }

    #[test]
    fn test_failed_parse_is_degenerate() {
        let outcome = run("xx:ZZ .:SF");
        assert_eq!(outcome.error, Some(ParseError::ParseFailed));
        assert_eq!(outcome.tree.to_string(), "Unrecognized [xx:ZZ]");
        assert!(outcome.trace.matching("*** parse failed").next().is_some());
    }

    #[test]
    fn test_incomplete_parse_logs_partial_tree() {
        let outcome = run("먹:VV 다:EF");
        assert_eq!(outcome.error, Some(ParseError::IncompleteParse));
        assert_eq!(outcome.tree.to_string(), "Unrecognized [먹:VV, 다:EF]");
        assert!(outcome
            .trace
            .matching("*** incomplete parsing, last tried token = ")
            .next()
            .is_some());
        assert!(outcome.trace.lines().iter().any(|l| l == "Partial parse tree:"));
    }

    #[test]
    fn test_empty_input() {
        let outcome = run("");
        assert_eq!(outcome.error, Some(ParseError::ParseFailed));
        assert!(outcome.tree.terminals().is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::ParseFailed.to_string(), "parse failed");
        assert_eq!(ParseError::IncompleteParse.to_string(), "incomplete parsing");
        assert_eq!(
            serde_json::to_string(&ParseError::IncompleteParse).unwrap(),
            "\"incomplete parsing\""
        );
    }

    #[test]
    fn test_quiet_trace_keeps_outcome_lines() {
        let tokens = parse_descriptors("xx:ZZ").unwrap();
        let outcome = parse_with(
            &tokens,
            ParseOptions {
                trace: TraceLevel::Quiet,
            },
        );
        assert_eq!(outcome.trace.matching("looking for").count(), 0);
        assert!(outcome.trace.matching("*** parse failed").next().is_some());
    }
}
