//! Rule invocation engine
//!
//! [`Parser`] owns everything one parse needs: the token stream, the scratch
//! tree arena, the search state and the trace. Grammar productions are plain
//! functions that call [`Parser::rule`], which wraps the production body with
//! packrat memoization and the recursion guard:
//!
//! 1. A memoized (production, start) is replayed: the cursor jumps to the stored
//!    end and the stored result is returned without running the body.
//! 2. A (production, start) that is already active is refused with a failure.
//! 3. Otherwise the body runs with the pair pushed on the guard stack.
//! 4. A body that matched no real nodes fails: the cursor goes back to the start
//!    and the failure is recorded.
//! 5. A body that matched nodes becomes one internal node labeled after the
//!    production, spanning start to the new cursor, and is memoized.

use super::combinators::Match;
use super::production::Production;
use super::state::{ParseState, ParseStats};
use super::trace::{describe_token, TraceLevel, TraceLog};
use crate::kparse::ast::{NodeId, ParseTree, TreeBuilder};
use crate::kparse::lexing::{TagSet, Token, TokenStream};

pub struct Parser {
    stream: TokenStream,
    builder: TreeBuilder,
    state: ParseState,
    trace: TraceLog,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, level: TraceLevel) -> Self {
        let mut trace = TraceLog::new(level);
        trace.header(&tokens);
        Parser {
            stream: TokenStream::new(tokens),
            builder: TreeBuilder::new(),
            state: ParseState::new(),
            trace,
        }
    }

    pub fn mark(&self) -> usize {
        self.stream.mark()
    }

    pub fn restore(&mut self, mark: usize) {
        self.stream.restore(mark);
    }

    pub fn tokens(&self) -> &[Token] {
        self.stream.tokens()
    }

    /// True when the token under the cursor belongs to `tags`
    pub fn at(&mut self, tags: &TagSet) -> bool {
        self.stream.peek(Some(tags)).is_some()
    }

    pub fn last_tried(&self) -> Option<&Token> {
        self.stream.last_tried()
    }

    /// Consume one token from `tags` as a bare terminal node
    pub fn token(&mut self, tags: &TagSet) -> Match {
        let Some(position) = self.stream.next(Some(tags)).map(|t| t.position) else {
            return Match::fail();
        };
        let id = self.builder.terminal(position, &self.stream.tokens()[position]);
        Match::node(id)
    }

    /// A terminal production: one token from the production's tag set, wrapped
    /// in a node labeled after the production
    pub fn terminal(&mut self, production: Production) -> Match {
        match production.accepted_tags() {
            Some(tags) => self.rule(production, |p| p.token(tags)),
            None => Match::fail(),
        }
    }

    /// Number of tokens covered by the real nodes of a match
    pub fn width(&self, matched: &Match) -> usize {
        matched
            .nodes()
            .into_iter()
            .map(|id| self.builder.width(id))
            .sum()
    }

    /// Run `body` as `production` at the current position.
    ///
    /// # Arguments
    ///
    /// * `production` - identity used for memoization, the guard and the label
    /// * `body` - the production's right-hand side
    ///
    /// # Returns
    ///
    /// A match holding exactly one internal node, or a failure with the cursor
    /// back where it started
    pub fn rule<F>(&mut self, production: Production, body: F) -> Match
    where
        F: FnOnce(&mut Parser) -> Match,
    {
        let start = self.mark();
        if let Some(memo) = self.state.recall(production, start) {
            self.restore(memo.end);
            return memo.result;
        }

        let depth = self.state.depth();
        let start_token = describe_token(self.stream.current());
        self.trace.at(
            TraceLevel::Attempts,
            depth,
            format_args!("--- at {start_token} looking for {}", production.name()),
        );

        if self.state.blocks(production, start) {
            self.trace.at(
                TraceLevel::Full,
                depth,
                "    recursion on same token encountered, failing",
            );
            return Match::fail();
        }

        let frame = self.state.enter(production, start);
        let result = body(self);
        let cacheable = self.state.exit(frame);

        let children = result.nodes();
        if children.is_empty() {
            self.state.record_failure(production, start, cacheable);
            self.restore(start);
            self.trace.at(
                TraceLevel::Full,
                depth,
                format_args!("    nope, backtracking to {start_token}"),
            );
            return Match::fail();
        }

        let node = self.builder.internal(production.label(), children, start);
        if self.trace.enabled(TraceLevel::Matches) {
            let line = format!(
                "* found {} at {start_token} {}",
                self.builder.describe(node),
                self.state.traceback()
            );
            self.trace.at(TraceLevel::Matches, depth, line);
        }
        let found = Match::node(node);
        self.state
            .remember(production, start, found.clone(), self.mark());
        found
    }

    /// A compact copy of the subtree under `root`
    pub fn build_tree(&self, root: NodeId) -> ParseTree {
        self.builder.finish(root)
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    pub fn stats(&self) -> ParseStats {
        self.state.stats()
    }

    pub fn trace_mut(&mut self) -> &mut TraceLog {
        &mut self.trace
    }

    pub fn into_trace(self) -> TraceLog {
        self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kparse::lexing::token::parse_descriptors;
    use crate::kparse::parsing::grammar;

    fn parser(input: &str) -> Parser {
        Parser::new(parse_descriptors(input).unwrap(), TraceLevel::Full)
    }

    #[test]
    fn test_terminal_production_wraps_token() {
        let mut p = parser("다:EF");
        let matched = p.terminal(Production::EndingSuffix);
        let tree = p.build_tree(matched.nodes()[0]);
        assert_eq!(tree.to_string(), "EndingSuffix [다:EF]");
        assert_eq!(p.mark(), 1);
    }

    #[test]
    fn test_failed_rule_restores_cursor() {
        let mut p = parser("빵:NNG 먹:VV");
        let matched = grammar::object_phrase(&mut p);
        assert!(!matched.is_match());
        assert_eq!(p.mark(), 0);
        assert!(p.state().failures_at(0).any(|f| f == Production::ObjectPhrase));
    }

    #[test]
    fn test_memo_replays_without_rerunning_body() {
        let mut p = parser("빵:NNG 을:JKO 먹:VV");
        let first = grammar::object_phrase(&mut p);
        let end = p.mark();
        let executions = p.stats().executions;
        let lines = p.trace_mut().len();

        p.restore(0);
        let second = grammar::object_phrase(&mut p);

        assert_eq!(first, second);
        assert_eq!(p.mark(), end);
        assert_eq!(p.stats().executions, executions);
        assert_eq!(p.trace_mut().len(), lines, "replay must not log");
        assert!(p.stats().memo_hits >= 1);
    }

    #[test]
    fn test_same_production_same_position_is_refused() {
        fn looping(p: &mut Parser) -> Match {
            p.rule(Production::Noun, |p| {
                let inner = looping(p);
                if inner.is_match() {
                    inner
                } else {
                    p.token(&crate::kparse::lexing::tags::SIMPLE_NOUN)
                }
            })
        }
        let mut p = parser("밥:NNG");
        let matched = looping(&mut p);
        assert_eq!(p.build_tree(matched.nodes()[0]).to_string(), "Noun [밥:NNG]");
        assert_eq!(p.stats().recursion_blocks, 1);
        assert!(p
            .into_trace()
            .matching("recursion on same token encountered")
            .next()
            .is_some());
    }

    #[test]
    fn test_trace_records_attempts_and_matches() {
        let mut p = parser("다:EF");
        p.terminal(Production::EndingSuffix);
        let trace = p.into_trace();
        assert!(trace
            .lines()
            .contains(&"--- at 다:EF looking for endingSuffix".to_string()));
        assert!(trace
            .lines()
            .contains(&"* found EndingSuffix [다:EF] at 다:EF ".to_string()));
    }

    #[test]
    fn test_width_ignores_placeholders() {
        let mut p = parser("빵:NNG 을:JKO");
        let matched = grammar::object_phrase(&mut p);
        assert_eq!(p.width(&matched), 2);
        assert_eq!(p.width(&Match::null()), 0);
    }
}
