//! Rule combinators
//!
//! Grammar-independent building blocks. A rule is any `fn(&mut Parser) -> Match`;
//! the combinators below compose rules without knowing which grammar they serve.
//!
//! Responsibility split for backtracking:
//!
//! 1. Combinators never rewind on failure. A [`sequence`] whose third element
//!    fails leaves the cursor wherever the first two moved it.
//! 2. [`Parser::rule`] takes a mark before running a production body and restores
//!    it when the body fails. That is the only place a failed attempt is undone.
//! 3. [`any_one_of`] is the one combinator that moves the cursor backwards: it
//!    restores the cursor before each option so siblings never observe one
//!    another, then moves it to the end of the winner.

use super::parser::Parser;
use crate::kparse::ast::NodeId;

/// One slot of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constituent {
    Node(NodeId),
    /// Placeholder left by an optional or repeated rule that matched nothing
    Null,
}

/// Result of applying a rule; an empty match is a failure.
///
/// A match holding only [`Constituent::Null`] is a success that consumed
/// nothing, which keeps `optional` and `zero_or_more` from failing a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Match(Vec<Constituent>);

impl Match {
    pub fn fail() -> Self {
        Match(Vec::new())
    }

    pub fn null() -> Self {
        Match(vec![Constituent::Null])
    }

    pub fn node(id: NodeId) -> Self {
        Match(vec![Constituent::Node(id)])
    }

    pub fn is_match(&self) -> bool {
        !self.0.is_empty()
    }

    /// True when at least one real node was matched
    pub fn has_nodes(&self) -> bool {
        self.0.iter().any(|c| matches!(c, Constituent::Node(_)))
    }

    pub fn constituents(&self) -> &[Constituent] {
        &self.0
    }

    /// The matched nodes, placeholders dropped
    pub fn nodes(&self) -> Vec<NodeId> {
        self.0
            .iter()
            .filter_map(|c| match c {
                Constituent::Node(id) => Some(*id),
                Constituent::Null => None,
            })
            .collect()
    }

    fn extend(&mut self, other: Match) {
        self.0.extend(other.0);
    }

    fn extend_nodes(&mut self, other: &Match) {
        self.0
            .extend(other.0.iter().filter(|c| matches!(c, Constituent::Node(_))));
    }
}

pub type Rule = fn(&mut Parser) -> Match;

/// Apply `rules` in order; fail as soon as one fails.
///
/// The cursor is not rewound on failure.
pub fn sequence(p: &mut Parser, rules: &[Rule]) -> Match {
    let mut matched = Match::fail();
    for rule in rules {
        let next = rule(p);
        if !next.is_match() {
            return Match::fail();
        }
        matched.extend(next);
    }
    matched
}

/// Zero or one match of `rule`; never fails
pub fn optional(p: &mut Parser, rule: Rule) -> Match {
    let matched = rule(p);
    if matched.is_match() {
        matched
    } else {
        Match::null()
    }
}

/// Repeat `rule` while it matches; never fails
pub fn zero_or_more(p: &mut Parser, rule: Rule) -> Match {
    let matched = one_or_more(p, rule);
    if matched.is_match() {
        matched
    } else {
        Match::null()
    }
}

/// Repeat `rule` while it matches; fails if the first attempt fails.
///
/// Repetition stops after any iteration that does not advance the cursor, so a
/// rule able to succeed on zero tokens counts once instead of looping forever.
pub fn one_or_more(p: &mut Parser, rule: Rule) -> Match {
    let mut matched = Match::fail();
    let mut any = false;
    loop {
        let before = p.mark();
        let next = rule(p);
        if !next.is_match() {
            break;
        }
        any = true;
        matched.extend_nodes(&next);
        if p.mark() == before {
            break;
        }
    }
    if any && !matched.is_match() {
        return Match::null();
    }
    matched
}

/// Longest-match alternation.
///
/// Every option runs from the same start position. The winner is the option
/// whose matched nodes cover the most tokens; ties go to the option listed
/// first. On success the cursor ends where the winner ended, on failure it is
/// back at the start.
pub fn any_one_of(p: &mut Parser, options: &[Rule]) -> Match {
    let start = p.mark();
    let mut best: Option<(Match, usize, usize)> = None;

    for option in options {
        p.restore(start);
        let candidate = option(p);
        if !candidate.has_nodes() {
            continue;
        }
        let width = p.width(&candidate);
        let longer = best.as_ref().map_or(true, |(_, best_width, _)| width > *best_width);
        if longer {
            best = Some((candidate, width, p.mark()));
        }
    }

    match best {
        Some((winner, _, end)) => {
            p.restore(end);
            winner
        }
        None => {
            p.restore(start);
            Match::fail()
        }
    }
}
