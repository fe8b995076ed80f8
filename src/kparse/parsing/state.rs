//! Per-parse search state
//!
//! One [`ParseState`] lives exactly as long as one parse call. It holds:
//!
//! 1. The memo table, keyed by (production, start position). Entries are
//!    written once and never replaced.
//! 2. The recursion guard: the stack of active (production, start) pairs. A pair
//!    that is already active is refused, which is how left recursion is cut off.
//! 3. The failure table: every production that failed at each position. It only
//!    grows.
//!
//! Failures are memoized only when they do not depend on the recursion guard.
//! When a refusal hits an entry below the production that is finishing, that
//! production's failure was decided by its callers' context, so it is recorded in
//! the failure table but not cached. Successes are always cached.

use super::combinators::Match;
use super::production::Production;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

type Key = (Production, usize);

#[derive(Debug, Clone)]
pub(crate) struct Memo {
    pub result: Match,
    pub end: usize,
}

/// Counters describing how much work a parse did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Production bodies actually executed
    pub executions: usize,
    /// Calls answered from the memo table
    pub memo_hits: usize,
    /// Calls refused by the recursion guard
    pub recursion_blocks: usize,
}

/// Bookkeeping for one active production, returned by [`ParseState::enter`]
#[derive(Debug)]
pub(crate) struct Frame {
    index: usize,
    outer_block: Option<usize>,
}

#[derive(Debug, Default)]
pub struct ParseState {
    memo: HashMap<Key, Memo>,
    active: Vec<Key>,
    failures: BTreeMap<usize, BTreeSet<Production>>,
    lowest_block: Option<usize>,
    stats: ParseStats,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn recall(&mut self, production: Production, start: usize) -> Option<Memo> {
        let memo = self.memo.get(&(production, start))?.clone();
        self.stats.memo_hits += 1;
        Some(memo)
    }

    /// Refuse the call if the same production is already active at `start`
    pub(crate) fn blocks(&mut self, production: Production, start: usize) -> bool {
        let Some(index) = self.active.iter().position(|&key| key == (production, start)) else {
            return false;
        };
        self.lowest_block = Some(self.lowest_block.map_or(index, |low| low.min(index)));
        self.stats.recursion_blocks += 1;
        true
    }

    pub(crate) fn enter(&mut self, production: Production, start: usize) -> Frame {
        self.stats.executions += 1;
        let frame = Frame {
            index: self.active.len(),
            outer_block: self.lowest_block.take(),
        };
        self.active.push((production, start));
        frame
    }

    /// Pop the active production.
    ///
    /// # Returns
    ///
    /// `true` when the body's outcome did not depend on a refusal of one of the
    /// productions still active below it, i.e. a failure may be cached
    pub(crate) fn exit(&mut self, frame: Frame) -> bool {
        self.active.pop();
        let inner = self.lowest_block.take();
        let leaked = inner.filter(|&index| index < frame.index);
        self.lowest_block = match (frame.outer_block, leaked) {
            (Some(outer), Some(leaked)) => Some(outer.min(leaked)),
            (outer, leaked) => outer.or(leaked),
        };
        leaked.is_none()
    }

    pub(crate) fn remember(&mut self, production: Production, start: usize, result: Match, end: usize) {
        self.memo
            .entry((production, start))
            .or_insert(Memo { result, end });
    }

    pub(crate) fn record_failure(&mut self, production: Production, start: usize, cacheable: bool) {
        self.failures.entry(start).or_default().insert(production);
        if cacheable {
            self.remember(production, start, Match::fail(), start);
        }
    }

    /// Productions known to have failed at `position`
    pub fn failures_at(&self, position: usize) -> impl Iterator<Item = Production> + '_ {
        self.failures
            .get(&position)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn is_memoized(&self, production: Production, start: usize) -> bool {
        self.memo.contains_key(&(production, start))
    }

    pub fn depth(&self) -> usize {
        self.active.len()
    }

    /// Active production names, innermost first
    pub fn traceback(&self) -> String {
        self.active
            .iter()
            .rev()
            .map(|(production, _)| production.name())
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }
}
