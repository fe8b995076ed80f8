//! Parsing layer
//!
//! - [`combinators`]: grammar-independent rule composition
//! - [`parser`]: the rule invocation engine (memoization, recursion guard, node
//!   construction)
//! - [`state`]: per-parse memo table, guard stack and failure table
//! - [`production`] and [`grammar`]: the Korean grammar
//! - [`engine`]: the driver that classifies a parse and falls back to a
//!   degenerate tree
//! - [`trace`]: the human-readable search log

pub mod combinators;
pub mod engine;
pub mod grammar;
pub mod parser;
pub mod production;
pub mod state;
pub mod trace;

pub use combinators::{any_one_of, one_or_more, optional, sequence, zero_or_more, Match, Rule};
pub use engine::{parse, parse_with, ParseError, ParseOptions, ParseOutcome, UNRECOGNIZED};
pub use parser::Parser;
pub use production::Production;
pub use state::{ParseState, ParseStats};
pub use trace::{TraceLevel, TraceLog};
