//! Testing utilities for parse trees
//!
//! # Parser Testing Guidelines
//!
//! Two tools, meant to be used together:
//!
//! 1. **[Sample]** - tagged sentences whose parses have been checked by hand
//! 2. **[assert_tree](fn@assert_tree)** - fluent assertions over tree shape and content
//!
//! ## Rule 1: Prefer Sample for Test Input
//!
//! Tagger output is easy to get subtly wrong (a `JX` where the tagger emits
//! `TOP`, a missing `EP`). Keeping the vetted sentences in one place means a
//! grammar change only has to be re-verified against one list.
//!
//! ```rust-example
//! use kparse::kparse::testing::Sample;
//! use kparse::kparse::parsing::parse;
//!
//! let outcome = parse(&Sample::Possessive.tokens());
//! ```
//!
//! ## Rule 2: Assert Shape, Not Counts
//!
//! Checking that a parse "has 14 nodes" says nothing about whether it is right.
//! The fluent API walks the tree the way the grammar builds it:
//!
//! ```rust-example
//! use kparse::kparse::testing::assert_tree;
//!
//! assert_tree(&outcome.tree)
//!     .descend(&["Input", "Sentence", "MainClause"])
//!     .child_count(3)
//!     .child(1, |phrase| {
//!         phrase
//!             .descend(&["Phrase", "ObjectPhrase"])
//!             .span(7..9)
//!             .covers("밥 을");
//!     });
//! ```

mod testing_assertions;
mod testing_samples;

pub use testing_assertions::{assert_tree, NodeAssertion};
pub use testing_samples::Sample;
