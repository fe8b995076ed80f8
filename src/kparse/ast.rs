//! Constituency tree data model
//!
//! - [`tree`]: the compact arena tree handed to callers, with flattening and
//!   derived parent links
//! - [`builder`]: the scratch arena productions write into during a parse
//! - [`labels`]: label spacing and whitespace-insensitive comparison

pub mod builder;
pub mod labels;
pub mod tree;

pub use builder::TreeBuilder;
pub use labels::{label_key, same_label, spaced};
pub use tree::{Node, NodeId, ParseTree};
