//! Passes over a finished tree that prepare it for display
//!
//! - [`rename`]: label spacing and tag-triggered clause renames (mutates the tree)
//! - [`references`]: dictionary links, tag notes and rule annotations
//! - [`phrases`]: per-phrase word/marker descriptor lists
//!
//! Everything reads its tables from an explicitly passed [`TagMap`](crate::kparse::config::TagMap).

pub mod phrases;
pub mod references;
pub mod rename;

pub use phrases::{phrase_list, PhraseItem};
pub use references::{collect_references, References, TagInfo};
pub use rename::map_node_names;
