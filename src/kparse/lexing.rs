//! Lexing layer: tagged tokens and the cursor the parser reads them through
//!
//! Morphological analysis happens upstream. This layer only turns the tagger's
//! `lexeme:TAG` descriptors into [`Token`]s, classifies tags with [`TagSet`]s and
//! exposes a positional [`TokenStream`] with mark/restore backtracking.

pub mod stream;
pub mod tags;
pub mod token;

pub use stream::{Terminal, TokenStream};
pub use tags::{TagPattern, TagSet};
pub use token::{parse_descriptors, Token, TokenError};
