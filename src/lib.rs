//! # kparse
//!
//! A constituency parser for Korean sentences that have already been split into
//! morphemes and tagged by an external tagger.
//!
//! Input is a sequence of `lexeme:TAG` descriptors; output is a labeled
//! constituency tree plus the display and annotation views derived from it.
//!
//! ## Testing
//!
//! Shared sample sentences and the fluent tree assertions live in the
//! [testing module](kparse::testing).

pub mod kparse;
