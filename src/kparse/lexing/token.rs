//! Tagged morpheme tokens
//!
//! A token is one morpheme as produced by the upstream tagger, written as
//! `lexeme:TAG`. The tag is everything after the last colon, so lexemes that
//! contain a colon (`::SP`) still parse.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when a descriptor is not of the form `lexeme:TAG`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("descriptor '{0}' has no ':' separating lexeme and tag")]
    MissingSeparator(String),
    #[error("descriptor '{0}' has an empty tag")]
    EmptyTag(String),
}

/// An immutable (lexeme, tag) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    lexeme: String,
    tag: String,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, tag: impl Into<String>) -> Self {
        Token {
            lexeme: lexeme.into(),
            tag: tag.into(),
        }
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The lexeme with surrounding whitespace removed, used as a lookup word
    pub fn word(&self) -> &str {
        self.lexeme.trim()
    }

    /// The `word:TAG` key used for per-word label overrides
    pub fn word_key(&self) -> String {
        format!("{}:{}", self.word(), self.tag)
    }

    /// Verb-like tags all start with `V` (VV, VA, VX, VCP, VND_...)
    pub fn is_verb(&self) -> bool {
        self.tag.starts_with('V')
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lexeme, self.tag)
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let (lexeme, tag) = descriptor
            .rsplit_once(':')
            .ok_or_else(|| TokenError::MissingSeparator(descriptor.to_string()))?;
        if tag.trim().is_empty() {
            return Err(TokenError::EmptyTag(descriptor.to_string()));
        }
        Ok(Token::new(lexeme, tag.trim()))
    }
}

/// Parse a tagger output string into tokens.
///
/// Descriptors are separated by `;` or whitespace; empty pieces are skipped.
///
/// # Arguments
///
/// * `input` - e.g. `"빵:NNG;을:JKO;주:VV;세요:EF;.:SF"`
///
/// # Returns
///
/// The tokens in input order, or the first malformed descriptor
pub fn parse_descriptors(input: &str) -> Result<Vec<Token>, TokenError> {
    input
        .split(|c: char| c == ';' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(str::parse)
        .collect()
}
