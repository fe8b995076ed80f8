//! Positional cursor over a token sequence
//!
//! The cursor only moves forward through [`TokenStream::next`] on a match, and
//! anywhere through [`TokenStream::restore`]. Peeking records the token it looked
//! at so failed parses can report how far the grammar got.

use super::tags::TagSet;
use super::token::Token;

/// A single-token view at a fixed position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal<'a> {
    pub position: usize,
    pub token: &'a Token,
}

#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
    last_tried: Option<usize>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens,
            cursor: 0,
            last_tried: None,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token under the cursor, if any
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// The most recent token inspected by `peek` or `next`
    pub fn last_tried(&self) -> Option<&Token> {
        self.last_tried.and_then(|position| self.tokens.get(position))
    }

    /// Look at the token under the cursor without consuming it.
    ///
    /// # Arguments
    ///
    /// * `tags` - when given, the token's tag must belong to this set
    ///
    /// # Returns
    ///
    /// The token at the cursor, or `None` at end of input or on a tag mismatch
    pub fn peek(&mut self, tags: Option<&TagSet>) -> Option<Terminal<'_>> {
        let position = self.cursor;
        let token = self.tokens.get(position)?;
        self.last_tried = Some(position);
        match tags {
            Some(set) if !set.contains(token.tag()) => None,
            _ => Some(Terminal { position, token }),
        }
    }

    /// Like [`peek`](Self::peek), but advances the cursor by one on a match
    pub fn next(&mut self, tags: Option<&TagSet>) -> Option<Terminal<'_>> {
        let position = self.peek(tags)?.position;
        self.cursor += 1;
        Some(Terminal {
            position,
            token: &self.tokens[position],
        })
    }

    pub fn mark(&self) -> usize {
        self.cursor
    }

    pub fn restore(&mut self, mark: usize) {
        self.cursor = mark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kparse::lexing::tags::{ENDING_SUFFIX, OBJECT_MARKER};
    use crate::kparse::lexing::token::parse_descriptors;

    fn stream(input: &str) -> TokenStream {
        TokenStream::new(parse_descriptors(input).unwrap())
    }

    #[test]
    fn test_peek_does_not_move_cursor() {
        let mut s = stream("빵:NNG 을:JKO");
        let terminal = s.peek(None).unwrap();
        assert_eq!(terminal.position, 0);
        assert_eq!(terminal.token.lexeme(), "빵");
        assert_eq!(s.mark(), 0);
    }

    #[test]
    fn test_next_advances_only_on_match() {
        let mut s = stream("빵:NNG 을:JKO");
        assert!(s.next(Some(&OBJECT_MARKER)).is_none());
        assert_eq!(s.mark(), 0);
        assert!(s.next(None).is_some());
        assert_eq!(s.next(Some(&OBJECT_MARKER)).unwrap().position, 1);
        assert_eq!(s.mark(), 2);
        assert!(s.next(None).is_none());
    }

    #[test]
    fn test_restore_rewinds() {
        let mut s = stream("먹:VV 다:EF");
        let start = s.mark();
        s.next(None);
        s.next(Some(&ENDING_SUFFIX));
        s.restore(start);
        assert_eq!(s.current().map(Token::lexeme), Some("먹"));
    }

    #[test]
    fn test_last_tried_tracks_failed_peeks() {
        let mut s = stream("먹:VV 다:EF");
        assert!(s.last_tried().is_none());
        s.next(None);
        assert!(s.peek(Some(&OBJECT_MARKER)).is_none());
        assert_eq!(s.last_tried().map(Token::tag), Some("EF"));
    }
}
