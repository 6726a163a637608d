//! Whitespace tokenizer stage.

use crate::pipeline::PullSource;

/// Splits a character stream into tokens: maximal runs of
/// non-whitespace characters, with whitespace runs in between
/// discarded.
///
/// The lexer holds no buffered state between `read` calls, but it does
/// not forward `seek`: repositioning the underlying characters while a
/// lexer is attached could land mid-token and silently split it, so a
/// caller that wants to re-tokenize from an offset seeks the source and
/// builds a fresh lexer over it.
///
/// # Example
///
/// ```
/// use alphadex::pipeline::{Lexer, PullSource, TextSource};
///
/// let mut lexer = Lexer::new(TextSource::new("  one\ttwo\nthree "));
/// assert_eq!(lexer.read(), Some("one".to_string()));
/// assert_eq!(lexer.read(), Some("two".to_string()));
/// assert_eq!(lexer.read(), Some("three".to_string()));
/// assert_eq!(lexer.read(), None);
/// ```
#[derive(Debug)]
pub struct Lexer<S> {
    source: S,
}

impl<S: PullSource<char>> Lexer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Give the underlying source back, e.g. to seek and re-lex.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: PullSource<char>> PullSource<String> for Lexer<S> {
    fn read(&mut self) -> Option<String> {
        let mut token = String::new();
        // skip the whitespace run, keep the first token character
        while let Some(ch) = self.source.read() {
            if !ch.is_whitespace() {
                token.push(ch);
                break;
            }
        }
        if token.is_empty() {
            return None;
        }
        while let Some(ch) = self.source.read() {
            if ch.is_whitespace() {
                break;
            }
            token.push(ch);
        }
        Some(token)
    }

    fn is_end(&self) -> bool {
        self.source.is_end()
    }
}
