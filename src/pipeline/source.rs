//! Character source over an in-memory text blob.

use crate::pipeline::PullSource;

/// Pull source yielding the characters of an owned string, with random
/// repositioning by character offset.
///
/// # Example
///
/// ```
/// use alphadex::pipeline::{PullSource, TextSource};
///
/// let mut source = TextSource::new("ab");
/// assert_eq!(source.read(), Some('a'));
/// assert_eq!(source.read(), Some('b'));
/// assert_eq!(source.read(), None);
/// assert!(source.is_end());
///
/// assert!(source.seek(1));
/// assert_eq!(source.read(), Some('b'));
/// ```
#[derive(Debug, Clone)]
pub struct TextSource {
    chars: Vec<char>,
    pos: usize,
}

impl TextSource {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// Current character offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl PullSource<char> for TextSource {
    fn read(&mut self) -> Option<char> {
        let ch = *self.chars.get(self.pos)?;
        self.pos += 1;
        Some(ch)
    }

    fn is_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Seek to a character offset. Seeking to `len` (one past the last
    /// character) is allowed and leaves the source exhausted; anything
    /// beyond fails without moving.
    fn seek(&mut self, pos: usize) -> bool {
        if pos > self.chars.len() {
            return false;
        }
        self.pos = pos;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_all_chars() {
        let mut source = TextSource::new("hi there");
        let mut out = String::new();
        while let Some(ch) = source.read() {
            out.push(ch);
        }
        assert_eq!(out, "hi there");
        assert!(source.is_end());
        assert_eq!(source.read(), None);
    }

    #[test]
    fn test_seek_bounds() {
        let mut source = TextSource::new("abc");
        assert!(source.seek(3));
        assert!(source.is_end());
        assert!(!source.seek(4));
        assert_eq!(source.position(), 3);
        assert!(source.seek(0));
        assert_eq!(source.read(), Some('a'));
    }

    #[test]
    fn test_multibyte_positions_are_character_offsets() {
        let mut source = TextSource::new("aбв");
        assert!(source.seek(1));
        assert_eq!(source.read(), Some('б'));
        assert_eq!(source.read(), Some('в'));
        assert_eq!(source.read(), None);
    }

    #[test]
    fn test_empty_text() {
        let mut source = TextSource::new("");
        assert!(source.is_end());
        assert_eq!(source.read(), None);
        assert!(source.seek(0));
    }
}
