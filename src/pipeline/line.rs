//! Line grouping stage.

use crate::pipeline::{Mode, PullSource};
use crate::sequence::{ListSequence, Sequence};

/// A capacity-bounded group of consecutive tokens.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub tokens: ListSequence<String>,
}

impl Line {
    /// Aggregate weight of the line: token count under [`Mode::Words`],
    /// character sum plus one separator per interior token boundary
    /// under [`Mode::Chars`].
    pub fn weight(&self, mode: Mode) -> usize {
        match mode {
            Mode::Words => self.tokens.len(),
            Mode::Chars => {
                let mut total = 0;
                for (i, token) in self.tokens.iter().enumerate() {
                    total += token.chars().count() + usize::from(i > 0);
                }
                total
            }
        }
    }
}

/// Weight a token would add to a line that already carries `used`
/// weight units.
pub fn token_weight(token: &str, mode: Mode, used: usize) -> usize {
    match mode {
        Mode::Words => 1,
        Mode::Chars => token.chars().count() + usize::from(used > 0),
    }
}

/// Accumulates tokens into [`Line`]s under a line-weight limit.
///
/// The first token offered to an empty line is always accepted, even
/// when its own weight exceeds the limit; a later token that would
/// overflow is held back and opens the next line. A limit of 0 is
/// treated as 1.
#[derive(Debug)]
pub struct LineBreaker<S> {
    source: S,
    limit: usize,
    mode: Mode,
    pending: Option<String>,
}

impl<S: PullSource<String>> LineBreaker<S> {
    pub fn new(source: S, limit: usize, mode: Mode) -> Self {
        Self {
            source,
            limit: limit.max(1),
            mode,
            pending: None,
        }
    }
}

impl<S: PullSource<String>> PullSource<Line> for LineBreaker<S> {
    fn read(&mut self) -> Option<Line> {
        let mut tokens = ListSequence::new();
        let mut used = 0;

        let mut token = match self.pending.take() {
            Some(pending) => pending,
            None => self.source.read()?,
        };

        loop {
            let weight = token_weight(&token, self.mode, used);
            if used > 0 && used + weight > self.limit {
                self.pending = Some(token);
                break;
            }
            used += weight;
            tokens.append(token);
            token = match self.source.read() {
                Some(next) => next,
                None => break,
            };
        }

        Some(Line { tokens })
    }

    fn is_end(&self) -> bool {
        self.pending.is_none() && self.source.is_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{Lexer, TextSource};

    fn lines(text: &str, limit: usize, mode: Mode) -> Vec<Vec<String>> {
        let mut breaker = LineBreaker::new(Lexer::new(TextSource::new(text)), limit, mode);
        let mut out: Vec<Vec<String>> = Vec::new();
        while let Some(line) = breaker.read() {
            out.push(line.tokens.iter().cloned().collect());
        }
        out
    }

    #[test]
    fn test_words_mode_counts_tokens() {
        assert_eq!(
            lines("a b c d e", 2, Mode::Words),
            vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]
        );
    }

    #[test]
    fn test_words_limit_one_gives_single_token_lines() {
        assert_eq!(
            lines("alpha beta gamma", 1, Mode::Words),
            vec![vec!["alpha"], vec!["beta"], vec!["gamma"]]
        );
    }

    #[test]
    fn test_chars_mode_charges_separators() {
        // "aa bb" weighs 2+1+2=5; "cc" would add 3 more
        assert_eq!(
            lines("aa bb cc", 5, Mode::Chars),
            vec![vec!["aa", "bb"], vec!["cc"]]
        );
    }

    #[test]
    fn test_oversized_first_token_is_accepted() {
        assert_eq!(
            lines("gigantic a", 3, Mode::Chars),
            vec![vec!["gigantic"], vec!["a"]]
        );
    }

    #[test]
    fn test_zero_limit_treated_as_one() {
        assert_eq!(
            lines("a b", 0, Mode::Words),
            vec![vec!["a"], vec!["b"]]
        );
    }

    #[test]
    fn test_is_end_accounts_for_pending_token() {
        let mut breaker =
            LineBreaker::new(Lexer::new(TextSource::new("aa bb")), 2, Mode::Chars);
        let first = breaker.read().unwrap();
        assert_eq!(first.tokens.len(), 1);
        // "bb" is held back: the source is drained but the stage is not done
        assert!(!breaker.is_end());
        assert!(breaker.read().is_some());
        assert!(breaker.is_end());
        assert!(breaker.read().is_none());
    }

    #[test]
    fn test_line_weight() {
        let line = Line {
            tokens: ListSequence::from_slice(&[
                "aa".to_string(),
                "bbb".to_string(),
                "c".to_string(),
            ]),
        };
        assert_eq!(line.weight(Mode::Words), 3);
        assert_eq!(line.weight(Mode::Chars), 2 + 1 + 3 + 1 + 1);
        assert_eq!(Line::default().weight(Mode::Chars), 0);
    }
}
