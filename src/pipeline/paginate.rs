//! Page grouping stage.

use crate::pipeline::{Line, Mode, PullSource};
use crate::sequence::{ListSequence, Sequence};

/// A capacity-bounded group of consecutive lines, numbered from 1.
#[derive(Debug, Clone)]
pub struct Page {
    pub number: usize,
    pub lines: ListSequence<Line>,
}

/// Capacity of the page with 1-based number `page_number`.
///
/// The first page gets half the configured size, every tenth page gets
/// three quarters (margin pages in the original layout), every other
/// page gets the full size. A computed capacity of 0 is clamped to 1 so
/// pagination always makes progress.
pub fn page_capacity(page_size: usize, page_number: usize) -> usize {
    let cap = if page_number == 1 {
        page_size / 2
    } else if page_number % 10 == 0 {
        page_size * 3 / 4
    } else {
        page_size
    };
    cap.max(1)
}

/// Accumulates lines into [`Page`]s under the per-page capacity.
///
/// Same shape as the line grouper one level down: the first line
/// offered to an empty page is always accepted, an overflowing line is
/// held back and opens the next page.
#[derive(Debug)]
pub struct Paginator<S> {
    source: S,
    page_size: usize,
    mode: Mode,
    next_number: usize,
    pending: Option<Line>,
}

impl<S: PullSource<Line>> Paginator<S> {
    pub fn new(source: S, page_size: usize, mode: Mode) -> Self {
        Self {
            source,
            page_size,
            mode,
            next_number: 1,
            pending: None,
        }
    }
}

impl<S: PullSource<Line>> PullSource<Page> for Paginator<S> {
    fn read(&mut self) -> Option<Page> {
        let capacity = page_capacity(self.page_size, self.next_number);
        let mut lines = ListSequence::new();
        let mut used = 0;

        let mut line = match self.pending.take() {
            Some(pending) => pending,
            None => self.source.read()?,
        };

        loop {
            let weight = line.weight(self.mode);
            if used > 0 && used + weight > capacity {
                self.pending = Some(line);
                break;
            }
            used += weight;
            lines.append(line);
            line = match self.source.read() {
                Some(next) => next,
                None => break,
            };
        }

        let page = Page {
            number: self.next_number,
            lines,
        };
        self.next_number += 1;
        Some(page)
    }

    fn is_end(&self) -> bool {
        self.pending.is_none() && self.source.is_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{Lexer, LineBreaker, TextSource};

    fn pages(text: &str, line_limit: usize, page_size: usize, mode: Mode) -> Vec<Vec<Vec<String>>> {
        let breaker = LineBreaker::new(Lexer::new(TextSource::new(text)), line_limit, mode);
        let mut paginator = Paginator::new(breaker, page_size, mode);
        let mut out: Vec<Vec<Vec<String>>> = Vec::new();
        while let Some(page) = paginator.read() {
            assert_eq!(page.number, out.len() + 1);
            out.push(
                page.lines
                    .iter()
                    .map(|line| line.tokens.iter().cloned().collect())
                    .collect(),
            );
        }
        out
    }

    #[test]
    fn test_capacity_schedule() {
        assert_eq!(page_capacity(100, 1), 50);
        assert_eq!(page_capacity(100, 2), 100);
        assert_eq!(page_capacity(100, 10), 75);
        assert_eq!(page_capacity(100, 25), 100);
        assert_eq!(page_capacity(100, 30), 75);
    }

    #[test]
    fn test_capacity_clamped_to_one() {
        assert_eq!(page_capacity(1, 1), 1);
        assert_eq!(page_capacity(0, 1), 1);
        assert_eq!(page_capacity(0, 2), 1);
        assert_eq!(page_capacity(2, 10), 1);
    }

    #[test]
    fn test_first_page_takes_half() {
        // page 1 capacity 2, page 2 capacity 4
        assert_eq!(
            pages("a b c d e f", 1, 4, Mode::Words),
            vec![
                vec![vec!["a"], vec!["b"]],
                vec![vec!["c"], vec!["d"], vec!["e"], vec!["f"]],
            ]
        );
    }

    #[test]
    fn test_oversized_line_starts_its_own_page() {
        // line "abcdef" weighs 6, above every capacity of page_size 4
        assert_eq!(
            pages("abcdef ab", 6, 4, Mode::Chars),
            vec![vec![vec!["abcdef"]], vec![vec!["ab"]]]
        );
    }

    #[test]
    fn test_tenth_page_capacity_drops() {
        // one token per line, page_size 1: page 1 holds 1 line, so do
        // all the rest; 12 tokens means 12 pages and page 10 exists
        let text = "t t t t t t t t t t t t";
        let result = pages(text, 1, 1, Mode::Words);
        assert_eq!(result.len(), 12);
        assert!(result.iter().all(|page| page.len() == 1));
    }

    #[test]
    fn test_is_end_accounts_for_pending_line() {
        let breaker = LineBreaker::new(Lexer::new(TextSource::new("a b c")), 1, Mode::Words);
        let mut paginator = Paginator::new(breaker, 2, Mode::Words);
        let first = paginator.read().unwrap();
        assert_eq!(first.lines.len(), 1); // capacity(1) = 1
        assert!(!paginator.is_end());
        let second = paginator.read().unwrap();
        assert_eq!(second.lines.len(), 2);
        assert!(paginator.is_end());
        assert!(paginator.read().is_none());
    }

    #[test]
    fn test_empty_input_produces_no_pages() {
        assert!(pages("", 1, 10, Mode::Words).is_empty());
    }
}
