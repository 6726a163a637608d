//! Book assembly and the alphabetical index builder.
//!
//! ## Data Flow
//!
//! ```text
//! text -> TextSource -> Lexer -> LineBreaker -> Paginator -> Book
//!                                                  |
//!                                                  +-> index (token -> first page)
//! ```
//!
//! [`build_book`] drives the whole pipeline and folds every token of
//! every page into a dictionary with first-occurrence semantics: a
//! token's entry records the page where it first appeared and is never
//! overwritten by later occurrences. [`build_index`] is the flattened
//! variant for callers that only want the mapping; it applies the same
//! capacity and weight rules.
//!
//! The dictionary backend is chosen by the caller: any
//! [`Dictionary<String, usize>`] works, and [`IndexBackend`] +
//! [`build_index_boxed`] give the outer layer a runtime selector.

use std::fmt::Write as _;

use crate::dictionary::{Dictionary, FlatTable, HashTable};
use crate::pipeline::{Lexer, LineBreaker, Mode, Page, Paginator, PullSource, TextSource};
use crate::sequence::{ListSequence, Sequence};

/// Pagination settings, validated and defaulted by the caller.
#[derive(Debug, Clone)]
pub struct BookConfig {
    /// Page capacity base value (see
    /// [`page_capacity`](crate::pipeline::page_capacity) for the
    /// per-page schedule). A zero value ends up clamped to 1 there.
    pub page_size: usize,
    pub mode: Mode,
    /// Line weight limit; derived from the page size when `None`.
    pub line_limit: Option<usize>,
}

impl BookConfig {
    pub fn new(page_size: usize, mode: Mode) -> Self {
        Self {
            page_size,
            mode,
            line_limit: None,
        }
    }

    pub fn with_line_limit(mut self, limit: usize) -> Self {
        self.line_limit = Some(limit);
        self
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            mode: Mode::Words,
            line_limit: None,
        }
    }
}

/// Line limit derived from the page size: one token per line in word
/// mode, half a page in character mode.
pub fn default_line_limit(page_size: usize, mode: Mode) -> usize {
    match mode {
        Mode::Words => 1,
        Mode::Chars => (page_size / 2).max(1),
    }
}

/// Ordered pages of ordered lines of tokens, plus the index over them.
#[derive(Debug, Clone)]
pub struct Book<D> {
    pub pages: ListSequence<Page>,
    pub index: D,
}

/// Run the full pipeline over `text` and collect both the page
/// structure and the first-occurrence index.
pub fn build_book<D>(text: &str, config: &BookConfig) -> Book<D>
where
    D: Dictionary<String, usize> + Default,
{
    let line_limit = config
        .line_limit
        .unwrap_or_else(|| default_line_limit(config.page_size, config.mode));
    let lexer = Lexer::new(TextSource::new(text));
    let breaker = LineBreaker::new(lexer, line_limit, config.mode);
    let mut paginator = Paginator::new(breaker, config.page_size, config.mode);

    let mut pages = ListSequence::new();
    let mut index = D::default();
    while let Some(page) = paginator.read() {
        for line in page.lines.iter() {
            for token in line.tokens.iter() {
                if !index.contains_key(token) {
                    index.insert(token.clone(), page.number);
                }
            }
        }
        pages.append(page);
    }

    Book { pages, index }
}

/// Build only the token -> first-page dictionary.
pub fn build_index<D>(text: &str, config: &BookConfig) -> D
where
    D: Dictionary<String, usize> + Default,
{
    build_book::<D>(text, config).index
}

/// Which dictionary implementation backs the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBackend {
    /// [`HashTable`]: chained hashing, bucket-order iteration.
    HashChained,
    /// [`FlatTable`]: sorted pairs, ascending-key iteration.
    SortedFlat,
}

/// Runtime backend selector for the outer layer.
pub fn build_index_boxed(
    text: &str,
    config: &BookConfig,
    backend: IndexBackend,
) -> Box<dyn Dictionary<String, usize>> {
    match backend {
        IndexBackend::HashChained => {
            Box::new(build_index::<HashTable<String, usize>>(text, config))
        }
        IndexBackend::SortedFlat => Box::new(build_index::<FlatTable<String, usize>>(text, config)),
    }
}

impl<D: Dictionary<String, usize>> Book<D> {
    /// Render the book as plain text: a `Pages:` section with numbered
    /// lines followed by an `Index:` section of `token -> page` rows in
    /// the dictionary's iteration order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Pages:\n");
        if self.pages.is_empty() {
            out.push_str("(empty)\n");
        } else {
            for page in self.pages.iter() {
                let _ = writeln!(out, "Page {}:", page.number);
                for (line_no, line) in page.lines.iter().enumerate() {
                    let _ = write!(out, "  [{}] ", line_no + 1);
                    for (i, token) in line.tokens.iter().enumerate() {
                        if i > 0 {
                            out.push(' ');
                        }
                        out.push_str(token);
                    }
                    out.push('\n');
                }
            }
        }

        out.push_str("Index:\n");
        if self.index.is_empty() {
            out.push_str("(empty)\n");
        } else {
            for entry in self.index.entries() {
                let _ = writeln!(out, "{} -> {}", entry.key, entry.value);
            }
        }
        out
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
