//! Pull-based tokenization and pagination pipeline.
//!
//! ## Architecture
//!
//! A chain of stages, each consuming the previous one on demand:
//!
//! ```text
//! TextSource -> Lexer -> LineBreaker -> Paginator
//!   (chars)    (tokens)    (lines)       (pages)
//! ```
//!
//! Every stage implements [`PullSource`]: `read` either produces the
//! next item or reports exhaustion. There is no scheduling and no
//! buffering beyond the single pending item a grouping stage may hold
//! back; backpressure is simply the caller deciding when to pull.
//! Stages own their upstream stage, so a fully composed pipeline is one
//! value driven by one loop.
//!
//! ## Capacity Rules
//!
//! Both grouping stages follow the same shape: the first item offered
//! to an empty group is always accepted (guaranteeing progress even
//! when a single item exceeds the limit), later items are accepted only
//! while the cumulative weight stays within the limit, and an
//! overflowing item is held back to start the next group.

pub mod lexer;
pub mod line;
pub mod paginate;
pub mod source;

pub use lexer::Lexer;
pub use line::{token_weight, Line, LineBreaker};
pub use paginate::{page_capacity, Page, Paginator};
pub use source::TextSource;

/// Tokenization granularity: what a weight unit means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every token weighs 1.
    Words,
    /// A token weighs its character count, plus 1 for the separator in
    /// front of it unless it opens the line.
    Chars,
}

/// A synchronous pull stage: produce the next item or report the end.
pub trait PullSource<T> {
    /// Produce the next item, or `None` once the stage is exhausted.
    /// A stage that returned `None` keeps returning `None`.
    fn read(&mut self) -> Option<T>;

    /// True when nothing remains, including held-back pending items.
    fn is_end(&self) -> bool;

    /// Reposition to `pos`, reporting whether the stage supports it.
    /// Stages without a meaningful position refuse.
    fn seek(&mut self, _pos: usize) -> bool {
        false
    }
}
