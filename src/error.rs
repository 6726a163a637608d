//! Crate-wide error type.
//!
//! Every fallible container or cursor operation reports one of three
//! failure kinds. They are all local, synchronous, and non-retryable:
//! a failed operation leaves the collection unchanged, and nothing in
//! the crate retries or degrades on its own.

use thiserror::Error;

/// Errors raised by sequence, dictionary, and cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index fell outside the valid range for the operation
    /// (`[0, len]` for inserts, `[0, len)` for access and erase).
    #[error("index {0} out of range")]
    IndexOutOfRange(usize),

    /// A dictionary `get` or `remove` named an absent key.
    #[error("no such key")]
    KeyNotFound,

    /// `first`/`last` on an empty sequence.
    #[error("empty collection")]
    EmptyCollection,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
