//! # Alphadex
//!
//! A paginated alphabetical index toolkit: tokens are grouped into
//! capacity-bounded lines and pages, and a dictionary records, for
//! every distinct token, the page where it first appears.
//!
//! ## Architecture
//!
//! - **Sequence**: growable sequences (array- and linked-backed) plus a
//!   sorted sequence with binary-search insertion
//! - **Dictionary**: a chained hash table with dynamic rehashing and a
//!   sorted-array table, both behind one trait
//! - **Pipeline**: pull-based stages turning raw text into tokens,
//!   lines, and pages
//! - **Book**: the assembled pages plus the first-occurrence index
//!
//! ## Design Principles
//!
//! 1. **Trait per role**: callers program against `Sequence`,
//!    `Dictionary`, and `PullSource`, never a concrete backend
//! 2. **Unique ownership**: slices and subsequences are independent
//!    copies, never aliases
//! 3. **Synchronous pull**: the pipeline runs in the caller's loop,
//!    with no background work and no buffering beyond one pending item
//! 4. **Whole-or-nothing failures**: a failed container operation
//!    leaves the container unchanged
//!
//! ## Example
//!
//! ```
//! use alphadex::book::{build_index, BookConfig};
//! use alphadex::dictionary::{Dictionary, HashTable};
//! use alphadex::pipeline::Mode;
//!
//! let config = BookConfig::new(4, Mode::Words);
//! let index: HashTable<String, usize> =
//!     build_index("alpha beta gamma delta epsilon", &config);
//!
//! assert_eq!(index.get(&"alpha".to_string()), Ok(&1));
//! assert_eq!(index.get(&"epsilon".to_string()), Ok(&2));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error type shared by every fallible operation
pub mod error;

/// Sequence containers: array, linked, and sorted backends
pub mod sequence;

/// Dictionary containers: hash-chained and sorted-flat backends
pub mod dictionary;

/// Pull-based tokenization and pagination stages
pub mod pipeline;

/// Book assembly and the first-occurrence index builder
pub mod book;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use book::{build_book, build_index, build_index_boxed, Book, BookConfig, IndexBackend};
pub use dictionary::{Dictionary, FlatTable, HashTable, KeyValue};
pub use error::{Error, Result};
pub use pipeline::{Lexer, Line, LineBreaker, Mode, Page, Paginator, PullSource, TextSource};
pub use sequence::{ArraySequence, Cursor, ListSequence, Sequence, SortedSequence};
