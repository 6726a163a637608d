//! Alphadex - Demo Entry Point
//!
//! Builds a small book from sample text and prints the rendering plus
//! the index from both dictionary backends. Real input handling and
//! option parsing live outside the core.

use alphadex::book::{build_book, build_index_boxed, BookConfig, IndexBackend};
use alphadex::dictionary::{Dictionary, FlatTable};
use alphadex::pipeline::Mode;

const SAMPLE: &str = "the quick brown fox jumps over the lazy dog \
                      while the dog dreams of the quick red fox";

fn main() {
    println!("===========================================");
    println!("  Alphadex - paginated alphabetical index");
    println!("===========================================");
    println!();

    let config = BookConfig::new(6, Mode::Words);

    println!("Building book (page_size=6, mode=Words)...");
    println!();
    let book = build_book::<FlatTable<String, usize>>(SAMPLE, &config);
    print!("{}", book.render());
    println!();

    println!("Same text through the hash-chained backend:");
    let hashed = build_index_boxed(SAMPLE, &config, IndexBackend::HashChained);
    for entry in hashed.entries() {
        println!("{} -> {}", entry.key, entry.value);
    }
}
