//! Benchmarks comparing the two dictionary backends.
//!
//! The workload mirrors how the index is used: build a token -> page
//! mapping from text, then answer membership/lookup queries against it.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run a specific group
//! cargo bench -- index_build
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use alphadex::book::{build_index, BookConfig};
use alphadex::dictionary::{Dictionary, FlatTable, HashTable};
use alphadex::pipeline::Mode;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic text generation
// ============================================================================

/// Generate deterministic text with `count` tokens over a vocabulary of
/// `distinct` words. Same seed = same text.
fn generate_text(count: usize, distinct: usize, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(count * 8);
    for i in 0..count {
        if i > 0 {
            text.push(' ');
        }
        let word = rng.gen_range(0..distinct);
        text.push_str(&format!("word{word:05}"));
    }
    text
}

fn query_keys(distinct: usize, queries: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..queries)
        .map(|_| format!("word{:05}", rng.gen_range(0..distinct * 2)))
        .collect()
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for &count in &[1_000usize, 10_000, 50_000] {
        let text = generate_text(count, count / 10, 42);
        let config = BookConfig::new(100, Mode::Words);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("hash", count), &text, |b, text| {
            b.iter(|| build_index::<HashTable<String, usize>>(black_box(text), &config))
        });
        group.bench_with_input(BenchmarkId::new("flat", count), &text, |b, text| {
            b.iter(|| build_index::<FlatTable<String, usize>>(black_box(text), &config))
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    const TOKENS: usize = 20_000;
    const DISTINCT: usize = 2_000;
    const QUERIES: usize = 10_000;

    let text = generate_text(TOKENS, DISTINCT, 42);
    let config = BookConfig::new(100, Mode::Words);
    let hash: HashTable<String, usize> = build_index(&text, &config);
    let flat: FlatTable<String, usize> = build_index(&text, &config);
    // half the queried keys are absent, as in real index lookups
    let keys = query_keys(DISTINCT, QUERIES, 7);

    let mut group = c.benchmark_group("index_lookup");
    group.throughput(Throughput::Elements(QUERIES as u64));

    group.bench_function("hash", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for key in &keys {
                if let Ok(page) = hash.get(key) {
                    hits += *page;
                }
            }
            black_box(hits)
        })
    });
    group.bench_function("flat", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for key in &keys {
                if let Ok(page) = flat.get(key) {
                    hits += *page;
                }
            }
            black_box(hits)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_index_build, bench_lookup);
criterion_main!(benches);
