//! Suggestion engine benchmarks over a synthetic vocabulary.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use typeahead::engine::{SuggestEngine, Trie};
use typeahead::store::MemoryStore;

const STEMS: &[&str] = &[
    "spring", "docker", "kubernetes", "react", "typescript", "database", "kafka", "redis",
];

/// Vocabulary of `per_stem` queries under each stem, with spread frequencies.
fn vocabulary(per_stem: usize) -> Vec<(String, u64)> {
    let mut words = Vec::with_capacity(STEMS.len() * per_stem);
    for (s, stem) in STEMS.iter().enumerate() {
        for i in 0..per_stem {
            words.push((
                format!("{} topic {}", stem, i),
                ((s * per_stem + i * 37) % 1000) as u64 + 1,
            ));
        }
    }
    words
}

fn seeded_trie(per_stem: usize) -> Trie {
    let mut trie = Trie::new();
    for (word, frequency) in vocabulary(per_stem) {
        trie.insert(&word, frequency);
    }
    trie
}

fn bench_trie_search(c: &mut Criterion) {
    let trie = seeded_trie(500);

    let mut group = c.benchmark_group("trie_search");
    group.bench_function("wide_subtree_500_words", |b| {
        // One-character prefix: the walk is cheap, the sort dominates.
        b.iter(|| black_box(trie.search(black_box("s"), 10)));
    });
    group.bench_function("narrow_subtree", |b| {
        b.iter(|| black_box(trie.search(black_box("spring topic 1"), 10)));
    });
    group.bench_function("miss", |b| {
        b.iter(|| black_box(trie.search(black_box("zzz"), 10)));
    });
    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let engine = SuggestEngine::open(Arc::new(MemoryStore::new()));
    for (word, frequency) in vocabulary(200) {
        for _ in 0..(frequency % 3) {
            engine.record(&word);
        }
    }

    let mut group = c.benchmark_group("engine");
    group.bench_function("suggest_warm_cache", |b| {
        b.iter(|| black_box(engine.suggest(black_box("spring"), 10)));
    });
    group.bench_function("record_then_cold_suggest", |b| {
        b.iter(|| {
            engine.record(black_box("spring topic 42"));
            black_box(engine.suggest(black_box("spring"), 10))
        });
    });
    group.bench_function("popular_top_10", |b| {
        b.iter(|| black_box(engine.popular(10)));
    });
    group.finish();
}

criterion_group!(benches, bench_trie_search, bench_engine);
criterion_main!(benches);
