//! Built-in seed vocabulary.
//!
//! Loaded (and persisted back to the durable store) when the store holds no
//! frequency records yet, so a fresh deployment answers suggestions
//! immediately instead of starting from an empty trie.

/// (query, frequency) pairs used to bootstrap an empty store.
pub const SEED_QUERIES: &[(&str, u64)] = &[
    ("spring boot", 150),
    ("spring cloud", 120),
    ("spring security", 100),
    ("spring data jpa", 95),
    ("spring batch", 80),
    ("java 21", 200),
    ("java stream", 180),
    ("javascript async", 160),
    ("javascript promise", 155),
    ("docker compose", 140),
    ("docker image", 130),
    ("kubernetes", 170),
    ("kubernetes pod", 150),
    ("redis cache", 145),
    ("redis cluster", 125),
    ("kafka stream", 148),
    ("kafka producer", 142),
    ("react hooks", 190),
    ("react component", 185),
    ("typescript", 210),
    ("typescript generics", 200),
    ("microservices", 175),
    ("microservices architecture", 165),
    ("database index", 160),
    ("database optimization", 155),
];
