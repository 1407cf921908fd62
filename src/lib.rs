//! # typeahead - popularity-ranked prefix suggestions
//!
//! A single-process typeahead engine: suggestions are completions of a
//! prefix ranked by how often each query was recorded, with counts written
//! through to a durable key-value store so popularity survives restarts.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`engine`] - the core: prefix trie, frequency index, suggestion
//!   cache, and the [`SuggestEngine`](engine::SuggestEngine) facade
//! - [`store`] - durable store trait plus file-backed and in-memory
//!   implementations
//! - [`seed`] - built-in vocabulary used when the store is empty
//! - [`output`] - result formatting for the CLI
//! - [`utils`] - app-data directory resolution
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use typeahead::engine::SuggestEngine;
//! use typeahead::store::MemoryStore;
//!
//! let engine = SuggestEngine::open(Arc::new(MemoryStore::new()));
//!
//! engine.record("rust borrow checker");
//! let suggestions = engine.suggest("rust", 10);
//! assert!(suggestions.contains(&"rust borrow checker".to_string()));
//!
//! let top = engine.popular(5);
//! assert_eq!(top.len(), 5);
//! ```
//!
//! ## Consistency
//!
//! The facade's three operations (`suggest`, `record`, `popular`) are total
//! functions: blank input is a no-op, and a durable-store outage degrades
//! to in-memory operation rather than failing the caller. `record` updates
//! the trie and frequency index inside one critical section and clears the
//! suggestion cache afterwards, so every suggestion and popularity read
//! issued after a `record` returns reflects it.

pub mod engine;
pub mod output;
pub mod seed;
pub mod store;
pub mod utils;
