//! Character-keyed prefix trie storing completed queries with frequencies.
//!
//! Each edge is one Unicode scalar value. A terminal node carries the full
//! normalized query and its frequency, so a subtree walk can emit ranked
//! completions without re-deriving strings from the path.

use crate::engine::normalize;
use rustc_hash::FxHashMap;

/// The completed query stored at a terminal node.
#[derive(Debug, Clone)]
struct TermEntry {
    word: String,
    frequency: u64,
}

/// A single trie node. Owned exclusively by its parent; the root is owned
/// by the [`Trie`].
#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    /// Present iff this node is terminal.
    entry: Option<TermEntry>,
}

/// Prefix trie over normalized (trimmed, lowercased) query strings.
///
/// Invariant: every terminal node's stored word equals the concatenation of
/// edge characters from the root to that node. Frequencies at terminal nodes
/// only grow over a node's lifetime (set once at insert, then incremented).
///
/// The trie owns no interior mutability; callers share it behind a
/// `RwLock` when concurrent mutation is required.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a query with an explicit frequency, overwriting any existing
    /// frequency for the same query. No-op on blank input.
    ///
    /// `O(m)` in the number of characters of the normalized word.
    pub fn insert(&mut self, word: &str, frequency: u64) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        for ch in word.chars() {
            current = current.children.entry(ch).or_default();
        }

        current.entry = Some(TermEntry { word, frequency });
    }

    /// Increments the frequency of an already-inserted query by one.
    ///
    /// Walks the existing path only; returns `false` without creating nodes
    /// if the query was never inserted (or the path ends on a non-terminal
    /// node). Blank input is a no-op returning `false`.
    pub fn increment(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }

        let Some(node) = self.find_node_mut(&word) else {
            return false;
        };
        match node.entry.as_mut() {
            Some(entry) => {
                entry.frequency += 1;
                true
            }
            None => false,
        }
    }

    /// Returns up to `limit` completions of `prefix`, most frequent first.
    ///
    /// Collects every terminal node in the subtree under the prefix, then
    /// stable-sorts by frequency descending. Ties keep DFS collection order,
    /// which is fixed for a given trie state (`FxHashMap` iteration carries
    /// no per-process random seed), so equal-frequency results are
    /// deterministic within a run.
    ///
    /// Blank prefix or no matching path yields an empty vec.
    pub fn search(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = normalize(prefix);
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }

        let Some(node) = self.find_node(&prefix) else {
            return Vec::new();
        };

        let mut results: Vec<(String, u64)> = Vec::new();
        collect_words(node, &mut results);

        // Stable sort: equal frequencies keep collection order.
        results.sort_by(|a, b| b.1.cmp(&a.1));
        results.truncate(limit);
        results.into_iter().map(|(word, _)| word).collect()
    }

    /// Looks up the frequency stored for an exact query, if terminal.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        let word = normalize(word);
        self.find_node(&word)
            .and_then(|node| node.entry.as_ref())
            .map(|entry| entry.frequency)
    }

    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for ch in path.chars() {
            current = current.children.get(&ch)?;
        }
        Some(current)
    }

    fn find_node_mut(&mut self, path: &str) -> Option<&mut TrieNode> {
        let mut current = &mut self.root;
        for ch in path.chars() {
            current = current.children.get_mut(&ch)?;
        }
        Some(current)
    }
}

/// Depth-first walk collecting every terminal entry under `node`.
fn collect_words(node: &TrieNode, results: &mut Vec<(String, u64)>) {
    if let Some(entry) = &node.entry {
        results.push((entry.word.clone(), entry.frequency));
    }
    for child in node.children.values() {
        collect_words(child, results);
    }
}
