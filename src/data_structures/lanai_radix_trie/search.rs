// Copyright (c) 2025 Makai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bounded-error search over the Lanai Radix Trie.
//!
//! The traversal explores exact child transitions for free, charges one
//! error point for a wrong-branch transition or a skipped query character,
//! and abandons any path whose accumulated error count exceeds the budget.
//! Matching is deliberately coarse: a child whose label starts with the next
//! query character is consumed whole, without re-verifying the rest of the
//! label against the query. Scores discount a word's stored frequency by the
//! error count incurred on the path that reached it.

use std::collections::HashSet;

use serde::Serialize;

use super::node::RadixNode;
use super::LanaiRadixTrie;

/// A ranked autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Suggestion {
    /// The indexed word, reconstructed from the traversed edge labels
    pub word: String,

    /// Stored frequency divided by `error_count + 1` (integer division)
    pub score: u64,
}

impl LanaiRadixTrie {
    /// Searches for ranked suggestions matching `query` within the
    /// configured error budget.
    ///
    /// Results are sorted by descending score and truncated to the
    /// configured maximum; exact (word, score) duplicates collapse, but the
    /// same word may appear once per distinct score when it is reachable
    /// through paths with different error counts. An empty query yields the
    /// highest-frequency completions of the whole vocabulary.
    pub fn search(&self, query: &str) -> Vec<Suggestion> {
        let mut run = SearchRun {
            query: query.chars().collect(),
            error_budget: self.config.get_error_budget(),
            max_depth: self.config.get_max_traversal_depth(),
            buffer: String::new(),
            results: HashSet::new(),
        };
        run.explore(&self.root, 0, 0, 0);

        let mut ranked: Vec<Suggestion> = run.results.into_iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(self.config.get_max_results());
        ranked
    }
}

/// Mutable state threaded through one search traversal.
///
/// `buffer` accumulates the labels of every edge walked so far, including
/// the current node's own label; undoing an append on backtrack keeps the
/// allocation stable across the whole run.
struct SearchRun {
    query: Vec<char>,
    error_budget: u32,
    max_depth: usize,
    buffer: String,
    results: HashSet<Suggestion>,
}

impl SearchRun {
    fn explore(&mut self, node: &RadixNode, index: usize, errors: u32, depth: usize) {
        if errors > self.error_budget || depth > self.max_depth {
            return;
        }

        if index == self.query.len() {
            // Query exhausted exactly at this node: everything at or below
            // it is a completion, scored with the errors accrued so far.
            self.collect(node, errors, depth);
            return;
        }
        let Some(&current) = self.query.get(index) else {
            // A label advance overshot the query end; dead end.
            return;
        };

        if let Some(child) = node.children.get(&current) {
            // Zero-cost transition: consume the child's whole label without
            // verifying it past the first character. A matching child
            // short-circuits the error branches below.
            let advance = child.label_chars();
            self.buffer.push_str(&child.label);
            self.explore(child, index + advance, errors, depth + 1);
            self.buffer.truncate(self.buffer.len() - child.label.len());
            return;
        }

        // Wrong-branch transitions: every child is admissible for one error
        // point.
        for child in node.children.values() {
            let advance = child.label_chars();
            self.buffer.push_str(&child.label);
            self.explore(child, index + advance, errors + 1, depth + 1);
            self.buffer.truncate(self.buffer.len() - child.label.len());
        }

        // Deletion: skip one query character without moving in the tree.
        self.explore(node, index + 1, errors + 1, depth + 1);
    }

    /// Records every terminal at or below `node`, keeping the error count
    /// accrued at the point where the query was exhausted.
    fn collect(&mut self, node: &RadixNode, errors: u32, depth: usize) {
        if depth > self.max_depth {
            return;
        }

        if node.is_terminal {
            self.record(node, errors);
        }
        for child in node.children.values() {
            self.buffer.push_str(&child.label);
            self.collect(child, errors, depth + 1);
            self.buffer.truncate(self.buffer.len() - child.label.len());
        }
    }

    fn record(&mut self, node: &RadixNode, errors: u32) {
        let word = merge_labels(&self.buffer, &node.label);
        let score = node.frequency / (u64::from(errors) + 1);
        self.results.insert(Suggestion { word, score });
    }
}

/// Rebuilds a full word from the traversal buffer and the current node's
/// label.
///
/// The buffer already ends with the label (the caller appends before
/// descending), so the smallest buffer offset whose tail is a prefix of the
/// label marks the overlap to trim. When no offset qualifies the two are
/// concatenated whole.
fn merge_labels(buffer: &str, label: &str) -> String {
    let mut overlap = 0;
    for (i, _) in buffer.char_indices() {
        if label.starts_with(&buffer[i..]) {
            overlap = i;
            break;
        }
    }

    let mut word = String::with_capacity(overlap + label.len());
    word.push_str(&buffer[..overlap]);
    word.push_str(label);
    word
}
