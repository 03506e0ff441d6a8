//! Data structures for Makai Suggest.
//!
//! This module contains the specialized data structures backing the
//! suggestion engine. All implementations adhere to the project
//! requirements:
//! - No unsafe code
//! - Build-once, read-many lifecycles with no locking on the read path
//! - Memory proportional to distinct branching points, not raw input size

pub mod lanai_radix_trie;

// Re-export common data structures
pub use lanai_radix_trie::{LanaiRadixTrie, LanaiRadixTrieConfig, Suggestion};
