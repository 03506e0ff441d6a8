//! Suggestion service: the glue between the one-time dataset load and the
//! query surface.
//!
//! The service builds the radix trie to completion before publishing it
//! through a write-once cell, so the build and query phases never overlap.
//! Readiness is exactly "the cell is populated": queries issued before the
//! load finishes, and empty queries, yield no suggestions.
//!
//! # Example
//!
//! ```
//! use makai_suggest_lib::config::engine::EngineConfig;
//! use makai_suggest_lib::dataset::SuggestionRecord;
//! use makai_suggest_lib::suggest::SuggestService;
//!
//! let service = SuggestService::new(EngineConfig::default());
//! assert!(!service.is_ready());
//!
//! service.load_records(vec![
//!     SuggestionRecord { word: "aloha".to_string(), frequency: 10 },
//!     SuggestionRecord { word: "alone".to_string(), frequency: 4 },
//! ]);
//! assert!(service.is_ready());
//!
//! let results = service.suggest("alo");
//! assert_eq!(results[0].word, "aloha");
//! assert_eq!(results[0].score, 10);
//! ```

use once_cell::sync::OnceCell;

use crate::config::engine::EngineConfig;
use crate::data_structures::lanai_radix_trie::{
    LanaiRadixTrie, LanaiRadixTrieConfig, Suggestion,
};
use crate::dataset::SuggestionRecord;

/// Serves ranked autocomplete suggestions once its index has been built.
#[derive(Debug)]
pub struct SuggestService {
    /// Write-once suggestion index, populated by the load phase
    index: OnceCell<LanaiRadixTrie>,

    /// Engine bounds applied to the index at build time
    config: EngineConfig,
}

impl SuggestService {
    /// Creates a service with no index loaded yet.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            index: OnceCell::new(),
            config,
        }
    }

    /// Whether the one-time load has completed and queries can be served.
    pub fn is_ready(&self) -> bool {
        self.index.get().is_some()
    }

    /// Builds the suggestion index from `records` and publishes it.
    ///
    /// Records with an empty word are skipped. Returns the number of
    /// records indexed. The index can only be published once; a repeated
    /// load is ignored with a warning and the original index stays in
    /// place.
    pub fn load_records<I>(&self, records: I) -> usize
    where
        I: IntoIterator<Item = SuggestionRecord>,
    {
        let trie_config = LanaiRadixTrieConfig::new()
            .with_max_results(self.config.max_results)
            .with_error_budget(self.config.error_budget)
            .with_max_traversal_depth(self.config.max_traversal_depth);

        let mut index = LanaiRadixTrie::with_config(trie_config);
        let mut indexed = 0usize;
        for record in records {
            if record.word.is_empty() {
                continue;
            }
            index.insert(&record.word, record.frequency);
            indexed += 1;
        }

        if self.index.set(index).is_err() {
            tracing::warn!("suggestion index already loaded, ignoring new dataset");
        } else {
            tracing::info!(indexed, "suggestion index ready");
        }
        indexed
    }

    /// Answers a query with ranked suggestions.
    ///
    /// The query is trimmed first; an empty query, or any query issued
    /// before the index is ready, yields an empty list.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.index.get() {
            Some(index) => index.search(query),
            None => Vec::new(),
        }
    }
}

impl Default for SuggestService {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
