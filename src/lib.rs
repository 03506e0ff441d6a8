//! Makai Suggest Library
//!
//! This library contains the core components of Makai Suggest, a fuzzy
//! autocomplete index: the compressed prefix trie, the dataset loader, and
//! the suggestion service that ties them together. The library is designed
//! to be used by the binary crate, but can also be used as a dependency by
//! other projects.
//!
//! # Architecture
//!
//! Makai Suggest is designed with the following principles in mind:
//! - A small, pure core: the trie is built once and queried read-only
//! - Strict component boundaries between the index and its collaborators
//! - Comprehensive error handling and propagation at the IO edges
//! - Lock-free steady state: no synchronization on the query path

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dataset;
pub mod error;
pub mod suggest;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for Makai Suggest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MakaiResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
