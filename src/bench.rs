//! Benchmarking support for Makai Suggest.
//!
//! Helpers shared by the criterion benchmarks. Compiled only with the
//! `benchmarking` feature.

/// Builds a deterministic sample vocabulary of `size` entries.
///
/// Words share the `word` prefix so inserts exercise edge splitting the
/// same way a real dictionary with clustered prefixes does; frequencies
/// cycle through a fixed range so ranking stays non-trivial.
pub fn sample_dictionary(size: usize) -> Vec<(String, u64)> {
    (0..size)
        .map(|i| (format!("word{i:06}"), (i as u64 % 997) + 1))
        .collect()
}
