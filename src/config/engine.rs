//! Suggestion engine configuration module.
//!
//! Bounds for the fuzzy autocomplete index: how many suggestions a query
//! may return, how many character-level mistakes it tolerates, and how deep
//! a search traversal is allowed to recurse.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Highest error budget the engine accepts; larger budgets make the
/// approximate search explore a combinatorial number of wrong-branch paths.
const MAX_ERROR_BUDGET: u32 = 8;

/// Suggestion engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of suggestions returned per query
    pub max_results: usize,

    /// Number of character-level mistakes tolerated in a query
    pub error_budget: u32,

    /// Recursion bound for search traversals
    pub max_traversal_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: 20,
            error_budget: 2,
            max_traversal_depth: 256,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results == 0 {
            return Err(ConfigError::ValidationError(
                "max_results must be greater than 0".to_string(),
            ));
        }

        if self.error_budget > MAX_ERROR_BUDGET {
            return Err(ConfigError::ValidationError(format!(
                "error_budget must not exceed {MAX_ERROR_BUDGET}"
            )));
        }

        if self.max_traversal_depth == 0 {
            return Err(ConfigError::ValidationError(
                "max_traversal_depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
