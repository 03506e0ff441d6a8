//! Dataset configuration module.
//!
//! Where the bundled suggestion dataset lives and which JSON fields carry
//! the word and its frequency.

use std::path::PathBuf;

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the bundled JSON dataset
    pub path: PathBuf,

    /// JSON object field holding the suggestion word
    pub word_field: String,

    /// JSON object field holding the word's frequency
    pub frequency_field: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/suggestions.json"),
            word_field: "word".to_string(),
            frequency_field: "frequency".to_string(),
        }
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset path must not be empty".to_string(),
            ));
        }

        if self.word_field.is_empty() {
            return Err(ConfigError::ValidationError(
                "word_field must not be empty".to_string(),
            ));
        }

        if self.frequency_field.is_empty() {
            return Err(ConfigError::ValidationError(
                "frequency_field must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
