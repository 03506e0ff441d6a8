//! Dataset loading for the suggestion index.
//!
//! The bundled dataset is a JSON array of objects, each carrying a word and
//! its observed frequency. Real-world exports of this shape are messy, so
//! parsing is deliberately lenient: entries that are not objects or lack a
//! usable word are skipped, and a missing or non-numeric frequency defaults
//! to zero. Only structural problems (unreadable file, malformed JSON, a
//! top-level value that is not an array) are reported as errors.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::dataset::DatasetConfig;
use crate::error::dataset::DatasetError;

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// One vocabulary entry parsed from the bundled dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    /// The suggestion word
    pub word: String,

    /// Observed popularity of the word
    pub frequency: u64,
}

/// Reads suggestion records from a JSON dataset file.
#[derive(Debug)]
pub struct DatasetLoader {
    path: PathBuf,
    word_field: String,
    frequency_field: String,
}

impl DatasetLoader {
    /// Creates a loader for the given path with the default record field
    /// names (`word` / `frequency`).
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let defaults = DatasetConfig::default();
        Self {
            path: path.as_ref().to_path_buf(),
            word_field: defaults.word_field,
            frequency_field: defaults.frequency_field,
        }
    }

    /// Creates a loader from a dataset configuration.
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self {
            path: config.path.clone(),
            word_field: config.word_field.clone(),
            frequency_field: config.frequency_field.clone(),
        }
    }

    /// Reads and parses the dataset file.
    pub async fn load(&self) -> DatasetResult<Vec<SuggestionRecord>> {
        if !self.path.exists() {
            return Err(DatasetError::FileNotFound(self.path.clone()));
        }

        let raw = tokio::fs::read_to_string(&self.path).await?;
        let records = self.parse(&raw)?;
        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "dataset loaded"
        );
        Ok(records)
    }

    /// Parses a JSON document into suggestion records.
    pub fn parse(&self, raw: &str) -> DatasetResult<Vec<SuggestionRecord>> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Array(entries) = value else {
            return Err(DatasetError::NotAnArray(json_type_name(&value)));
        };

        let mut records = Vec::with_capacity(entries.len());
        let mut skipped = 0usize;
        for entry in &entries {
            let Some(object) = entry.as_object() else {
                skipped += 1;
                continue;
            };
            let Some(word) = object.get(&self.word_field).and_then(Value::as_str) else {
                skipped += 1;
                continue;
            };
            let frequency = object
                .get(&self.frequency_field)
                .map_or(0, parse_frequency);
            records.push(SuggestionRecord {
                word: word.to_string(),
                frequency,
            });
        }

        if skipped > 0 {
            tracing::debug!(skipped, "skipped dataset entries without a usable word");
        }
        Ok(records)
    }
}

/// A frequency may arrive as a JSON number or as a numeric string; anything
/// else counts as zero.
fn parse_frequency(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> DatasetLoader {
        DatasetLoader::new("unused.json")
    }

    #[test]
    fn test_parse_well_formed_records() {
        let records = loader()
            .parse(r#"[{"word": "aloha", "frequency": 12}, {"word": "kai", "frequency": 3}]"#)
            .unwrap();

        assert_eq!(
            records,
            vec![
                SuggestionRecord {
                    word: "aloha".to_string(),
                    frequency: 12
                },
                SuggestionRecord {
                    word: "kai".to_string(),
                    frequency: 3
                },
            ]
        );
    }

    #[test]
    fn test_parse_accepts_numeric_strings() {
        let records = loader()
            .parse(r#"[{"word": "aloha", "frequency": "42"}]"#)
            .unwrap();
        assert_eq!(records[0].frequency, 42);
    }

    #[test]
    fn test_parse_defaults_bad_frequencies_to_zero() {
        let records = loader()
            .parse(
                r#"[
                    {"word": "a"},
                    {"word": "b", "frequency": "many"},
                    {"word": "c", "frequency": -3},
                    {"word": "d", "frequency": 1.5}
                ]"#,
            )
            .unwrap();

        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.frequency == 0));
    }

    #[test]
    fn test_parse_skips_unusable_entries() {
        let records = loader()
            .parse(r#"[{"frequency": 5}, 17, null, {"word": "kept", "frequency": 1}]"#)
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "kept");
    }

    #[test]
    fn test_parse_rejects_non_array_root() {
        let err = loader().parse(r#"{"word": "aloha"}"#).unwrap_err();
        assert!(matches!(err, DatasetError::NotAnArray("object")));
    }
}
