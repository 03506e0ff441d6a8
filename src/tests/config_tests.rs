//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and
//! usage.

use crate::config::{ConfigLoader, MakaiConfig, Validate};
use std::fs;
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MakaiConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = MakaiConfig::default();

    // Invalid engine configuration
    config.engine.max_results = 0;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.engine.max_results = 20;
    config.engine.error_budget = 99;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.engine.error_budget = 2;
    config.engine.max_traversal_depth = 0;
    assert!(config.validate().is_err());

    // Fix and test the other sections
    config.engine.max_traversal_depth = 256;
    config.dataset.word_field = String::new();
    assert!(config.validate().is_err());

    config.dataset.word_field = "word".to_string();
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    // Create a minimal valid configuration file
    let config_content = r#"
    [engine]
    max_results = 5
    error_budget = 1

    [dataset]
    path = "data/custom.json"
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    // Verify values were loaded correctly
    assert_eq!(config.engine.max_results, 5);
    assert_eq!(config.engine.error_budget, 1);
    assert_eq!(config.dataset.path.to_str().unwrap(), "data/custom.json");

    // Other values should be defaults
    assert_eq!(config.engine.max_traversal_depth, 256);
    assert_eq!(config.dataset.word_field, "word");
    assert_eq!(config.log.level, "info");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_env_test.toml");

    let config_content = r#"
    [engine]
    max_results = 5
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Set environment variables with a unique prefix
    std::env::set_var("TEST_ENV__ENGINE__MAX_RESULTS", "7");
    std::env::set_var("TEST_ENV__DATASET__FREQUENCY_FIELD", "count");

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Verify environment variables took precedence
    assert_eq!(config.engine.max_results, 7);
    assert_eq!(config.dataset.frequency_field, "count");

    // Clean up environment variables
    std::env::remove_var("TEST_ENV__ENGINE__MAX_RESULTS");
    std::env::remove_var("TEST_ENV__DATASET__FREQUENCY_FIELD");
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let loader = ConfigLoader::new(Some("does/not/exist.toml"), "TEST_MISSING");
    let result = loader.load();
    assert!(matches!(
        result,
        Err(crate::error::config::ConfigError::FileNotFound(_))
    ));
}

/// Test that an invalid file still fails validation after merging.
#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_invalid_test.toml");

    let config_content = r#"
    [engine]
    max_results = 0
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());
}
