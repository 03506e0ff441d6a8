//! Error module for Makai Suggest.
//!
//! This module provides the error handling framework for the whole
//! application, following Rust's idiomatic error handling patterns with
//! explicit error types, proper propagation, and helpful context
//! information.

use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use thiserror::Error;

pub mod config;
pub mod dataset;

/// Result type alias used throughout Makai Suggest.
pub type MakaiResult<T> = Result<T, MakaiError>;

/// Core error enum for Makai Suggest.
#[derive(Error, Debug)]
pub enum MakaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while loading the suggestion dataset.
    #[error("Dataset error: {0}")]
    Dataset(#[from] dataset::DatasetError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are
    /// not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: MakaiError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    pub fn new<S: Into<String>>(error: MakaiError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the
/// tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter state.
#[derive(Debug, Default)]
struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

static ERROR_REPORTING: Lazy<Mutex<ErrorReporting>> =
    Lazy::new(|| Mutex::new(ErrorReporting::default()));

/// Set the global error reporter.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    let mut reporting = ERROR_REPORTING
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    reporting.reporter = Some(reporter);
}

/// Report an error through the global reporter, falling back to standard
/// error output when none is configured.
pub fn report_error(context: ErrorContext) {
    let reporting = ERROR_REPORTING
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    match &reporting.reporter {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
