// src/error.rs
//! Unified error handling for gait-core
//!
//! Numeric edge cases in the segmentation pipeline (short input, flat windows,
//! empty spectral band) are handled by fallback paths, not errors. Errors are
//! reserved for contract violations by the caller and for I/O around the core.

use std::path::PathBuf;
use std::time::SystemTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the gait segmentation crate
#[derive(Debug, Error)]
pub enum GaitError {
    /// A configuration value makes the computation impossible (e.g. zero sample rate)
    #[error("[CONFIG] Invalid configuration '{parameter}': {reason} ({})", .context.operation)]
    InvalidConfiguration {
        parameter: String,
        reason: String,
        context: ErrorContext,
    },

    /// Input data violates the input contract (e.g. a non-finite magnitude)
    #[error("[DATA] Invalid {data_type}{}: {reason} ({})",
        .index.map(|i| format!(" at index {}", i)).unwrap_or_default(), .context.operation)]
    InvalidInput {
        data_type: String,
        reason: String,
        index: Option<usize>,
        context: ErrorContext,
    },

    /// File system errors while reading sessions or configuration
    #[error("[IO] {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed file content that cannot be skipped
    #[error("[PARSE] Failed to parse {what}{}: {reason}",
        .line.map(|l| format!(" (line {})", l)).unwrap_or_default())]
    Parse {
        what: String,
        line: Option<usize>,
        reason: String,
    },

    /// Layered configuration could not be assembled
    #[error("[CONFIG] {reason}")]
    Config { reason: String },
}

/// Error context for debugging and analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    pub timestamp: SystemTime,
    pub thread_id: Option<String>,
    pub component: String,
    pub operation: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            timestamp: SystemTime::now(),
            thread_id: Self::current_thread_id(),
            component: component.to_string(),
            operation: operation.to_string(),
            file: None,
            line: None,
        }
    }

    /// Create error context with file and line information
    pub fn with_location(
        component: &str,
        operation: &str,
        file: &'static str,
        line: u32,
    ) -> Self {
        let mut context = Self::new(component, operation);
        context.file = Some(file.to_string());
        context.line = Some(line);
        context
    }

    fn current_thread_id() -> Option<String> {
        std::thread::current().name().map(|s| s.to_string())
    }
}

/// Result type alias for gait operations
pub type GaitResult<T> = Result<T, GaitError>;

/// Error builder for convenient error construction
pub struct GaitErrorBuilder {
    component: String,
    operation: String,
}

impl GaitErrorBuilder {
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Errors built here record the caller's source location
    #[track_caller]
    pub fn invalid_configuration(self, parameter: &str, reason: &str) -> GaitError {
        let context = self.context();

        GaitError::InvalidConfiguration {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
            context,
        }
    }

    #[track_caller]
    pub fn invalid_input(self, data_type: &str, reason: &str, index: Option<usize>) -> GaitError {
        GaitError::InvalidInput {
            data_type: data_type.to_string(),
            reason: reason.to_string(),
            index,
            context: self.context(),
        }
    }

    #[track_caller]
    fn context(&self) -> ErrorContext {
        let location = std::panic::Location::caller();
        ErrorContext::with_location(&self.component, &self.operation, location.file(), location.line())
    }
}

impl GaitError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GaitError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for caller contract violations (configuration or input)
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            GaitError::InvalidConfiguration { .. } | GaitError::InvalidInput { .. }
        )
    }
}

impl From<::config::ConfigError> for GaitError {
    fn from(err: ::config::ConfigError) -> Self {
        GaitError::Config {
            reason: err.to_string(),
        }
    }
}
