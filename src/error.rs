//! Error handling for the HeatGen-RS application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for HeatGen-RS operations
#[derive(Error, Debug)]
pub enum HeatGenError {
    /// Malformed or ill-typed dataset text
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rejected configuration edits (non-positive dimensions, bad value range)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Coordinate conversion attempted against a zero-sized surface
    #[error("Division guard: {0}")]
    DivisionGuard(String),

    /// Serializer-side failures when producing dataset text
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<HeatGenError>,
    },
}

impl HeatGenError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        HeatGenError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for HeatGen-RS operations
pub type Result<T> = std::result::Result<T, HeatGenError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeatGenError::InvalidConfig("width must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: width must be positive"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = HeatGenError::InvalidConfig("test".to_string());
        let with_ctx = err.with_context("Failed to resize surface");
        assert!(with_ctx.to_string().contains("Failed to resize surface"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err: HeatGenError = serde_json::from_str::<Vec<i32>>("not json")
            .map_err(HeatGenError::from)
            .unwrap_err();
        assert!(err.to_string().starts_with("Parse error"));
    }
}
