//! # Error Types
//!
//! Structured error types for course_core. The projection engine itself is
//! total and never fails; errors only arise from caller-side validation of
//! a [`PlanConfig`](crate::plan::PlanConfig), from PDF compilation, and from
//! writing the exported document.
//!
//! ## Example
//!
//! ```rust
//! use course_core::errors::{CalcError, CalcResult};
//!
//! fn validate_fee(fee: f64) -> CalcResult<()> {
//!     if fee < 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "regular_fee".to_string(),
//!             value: fee.to_string(),
//!             reason: "Fee must not be negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for course_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for planner operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative, out of range, not finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error while writing an export
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Report compilation or rendering failed
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CalcError::Internal {
            message: message.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError { reason: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("batch_count", "0", "At least one batch is required");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("a", "b", "c").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::file_error("write", "/tmp/x", "denied").error_code(), "FILE_ERROR");
        assert_eq!(CalcError::internal("boom").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::file_error("rename to final", "report.pdf", "permission denied");
        assert_eq!(
            error.to_string(),
            "File error: rename to final on 'report.pdf' - permission denied"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
