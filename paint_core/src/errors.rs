//! # Error Types
//!
//! Structured error types for paint_core. Each variant carries enough context
//! for a caller to display a useful message or handle the failure
//! programmatically.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::errors::{CalcResult, EstimateError};
//!
//! fn validate_length(length_ft: f64) -> CalcResult<()> {
//!     if length_ft < 0.0 {
//!         return Err(EstimateError::invalid_input(
//!             "length_ft",
//!             length_ft.to_string(),
//!             "Length cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for paint_core operations
pub type CalcResult<T> = Result<T, EstimateError>;

/// Structured error type for estimate operations.
///
/// Serde-serializable so front ends can relay errors as JSON. Image decode
/// failures are stored as their display string since `image::ImageError`
/// does not implement serde traits.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value is invalid (negative, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error (e.g., reading an uploaded photo)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// The uploaded photo could not be decoded
    #[error("Image error: {reason}")]
    ImageError { reason: String },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an ImageError
    pub fn image_error(reason: impl Into<String>) -> Self {
        EstimateError::ImageError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::FileError { .. } => "FILE_ERROR",
            EstimateError::ImageError { .. } => "IMAGE_ERROR",
        }
    }
}

impl From<image::ImageError> for EstimateError {
    fn from(err: image::ImageError) -> Self {
        EstimateError::ImageError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EstimateError::invalid_input("length_ft", "-5.0", "Length cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EstimateError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EstimateError::image_error("truncated").error_code(),
            "IMAGE_ERROR"
        );
        assert_eq!(
            EstimateError::file_error("read", "room.jpg", "not found").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_display() {
        let error = EstimateError::invalid_input("height_ft", "NaN", "Height must be finite");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'height_ft': NaN - Height must be finite"
        );
    }
}
