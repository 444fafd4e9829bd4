//! # Error Types
//!
//! Structured error types for buckling_core. Every failure the engine can
//! report is a variant here, carrying enough context for a front end to
//! render a useful message or for a program to branch on the error code.
//!
//! ## Example
//!
//! ```rust
//! use buckling_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if !(length_m > 0.0) {
//!         return Err(CalcError::invalid_input(
//!             "length_m",
//!             length_m.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(3.0).is_ok());
//! assert_eq!(validate_length(0.0).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for buckling_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for conversion and calculation operations.
///
/// All variants are recoverable: the engine never aborts, it hands the
/// failure back to the caller.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Unit symbol is not registered for the quantity category
    #[error("Unknown unit '{unit}' for {category}")]
    UnknownUnit { category: String, unit: String },

    /// Quantity category name is not recognized
    #[error("Unknown quantity category: {name}")]
    UnknownCategory { name: String },

    /// End condition name or K factor is not one of the supported supports
    #[error("Unknown end condition: {name}")]
    UnknownEndCondition { name: String },

    /// An input value is invalid (non-positive, NaN, infinite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Calculation produced a value that cannot be reported
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an UnknownUnit error
    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Create an UnknownCategory error
    pub fn unknown_category(name: impl Into<String>) -> Self {
        CalcError::UnknownCategory { name: name.into() }
    }

    /// Create an UnknownEndCondition error
    pub fn unknown_end_condition(name: impl Into<String>) -> Self {
        CalcError::UnknownEndCondition { name: name.into() }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
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

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by what the user typed, as opposed to the environment
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            CalcError::UnknownUnit { .. }
                | CalcError::UnknownCategory { .. }
                | CalcError::UnknownEndCondition { .. }
                | CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            CalcError::UnknownEndCondition { .. } => "UNKNOWN_END_CONDITION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unknown_unit("length", "furlong");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownUnit\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_unit("length", "ft").error_code(), "UNKNOWN_UNIT");
        assert_eq!(CalcError::invalid_input("area_m2", "0", "zero").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CalcError::missing_field("length").error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_error_message() {
        let error = CalcError::unknown_unit("length", "furlong");
        assert_eq!(error.to_string(), "Unknown unit 'furlong' for length");
    }

    #[test]
    fn test_user_input_classification() {
        assert!(CalcError::unknown_category("force").is_user_input());
        assert!(!CalcError::file_error("read", "x.json", "missing").is_user_input());
    }
}
