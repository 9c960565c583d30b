//! Move detection specific error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveDetectionError {
	#[error("Data unavailable: {operation} failed for '{key}' - {details}")]
	DataUnavailable {
		operation: String,
		key: String,
		details: String,
	},

	#[error("Invalid input: {field} - {reason}")]
	InvalidInput { field: String, reason: String },
}

impl MoveDetectionError {
	/// Check if this error points at a bug in the caller or the data source adapter
	pub fn is_caller_bug(&self) -> bool {
		matches!(self, MoveDetectionError::InvalidInput { .. })
	}

	/// Get error category for logging and metrics
	pub fn category(&self) -> &'static str {
		match self {
			MoveDetectionError::DataUnavailable { .. } => "data_unavailable",
			MoveDetectionError::InvalidInput { .. } => "invalid_input",
		}
	}

	/// Create a data unavailable error for a port operation
	pub fn data_unavailable(operation: &str, key: &str, details: &str) -> Self {
		MoveDetectionError::DataUnavailable {
			operation: operation.to_string(),
			key: key.to_string(),
			details: details.to_string(),
		}
	}

	/// Create an invalid input error
	pub fn invalid_input(field: &str, reason: &str) -> Self {
		MoveDetectionError::InvalidInput {
			field: field.to_string(),
			reason: reason.to_string(),
		}
	}
}

pub type MoveDetectionResult<T> = std::result::Result<T, MoveDetectionError>;
