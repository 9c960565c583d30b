use thiserror::Error;

/// Crate-level error types
///
/// Detection itself only fails with `crate::move_detection::MoveDetectionError`.
/// The other variants come from reading and writing snapshots.
#[derive(Error, Debug)]
pub enum FileMovesError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON serialization error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid path: {path}")]
	InvalidPath { path: String },

	#[error("Move detection error: {0}")]
	MoveDetection(#[from] crate::move_detection::MoveDetectionError),
}

impl FileMovesError {
	/// Check if this error points at a bug in the caller or a data source adapter
	pub fn is_caller_bug(&self) -> bool {
		match self {
			FileMovesError::MoveDetection(move_err) => move_err.is_caller_bug(),
			FileMovesError::InvalidPath { .. } => true,
			FileMovesError::Io(_) | FileMovesError::Json(_) => false,
		}
	}

	/// Get error category for logging and metrics
	pub fn category(&self) -> &'static str {
		match self {
			FileMovesError::Io(_) => "io",
			FileMovesError::Json(_) => "serialization",
			FileMovesError::InvalidPath { .. } => "configuration",
			FileMovesError::MoveDetection(move_err) => move_err.category(),
		}
	}

	/// Create an invalid path error
	pub fn invalid_path(path: &std::path::Path) -> Self {
		FileMovesError::InvalidPath {
			path: path.to_string_lossy().to_string(),
		}
	}
}

pub type Result<T> = std::result::Result<T, FileMovesError>;
