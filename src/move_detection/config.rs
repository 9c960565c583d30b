use crate::move_detection::error::{MoveDetectionError, MoveDetectionResult};

/// Resource settings for the move detector.
///
/// None of these change which moves are found.
#[derive(Debug, Clone)]
pub struct MoveDetectorConfig {
	/// Keep new-side line hashes for the duration of one detection call
	pub cache_new_line_hashes: bool,
	/// Upper bound on line hashes held by that cache, summed over all files
	pub max_cached_lines: usize,
}

impl Default for MoveDetectorConfig {
	fn default() -> Self {
		Self {
			cache_new_line_hashes: true,
			max_cached_lines: 5_000_000,
		}
	}
}

impl MoveDetectorConfig {
	/// Configuration that refetches new-side line hashes on every use
	pub fn without_cache() -> Self {
		Self {
			cache_new_line_hashes: false,
			..Default::default()
		}
	}

	/// Create a configuration with a custom cache bound
	pub fn with_max_cached_lines(max_cached_lines: usize) -> Self {
		Self {
			max_cached_lines,
			..Default::default()
		}
	}

	/// Validate the configuration and return errors if invalid
	pub fn validate(&self) -> MoveDetectionResult<()> {
		if self.cache_new_line_hashes && self.max_cached_lines == 0 {
			return Err(MoveDetectionError::invalid_input(
				"max_cached_lines",
				"must be greater than 0 when caching is enabled",
			));
		}
		Ok(())
	}
}
