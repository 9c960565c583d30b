use crate::move_detection::error::MoveDetectionResult;
use crate::move_detection::line_hashes::{FileKey, LineHashSequence};
use std::collections::BTreeSet;
use tracing::{trace, warn};

/// Read access to the previous and the new snapshot of a project.
///
/// Answers must stay consistent for the duration of one detection call.
/// Unknown keys yield an empty sequence rather than an error.
pub trait DataSource {
	/// Keys of every file present in the previous snapshot
	fn list_previous_keys(&self) -> MoveDetectionResult<BTreeSet<FileKey>>;

	/// Line hashes stored for a file of the previous snapshot
	fn previous_line_hashes(&self, key: &str) -> MoveDetectionResult<LineHashSequence>;

	/// Line hashes reported for a file of the new snapshot
	fn new_line_hashes(&self, key: &str) -> MoveDetectionResult<LineHashSequence>;
}

impl<D: DataSource + ?Sized> DataSource for &D {
	fn list_previous_keys(&self) -> MoveDetectionResult<BTreeSet<FileKey>> {
		(**self).list_previous_keys()
	}

	fn previous_line_hashes(&self, key: &str) -> MoveDetectionResult<LineHashSequence> {
		(**self).previous_line_hashes(key)
	}

	fn new_line_hashes(&self, key: &str) -> MoveDetectionResult<LineHashSequence> {
		(**self).new_line_hashes(key)
	}
}

/// Wraps a data source and traces every port call
#[derive(Debug, Clone)]
pub struct TracedDataSource<D> {
	inner: D,
}

impl<D: DataSource> TracedDataSource<D> {
	pub fn new(inner: D) -> Self {
		Self { inner }
	}

	pub fn into_inner(self) -> D {
		self.inner
	}

	fn traced_hashes(
		operation: &str, key: &str, result: MoveDetectionResult<LineHashSequence>,
	) -> MoveDetectionResult<LineHashSequence> {
		match &result {
			Ok(hashes) => trace!(operation, key, lines = hashes.len(), "fetched line hashes"),
			Err(err) => warn!(operation, key, category = err.category(), "port call failed: {err}"),
		}
		result
	}
}

impl<D: DataSource> DataSource for TracedDataSource<D> {
	fn list_previous_keys(&self) -> MoveDetectionResult<BTreeSet<FileKey>> {
		let result = self.inner.list_previous_keys();
		match &result {
			Ok(keys) => trace!(count = keys.len(), "listed previous file keys"),
			Err(err) => warn!(category = err.category(), "listing previous file keys failed: {err}"),
		}
		result
	}

	fn previous_line_hashes(&self, key: &str) -> MoveDetectionResult<LineHashSequence> {
		Self::traced_hashes("previous_line_hashes", key, self.inner.previous_line_hashes(key))
	}

	fn new_line_hashes(&self, key: &str) -> MoveDetectionResult<LineHashSequence> {
		Self::traced_hashes("new_line_hashes", key, self.inner.new_line_hashes(key))
	}
}
