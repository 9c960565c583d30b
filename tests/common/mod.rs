//! Common test utilities for the file-moves library

#![allow(dead_code)]

use file_moves::move_detection::{DataSource, FileKey, MoveDetectionError, MoveDetectionResult};
use file_moves::{LineHashSequence, Snapshot, SnapshotDataSource};
use std::cell::Cell;
use std::collections::BTreeSet;
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn setup_temp_dir() -> TempDir {
	TempDir::new().expect("Failed to create temp directory")
}

/// Write a file below `root`, creating parent directories
pub fn create_test_file(root: &Path, relative: &str, content: &str) -> std::io::Result<()> {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)
}

/// Sequence from literal tokens
pub fn hashes(tokens: &[&str]) -> LineHashSequence {
	tokens.iter().copied().collect()
}

/// `prefix1..=prefixN`
pub fn numbered(prefix: &str, count: usize) -> LineHashSequence {
	(1..=count).map(|i| format!("{prefix}{i}")).collect()
}

/// Snapshot from `(key, hashes)` pairs
pub fn snapshot(files: Vec<(&str, LineHashSequence)>) -> Snapshot {
	files.into_iter().collect()
}

/// Data source plus the new keys of the current snapshot
pub fn scenario(
	previous: Vec<(&str, LineHashSequence)>, current: Vec<(&str, LineHashSequence)>,
) -> (Vec<String>, SnapshotDataSource) {
	let current = snapshot(current);
	let keys = current.keys().cloned().collect();
	(keys, SnapshotDataSource::new(snapshot(previous), current))
}

/// Which port call a `FailingDataSource` fails on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
	ListPrevious,
	PreviousHashes(usize),
	NewHashes(usize),
}

/// Delegates to a snapshot source but fails the n-th call of one operation
pub struct FailingDataSource {
	pub inner: SnapshotDataSource,
	pub fail_on: FailOn,
	previous_calls: Cell<usize>,
	new_calls: Cell<usize>,
}

impl FailingDataSource {
	pub fn new(inner: SnapshotDataSource, fail_on: FailOn) -> Self {
		Self {
			inner,
			fail_on,
			previous_calls: Cell::new(0),
			new_calls: Cell::new(0),
		}
	}
}

impl DataSource for FailingDataSource {
	fn list_previous_keys(&self) -> MoveDetectionResult<BTreeSet<FileKey>> {
		if self.fail_on == FailOn::ListPrevious {
			return Err(MoveDetectionError::data_unavailable(
				"list_previous_keys",
				"",
				"snapshot cannot be read",
			));
		}
		self.inner.list_previous_keys()
	}

	fn previous_line_hashes(&self, key: &str) -> MoveDetectionResult<LineHashSequence> {
		let call = self.previous_calls.get() + 1;
		self.previous_calls.set(call);
		if self.fail_on == FailOn::PreviousHashes(call) {
			return Err(MoveDetectionError::data_unavailable(
				"previous_line_hashes",
				key,
				"source row missing",
			));
		}
		self.inner.previous_line_hashes(key)
	}

	fn new_line_hashes(&self, key: &str) -> MoveDetectionResult<LineHashSequence> {
		let call = self.new_calls.get() + 1;
		self.new_calls.set(call);
		if self.fail_on == FailOn::NewHashes(call) {
			return Err(MoveDetectionError::data_unavailable(
				"new_line_hashes",
				key,
				"report truncated",
			));
		}
		self.inner.new_line_hashes(key)
	}
}
