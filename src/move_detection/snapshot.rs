use crate::move_detection::data_source::DataSource;
use crate::move_detection::error::MoveDetectionResult;
use crate::move_detection::line_hashes::{FileKey, LineHashSequence};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Line hashes of every file of a project at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
	files: BTreeMap<FileKey, LineHashSequence>,
}

impl Snapshot {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a snapshot of every regular file below `root`.
	///
	/// Keys are `/`-separated paths relative to `root`. Files that are not
	/// valid UTF-8 get an empty sequence.
	pub fn from_directory(root: &Path) -> io::Result<Self> {
		let mut snapshot = Self::new();
		let mut pending = vec![root.to_path_buf()];
		while let Some(dir) = pending.pop() {
			let mut entries = fs::read_dir(&dir)?.collect::<io::Result<Vec<_>>>()?;
			entries.sort_by_key(|entry| entry.file_name());
			for entry in entries {
				let path = entry.path();
				let file_type = entry.file_type()?;
				if file_type.is_dir() {
					pending.push(path);
				} else if file_type.is_file() {
					let key = relative_key(root, &path);
					let hashes = match fs::read_to_string(&path) {
						Ok(text) => LineHashSequence::from_source(&text),
						Err(err) if err.kind() == io::ErrorKind::InvalidData => {
							debug!("Not a text file, storing no line hashes: {:?}", path);
							LineHashSequence::new()
						}
						Err(err) => return Err(err),
					};
					snapshot.insert(key, hashes);
				}
			}
		}
		Ok(snapshot)
	}

	pub fn insert(&mut self, key: impl Into<FileKey>, hashes: LineHashSequence) {
		self.files.insert(key.into(), hashes);
	}

	pub fn get(&self, key: &str) -> Option<&LineHashSequence> {
		self.files.get(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &FileKey> {
		self.files.keys()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, FileKey, LineHashSequence> {
		self.files.iter()
	}

	pub fn len(&self) -> usize {
		self.files.len()
	}

	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}
}

impl<K: Into<FileKey>> FromIterator<(K, LineHashSequence)> for Snapshot {
	fn from_iter<I: IntoIterator<Item = (K, LineHashSequence)>>(iter: I) -> Self {
		Self {
			files: iter
				.into_iter()
				.map(|(key, hashes)| (key.into(), hashes))
				.collect(),
		}
	}
}

fn relative_key(root: &Path, path: &Path) -> FileKey {
	let relative = path.strip_prefix(root).unwrap_or(path);
	relative
		.components()
		.map(|component| component.as_os_str().to_string_lossy())
		.collect::<Vec<_>>()
		.join("/")
}

/// Data source answering from a previous and a current snapshot held in memory
#[derive(Debug, Clone, Default)]
pub struct SnapshotDataSource {
	pub previous: Snapshot,
	pub current: Snapshot,
}

impl SnapshotDataSource {
	pub fn new(previous: Snapshot, current: Snapshot) -> Self {
		Self { previous, current }
	}
}

impl DataSource for SnapshotDataSource {
	fn list_previous_keys(&self) -> MoveDetectionResult<BTreeSet<FileKey>> {
		Ok(self.previous.keys().cloned().collect())
	}

	fn previous_line_hashes(&self, key: &str) -> MoveDetectionResult<LineHashSequence> {
		Ok(self.previous.get(key).cloned().unwrap_or_default())
	}

	fn new_line_hashes(&self, key: &str) -> MoveDetectionResult<LineHashSequence> {
		Ok(self.current.get(key).cloned().unwrap_or_default())
	}
}
