use crate::move_detection::error::{MoveDetectionError, MoveDetectionResult};
use crate::move_detection::line_hashes::FileKey;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{HashMap, HashSet};

/// Detected moves: new file key to the previous file key it replaces.
///
/// The mapping is injective and never changes once built.
#[derive(Debug, Clone, Default)]
pub struct FileMoves {
	entries: Vec<(FileKey, FileKey)>,
	by_new_key: HashMap<FileKey, usize>,
}

impl FileMoves {
	/// Previous key the given new key was moved from, if any
	pub fn get_for_key(&self, new_key: &str) -> Option<&str> {
		self.by_new_key
			.get(new_key)
			.map(|&index| self.entries[index].1.as_str())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// `(new_key, old_key)` pairs in the order they were detected
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(new_key, old_key)| (new_key.as_str(), old_key.as_str()))
	}
}

impl PartialEq for FileMoves {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len()
			&& self
				.iter()
				.all(|(new_key, old_key)| other.get_for_key(new_key) == Some(old_key))
	}
}

impl Eq for FileMoves {}

impl Serialize for FileMoves {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (new_key, old_key) in &self.entries {
			map.serialize_entry(new_key, old_key)?;
		}
		map.end()
	}
}

/// Collects matches in insertion order while detection runs
#[derive(Debug, Default)]
pub(crate) struct FileMovesBuilder {
	entries: Vec<(FileKey, FileKey)>,
	by_new_key: HashMap<FileKey, usize>,
	old_keys: HashSet<FileKey>,
}

impl FileMovesBuilder {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn add_match(&mut self, new_key: &str, old_key: &str) -> MoveDetectionResult<()> {
		if self.by_new_key.contains_key(new_key) {
			return Err(MoveDetectionError::invalid_input(
				"new_key",
				&format!("'{new_key}' is already matched"),
			));
		}
		if !self.old_keys.insert(old_key.to_string()) {
			return Err(MoveDetectionError::invalid_input(
				"old_key",
				&format!("'{old_key}' is already matched"),
			));
		}
		self.by_new_key
			.insert(new_key.to_string(), self.entries.len());
		self.entries
			.push((new_key.to_string(), old_key.to_string()));
		Ok(())
	}

	pub(crate) fn len(&self) -> usize {
		self.entries.len()
	}

	pub(crate) fn build(self) -> FileMoves {
		FileMoves {
			entries: self.entries,
			by_new_key: self.by_new_key,
		}
	}
}
