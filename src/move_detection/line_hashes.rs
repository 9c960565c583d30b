use crate::move_detection::error::{MoveDetectionError, MoveDetectionResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Opaque project-unique identifier of a file within a snapshot
pub type FileKey = String;

/// Opaque fingerprint of one normalized source line
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineHash(String);

impl LineHash {
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}

	/// Hash a single source line with all whitespace removed
	pub fn of_line(line: &str) -> Self {
		let mut hasher = XxHash64::with_seed(0);
		for c in line.chars().filter(|c| !c.is_whitespace()) {
			let mut buf = [0u8; 4];
			hasher.write(c.encode_utf8(&mut buf).as_bytes());
		}
		Self(format!("{:016x}", hasher.finish()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Empty tokens stand for a missing hash and are rejected by the detector
	pub fn is_valid(&self) -> bool {
		!self.0.is_empty()
	}
}

impl From<String> for LineHash {
	fn from(token: String) -> Self {
		Self(token)
	}
}

impl From<&str> for LineHash {
	fn from(token: &str) -> Self {
		Self(token.to_string())
	}
}

impl fmt::Display for LineHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Ordered line hashes of one file. Position is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineHashSequence(Vec<LineHash>);

impl LineHashSequence {
	pub fn new() -> Self {
		Self::default()
	}

	/// Compute the line hashes of a source text, one per line.
	///
	/// Both `\n` and `\r\n` terminate a line and a trailing terminator does not
	/// start a new one. Blank lines still produce a hash so positions survive.
	pub fn from_source(text: &str) -> Self {
		Self(text.lines().map(LineHash::of_line).collect())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, LineHash> {
		self.0.iter()
	}

	pub fn as_slice(&self) -> &[LineHash] {
		&self.0
	}

	pub fn push(&mut self, hash: LineHash) {
		self.0.push(hash);
	}

	/// Reject sequences holding an empty token, naming the file they came from
	pub fn validate(&self, key: &str) -> MoveDetectionResult<()> {
		match self.0.iter().position(|hash| !hash.is_valid()) {
			Some(line) => Err(MoveDetectionError::invalid_input(
				"line_hashes",
				&format!("empty line hash at line {} of '{}'", line + 1, key),
			)),
			None => Ok(()),
		}
	}
}

impl From<Vec<LineHash>> for LineHashSequence {
	fn from(hashes: Vec<LineHash>) -> Self {
		Self(hashes)
	}
}

impl<S: Into<LineHash>> FromIterator<S> for LineHashSequence {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl<'a> IntoIterator for &'a LineHashSequence {
	type Item = &'a LineHash;
	type IntoIter = std::slice::Iter<'a, LineHash>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
