//! File move detection as a step of the analysis pipeline
//!
//! The pipeline holds the new snapshot as a tree of components. The step
//! flattens it to file keys and hands them to the detector.

use crate::error::Result;
use crate::move_detection::{DataSource, FileMoves, MoveDetector, SimilarityScorer};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
	Directory,
	File,
}

/// Node of the component tree reported by an analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
	pub key: String,
	pub component_type: ComponentType,
	pub children: Vec<Component>,
}

impl Component {
	pub fn file(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			component_type: ComponentType::File,
			children: Vec::new(),
		}
	}

	pub fn directory(key: impl Into<String>, children: Vec<Component>) -> Self {
		Self {
			key: key.into(),
			component_type: ComponentType::Directory,
			children,
		}
	}

	pub fn is_file(&self) -> bool {
		self.component_type == ComponentType::File
	}
}

/// Keys of all file components below `root`, depth first
pub fn collect_file_keys(root: &Component) -> Vec<String> {
	let mut keys = Vec::new();
	let mut stack = vec![root];
	while let Some(component) = stack.pop() {
		if component.is_file() {
			keys.push(component.key.clone());
		}
		stack.extend(component.children.iter().rev());
	}
	keys
}

/// A unit of work run by the analysis pipeline
pub trait ComputationStep {
	fn execute(&mut self) -> Result<()>;

	fn description(&self) -> &str;
}

pub struct FileMoveDetectionStep<S, D> {
	detector: MoveDetector<S>,
	root: Component,
	data_source: D,
	file_moves: Option<FileMoves>,
}

impl<S: SimilarityScorer, D: DataSource> FileMoveDetectionStep<S, D> {
	pub fn new(detector: MoveDetector<S>, root: Component, data_source: D) -> Self {
		Self {
			detector,
			root,
			data_source,
			file_moves: None,
		}
	}

	/// Moves found by the last successful execution
	pub fn file_moves(&self) -> Option<&FileMoves> {
		self.file_moves.as_ref()
	}
}

impl<S: SimilarityScorer, D: DataSource> ComputationStep for FileMoveDetectionStep<S, D> {
	fn execute(&mut self) -> Result<()> {
		self.file_moves = None;
		let keys = collect_file_keys(&self.root);
		let (moves, stats) = self
			.detector
			.detect_with_stats(&keys, &self.data_source)?;
		info!(
			"{} files analyzed, {} moves detected ({} pairs scored)",
			keys.len(),
			moves.len(),
			stats.pairs_scored
		);
		self.file_moves = Some(moves);
		Ok(())
	}

	fn description(&self) -> &str {
		"Detect file moves"
	}
}
