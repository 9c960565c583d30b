use crate::move_detection::config::MoveDetectorConfig;
use crate::move_detection::data_source::DataSource;
use crate::move_detection::error::{MoveDetectionError, MoveDetectionResult};
use crate::move_detection::file_moves::{FileMoves, FileMovesBuilder};
use crate::move_detection::line_hashes::{FileKey, LineHashSequence};
use crate::move_detection::matching::{BestMatch, MatchCandidate};
use crate::move_detection::monitoring::{DetectionPhase, DetectionStats};
use crate::move_detection::similarity::{LcsScorer, SimilarityScorer};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, debug_span, trace};

/// Detects files that were moved between two snapshots of a project.
///
/// Every previous file missing from the new snapshot is compared, in key order,
/// with every new file missing from the previous snapshot. The best pair scoring
/// at least [`MIN_ACCEPT_SCORE`](crate::move_detection::MIN_ACCEPT_SCORE) is
/// recorded and its new file leaves the candidate pool.
///
/// The detector keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct MoveDetector<S = LcsScorer> {
	scorer: S,
	config: MoveDetectorConfig,
}

impl<S: SimilarityScorer> MoveDetector<S> {
	pub fn new(scorer: S) -> Self {
		Self::with_config(scorer, MoveDetectorConfig::default())
	}

	pub fn with_config(scorer: S, config: MoveDetectorConfig) -> Self {
		Self { scorer, config }
	}

	pub fn config(&self) -> &MoveDetectorConfig {
		&self.config
	}

	/// Map new file keys to the previous keys they were moved from
	pub fn detect<I, K, D>(&self, new_keys: I, data_source: &D) -> MoveDetectionResult<FileMoves>
	where
		I: IntoIterator<Item = K>,
		K: AsRef<str>,
		D: DataSource + ?Sized,
	{
		self.detect_with_stats(new_keys, data_source)
			.map(|(moves, _)| moves)
	}

	/// Same as [`detect`](Self::detect), also returning counters for the call
	pub fn detect_with_stats<I, K, D>(
		&self, new_keys: I, data_source: &D,
	) -> MoveDetectionResult<(FileMoves, DetectionStats)>
	where
		I: IntoIterator<Item = K>,
		K: AsRef<str>,
		D: DataSource + ?Sized,
	{
		let _span = debug_span!("detect_file_moves").entered();
		let mut stats = DetectionStats::new();
		let mut result = FileMovesBuilder::new();

		stats.enter(DetectionPhase::Init);
		let new_keys = collect_keys(new_keys)?;
		stats.new_keys = new_keys.len();
		if new_keys.is_empty() {
			debug!("No files in new snapshot");
			return Ok((result.build(), stats));
		}

		stats.enter(DetectionPhase::LoadPrevious);
		let previous_keys = data_source.list_previous_keys()?;
		if previous_keys.iter().any(|key| key.is_empty()) {
			return Err(MoveDetectionError::invalid_input(
				"previous_keys",
				"data source returned an empty file key",
			));
		}
		stats.previous_keys = previous_keys.len();
		if previous_keys.is_empty() {
			// probably the first analysis of the project
			debug!("No files in previous snapshot");
			return Ok((result.build(), stats));
		}

		stats.enter(DetectionPhase::Reduce);
		let mut unmatched_new: BTreeSet<FileKey> = new_keys
			.difference(&previous_keys)
			.cloned()
			.collect();
		let unmatched_previous: Vec<&FileKey> = previous_keys.difference(&new_keys).collect();
		stats.unmatched_new = unmatched_new.len();
		stats.unmatched_previous = unmatched_previous.len();
		debug!(
			"Reduced by exact key match: {} new-only, {} previous-only",
			unmatched_new.len(),
			unmatched_previous.len()
		);
		if unmatched_new.is_empty() || unmatched_previous.is_empty() {
			return Ok((result.build(), stats));
		}

		stats.enter(DetectionPhase::ScoreAndAssign);
		let mut cache = NewHashCache::new(&self.config);
		for old_key in unmatched_previous {
			let old_hashes = data_source.previous_line_hashes(old_key)?;
			old_hashes.validate(old_key)?;

			let mut best = BestMatch::new();
			for new_key in &unmatched_new {
				let new_hashes = cache.fetch(new_key, data_source, &mut stats)?;
				let score = self.scorer.score(&old_hashes, &new_hashes).min(100);
				stats.pairs_scored += 1;
				trace!(old_key = %old_key, new_key = %new_key, score, "Scored pair");
				if best.offer(MatchCandidate::new(old_key, new_key, score)) {
					stats.pairs_accepted += 1;
				}
			}

			if let Some(matched) = best.into_best() {
				debug!(
					"Detected move: {} -> {} (score: {})",
					matched.old_key, matched.new_key, matched.score
				);
				result.add_match(matched.new_key, matched.old_key)?;
				let new_key = matched.new_key.to_string();
				cache.evict(&new_key);
				unmatched_new.remove(&new_key);
			}
		}

		stats.moves_detected = result.len();
		debug!(
			"Detected {} moves from {} scored pairs",
			stats.moves_detected, stats.pairs_scored
		);
		stats.enter(DetectionPhase::Done);
		Ok((result.build(), stats))
	}
}

impl MoveDetector<LcsScorer> {
	pub fn lcs() -> Self {
		Self::new(LcsScorer)
	}

	/// Create a detector using the longest-common-subsequence scorer
	pub fn with_lcs_scorer(config: MoveDetectorConfig) -> Self {
		Self::with_config(LcsScorer, config)
	}
}

fn collect_keys<I, K>(keys: I) -> MoveDetectionResult<BTreeSet<FileKey>>
where
	I: IntoIterator<Item = K>,
	K: AsRef<str>,
{
	keys.into_iter()
		.map(|key| {
			let key = key.as_ref();
			if key.is_empty() {
				Err(MoveDetectionError::invalid_input("new_keys", "empty file key"))
			} else {
				Ok(key.to_string())
			}
		})
		.collect()
}

/// New-side line hashes kept for one detection call
struct NewHashCache {
	enabled: bool,
	max_lines: usize,
	cached_lines: usize,
	entries: HashMap<FileKey, LineHashSequence>,
}

impl NewHashCache {
	fn new(config: &MoveDetectorConfig) -> Self {
		Self {
			enabled: config.cache_new_line_hashes,
			max_lines: config.max_cached_lines,
			cached_lines: 0,
			entries: HashMap::new(),
		}
	}

	fn fetch<D: DataSource + ?Sized>(
		&mut self, key: &str, data_source: &D, stats: &mut DetectionStats,
	) -> MoveDetectionResult<Cow<'_, LineHashSequence>> {
		if self.entries.contains_key(key) {
			stats.cache_hits += 1;
			return Ok(Cow::Borrowed(&self.entries[key]));
		}

		let hashes = data_source.new_line_hashes(key)?;
		hashes.validate(key)?;
		stats.new_hash_fetches += 1;

		if self.enabled && self.cached_lines + hashes.len() <= self.max_lines {
			self.cached_lines += hashes.len();
			Ok(Cow::Borrowed(
				self.entries.entry(key.to_string()).or_insert(hashes),
			))
		} else {
			Ok(Cow::Owned(hashes))
		}
	}

	fn evict(&mut self, key: &str) {
		if let Some(hashes) = self.entries.remove(key) {
			self.cached_lines -= hashes.len();
		}
	}
}
