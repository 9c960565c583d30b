/// Phases of a single detection call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionPhase {
	#[default]
	Init,
	LoadPrevious,
	Reduce,
	ScoreAndAssign,
	Done,
}

/// Counters collected over one detection call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionStats {
	pub previous_keys: usize,
	pub new_keys: usize,
	/// Previous keys absent from the new snapshot
	pub unmatched_previous: usize,
	/// New keys absent from the previous snapshot
	pub unmatched_new: usize,
	pub pairs_scored: u64,
	pub pairs_accepted: u64,
	pub moves_detected: usize,
	pub new_hash_fetches: u64,
	pub cache_hits: u64,
	/// `Done` after a full run, otherwise the phase that short-circuited
	pub last_phase: DetectionPhase,
}

impl DetectionStats {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn enter(&mut self, phase: DetectionPhase) {
		self.last_phase = phase;
	}

	/// Share of accepted scorings, 0.0 when nothing was scored
	pub fn acceptance_rate(&self) -> f64 {
		if self.pairs_scored == 0 {
			0.0
		} else {
			self.pairs_accepted as f64 / self.pairs_scored as f64
		}
	}

	/// Share of new-side lookups served from the cache
	pub fn cache_hit_rate(&self) -> f64 {
		let lookups = self.new_hash_fetches + self.cache_hits;
		if lookups == 0 {
			0.0
		} else {
			self.cache_hits as f64 / lookups as f64
		}
	}
}
