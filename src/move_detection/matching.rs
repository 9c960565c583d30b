use std::cmp::Ordering;

/// Minimum similarity for a pair of files to count as a move
pub const MIN_ACCEPT_SCORE: u8 = 90;

/// A scored pairing of a previous file with a new one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MatchCandidate<'a> {
	pub(crate) old_key: &'a str,
	pub(crate) new_key: &'a str,
	pub(crate) score: u8,
}

impl<'a> MatchCandidate<'a> {
	pub(crate) fn new(old_key: &'a str, new_key: &'a str, score: u8) -> Self {
		Self { old_key, new_key, score }
	}

	pub(crate) fn is_acceptable(&self) -> bool {
		self.score >= MIN_ACCEPT_SCORE
	}
}

/// Preference order between candidates: higher score first, then smaller new key
pub(crate) fn rank(a: &MatchCandidate<'_>, b: &MatchCandidate<'_>) -> Ordering {
	b.score
		.cmp(&a.score)
		.then_with(|| a.new_key.cmp(b.new_key))
}

/// Keeps the best acceptable candidate seen so far
#[derive(Debug, Default)]
pub(crate) struct BestMatch<'a> {
	best: Option<MatchCandidate<'a>>,
}

impl<'a> BestMatch<'a> {
	pub(crate) fn new() -> Self {
		Self { best: None }
	}

	/// Offer a candidate, returning whether it passed the acceptance threshold
	pub(crate) fn offer(&mut self, candidate: MatchCandidate<'a>) -> bool {
		if !candidate.is_acceptable() {
			return false;
		}
		let improves = match &self.best {
			Some(best) => rank(&candidate, best) == Ordering::Less,
			None => true,
		};
		if improves {
			self.best = Some(candidate);
		}
		true
	}

	pub(crate) fn into_best(self) -> Option<MatchCandidate<'a>> {
		self.best
	}
}
