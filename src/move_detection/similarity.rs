use crate::move_detection::line_hashes::{LineHash, LineHashSequence};

/// Pure similarity metric between two files, as an integer in `0..=100`
pub trait SimilarityScorer {
	fn score(&self, a: &LineHashSequence, b: &LineHashSequence) -> u8;
}

impl<S: SimilarityScorer + ?Sized> SimilarityScorer for &S {
	fn score(&self, a: &LineHashSequence, b: &LineHashSequence) -> u8 {
		(**self).score(a, b)
	}
}

/// Scores by longest common subsequence: `floor(100 * lcs / max(|a|, |b|))`.
///
/// Empty input on either side scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcsScorer;

impl LcsScorer {
	pub fn new() -> Self {
		Self
	}
}

impl SimilarityScorer for LcsScorer {
	fn score(&self, a: &LineHashSequence, b: &LineHashSequence) -> u8 {
		let longest = a.len().max(b.len());
		if a.is_empty() || b.is_empty() {
			return 0;
		}
		let common = lcs_length(a.as_slice(), b.as_slice());
		(100 * common as u64 / longest as u64) as u8
	}
}

/// Length of a longest common subsequence.
///
/// Shared prefix and suffix are counted directly, then the remaining middle
/// runs through a single-row dynamic program sized by the shorter side.
pub fn lcs_length(a: &[LineHash], b: &[LineHash]) -> usize {
	let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
	let (a, b) = (&a[prefix..], &b[prefix..]);

	let suffix = a
		.iter()
		.rev()
		.zip(b.iter().rev())
		.take_while(|(x, y)| x == y)
		.count();
	let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

	prefix + suffix + lcs_middle(a, b)
}

fn lcs_middle(a: &[LineHash], b: &[LineHash]) -> usize {
	let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
	if inner.is_empty() {
		return 0;
	}

	// row[j] = lcs(outer[..i], inner[..j]) for the current i
	let mut row = vec![0usize; inner.len() + 1];
	for x in outer {
		let mut diagonal = 0;
		for (j, y) in inner.iter().enumerate() {
			let above = row[j + 1];
			row[j + 1] = if x == y {
				diagonal + 1
			} else {
				above.max(row[j])
			};
			diagonal = above;
		}
	}
	row[inner.len()]
}
