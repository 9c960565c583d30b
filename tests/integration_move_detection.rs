// Integration tests for move detection
// Tests the detector end to end through the public API

use file_moves::{LcsScorer, LineHashSequence, MoveDetector, SimilarityScorer, MIN_ACCEPT_SCORE};
use std::collections::HashSet;

mod common;
use common::{hashes, numbered, scenario};

fn h1_to_h9_plus(extra: &str) -> LineHashSequence {
	let mut lines = numbered("h", 9);
	lines.push(extra.into());
	lines
}

#[test]
fn test_first_analysis_has_no_moves() {
	let (keys, source) = scenario(vec![], vec![("a", hashes(&["h1", "h2"]))]);
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert!(moves.is_empty());
}

#[test]
fn test_same_key_on_both_sides_is_not_a_move() {
	let (keys, source) = scenario(
		vec![("a", hashes(&["h1", "h2", "h3"]))],
		vec![("a", hashes(&["h1", "h2", "h3"]))],
	);
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert!(moves.is_empty());
	assert_eq!(moves.get_for_key("a"), None);
}

#[test]
fn test_identical_content_under_new_key() {
	let (keys, source) = scenario(
		vec![("old/A", numbered("h", 10))],
		vec![("new/A", numbered("h", 10))],
	);
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert_eq!(moves.len(), 1);
	assert_eq!(moves.get_for_key("new/A"), Some("old/A"));
}

#[test]
fn test_highest_score_wins() {
	let (keys, source) = scenario(
		vec![("old/A", numbered("h", 10))],
		vec![("new/A", numbered("h", 10)), ("new/B", h1_to_h9_plus("hX"))],
	);
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert_eq!(moves.len(), 1);
	assert_eq!(moves.get_for_key("new/A"), Some("old/A"));
	assert_eq!(moves.get_for_key("new/B"), None);
}

#[test]
fn test_two_independent_moves() {
	let (keys, source) = scenario(
		vec![("old/A", numbered("h", 10)), ("old/B", numbered("k", 10))],
		vec![("new/X", numbered("h", 10)), ("new/Y", numbered("k", 10))],
	);
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert_eq!(moves.len(), 2);
	assert_eq!(moves.get_for_key("new/X"), Some("old/A"));
	assert_eq!(moves.get_for_key("new/Y"), Some("old/B"));
}

#[test]
fn test_low_similarity_is_not_a_move() {
	let mut lines = hashes(&["h1", "h2"]);
	for z in numbered("z", 8).iter() {
		lines.push(z.clone());
	}
	let (keys, source) = scenario(vec![("old/A", numbered("h", 10))], vec![("new/X", lines)]);
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert!(moves.is_empty());
}

#[test]
fn test_first_previous_key_claims_the_only_candidate() {
	let (keys, source) = scenario(
		vec![("old/A", numbered("h", 10)), ("old/B", numbered("h", 10))],
		vec![("new/X", numbered("h", 10))],
	);
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert_eq!(moves.len(), 1);
	assert_eq!(moves.get_for_key("new/X"), Some("old/A"));
}

#[test]
fn test_score_at_threshold_is_accepted() {
	let (keys, source) = scenario(
		vec![("old/A", numbered("h", 10))],
		vec![("new/B", h1_to_h9_plus("hX"))],
	);
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert_eq!(moves.get_for_key("new/B"), Some("old/A"));
}

#[test]
fn test_equal_scores_prefer_smaller_new_key() {
	let (keys, source) = scenario(
		vec![("old/A", numbered("h", 10))],
		vec![("new/Z", numbered("h", 10)), ("new/M", numbered("h", 10))],
	);
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert_eq!(moves.get_for_key("new/M"), Some("old/A"));
	assert_eq!(moves.get_for_key("new/Z"), None);
}

#[test]
fn test_empty_files_never_match() {
	let (keys, source) = scenario(
		vec![("old/empty", LineHashSequence::new())],
		vec![("new/empty", LineHashSequence::new())],
	);
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert!(moves.is_empty());
}

#[test]
fn test_new_keys_outside_current_snapshot_score_zero() {
	let (_, source) = scenario(vec![("old/A", numbered("h", 10))], vec![]);
	let moves = MoveDetector::lcs()
		.detect(["unknown/file"], &source)
		.unwrap();
	assert!(moves.is_empty());
}

/// Deterministic pseudo-random project with moves, edits and deletions
fn generated_project() -> (Vec<String>, common::FailingDataSource) {
	let mut state: u64 = 0x2545_f491_4f6c_dd1d;
	let mut next = move || {
		state ^= state << 13;
		state ^= state >> 7;
		state ^= state << 17;
		state
	};

	let mut previous = Vec::new();
	let mut current = Vec::new();
	for file in 0..24 {
		let body = numbered(&format!("f{}_", file % 9), 20 + (next() % 30) as usize);
		let old_key: &'static str = Box::leak(format!("old/{file:02}").into_boxed_str());
		previous.push((old_key, body.clone()));

		match next() % 4 {
			0 => {}
			1 => {
				let new_key: &'static str = Box::leak(format!("new/{file:02}").into_boxed_str());
				current.push((new_key, body));
			}
			2 => {
				let mut edited: LineHashSequence = body.iter().cloned().collect();
				edited.push(format!("edit{file}").into());
				let new_key: &'static str = Box::leak(format!("moved/{file:02}").into_boxed_str());
				current.push((new_key, edited));
			}
			_ => current.push((old_key, body)),
		}
	}

	let (keys, source) = scenario(previous, current);
	(keys, common::FailingDataSource::new(source, common::FailOn::NewHashes(usize::MAX)))
}

#[test]
fn test_result_is_injective_and_confident() {
	let (keys, source) = generated_project();
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	assert!(!moves.is_empty());

	let mut old_keys = HashSet::new();
	for (new_key, old_key) in moves.iter() {
		assert!(old_keys.insert(old_key), "{old_key} matched twice");
		let score = LcsScorer.score(
			source.inner.previous.get(old_key).unwrap(),
			source.inner.current.get(new_key).unwrap(),
		);
		assert!(score >= MIN_ACCEPT_SCORE, "{new_key} <- {old_key} scored {score}");
	}
}

#[test]
fn test_keys_on_both_sides_never_appear_in_result() {
	let (keys, source) = generated_project();
	let moves = MoveDetector::lcs().detect(&keys, &source).unwrap();
	for key in source.inner.previous.keys() {
		if source.inner.current.get(key).is_some() {
			assert_eq!(moves.get_for_key(key), None);
		}
	}
}

#[test]
fn test_detection_is_repeatable_and_order_independent() {
	let (keys, source) = generated_project();
	let detector = MoveDetector::lcs();
	let first = detector.detect(&keys, &source).unwrap();
	let second = detector.detect(&keys, &source).unwrap();
	assert_eq!(first, second);

	let mut reversed = keys.clone();
	reversed.reverse();
	let third = detector.detect(&reversed, &source).unwrap();
	assert_eq!(first, third);

	let mut duplicated = keys.clone();
	duplicated.extend(keys.iter().cloned());
	assert_eq!(first, detector.detect(&duplicated, &source).unwrap());
}

#[test]
fn test_subset_key_sets_give_empty_result() {
	let (keys, source) = scenario(
		vec![("a", numbered("h", 5)), ("b", numbered("k", 5))],
		vec![("a", numbered("h", 5))],
	);
	assert!(MoveDetector::lcs().detect(&keys, &source).unwrap().is_empty());

	let (keys, source) = scenario(
		vec![("a", numbered("h", 5))],
		vec![("a", numbered("h", 5)), ("b", numbered("h", 5))],
	);
	assert!(MoveDetector::lcs().detect(&keys, &source).unwrap().is_empty());
}
