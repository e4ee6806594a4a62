//! Fuzzy name suggestions for validation diagnostics.

/// Maximum edit distance at which a candidate is still worth suggesting.
const MAX_DISTANCE: usize = 3;

/// Maximum number of suggestions attached to a validation error.
pub const MAX_SUGGESTIONS: usize = 3;

/// Ranks `candidates` by edit distance to `input` and returns the closest
/// few. Candidates further than [`MAX_DISTANCE`] edits away are dropped.
/// A transposition of adjacent characters counts as a single edit.
pub fn suggest<I, S>(input: &str, candidates: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut ranked: Vec<(usize, String)> = candidates
		.into_iter()
		.filter_map(|c| {
			let distance = strsim::damerau_levenshtein(input, c.as_ref());
			(distance <= MAX_DISTANCE).then(|| (distance, c.as_ref().to_string()))
		})
		.collect();

	ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
	ranked.dedup_by(|a, b| a.1 == b.1);
	ranked.truncate(MAX_SUGGESTIONS);
	ranked.into_iter().map(|(_, name)| name).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn closest_candidate_ranks_first() {
		let got = suggest("titel", ["title", "tile", "totem", "color"]);
		assert_eq!(got[0], "title");
	}

	#[test]
	fn transposition_counts_as_one_edit() {
		// "titel" is one swapped pair away from "title" but two plain edits
		// from "tile"; the swap must win the ranking.
		let got = suggest("titel", ["tile", "title"]);
		assert_eq!(got, vec!["title", "tile"]);
	}

	#[test]
	fn distant_candidates_are_dropped() {
		let got = suggest("qqqqqq", ["name", "color", "created"]);
		assert!(got.is_empty());
	}

	#[test]
	fn at_most_three_suggestions() {
		let got = suggest("nam", ["name", "nam1", "nam2", "nam3", "nam4"]);
		assert_eq!(got.len(), 3);
	}
}
