use std::fmt;

use serde::Serialize;

/// A character observed after some context, with its statistics.
///
/// `probability` and `cumulative` are derived from the counts of the owning
/// `FrequencyList` and are only meaningful after a recompute.
///
/// # Invariants
/// - `count >= 1`
/// - `probability` is in `[0, 1]`
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CharObservation {
	pub(crate) chr: char,
	pub(crate) count: u64,
	pub(crate) probability: f64,
	pub(crate) cumulative: f64,
}

impl CharObservation {
	/// Creates a first observation of `chr` (count 1, probabilities unset).
	pub(crate) fn new(chr: char) -> Self {
		Self { chr, count: 1, probability: 0.0, cumulative: 0.0 }
	}

	/// The observed character.
	pub fn chr(&self) -> char {
		self.chr
	}

	/// How many times the character followed the context.
	pub fn count(&self) -> u64 {
		self.count
	}

	/// `count / total` for the owning list.
	pub fn probability(&self) -> f64 {
		self.probability
	}

	/// Running sum of probabilities up to and including this entry.
	pub fn cumulative(&self) -> f64 {
		self.cumulative
	}
}

impl fmt::Display for CharObservation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {} {})", self.chr, self.count, self.probability, self.cumulative)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_observation_has_count_one() {
		let obs = CharObservation::new('x');
		assert_eq!(obs.chr(), 'x');
		assert_eq!(obs.count(), 1);
		assert_eq!(obs.probability(), 0.0);
		assert_eq!(obs.cumulative(), 0.0);
	}

	#[test]
	fn display_lists_all_fields() {
		let obs = CharObservation { chr: 'a', count: 3, probability: 0.75, cumulative: 1.0 };
		assert_eq!(obs.to_string(), "(a 3 0.75 1)");
	}
}
