use std::fmt;

use serde::Serialize;

use super::observation::CharObservation;
use super::probability;

/// Ordered per-character counts for a single context.
///
/// Entries keep the order in which their character was first observed.
/// That order drives both the cumulative probability assignment and the
/// linear scan performed when sampling, so it must never be reordered.
///
/// ## Invariants
/// - No two entries share the same character
/// - The sum of all counts equals the number of times the context was observed
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct FrequencyList {
	entries: Vec<CharObservation>,
}

impl FrequencyList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Records one occurrence of `chr` after this list's context.
	///
	/// - If an entry for `chr` exists, its count is increased.
	/// - Otherwise, a new entry with a count of 1 is appended.
	pub fn record_observation(&mut self, chr: char) {
		match self.entries.iter_mut().find(|entry| entry.chr == chr) {
			Some(entry) => entry.count += 1,
			None => self.entries.push(CharObservation::new(chr)),
		}
	}

	/// Recomputes `probability` and `cumulative` for every entry.
	///
	/// Does nothing on an empty list.
	pub fn recompute_probabilities(&mut self) {
		probability::recompute(&mut self.entries);
	}

	/// Number of distinct characters observed.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the entry at `index`.
	///
	/// # Panics
	/// Panics if `index >= self.len()`.
	pub fn entry_at(&self, index: usize) -> &CharObservation {
		match self.entries.get(index) {
			Some(entry) => entry,
			None => panic!("index {} out of range for frequency list of size {}", index, self.len()),
		}
	}

	/// Non-panicking counterpart of [`FrequencyList::entry_at`].
	pub fn get(&self, index: usize) -> Option<&CharObservation> {
		self.entries.get(index)
	}

	/// The first observed character's entry, if any.
	pub fn first(&self) -> Option<&CharObservation> {
		self.entries.first()
	}

	/// Position of the entry for `chr`, if it was observed.
	pub fn index_of(&self, chr: char) -> Option<usize> {
		self.entries.iter().position(|entry| entry.chr == chr)
	}

	/// Sum of all counts.
	pub fn total_count(&self) -> u64 {
		self.entries.iter().map(|entry| entry.count).sum()
	}

	/// Iterates entries in first-observation order.
	pub fn iter(&self) -> std::slice::Iter<'_, CharObservation> {
		self.entries.iter()
	}
}

impl<'a> IntoIterator for &'a FrequencyList {
	type Item = &'a CharObservation;
	type IntoIter = std::slice::Iter<'a, CharObservation>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Display for FrequencyList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.entries.is_empty() {
			return Ok(());
		}
		write!(f, "(")?;
		for entry in &self.entries {
			write!(f, " {}", entry)?;
		}
		write!(f, " )")
	}
}
