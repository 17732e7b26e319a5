use std::collections::HashMap;
use std::collections::hash_map::Iter;

use super::context::Context;
use super::frequency_list::FrequencyList;

/// Mapping from a context to the characters observed right after it.
///
/// The key set only grows: contexts are added during training and never
/// removed.
///
/// # Invariants
/// - Every key holds exactly `window_length` characters
/// - Every stored list is non-empty once training has returned
#[derive(Clone, Debug)]
pub struct ContextTable {
	window_length: usize,
	lists: HashMap<Context, FrequencyList>,
}

impl ContextTable {
	pub(crate) fn new(window_length: usize) -> Self {
		Self { window_length, lists: HashMap::new() }
	}

	/// Returns the list for `context`, registering an empty one if unseen.
	pub(crate) fn get_or_create(&mut self, context: Context) -> &mut FrequencyList {
		debug_assert_eq!(context.as_str().chars().count(), self.window_length);
		self.lists.entry(context).or_default()
	}

	/// Returns the list for `context`, or `None` if it was never observed.
	pub fn lookup(&self, context: &str) -> Option<&FrequencyList> {
		self.lists.get(context)
	}

	/// Length of every context stored in the table.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.lists.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lists.is_empty()
	}

	/// Iterates `(context, list)` pairs in no particular order.
	pub fn iter(&self) -> Iter<'_, Context, FrequencyList> {
		self.lists.iter()
	}

	/// All contexts, sorted by content.
	pub fn contexts(&self) -> Vec<&Context> {
		let mut contexts: Vec<&Context> = self.lists.keys().collect();
		contexts.sort();
		contexts
	}

	/// Recomputes the probabilities of every list.
	pub(crate) fn recompute_all(&mut self) {
		for list in self.lists.values_mut() {
			list.recompute_probabilities();
		}
	}
}
