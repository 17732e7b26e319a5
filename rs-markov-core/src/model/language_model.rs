use std::fmt;
use std::path::Path;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::context::Window;
use super::context_table::ContextTable;
use super::frequency_list::FrequencyList;
use super::options::{ModelOptions, RecomputePolicy};
use super::sampler;
use crate::error::Result;
use crate::io::read_corpus;

/// Character-level n-gram model of order `window_length`.
///
/// The `LanguageModel` learns which characters follow every context of
/// `window_length` characters in a corpus, then generates text one character
/// at a time by sampling from those observations.
///
/// # Responsibilities
/// - Slide a fixed-size window over a corpus and count what follows each context
/// - Keep every frequency list's probabilities current after training
/// - Extend a seed text until a target length or an unseen context is reached
///
/// # Invariants
/// - `window_length > 0`
/// - The random source is owned by this instance only, so a fixed seed gives a
///   fixed output sequence regardless of other models
#[derive(Debug)]
pub struct LanguageModel {
	options: ModelOptions,
	table: ContextTable,
	rng: StdRng,
}

impl LanguageModel {
	/// Creates an unseeded model with the given window length.
	///
	/// # Errors
	/// Returns an error if `window_length == 0`.
	pub fn new(window_length: usize) -> Result<Self> {
		Ok(Self::from_options(ModelOptions::new(window_length)?))
	}

	/// Creates a model whose generated text is reproducible for a given `seed`.
	///
	/// # Errors
	/// Returns an error if `window_length == 0`.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self> {
		Ok(Self::from_options(ModelOptions::new(window_length)?.with_seed(seed)))
	}

	/// Creates a model from already validated options.
	pub fn from_options(options: ModelOptions) -> Self {
		let rng = match options.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		debug!(
			"new model: window_length={}, seed={:?}, recompute={:?}",
			options.window_length(),
			options.seed,
			options.recompute
		);
		Self { table: ContextTable::new(options.window_length()), options, rng }
	}

	pub fn window_length(&self) -> usize {
		self.options.window_length()
	}

	pub fn options(&self) -> &ModelOptions {
		&self.options
	}

	/// Read-only view of the learned contexts.
	pub fn table(&self) -> &ContextTable {
		&self.table
	}

	/// Frequency list of `context`, if it was seen during training.
	pub fn lookup(&self, context: &str) -> Option<&FrequencyList> {
		self.table.lookup(context)
	}

	/// Learns from a stream of characters.
	///
	/// The first `window_length` characters only prime the window. Every
	/// following character is recorded as an observation of the current
	/// window, then the window slides by one.
	///
	/// # Notes
	/// - A corpus shorter than `window_length` + 1 records nothing.
	/// - Can be called again: counts accumulate and probabilities are
	///   recomputed, so the relative distribution of a repeated corpus is unchanged.
	pub fn train<I: IntoIterator<Item = char>>(&mut self, corpus: I) {
		let mut window = Window::new(self.window_length());
		let mut read = 0usize;
		let mut recorded = 0usize;

		for c in corpus {
			read += 1;
			// Still priming while the window is short
			if let Some(context) = window.context() {
				let list = self.table.get_or_create(context);
				list.record_observation(c);
				if self.options.recompute == RecomputePolicy::Eager {
					list.recompute_probabilities();
				}
				recorded += 1;
			}
			window.slide(c);
		}

		if self.options.recompute == RecomputePolicy::Batch {
			self.table.recompute_all();
		}

		debug!(
			"training done: {} chars read, {} observations, {} contexts",
			read,
			recorded,
			self.table.len()
		);
	}

	/// Learns from a string slice.
	pub fn train_str(&mut self, corpus: &str) {
		self.train(corpus.chars());
	}

	/// Reads a whole file and learns from its content.
	///
	/// # Errors
	/// Returns `ModelError::Io` if the file cannot be read.
	pub fn train_file<P: AsRef<Path>>(&mut self, filename: P) -> Result<()> {
		let corpus = read_corpus(&filename)?;
		info!("training on {} ({} bytes)", filename.as_ref().display(), corpus.len());
		self.train_str(&corpus);
		Ok(())
	}

	/// Extends `seed_text` with sampled characters up to `target_length` characters.
	///
	/// # Behavior
	/// - If `seed_text` is shorter than `window_length`, it is returned unchanged.
	/// - Otherwise the window starts as the last `window_length` characters of
	///   `seed_text` and each step draws the next character from its list.
	/// - Generation stops early, returning what was built so far, when the
	///   current window was never seen during training.
	///
	/// # Notes
	/// - Lengths are counted in characters, not bytes.
	/// - The output always starts with `seed_text`.
	pub fn generate(&mut self, seed_text: &str, target_length: usize) -> String {
		let mut window = Window::from_tail(seed_text, self.window_length());
		if !window.is_primed() {
			return seed_text.to_owned();
		}

		let mut result = seed_text.to_owned();
		let mut length = seed_text.chars().count();
		while length < target_length {
			let key = window.key();
			let Some(list) = self.table.lookup(&key) else {
				trace!("unseen context {:?} after {} chars, stopping", key, length);
				break;
			};

			let uniform: f64 = self.rng.random();
			let Some(next_char) = sampler::draw(list, uniform) else {
				break;
			};

			result.push(next_char);
			length += 1;
			window.slide(next_char);
		}

		result
	}
}

/// One line per context, sorted by context: `<context> : <list>`.
impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for context in self.table.contexts() {
			if let Some(list) = self.table.lookup(context.as_str()) {
				writeln!(f, "{} : {}", context, list)?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ModelError;

	fn trained(window_length: usize, corpus: &str) -> LanguageModel {
		let mut model = LanguageModel::with_seed(window_length, 42).unwrap();
		model.train_str(corpus);
		model
	}

	#[test]
	fn zero_window_is_a_configuration_error() {
		assert!(matches!(LanguageModel::new(0), Err(ModelError::InvalidWindowLength(0))));
		assert!(matches!(LanguageModel::with_seed(0, 1), Err(ModelError::InvalidWindowLength(0))));
	}

	#[test]
	fn repeating_corpus_has_a_certain_successor() {
		let model = trained(3, "abcabcabcabc");
		let list = model.lookup("abc").unwrap();

		assert_eq!(list.len(), 1);
		let entry = list.entry_at(0);
		assert_eq!(entry.chr(), 'a');
		assert_eq!(entry.count(), 3);
		assert_eq!(entry.probability(), 1.0);
		assert_eq!(entry.cumulative(), 1.0);
	}

	#[test]
	fn repeating_corpus_generates_its_cycle() {
		let mut model = trained(3, "abcabcabcabc");
		assert_eq!(model.generate("abc", 6), "abcabc");
		assert_eq!(model.generate("abc", 10), "abcabcabca");
	}

	#[test]
	fn priming_chars_are_not_observations() {
		let model = trained(3, "abcd");
		assert_eq!(model.table().len(), 1);
		assert_eq!(model.lookup("abc").unwrap().total_count(), 1);
		assert!(model.lookup("bcd").is_none());
	}

	#[test]
	fn corpus_shorter_than_window_gives_empty_model() {
		let model = trained(5, "abc");
		assert!(model.table().is_empty());
		assert_eq!(model.to_string(), "");
	}

	#[test]
	fn huge_window_trains_nothing_and_keeps_seed() {
		for window_length in [usize::MAX, 1 << 40] {
			let mut model = LanguageModel::with_seed(window_length, 1).unwrap();
			model.train_str("abcabcabc");
			assert!(model.table().is_empty());
			assert_eq!(model.table().window_length(), window_length);
			assert_eq!(model.generate("abc", 10), "abc");
		}
	}

	#[test]
	fn short_seed_is_returned_unchanged() {
		let mut model = trained(3, "abcabcabc");
		assert_eq!(model.generate("ab", 50), "ab");
		assert_eq!(model.generate("", 50), "");
	}

	#[test]
	fn unseen_context_stops_generation() {
		let mut model = trained(2, "abababab");
		assert_eq!(model.generate("xyz", 20), "xyz");
		// "ab" -> 'a' -> "ba" -> 'b' ... never stops inside the corpus alphabet
		assert_eq!(model.generate("zab", 7), "zababab");
	}

	#[test]
	fn dead_end_returns_partial_result() {
		// "cd" is only ever followed by the end of the corpus
		let mut model = trained(2, "abcd");
		assert_eq!(model.generate("ab", 10), "abcd");
	}

	#[test]
	fn seed_longer_than_target_is_unchanged() {
		let mut model = trained(2, "abababab");
		assert_eq!(model.generate("ababab", 3), "ababab");
	}

	#[test]
	fn eager_and_batch_recompute_agree() {
		let corpus = "the theory of the thesis is that there is a theme";
		let mut eager = LanguageModel::from_options(
			ModelOptions::new(2).unwrap().with_seed(9).with_recompute(RecomputePolicy::Eager),
		);
		let mut batch = LanguageModel::from_options(
			ModelOptions::new(2).unwrap().with_seed(9).with_recompute(RecomputePolicy::Batch),
		);
		eager.train_str(corpus);
		batch.train_str(corpus);

		assert_eq!(eager.to_string(), batch.to_string());
		assert_eq!(eager.generate("th", 40), batch.generate("th", 40));
	}

	#[test]
	fn dump_lists_sorted_contexts() {
		let model = trained(1, "abab");
		assert_eq!(model.to_string(), "a : ( (b 2 1 1) )\nb : ( (a 1 1 1) )\n");
	}

	#[test]
	fn train_file_reads_corpus() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("corpus.txt");
		std::fs::write(&path, "abcabcabcabc").unwrap();

		let mut model = LanguageModel::with_seed(3, 1).unwrap();
		model.train_file(&path).unwrap();
		assert_eq!(model.lookup("abc").unwrap().total_count(), 3);
	}

	#[test]
	fn train_file_missing_is_an_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let mut model = LanguageModel::new(3).unwrap();
		let err = model.train_file(dir.path().join("missing.txt")).unwrap_err();
		assert!(matches!(err, ModelError::Io(_)));
	}
}
