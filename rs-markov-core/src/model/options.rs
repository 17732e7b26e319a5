use crate::error::{ModelError, Result};

/// Seed used when a reproducible model is wanted without picking a value.
pub const DEFAULT_SEED: u64 = 20;

/// When frequency lists get their probabilities recomputed during training.
///
/// Both policies leave every list current before `train` returns, so
/// generation output does not depend on the choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecomputePolicy {
	/// After every single observation.
	Eager,
	/// Once per list, at the end of each training pass.
	#[default]
	Batch,
}

/// Construction parameters for a `LanguageModel`.
///
/// # Invariants
/// - `window_length > 0` (checked by [`ModelOptions::new`])
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelOptions {
	window_length: usize,

	/// Seed of the random source. `None` draws from the OS.
	pub seed: Option<u64>,

	pub recompute: RecomputePolicy,
}

impl ModelOptions {
	/// Creates options for the given window length, unseeded, batch recompute.
	///
	/// # Errors
	/// Returns `ModelError::InvalidWindowLength` if `window_length == 0`.
	pub fn new(window_length: usize) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength(window_length));
		}
		Ok(Self { window_length, seed: None, recompute: RecomputePolicy::default() })
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	pub fn with_recompute(mut self, recompute: RecomputePolicy) -> Self {
		self.recompute = recompute;
		self
	}

	/// Number of characters in every context.
	pub fn window_length(&self) -> usize {
		self.window_length
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_window_is_rejected() {
		assert!(matches!(ModelOptions::new(0), Err(ModelError::InvalidWindowLength(0))));
	}

	#[test]
	fn defaults_are_unseeded_batch() {
		let options = ModelOptions::new(3).unwrap();
		assert_eq!(options.window_length(), 3);
		assert_eq!(options.seed, None);
		assert_eq!(options.recompute, RecomputePolicy::Batch);
	}

	#[test]
	fn builders_override_defaults() {
		let options = ModelOptions::new(2).unwrap().with_seed(7).with_recompute(RecomputePolicy::Eager);
		assert_eq!(options.seed, Some(7));
		assert_eq!(options.recompute, RecomputePolicy::Eager);
	}
}
