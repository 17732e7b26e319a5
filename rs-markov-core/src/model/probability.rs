use super::observation::CharObservation;

/// Assigns `probability` and `cumulative` to every entry, in slice order.
///
/// `probability = count / total` and `cumulative` is the running sum of
/// probabilities starting from 0 before the first entry, so the last
/// `cumulative` is 1.0 up to rounding.
///
/// An empty slice is left untouched (there is no total to divide by).
pub(crate) fn recompute(entries: &mut [CharObservation]) {
	let total: u64 = entries.iter().map(|entry| entry.count).sum();
	if total == 0 {
		// Never reached: entries are created with a count of 1
		return;
	}

	let total = total as f64;
	let mut cumulative = 0.0;
	for entry in entries.iter_mut() {
		entry.probability = entry.count as f64 / total;
		cumulative += entry.probability;
		entry.cumulative = cumulative;
	}
}
