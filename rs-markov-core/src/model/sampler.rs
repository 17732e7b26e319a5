use super::frequency_list::FrequencyList;

/// Draws a character from `list` given a uniform value in `[0, 1)`.
///
/// Scans entries in first-observation order and returns the first one whose
/// cumulative probability is `>= uniform`. If rounding leaves the last
/// cumulative just under `uniform`, the last entry is returned.
///
/// Returns `None` only for an empty list.
pub fn draw(list: &FrequencyList, uniform: f64) -> Option<char> {
	let mut fallback = None;
	for entry in list {
		if entry.cumulative() >= uniform {
			return Some(entry.chr());
		}
		fallback = Some(entry.chr());
	}

	// Rounding at the tail
	fallback
}
