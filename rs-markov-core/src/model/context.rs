use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt;

/// Lookup key: exactly `window_length` consecutive characters.
///
/// Equality and hashing are by content. A `Context` is never mutated once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Context(String);

impl Context {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for Context {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Sliding buffer holding the last `capacity` characters seen.
///
/// Pushing into a full window drops its oldest character. A window is
/// *primed* once it holds exactly `capacity` characters; only primed windows
/// yield a `Context`.
#[derive(Clone, Debug)]
pub(crate) struct Window {
	chars: VecDeque<char>,
	capacity: usize,
}

impl Window {
	pub(crate) fn new(capacity: usize) -> Self {
		Self { chars: VecDeque::new(), capacity }
	}

	/// Builds a window from the last `capacity` characters of `text`.
	///
	/// The result is unprimed when `text` is shorter than `capacity`.
	pub(crate) fn from_tail(text: &str, capacity: usize) -> Self {
		let mut window = Self::new(capacity);
		for c in text.chars() {
			window.slide(c);
		}
		window
	}

	/// Appends `c`, dropping the oldest character when the window is full.
	pub(crate) fn slide(&mut self, c: char) {
		self.chars.push_back(c);
		if self.chars.len() > self.capacity {
			self.chars.pop_front();
		}
	}

	pub(crate) fn is_primed(&self) -> bool {
		self.chars.len() == self.capacity
	}

	/// Current content as a string key, whether primed or not.
	pub(crate) fn key(&self) -> String {
		self.chars.iter().collect()
	}

	/// Current content as a `Context`, or `None` while priming.
	pub(crate) fn context(&self) -> Option<Context> {
		self.is_primed().then(|| Context(self.key()))
	}
}
