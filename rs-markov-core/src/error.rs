use std::io;

/// Errors that can occur while building or training a model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
	#[error("window length must be > 0, got {0}")]
	InvalidWindowLength(usize),

	#[error("failed to read corpus: {0}")]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
