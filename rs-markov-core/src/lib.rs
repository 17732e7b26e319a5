//! Character-level n-gram text generation library.
//!
//! This crate provides an order-k Markov model over characters:
//! - Context table built from a training corpus
//! - Per-context frequency lists with cumulative probabilities
//! - Inverse-CDF sampling driven by an owned, seedable random source
//!
//! Corpus loading lives in `io`, shared with the binaries.

/// Language model, its context table and sampling primitives.
pub mod model;

/// Errors returned by the model API.
pub mod error;

/// I/O utilities (corpus loading, directory listing).
pub mod io;

pub use error::{ModelError, Result};
pub use model::language_model::LanguageModel;
pub use model::options::{ModelOptions, RecomputePolicy};
