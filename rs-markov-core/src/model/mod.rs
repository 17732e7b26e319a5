//! Top-level module for the character n-gram model.
//!
//! Components, leaf-first:
//! - Observations of one character following a context (`CharObservation`)
//! - Ordered per-context counts (`FrequencyList`)
//! - Probability assignment (`probability`) and sampling (`sampler`)
//! - Context keys and the sliding window (`context`)
//! - The context → list mapping (`ContextTable`)
//! - The owning model with training and generation (`LanguageModel`)

/// Context keys and the fixed-size sliding window used to build them.
pub mod context;

/// Mapping from context to its frequency list.
pub mod context_table;

/// Ordered collection of per-character counts for one context.
pub mod frequency_list;

/// Trainable, seedable language model.
///
/// Drives the training pass over a corpus and the generation pass from a
/// seed text.
pub mod language_model;

/// One observed character with its count and derived probabilities.
pub mod observation;

/// Construction options (window length, random seed, recompute policy).
pub mod options;

/// Normalized and cumulative probability assignment.
pub mod probability;

/// Inverse-CDF draw over a frequency list.
pub mod sampler;
