//! Top-level module for the language identification pipeline.
//!
//! Components, leaf-first:
//! - Word normalization (`tokenizer`)
//! - Sliding-window n-gram extraction (`ngram`)
//! - N-gram frequency counting (`Histogram`)
//! - Cosine similarity between histograms (`similarity`)
//! - One labeled histogram per language (`LanguageModel`)
//! - Training from a corpus directory (`ModelStore`)
//! - Arg-max ranking of a query document (`Classifier`)

/// Splits raw lines into normalized lowercase ASCII words.
pub mod tokenizer;

/// Fixed-length character n-grams of a normalized word.
pub mod ngram;

/// N-gram occurrence counts.
///
/// Accumulation is commutative, so partial histograms built in any order
/// (or on any thread) merge into the same result.
pub mod histogram;

/// Cosine similarity between two histograms seen as sparse vectors.
pub mod similarity;

/// A language label paired with its aggregated histogram.
pub mod language_model;

/// Models of every language found under a corpus root.
///
/// Handles directory traversal, parallel training and the report of
/// documents that could not be read.
pub mod store;

/// High-level interface classifying a document against a `ModelStore`.
pub mod classifier;
