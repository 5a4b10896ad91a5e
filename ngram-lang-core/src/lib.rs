//! Character n-gram language identification library.
//!
//! This crate classifies a text document into one of several known languages:
//! - Text normalization into lowercase ASCII words
//! - Sliding-window character n-gram extraction
//! - Per-language n-gram frequency histograms built from labeled corpora
//! - Cosine similarity ranking of a query histogram against every language
//!
//! Directory traversal helpers are kept internal; callers hand the library a
//! corpus root and get back trained models and a predicted label.

/// Tokenization, histograms, language models and the classifier.
pub mod model;

/// Training and classification settings.
pub mod config;

/// Library error type.
pub mod error;

/// I/O utilities (directory listing, lazy line reading).
pub(crate) mod io;

pub use config::Config;
pub use error::{Error, Result};
pub use model::classifier::{Classification, Classifier, Score};
pub use model::histogram::Histogram;
pub use model::language_model::LanguageModel;
pub use model::similarity::cosine_similarity;
pub use model::store::{BuildReport, ModelStore, SkippedDocument};
