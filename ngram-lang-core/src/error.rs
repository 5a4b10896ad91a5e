use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while training language models or classifying a document.
///
/// Unreadable training documents are not errors: they are reported through
/// [`BuildReport`](crate::BuildReport) and training goes on without them.
#[derive(Error, Debug)]
pub enum Error {
	/// A directory or the query document could not be read.
	#[error("I/O error on {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("n-gram length must be >= 1, got {0}")]
	InvalidN(usize),

	#[error("Expected a directory, got: {}", .0.display())]
	NotADirectory(PathBuf),

	#[error("No language subdirectories found in {}", .0.display())]
	NoLanguages(PathBuf),

	#[error("No trained language models available")]
	NoModels,

	/// Every model scored an undefined similarity (empty query or empty models).
	#[error("Similarity is undefined against every language model, no prediction available")]
	UndefinedSimilarity,

	#[error("Invalid configuration: {0}")]
	Config(String),

	#[error("Training worker failed: {0}")]
	Worker(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}
