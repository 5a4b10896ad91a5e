use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default n-gram length.
pub const DEFAULT_N: usize = 2;

/// Default extension of training documents.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Settings shared by training and classification.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// n = 3
/// extension = "txt"
/// label_suffix_len = 3
/// threads = 4
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// N-gram length, must be >= 1.
	pub n: usize,

	/// Extension of training documents. Empty accepts every file.
	pub extension: String,

	/// Trailing characters stripped from a folder name to build the display label.
	pub label_suffix_len: usize,

	/// Training worker threads. 0 uses one per CPU.
	pub threads: usize,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			n: DEFAULT_N,
			extension: DEFAULT_EXTENSION.to_owned(),
			label_suffix_len: 0,
			threads: 0,
		}
	}
}

impl Config {
	/// Parses a configuration from TOML text and validates it.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let config: Config = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Loads a configuration from a TOML file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path)
			.map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
		Self::from_toml_str(&content)
	}

	/// Checks the invariants other components rely on.
	///
	/// # Errors
	/// Returns [`Error::InvalidN`] if `n` is 0.
	pub fn validate(&self) -> Result<()> {
		if self.n == 0 {
			return Err(Error::InvalidN(self.n));
		}
		Ok(())
	}

	/// Number of training workers actually spawned.
	pub fn worker_count(&self) -> usize {
		if self.threads == 0 { num_cpus::get().max(1) } else { self.threads }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_documented_values() {
		let config = Config::default();
		assert_eq!(config.n, 2);
		assert_eq!(config.extension, "txt");
		assert_eq!(config.label_suffix_len, 0);
		assert!(config.worker_count() >= 1);
	}

	#[test]
	fn partial_toml_keeps_other_defaults() {
		let config = Config::from_toml_str("n = 3\nlabel_suffix_len = 3\n").unwrap();
		assert_eq!(config.n, 3);
		assert_eq!(config.label_suffix_len, 3);
		assert_eq!(config.extension, "txt");
		assert_eq!(config.threads, 0);
	}

	#[test]
	fn zero_n_is_rejected() {
		assert!(matches!(Config::from_toml_str("n = 0"), Err(Error::InvalidN(0))));
	}

	#[test]
	fn unknown_keys_are_rejected() {
		assert!(matches!(Config::from_toml_str("smoothing = true"), Err(Error::Config(_))));
	}

	#[test]
	fn explicit_thread_count_is_used() {
		let config = Config { threads: 3, ..Config::default() };
		assert_eq!(config.worker_count(), 3);
	}
}
