use std::collections::HashMap;

use super::ngram::ngrams;
use super::tokenizer::words;

/// N-gram frequency counts of a document or a whole corpus.
///
/// Conceptually, this is a sparse vector indexed by n-gram.
///
/// ## Responsibilities:
/// - Count n-gram occurrences while text is ingested
/// - Merge with another histogram (ex. parallel training support)
/// - Expose the sums needed by cosine similarity
///
/// ## Invariants
/// - Every count is strictly positive
/// - Keys built through `add_line` have length `n` and contain only `a`-`z`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Histogram {
	/// Occurrences indexed by n-gram.
	/// Example: { "th" => 42, "he" => 37 }
	counts: HashMap<String, u64>,
}

impl Histogram {
	/// Creates a new empty histogram.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a histogram from raw text lines with n-grams of length `n`.
	pub fn from_lines<I, S>(lines: I, n: usize) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut histogram = Self::new();
		for line in lines {
			histogram.add_line(line.as_ref(), n);
		}
		histogram
	}

	/// Records one occurrence of `ngram`.
	///
	/// - If the n-gram already exists, its count is increased.
	/// - Otherwise, a new entry is created with an initial count of 1.
	pub fn add(&mut self, ngram: &str) {
		match self.counts.get_mut(ngram) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(ngram.to_owned(), 1);
			}
		}
	}

	/// Tokenizes a raw line and counts the n-grams of every word.
	pub fn add_line(&mut self, line: &str, n: usize) {
		for word in words(line) {
			for ngram in ngrams(&word, n) {
				self.add(ngram);
			}
		}
	}

	/// Merges another histogram into this one by summing counts.
	pub fn merge(&mut self, other: &Self) {
		for (ngram, count) in &other.counts {
			*self.counts.entry(ngram.clone()).or_insert(0) += *count;
		}
	}

	/// Count of `ngram`, 0 when unseen.
	pub fn get(&self, ngram: &str) -> u64 {
		self.counts.get(ngram).copied().unwrap_or(0)
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Total number of n-gram occurrences.
	pub fn total(&self) -> u64 {
		self.counts.values().sum()
	}

	/// Sum of squared counts (squared vector magnitude, no square root).
	pub fn squared_magnitude(&self) -> u128 {
		self.counts.values().map(|&count| u128::from(count) * u128::from(count)).sum()
	}

	/// Iterates over `(ngram, count)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.counts.iter().map(|(ngram, count)| (ngram.as_str(), *count))
	}
}

impl<'a> Extend<&'a str> for Histogram {
	fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
		for ngram in iter {
			self.add(ngram);
		}
	}
}

impl<'a> FromIterator<&'a str> for Histogram {
	fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
		let mut histogram = Self::new();
		histogram.extend(iter);
		histogram
	}
}
