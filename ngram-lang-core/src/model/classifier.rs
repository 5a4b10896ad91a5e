use std::cmp::Ordering;
use std::path::Path;

use log::debug;
use serde::Serialize;

use super::histogram::Histogram;
use super::similarity::cosine_similarity;
use super::store::{read_document, BuildReport, ModelStore};
use crate::config::Config;
use crate::error::{Error, Result};

/// Similarity of the query to one language model.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Score {
	pub label: String,

	/// `None` when the similarity is undefined (empty query or empty model).
	pub similarity: Option<f64>,
}

/// Outcome of a classification.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Classification {
	/// Winning label.
	pub label: String,

	/// Similarity of the winning model.
	pub similarity: f64,

	/// Every model's score, best first, undefined scores last, ties by label.
	pub scores: Vec<Score>,
}

/// High-level classifier owning the trained language models.
///
/// # Responsibilities
/// - Train a `ModelStore` from a corpus directory
/// - Build the query histogram exactly like training histograms
/// - Rank every model by cosine similarity and return the best one
///
/// # Ranking policy
/// - Models with an undefined similarity never win
/// - Equal similarities go to the lexicographically smallest label
#[derive(Debug, Clone)]
pub struct Classifier {
	store: ModelStore,
}

impl Classifier {
	pub fn new(store: ModelStore) -> Self {
		Self { store }
	}

	/// Trains a classifier from a corpus root.
	///
	/// See [`ModelStore::build`].
	pub fn train<P: AsRef<Path>>(root: P, config: &Config) -> Result<(Self, BuildReport)> {
		let (store, report) = ModelStore::build(root, config)?;
		Ok((Self::new(store), report))
	}

	pub fn store(&self) -> &ModelStore {
		&self.store
	}

	/// N-gram length used for queries.
	pub fn n(&self) -> usize {
		self.store.n()
	}

	/// Classifies a document given as lines of text.
	pub fn classify<I, S>(&self, lines: I) -> Result<Classification>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		if self.store.is_empty() {
			return Err(Error::NoModels);
		}
		self.classify_histogram(&Histogram::from_lines(lines, self.n()))
	}

	pub fn classify_text(&self, text: &str) -> Result<Classification> {
		self.classify(text.lines())
	}

	/// Classifies a document read from disk.
	///
	/// # Errors
	/// Unlike training documents, an unreadable query is an error.
	pub fn classify_file<P: AsRef<Path>>(&self, path: P) -> Result<Classification> {
		if self.store.is_empty() {
			return Err(Error::NoModels);
		}
		let path = path.as_ref();
		let query = read_document(path, self.n()).map_err(|e| Error::io(path, e))?;
		self.classify_histogram(&query)
	}

	/// Ranks every model against an already built query histogram.
	///
	/// # Errors
	/// - [`Error::NoModels`] if the store is empty.
	/// - [`Error::UndefinedSimilarity`] if no model has a defined similarity.
	pub fn classify_histogram(&self, query: &Histogram) -> Result<Classification> {
		if self.store.is_empty() {
			return Err(Error::NoModels);
		}

		let mut scores = self.scores(query);
		let best = scores
			.iter()
			.filter_map(|score| score.similarity.map(|similarity| (score, similarity)))
			// Labels are visited in sorted order, keep the first on ties
			.fold(None, |best: Option<(&Score, f64)>, (score, similarity)| match best {
				Some((_, top)) if top >= similarity => best,
				_ => Some((score, similarity)),
			});

		let (label, similarity) = match best {
			Some((score, similarity)) => (score.label.clone(), similarity),
			None => return Err(Error::UndefinedSimilarity),
		};

		scores.sort_by(|a, b| compare_scores(a.similarity, b.similarity));

		Ok(Classification { label, similarity, scores })
	}

	/// Similarity of `query` to every model, in label order.
	pub fn scores(&self, query: &Histogram) -> Vec<Score> {
		self.store
			.iter()
			.map(|model| {
				let similarity = cosine_similarity(query, model.histogram());
				debug!("Similarity to '{}': {:?}", model.label(), similarity);
				Score { label: model.label().to_owned(), similarity }
			})
			.collect()
	}
}

/// Descending order with undefined similarities last.
fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) => b.total_cmp(&a),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::language_model::LanguageModel;

	fn store(models: &[(&str, &str)]) -> ModelStore {
		let mut store = ModelStore::new(2).unwrap();
		for (label, text) in models {
			store.insert(LanguageModel::new(*label, Histogram::from_lines(text.lines(), 2)));
		}
		store
	}

	#[test]
	fn picks_the_closest_language() {
		let classifier = Classifier::new(store(&[("englishTxt", "the cat sat"), ("frenchTxt", "le chat")]));
		let result = classifier.classify_text("the dog sat").unwrap();

		assert_eq!(result.label, "englishTxt");
		assert_eq!(result.scores.len(), 2);
		assert_eq!(result.scores[0].label, "englishTxt");
		let english = result.scores[0].similarity.unwrap();
		let french = result.scores[1].similarity.unwrap();
		assert!(english > french);
		assert_eq!(result.similarity, english);
	}

	#[test]
	fn ties_go_to_the_smallest_label() {
		let classifier = Classifier::new(store(&[("zulu", "abc"), ("alpha", "abc"), ("mike", "abc")]));
		for _ in 0..5 {
			let result = classifier.classify_text("abc").unwrap();
			assert_eq!(result.label, "alpha");
			let labels: Vec<&str> = result.scores.iter().map(|s| s.label.as_str()).collect();
			assert_eq!(labels, vec!["alpha", "mike", "zulu"]);
		}
	}

	#[test]
	fn empty_models_never_win() {
		let classifier = Classifier::new(store(&[("aaa", ""), ("bbb", "xyz")]));
		let result = classifier.classify_text("qqq").unwrap();
		assert_eq!(result.label, "bbb");
		assert_eq!(result.similarity, 0.0);
		assert_eq!(result.scores[1], Score { label: "aaa".to_owned(), similarity: None });
	}

	#[test]
	fn empty_store_has_no_prediction() {
		let classifier = Classifier::new(ModelStore::new(2).unwrap());
		assert!(matches!(classifier.classify_text("the cat"), Err(Error::NoModels)));
	}

	#[test]
	fn empty_query_has_no_prediction() {
		let classifier = Classifier::new(store(&[("englishTxt", "the cat sat")]));
		assert!(matches!(classifier.classify_text("a 1 !"), Err(Error::UndefinedSimilarity)));
	}

	#[test]
	fn query_with_invalid_utf8_is_classified() {
		let classifier = Classifier::new(store(&[("englishTxt", "the cat sat"), ("frenchTxt", "le chat est beau")]));
		let dir = tempfile::tempdir().unwrap();
		let query = dir.path().join("mystery.txt");
		std::fs::write(&query, b"le chat est tr\xe8s beau\n").unwrap();

		let result = classifier.classify_file(&query).unwrap();
		assert_eq!(result.label, "frenchTxt");
	}

	#[test]
	fn missing_query_file_is_an_error() {
		let classifier = Classifier::new(store(&[("englishTxt", "the cat sat")]));
		let dir = tempfile::tempdir().unwrap();
		assert!(matches!(
			classifier.classify_file(dir.path().join("missing.txt")),
			Err(Error::Io { .. })
		));
	}
}
