use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use log::{debug, info, warn};

use super::histogram::Histogram;
use super::language_model::LanguageModel;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::io::{get_filename, list_dirs, list_files, read_lines};

/// A training document that could not be read and was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
	pub path: PathBuf,
	pub reason: String,
}

/// Summary of a training run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
	/// Number of language folders found.
	pub languages: usize,

	/// Documents read and counted.
	pub documents: usize,

	/// Documents skipped because of a read error, sorted by path.
	pub skipped: Vec<SkippedDocument>,
}

/// The trained language models of one session.
///
/// Models are indexed by label in sorted order, which gives classification
/// a deterministic iteration order.
///
/// # Invariants
/// - `n` is always >= 1
/// - Every model was built with the same `n`
#[derive(Clone, Debug, PartialEq)]
pub struct ModelStore {
	n: usize,
	models: BTreeMap<String, LanguageModel>,
}

impl ModelStore {
	/// Creates an empty store for n-grams of length `n`.
	///
	/// # Errors
	/// Returns an error if `n == 0`.
	pub fn new(n: usize) -> Result<Self> {
		if n == 0 {
			return Err(Error::InvalidN(n));
		}
		Ok(Self { n, models: BTreeMap::new() })
	}

	/// Trains one model per subdirectory of `root`.
	///
	/// # Behavior
	/// - Each subdirectory is a language; its name is the label.
	/// - Files directly inside it with `config.extension` are training documents.
	/// - Documents are split into chunks (one per worker) and counted in parallel.
	/// - Partial histograms are merged; the result does not depend on the split.
	/// - A folder without documents yields an empty model.
	///
	/// # Errors
	/// - `root` is not a directory, or has no subdirectory.
	/// - A directory cannot be listed.
	///
	/// Unreadable documents are not errors: they are listed in the returned
	/// [`BuildReport`] and contribute nothing.
	pub fn build<P: AsRef<Path>>(root: P, config: &Config) -> Result<(Self, BuildReport)> {
		config.validate()?;
		let root = root.as_ref();
		if !root.is_dir() {
			return Err(Error::NotADirectory(root.to_path_buf()));
		}

		let folders = list_dirs(root).map_err(|e| Error::io(root, e))?;
		if folders.is_empty() {
			return Err(Error::NoLanguages(root.to_path_buf()));
		}

		let mut histograms: BTreeMap<String, Histogram> = BTreeMap::new();
		let mut documents = Vec::new();
		for folder in &folders {
			let label = get_filename(folder).map_err(|e| Error::io(folder, e))?;
			let files = list_files(folder, &config.extension).map_err(|e| Error::io(folder, e))?;
			debug!("Language '{}': {} document(s)", label, files.len());

			documents.extend(files.into_iter().map(|path| (label.clone(), path)));
			histograms.insert(label, Histogram::new());
		}

		let mut partial = train_parallel(documents, config.n, config.worker_count())?;
		for (label, histogram) in &partial.histograms {
			histograms.entry(label.clone()).or_default().merge(histogram);
		}
		partial.skipped.sort_by(|a, b| a.path.cmp(&b.path));

		let mut store = Self::new(config.n)?;
		for (label, histogram) in histograms {
			info!("Trained '{}': {} distinct {}-grams", label, histogram.len(), config.n);
			store.insert(LanguageModel::new(label, histogram));
		}

		let report = BuildReport {
			languages: store.len(),
			documents: partial.documents,
			skipped: partial.skipped,
		};
		info!(
			"Built {} language model(s) from {} document(s), {} skipped",
			report.languages,
			report.documents,
			report.skipped.len()
		);

		Ok((store, report))
	}

	/// N-gram length shared by every model.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Adds a model, replacing and returning any model with the same label.
	pub fn insert(&mut self, model: LanguageModel) -> Option<LanguageModel> {
		self.models.insert(model.label().to_owned(), model)
	}

	pub fn get(&self, label: &str) -> Option<&LanguageModel> {
		self.models.get(label)
	}

	pub fn len(&self) -> usize {
		self.models.len()
	}

	pub fn is_empty(&self) -> bool {
		self.models.is_empty()
	}

	/// Iterates over models in label order.
	pub fn iter(&self) -> impl Iterator<Item = &LanguageModel> {
		self.models.values()
	}

	/// Labels in sorted order.
	pub fn labels(&self) -> Vec<String> {
		self.models.keys().cloned().collect()
	}
}

/// Per-worker training output.
#[derive(Default)]
struct PartialTraining {
	histograms: HashMap<String, Histogram>,
	documents: usize,
	skipped: Vec<SkippedDocument>,
}

impl PartialTraining {
	fn merge(&mut self, other: PartialTraining) {
		for (label, histogram) in other.histograms {
			match self.histograms.get_mut(&label) {
				Some(existing) => existing.merge(&histogram),
				None => {
					self.histograms.insert(label, histogram);
				}
			}
		}
		self.documents += other.documents;
		self.skipped.extend(other.skipped);
	}
}

/// Splits documents into chunks, counts each chunk on its own thread and
/// merges the partial results.
///
/// # Notes
/// - Uses MPSC channels to collect partial results from threads.
/// - A single worker runs on the calling thread.
fn train_parallel(documents: Vec<(String, PathBuf)>, n: usize, workers: usize) -> Result<PartialTraining> {
	if documents.is_empty() {
		return Ok(PartialTraining::default());
	}

	let workers = workers.clamp(1, documents.len());
	if workers == 1 {
		return Ok(train_chunk(&documents, n));
	}
	let chunk_size = documents.len().div_ceil(workers);

	let (tx, rx) = mpsc::channel();
	let mut handles = Vec::with_capacity(workers);
	for chunk in documents.chunks(chunk_size) {
		let tx = tx.clone();
		let chunk: Vec<(String, PathBuf)> = chunk.to_vec();

		handles.push(thread::spawn(move || {
			// The receiver outlives every worker
			let _ = tx.send(train_chunk(&chunk, n));
		}));
	}
	drop(tx);

	let mut total = PartialTraining::default();
	for partial in rx.iter() {
		total.merge(partial);
	}

	for handle in handles {
		handle
			.join()
			.map_err(|_| Error::Worker("training thread panicked".to_owned()))?;
	}

	Ok(total)
}

fn train_chunk(chunk: &[(String, PathBuf)], n: usize) -> PartialTraining {
	let mut partial = PartialTraining::default();
	for (label, path) in chunk {
		match read_document(path, n) {
			Ok(histogram) => {
				debug!("Counted {} ({} n-grams)", path.display(), histogram.total());
				partial.histograms.entry(label.clone()).or_default().merge(&histogram);
				partial.documents += 1;
			}
			Err(e) => {
				warn!("Skipping unreadable document {}: {}", path.display(), e);
				partial.skipped.push(SkippedDocument { path: path.clone(), reason: e.to_string() });
			}
		}
	}
	partial
}

/// Counts a whole document. Nothing is returned unless every line was read.
pub(crate) fn read_document(path: &Path, n: usize) -> io::Result<Histogram> {
	let mut histogram = Histogram::new();
	for line in read_lines(path)? {
		histogram.add_line(&line?, n);
	}
	Ok(histogram)
}
