use super::histogram::Histogram;

/// Represents the n-gram profile of one language.
///
/// The `LanguageModel` pairs a label, taken from the name of the corpus
/// folder it was trained on, with the histogram aggregated across every
/// training document of that folder.
///
/// # Invariants
/// - Immutable once trained
/// - The histogram may be empty (folder without readable documents)
#[derive(Clone, Debug, PartialEq)]
pub struct LanguageModel {
	/// Folder name the model was trained from.
	label: String,

	/// Aggregated n-gram counts.
	histogram: Histogram,
}

impl LanguageModel {
	pub fn new(label: impl Into<String>, histogram: Histogram) -> Self {
		Self { label: label.into(), histogram }
	}

	/// Full label, identical to the training folder name.
	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn histogram(&self) -> &Histogram {
		&self.histogram
	}

	/// Label with its last `suffix_len` characters removed.
	///
	/// Corpora often name folders with a fixed suffix (ex. `englishTxt`).
	/// Labels that are not longer than the suffix are returned unchanged.
	pub fn display_label(&self, suffix_len: usize) -> &str {
		strip_suffix(&self.label, suffix_len)
	}
}

/// Removes the last `suffix_len` characters of `label`, if it is longer than that.
fn strip_suffix(label: &str, suffix_len: usize) -> &str {
	let char_count = label.chars().count();
	if suffix_len == 0 || char_count <= suffix_len {
		return label;
	}
	match label.char_indices().nth(char_count - suffix_len) {
		Some((end, _)) => &label[..end],
		None => label,
	}
}
