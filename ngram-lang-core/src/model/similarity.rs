use super::histogram::Histogram;

/// Cosine similarity of two histograms treated as sparse vectors.
///
/// `dot(h1, h2) / sqrt(|h1|² * |h2|²)`. The dot product only visits the
/// smaller histogram since missing keys contribute 0, while each squared
/// magnitude covers its own full key set. Sums are computed on integers, so
/// the result does not depend on argument order.
///
/// Returns `None` when either histogram is empty: the magnitude is 0 and the
/// similarity is undefined.
pub fn cosine_similarity(h1: &Histogram, h2: &Histogram) -> Option<f64> {
	let magnitude1 = h1.squared_magnitude();
	let magnitude2 = h2.squared_magnitude();
	if magnitude1 == 0 || magnitude2 == 0 {
		return None;
	}

	let (small, large) = if h1.len() <= h2.len() { (h1, h2) } else { (h2, h1) };
	let dot_product: u128 = small
		.iter()
		.map(|(ngram, count)| u128::from(count) * u128::from(large.get(ngram)))
		.sum();

	Some(dot_product as f64 / (magnitude1 as f64 * magnitude2 as f64).sqrt())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn histogram(text: &str) -> Histogram {
		Histogram::from_lines([text], 2)
	}

	#[test]
	fn identical_histograms_score_one() {
		let h = histogram("the cat sat on the mat");
		let score = cosine_similarity(&h, &h).unwrap();
		assert!((score - 1.0).abs() < 1e-12);
	}

	#[test]
	fn disjoint_histograms_score_zero() {
		assert_eq!(cosine_similarity(&histogram("abab"), &histogram("cdcd")), Some(0.0));
	}

	#[test]
	fn known_value() {
		// h1 = {ab: 1, bc: 1}, h2 = {ab: 1} -> 1 / sqrt(2)
		let score = cosine_similarity(&histogram("abc"), &histogram("ab")).unwrap();
		assert!((score - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
	}

	#[test]
	fn symmetric() {
		let h1 = histogram("the dog sat");
		let h2 = histogram("the cat sat on the mat");
		assert_eq!(cosine_similarity(&h1, &h2), cosine_similarity(&h2, &h1));
	}

	#[test]
	fn empty_histogram_is_undefined() {
		let empty = Histogram::new();
		let h = histogram("chat");
		assert_eq!(cosine_similarity(&empty, &h), None);
		assert_eq!(cosine_similarity(&h, &empty), None);
		assert_eq!(cosine_similarity(&empty, &empty), None);
	}
}
