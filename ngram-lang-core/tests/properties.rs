//! Property-based tests for the n-gram pipeline.
//!
//! Covers:
//! 1. Histogram accumulation is independent of document order
//! 2. N-gram count of a word
//! 3. Normalization idempotence
//! 4. Self-similarity and symmetry of cosine similarity

use ngram_lang_core::cosine_similarity;
use ngram_lang_core::model::ngram::ngrams;
use ngram_lang_core::model::tokenizer::normalize;
use ngram_lang_core::Histogram;
use proptest::prelude::*;

fn documents() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("[a-zA-Z ,.!0-9]{0,40}", 0..8)
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(100))]

	#[test]
	fn prop_document_order_does_not_matter(
		(docs, shuffled) in documents().prop_flat_map(|docs| {
			let shuffled = Just(docs.clone()).prop_shuffle();
			(Just(docs), shuffled)
		}),
		n in 1usize..4,
	) {
		let mut forward = Histogram::new();
		for doc in &docs {
			forward.merge(&Histogram::from_lines(doc.lines(), n));
		}

		let mut permuted = Histogram::new();
		for doc in &shuffled {
			permuted.merge(&Histogram::from_lines(doc.lines(), n));
		}

		prop_assert_eq!(forward, permuted);
	}

	#[test]
	fn prop_ngram_count(word in "[a-z]{0,20}", n in 1usize..6) {
		let grams: Vec<&str> = ngrams(&word, n).collect();
		let expected = if word.len() >= n { word.len() - n + 1 } else { 0 };
		prop_assert_eq!(grams.len(), expected);
		for gram in grams {
			prop_assert_eq!(gram.len(), n);
		}
	}

	#[test]
	fn prop_normalize_is_idempotent(token in "\\PC{0,20}") {
		let once = normalize(&token);
		prop_assert_eq!(normalize(&once), once.clone());
		prop_assert!(once.chars().all(|c| c.is_ascii_lowercase()));
	}

	#[test]
	fn prop_self_similarity_is_one(text in "[a-z ]{0,60}", n in 1usize..4) {
		let h = Histogram::from_lines([text.as_str()], n);
		match cosine_similarity(&h, &h) {
			Some(score) => prop_assert!((score - 1.0).abs() < 1e-9),
			None => prop_assert!(h.is_empty()),
		}
	}

	#[test]
	fn prop_similarity_is_symmetric(a in "[a-e ]{0,40}", b in "[a-e ]{0,40}") {
		let h1 = Histogram::from_lines([a.as_str()], 2);
		let h2 = Histogram::from_lines([b.as_str()], 2);
		prop_assert_eq!(cosine_similarity(&h1, &h2), cosine_similarity(&h2, &h1));
		if let Some(score) = cosine_similarity(&h1, &h2) {
			prop_assert!((0.0..=1.0 + 1e-12).contains(&score));
		}
	}
}
