/// Sliding-window n-grams `word[i..i + n]` for `i` in `0..=len - n`.
///
/// Words shorter than `n` (and `n == 0`) yield nothing. The word is expected
/// to be normalized ASCII; windows that would split a multi-byte character
/// are skipped instead of panicking.
pub fn ngrams(word: &str, n: usize) -> impl Iterator<Item = &str> {
	let count = if n == 0 { 0 } else { (word.len() + 1).saturating_sub(n) };
	(0..count).filter_map(move |i| word.get(i..i + n))
}
