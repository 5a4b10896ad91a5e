/// Removes every character that is not an ASCII letter and lowercases the rest.
///
/// The result may be empty (ex. `"123"` or `"--"`).
pub fn normalize(token: &str) -> String {
	token
		.chars()
		.filter(char::is_ascii_alphabetic)
		.map(|c| c.to_ascii_lowercase())
		.collect()
}

/// Space, tab, line feed, vertical tab, form feed and carriage return.
fn is_separator(c: char) -> bool {
	matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Normalized words of a single line.
///
/// The line is split on runs of separators. Tokens left empty by
/// normalization are yielded as empty strings.
pub fn words(line: &str) -> impl Iterator<Item = String> + '_ {
	line.split(is_separator).filter(|token| !token.is_empty()).map(normalize)
}
