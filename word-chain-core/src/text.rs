/// Splits a text into tokens on any Unicode whitespace.
///
/// No normalization is applied: case and punctuation are kept as-is.
/// Consecutive whitespace never produces empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

/// Joins tokens with a single space.
///
/// Example:
/// `["the", "cat"]` → `"the cat"`
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
	tokens
		.iter()
		.map(|t| t.as_ref())
		.collect::<Vec<_>>()
		.join(" ")
}
