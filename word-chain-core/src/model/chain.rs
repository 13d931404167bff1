use log::debug;
use rand::Rng;

use super::cursor::Cursor;
use super::generator;
use super::options::GenerateOptions;
use super::transition_table::TransitionTable;
use crate::error::ChainError;
use crate::text;

/// Word chain bundling the learned counts with its generation cursor.
///
/// Fields:
/// - `table`: the learned transition counts, replaced on every training.
/// - `cursor`: the current token, carried from one generation to the next.
///
/// # Lifecycle
/// - Created empty (no edges, unset cursor)
/// - Trained once; training discards any previous table and cursor
/// - Read many times through `generate`, which moves the cursor
#[derive(Clone, Debug, Default)]
pub struct Chain {
	table: TransitionTable,
	cursor: Cursor,
}

impl Chain {
	/// Returns an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a chain trained on `tokens`.
	pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut chain = Self::new();
		chain.train(tokens);
		chain
	}

	/// Builds a chain trained on the whitespace-separated words of `text`.
	pub fn from_text(text: &str) -> Self {
		let mut chain = Self::new();
		chain.train_text(text);
		chain
	}

	/// Read-only access to the learned transitions.
	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	pub fn cursor(&self) -> &Cursor {
		&self.cursor
	}

	/// Empties the table and unsets the cursor.
	pub fn clear(&mut self) {
		self.table.clear();
		self.cursor.reset();
	}

	/// Sets the token the next generation continues from.
	pub fn set_start(&mut self, token: &str) {
		self.cursor.set(token);
	}

	/// Unsets the cursor; the next generation without a start token
	/// picks a random one.
	pub fn reset_cursor(&mut self) {
		self.cursor.reset();
	}

	/// Adds one observation of the `source → destination` edge.
	pub fn insert(&mut self, source: &str, destination: &str) {
		self.table.insert(source, destination);
	}

	/// Trains the chain on an ordered token sequence.
	///
	/// # Behavior
	/// - Clears the table and the cursor first: training is not cumulative.
	/// - Records one edge for every adjacent pair of tokens.
	/// - Fewer than 2 tokens leave the table empty.
	pub fn train<S: AsRef<str>>(&mut self, tokens: &[S]) {
		self.clear();
		for pair in tokens.windows(2) {
			self.table.insert(pair[0].as_ref(), pair[1].as_ref());
		}
		debug!(
			"Trained on {} tokens: {} source tokens",
			tokens.len(),
			self.table.len()
		);
	}

	/// Trains the chain on the whitespace-separated words of `text`.
	pub fn train_text(&mut self, text: &str) {
		self.train(&text::tokenize(text));
	}

	/// Samples the token following the cursor and moves the cursor to it.
	///
	/// Returns `None` if the cursor is unset or its token has no
	/// continuation; the cursor is left unchanged in that case.
	pub fn next_token<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
		let current = self.cursor.current()?;
		let next = self.table.next_token(current, rng)?.to_owned();
		self.cursor.set(&next);
		Some(next)
	}

	/// Generates a token sequence using the thread-local RNG.
	///
	/// See `generate_with`.
	pub fn generate(&mut self, options: &GenerateOptions) -> Result<Vec<String>, ChainError> {
		self.generate_with(options, &mut rand::rng())
	}

	/// Generates a token sequence using the given RNG.
	///
	/// The cursor is updated to the last emitted token.
	///
	/// # Errors
	/// - `ChainError::EmptyModel` if no start is given, the cursor is unset
	///   and the chain has not learned any edge.
	pub fn generate_with<R: Rng + ?Sized>(
		&mut self,
		options: &GenerateOptions,
		rng: &mut R,
	) -> Result<Vec<String>, ChainError> {
		generator::generate(&self.table, &mut self.cursor, options, rng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn train_resets_previous_state() {
		let mut chain = Chain::from_tokens(&["x", "y"]);
		chain.set_start("x");

		chain.train(&["a", "b"]);
		assert_eq!(chain.table().weight("x", "y"), 0);
		assert_eq!(chain.table().weight("a", "b"), 1);
		assert!(!chain.cursor().is_set());
	}

	#[test]
	fn short_input_gives_empty_table() {
		assert!(Chain::from_tokens::<&str>(&[]).table().is_empty());
		assert!(Chain::from_tokens(&["alone"]).table().is_empty());
		assert!(Chain::from_text("   ").table().is_empty());
	}

	#[test]
	fn from_text_splits_on_whitespace() {
		let chain = Chain::from_text("the cat\nthe dog");
		assert_eq!(chain.table().weight("the", "cat"), 1);
		assert_eq!(chain.table().weight("cat", "the"), 1);
		assert_eq!(chain.table().weight("the", "dog"), 1);
	}

	#[test]
	fn next_token_moves_cursor() {
		let mut chain = Chain::from_tokens(&["a", "b"]);
		let mut rng = StdRng::seed_from_u64(9);

		assert_eq!(chain.next_token(&mut rng), None);

		chain.set_start("a");
		assert_eq!(chain.next_token(&mut rng).as_deref(), Some("b"));
		assert_eq!(chain.cursor().current(), Some("b"));

		assert_eq!(chain.next_token(&mut rng), None);
		assert_eq!(chain.cursor().current(), Some("b"));
	}

	#[test]
	fn insert_builds_table_incrementally() {
		let mut chain = Chain::new();
		chain.insert("a", "b");
		chain.insert("a", "b");
		assert_eq!(chain.table().weight("a", "b"), 2);

		let options = GenerateOptions::new(2).unwrap();
		let mut rng = StdRng::seed_from_u64(0);
		assert_eq!(chain.generate_with(&options, &mut rng).unwrap(), vec!["a", "b"]);
	}

	#[test]
	fn generation_continues_from_cursor() {
		let mut chain = Chain::from_tokens(&["a", "b", "c"]);
		chain.set_start("a");
		let options = GenerateOptions::new(2).unwrap();

		assert_eq!(chain.generate(&options).unwrap(), vec!["a", "b"]);
		assert_eq!(chain.generate(&options).unwrap(), vec!["b", "c"]);

		chain.reset_cursor();
		chain.clear();
		assert_eq!(chain.generate(&options), Err(ChainError::EmptyModel));
	}

	#[test]
	fn restart_returns_to_cursor_seed() {
		let mut chain = Chain::from_tokens(&["x", "y"]);
		chain.set_start("x");
		let options = GenerateOptions::new(5).unwrap().with_restart(true);
		let mut rng = StdRng::seed_from_u64(0);

		let tokens = chain.generate_with(&options, &mut rng).unwrap();
		assert_eq!(tokens, vec!["x", "y", "x", "y", "x"]);
		assert_eq!(chain.cursor().current(), Some("x"));
	}

	#[test]
	fn restart_returns_to_random_seed() {
		// "x" is the only word with a follower, so the random pick is "x"
		let mut chain = Chain::from_tokens(&["x", "y"]);
		let options = GenerateOptions::new(5).unwrap().with_restart(true);
		let mut rng = StdRng::seed_from_u64(31);

		assert!(!chain.cursor().is_set());
		let tokens = chain.generate_with(&options, &mut rng).unwrap();
		assert_eq!(tokens, vec!["x", "y", "x", "y", "x"]);
	}

	#[test]
	fn restart_after_continuing_from_previous_call() {
		let mut chain = Chain::from_tokens(&["x", "y"]);
		chain.set_start("x");
		let options = GenerateOptions::new(4).unwrap().with_restart(true);
		let mut rng = StdRng::seed_from_u64(0);

		assert_eq!(chain.generate_with(&options, &mut rng).unwrap(), vec!["x", "y", "x", "y"]);
		assert_eq!(chain.cursor().current(), Some("y"));

		// The second call seeds from "y", a dead end, so every restart repeats "y"
		let options = GenerateOptions::new(3).unwrap().with_restart(true);
		assert_eq!(chain.generate_with(&options, &mut rng).unwrap(), vec!["y", "y", "y"]);
		assert_eq!(chain.cursor().current(), Some("y"));
	}
}
