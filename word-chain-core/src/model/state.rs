use std::collections::BTreeMap;

use rand::Rng;

/// One row of the transition table: the words seen right after `key`.
///
/// Each destination word carries the number of times it followed `key`
/// in the training tokens.
///
/// ## Responsibilities:
/// - Count how often each word follows `key`
/// - Draw the following word with a caller-supplied RNG
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - A transition with a count of 0 is treated as absent
/// - Transitions are kept ordered so that a seeded RNG gives reproducible draws
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct State {
	/// Identifier of the state (the source token).
	key: String,
	/// Outgoing transitions indexed by the destination token.
	/// The value represents how many times this transition was observed.
	/// Example: { "cat" => 42, "dog" => 3 }
	transitions: BTreeMap<String, usize>,
}

impl State {
	/// Creates a new empty state for the given source token.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			transitions: BTreeMap::new(),
		}
	}

	/// Returns the source token of this state.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Records an occurrence of a transition toward `destination`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is created with an initial count of 1.
	pub fn add_transition(&mut self, destination: &str) {
		match self.transitions.get_mut(destination) {
			Some(occurrence) => *occurrence += 1,
			None => {
				self.transitions.insert(destination.to_owned(), 1);
			}
		}
	}

	/// Occurrence count of the transition toward `destination` (0 if unseen).
	pub fn weight(&self, destination: &str) -> usize {
		self.transitions.get(destination).copied().unwrap_or(0)
	}

	/// Iterates over transitions with a strictly positive count.
	pub fn edges(&self) -> impl Iterator<Item = (&str, usize)> {
		self.transitions
			.iter()
			.filter(|(_, occurrence)| **occurrence > 0)
			.map(|(destination, occurrence)| (destination.as_str(), *occurrence))
	}

	/// True if at least one transition has a positive count.
	pub fn has_edges(&self) -> bool {
		self.edges().next().is_some()
	}

	/// Draws the word that follows `key`.
	///
	/// A destination word is picked with probability equal to its count
	/// divided by the summed counts of the row. One uniform value in
	/// `0..total` is taken from `rng`, then counts are subtracted in word
	/// order until it falls inside one.
	///
	/// Returns `None` if no word with a positive count follows `key`.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let total: usize = self.edges().map(|(_, occurrence)| occurrence).sum();
		if total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..total);

		let mut fallback: Option<&str> = None;
		for (destination, occurrence) in self.edges() {
			if r < occurrence {
				return Some(destination);
			}
			r -= occurrence;
			fallback = Some(destination);
		}

		// Unreachable while `r < total`
		fallback
	}
}
