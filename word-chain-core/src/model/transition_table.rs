use super::state::State;
use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::BTreeMap;

/// Represents the learned transitions of a first-order chain.
///
/// The `TransitionTable` stores one state per source token and allows
/// probabilistic prediction of the token that follows it.
///
/// # Responsibilities
/// - Count observed (source, destination) adjacencies
/// - List the outgoing edges of a source token
/// - Pick a uniformly random start among tokens with outgoing edges
/// - Predict the next token given a source token
///
/// # Invariants
/// - Each state in `states` corresponds to a unique source token
/// - Destinations with a count of 0 are never listed nor sampled
/// - Tokens are compared by exact string equality, no normalization
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
	/// Mapping from a source token to its outgoing transitions
	states: BTreeMap<String, State>,
}

impl TransitionTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Increments the weight of the `source → destination` edge by 1.
	///
	/// Creates the source row and the destination entry when absent.
	pub fn insert(&mut self, source: &str, destination: &str) {
		match self.states.get_mut(source) {
			Some(state) => state.add_transition(destination),
			None => {
				let mut state = State::new(source);
				state.add_transition(destination);
				self.states.insert(source.to_owned(), state);
			}
		}
	}

	/// Returns the weight of the `source → destination` edge (0 if unseen).
	pub fn weight(&self, source: &str, destination: &str) -> usize {
		self.states
			.get(source)
			.map(|state| state.weight(destination))
			.unwrap_or(0)
	}

	/// Returns every destination reachable from `source` with a positive weight.
	///
	/// An unknown `source` yields an empty list.
	pub fn outgoing_edges(&self, source: &str) -> Vec<(&str, usize)> {
		match self.states.get(source) {
			Some(state) => state.edges().collect(),
			None => Vec::new(),
		}
	}

	/// Iterates over every token having at least one outgoing edge.
	pub fn source_tokens(&self) -> impl Iterator<Item = &str> {
		self.states
			.values()
			.filter(|state| state.has_edges())
			.map(|state| state.key())
	}

	/// Returns a uniformly random source token.
	///
	/// Picks the seed when neither a start word nor a cursor is available.
	/// Returns `None` if the table has no edges.
	pub fn random_source<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.source_tokens().choose(rng)
	}

	/// Predicts the token following `source`.
	///
	/// Returns `None` if `source` is unknown or has no outgoing edge.
	/// The table itself is left untouched.
	pub fn next_token<R: Rng + ?Sized>(&self, source: &str, rng: &mut R) -> Option<&str> {
		self.states.get(source)?.predict(rng)
	}

	/// Number of source tokens with at least one outgoing edge.
	pub fn len(&self) -> usize {
		self.source_tokens().count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops every edge.
	pub fn clear(&mut self) {
		self.states.clear();
	}
}
