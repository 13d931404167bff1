use crate::error::ChainError;
use crate::model::cursor::Cursor;
use crate::model::options::GenerateOptions;
use crate::model::transition_table::TransitionTable;
use log::{debug, trace};
use rand::Rng;

/// Generates a token sequence from a transition table.
///
/// # Parameters
/// - `table`: Learned transitions, only read.
/// - `cursor`: Current token. Read when no start is given, then updated
///   after every emitted token.
/// - `options`: Length, optional start token and dead-end policy.
/// - `rng`: Randomness source, consulted once per step and once for a
///   random seed.
///
/// # Behavior
/// - The seed is `options.start`, else the current cursor, else a uniformly
///   random source token of the table.
/// - The seed is always the first output token, even when `length == 1`.
/// - While the output is shorter than `length`, the next token is sampled
///   from the cursor.
/// - On a dead end with `restart_on_dead_end`, the seed (not the dead-end
///   token) is appended again and the cursor moves back to it.
/// - On a dead end without restart, generation stops early.
///
/// # Returns
/// - `Ok(Vec<String>)` with at most `length` tokens, exactly `length` when
///   restart is enabled.
///
/// # Errors
/// - `ChainError::EmptyModel` if a random seed is needed but the table has
///   no edges.
pub fn generate<R: Rng + ?Sized>(
	table: &TransitionTable,
	cursor: &mut Cursor,
	options: &GenerateOptions,
	rng: &mut R,
) -> Result<Vec<String>, ChainError> {
	let length = options.length();
	debug_assert!(length >= 1, "GenerateOptions always holds a length >= 1");

	let seed: String = match (&options.start, cursor.current()) {
		(Some(start), _) => start.clone(),
		(None, Some(current)) => current.to_owned(),
		(None, None) => match table.random_source(rng) {
			Some(source) => source.to_owned(),
			None => return Err(ChainError::EmptyModel),
		},
	};
	debug!("Generating up to {} tokens from seed {:?}", length, seed);

	cursor.set(&seed);
	let mut tokens = Vec::with_capacity(length);
	tokens.push(seed.clone());

	while tokens.len() < length {
		let current = cursor.current().unwrap_or(seed.as_str());
		match table.next_token(current, rng) {
			Some(next) => {
				trace!("{:?} -> {:?}", current, next);
				let next = next.to_owned();
				cursor.set(&next);
				tokens.push(next);
			}
			None if options.restart_on_dead_end => {
				trace!("Dead end at {:?}, restarting from {:?}", current, seed);
				cursor.set(&seed);
				tokens.push(seed.clone());
			}
			None => {
				debug!("Dead end at {:?}, stopping after {} of {} tokens", current, tokens.len(), length);
				break;
			}
		}
	}

	Ok(tokens)
}
