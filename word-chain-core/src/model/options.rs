use crate::error::ChainError;

/// Input parameters for generating a token sequence.
///
/// # Responsibilities
/// - Track the requested output length (validated, always >= 1)
/// - Track the optional explicit start token
/// - Track the dead-end policy (restart from the seed or stop early)
///
/// # Invariants
/// - `length` is never 0: every constructor and setter rejects it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
	/// Maximum number of tokens in the output (seed included).
	length: usize,

	/// Token to start from. When `None`, the current cursor is reused,
	/// or a random source token is picked if the cursor is unset.
	pub start: Option<String>,

	/// On a token without continuation, append the seed again and continue
	/// from it (`true`), or stop with a shorter output (`false`).
	pub restart_on_dead_end: bool,
}

impl GenerateOptions {
	/// Creates options for a sequence of at most `length` tokens.
	///
	/// No start token and no restart by default.
	///
	/// # Errors
	/// Returns `ChainError::InvalidLength` if `length < 1`.
	pub fn new(length: usize) -> Result<Self, ChainError> {
		let mut options = Self {
			length: 1,
			start: None,
			restart_on_dead_end: false,
		};
		options.set_length(length)?;
		Ok(options)
	}

	/// Returns the requested length.
	pub fn length(&self) -> usize {
		self.length
	}

	/// Sets the requested length.
	///
	/// # Errors
	/// Returns `ChainError::InvalidLength` if `length < 1`.
	pub fn set_length(&mut self, length: usize) -> Result<(), ChainError> {
		if length < 1 {
			return Err(ChainError::InvalidLength(length));
		}
		self.length = length;
		Ok(())
	}

	pub fn with_start(mut self, start: &str) -> Self {
		self.start = Some(start.to_owned());
		self
	}

	pub fn with_restart(mut self, restart_on_dead_end: bool) -> Self {
		self.restart_on_dead_end = restart_on_dead_end;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_length_is_rejected() {
		assert_eq!(GenerateOptions::new(0), Err(ChainError::InvalidLength(0)));

		let mut options = GenerateOptions::new(3).unwrap();
		assert_eq!(options.set_length(0), Err(ChainError::InvalidLength(0)));
		assert_eq!(options.length(), 3);
	}

	#[test]
	fn builder_helpers() {
		let options = GenerateOptions::new(10).unwrap().with_start("hello").with_restart(true);
		assert_eq!(options.length(), 10);
		assert_eq!(options.start.as_deref(), Some("hello"));
		assert!(options.restart_on_dead_end);
	}
}
