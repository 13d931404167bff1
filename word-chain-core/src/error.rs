use thiserror::Error;

/// Failures surfaced to the caller.
///
/// Reaching a token without continuation is not an error: the generator
/// either restarts from its seed or stops early, depending on the options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
	/// No start token was given, no cursor was set and the table is empty.
	#[error("Cannot pick a start token: the model has no transitions")]
	EmptyModel,

	/// The requested output length is below 1.
	#[error("Length must be >= 1, got {0}")]
	InvalidLength(usize),
}
