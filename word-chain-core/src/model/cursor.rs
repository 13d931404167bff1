/// The token the next generation step is sampled from.
///
/// Either unset (nothing generated yet) or holding exactly one token.
/// A cursor survives between `generate` calls, so a caller can continue
/// where the previous sequence stopped, or `reset` it to start over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
	current: Option<String>,
}

impl Cursor {
	/// Creates an unset cursor.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a cursor already pointing at `token`.
	pub fn at(token: &str) -> Self {
		Self { current: Some(token.to_owned()) }
	}

	pub fn current(&self) -> Option<&str> {
		self.current.as_deref()
	}

	pub fn is_set(&self) -> bool {
		self.current.is_some()
	}

	pub fn set(&mut self, token: &str) {
		self.current = Some(token.to_owned());
	}

	/// Unsets the cursor.
	pub fn reset(&mut self) {
		self.current = None;
	}
}
