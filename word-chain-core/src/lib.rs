//! First-order Markov chain over word tokens.
//!
//! This crate provides a small word-level generation system including:
//! - A transition table counting observed token-to-token adjacencies
//! - Training from an ordered token sequence (full reset on each call)
//! - Weighted random sampling of the next token
//! - Bounded sequence generation with an explicit, caller-visible cursor
//!
//! Reading the input text and printing the result are left to the caller.
//! The `text` module only offers the trivial whitespace split and join.

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Transition table, sampling, generation and the `Chain` aggregate.
pub mod model;

/// Whitespace tokenizer and space joiner.
pub mod text;

pub use error::ChainError;
pub use model::chain::Chain;
pub use model::cursor::Cursor;
pub use model::options::GenerateOptions;
pub use model::transition_table::TransitionTable;
