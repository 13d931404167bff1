//! Model side of the crate.
//!
//! Everything needed to learn word adjacencies and replay them:
//! - The learned transition counts (`TransitionTable`)
//! - The explicit generation state (`Cursor`)
//! - Validated generation parameters (`GenerateOptions`)
//! - The generation loop (`generator`)
//! - The aggregate owning a table and a cursor (`Chain`)

/// Aggregate owning one transition table and one cursor.
///
/// Handles training (full reset), cursor control and generation
/// with either the thread RNG or an injected one.
pub mod chain;

/// Explicit "current token" state used between generation steps.
pub mod cursor;

/// Sequence production: seeding, stepping, restart and early stop.
pub mod generator;

/// Generation parameters (length, start token, restart policy).
pub mod options;

/// Source token to weighted destination tokens.
///
/// Handles edge insertion, edge listing, uniform start selection
/// and single-step weighted sampling.
pub mod transition_table;

/// Per-word row of the transition table: follower counts and the
/// weighted draw over them. Crate-private.
mod state;
