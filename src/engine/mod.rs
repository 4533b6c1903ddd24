//! Command processing for a running game.
//!
//! The engine owns the [`GameState`](crate::core::GameState) and is the
//! only thing that changes it. Callers issue one command at a time:
//!
//! - **Normal play**: `add_points`, `add_scoring`, `bank_turn`, `declare_farkle`
//! - **Steal chain**: `claim_steal`, `pass_farkle`, `decline_steal`
//! - **Roster**: `add_player`, `remove_player`
//! - **Control**: `undo`, `restart_game`, `new_game`
//!
//! Each command either applies completely or returns a
//! [`GameError`](crate::core::GameError) and leaves the state untouched.

mod machine;

pub use machine::TurnEngine;
