//! Core game types.
//!
//! This module holds the pure data of a game:
//! - The roster and banked scores
//! - The steal chain and final-round queue sub-machines
//! - The `GameState` aggregate and its undo history
//!
//! Nothing here decides whose turn it is; that is the engine's job.

mod command;
mod error;
mod final_round;
mod history;
mod player;
mod state;
mod steal;

pub use command::Command;
pub use error::GameError;
pub use final_round::{FinalRound, RoundProgress};
pub use history::{HistoryStack, Snapshot};
pub use player::{Player, PlayerId, PlayerRegistry};
pub use state::{GameState, Mode};
pub use steal::{ChainStep, StealChain};
