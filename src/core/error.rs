//! Errors returned by game commands.

use serde::Serialize;
use thiserror::Error;

/// Reasons a command can be rejected.
///
/// Every error is recoverable. A command that returns one of these leaves
/// the game state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum GameError {
    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Players cannot be removed once the game is under way")]
    GameInProgress,

    #[error("The game is over; restart or start a new game")]
    GameOver,

    #[error("Opening bank needs at least {required} points (have {offered})")]
    BelowMinimumOpeningScore { required: u32, offered: u32 },

    #[error("No unbanked points to farkle")]
    NoUnbankedPoints,

    #[error("A steal needs at least 2 players (have {count})")]
    InsufficientPlayers { count: usize },

    #[error("Farkles are not allowed on the last turn of the final round")]
    NoStealOnLastTurn,

    #[error("Nothing to undo")]
    EmptyHistory,

    #[error("No players in the game")]
    NoPlayers,

    #[error("No player with id '{id}'")]
    UnknownPlayer { id: String },

    #[error("No scoring option labelled '{label}'")]
    UnknownScoringOption { label: String },

    #[error("No steal is in progress")]
    NotInStealPhase,

    #[error("A steal is in progress; claim, pass or decline first")]
    StealInProgress,

    #[error("Declining a steal is disabled by the house rules")]
    DeclineDisabled,
}
