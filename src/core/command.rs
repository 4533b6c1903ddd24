//! Mutating commands, as recorded in the undo history.

use super::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A command that changes the game state and can be undone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    AddPlayer { name: String },
    RemovePlayer { id: PlayerId },
    AddPoints { amount: u32 },
    AddScoring { label: String, amount: u32 },
    BankTurn,
    DeclareFarkle,
    ClaimSteal,
    PassFarkle,
    DeclineSteal,
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Self::AddPlayer { .. } => "AddPlayer",
            Self::RemovePlayer { .. } => "RemovePlayer",
            Self::AddPoints { .. } => "AddPoints",
            Self::AddScoring { .. } => "AddScoring",
            Self::BankTurn => "BankTurn",
            Self::DeclareFarkle => "DeclareFarkle",
            Self::ClaimSteal => "ClaimSteal",
            Self::PassFarkle => "PassFarkle",
            Self::DeclineSteal => "DeclineSteal",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddPlayer { name } => write!(f, "add player {name}"),
            Self::RemovePlayer { id } => write!(f, "remove player {id}"),
            Self::AddPoints { amount } => write!(f, "add {amount} points"),
            Self::AddScoring { label, amount } => write!(f, "score {label} (+{amount})"),
            Self::BankTurn => f.write_str("bank turn"),
            Self::DeclareFarkle => f.write_str("farkle"),
            Self::ClaimSteal => f.write_str("claim steal"),
            Self::PassFarkle => f.write_str("pass farkle"),
            Self::DeclineSteal => f.write_str("decline steal"),
        }
    }
}
