//! Undo history.
//!
//! Every accepted command pushes a full clone of the state it replaced.
//! Undo pops the most recent snapshot and hands it back wholesale, steal
//! and final-round sub-state included.

use super::command::Command;
use super::error::GameError;
use super::state::GameState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State as it was immediately before `command` ran.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The command this snapshot precedes
    pub command: Command,
    /// When the command was accepted
    pub taken_at: DateTime<Utc>,
    /// The state to restore on undo
    pub state: GameState,
}

/// Stack of snapshots, newest last.
///
/// # Example
///
/// ```rust
/// use farkle_house::core::{Command, GameError, GameState, HistoryStack};
///
/// let mut history = HistoryStack::new();
/// assert_eq!(history.undo(), Err(GameError::EmptyHistory));
///
/// history.push(Command::BankTurn, GameState::new());
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.last_command(), Some(&Command::BankTurn));
///
/// let restored = history.undo().unwrap();
/// assert_eq!(restored, GameState::new());
/// assert!(history.is_empty());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryStack {
    snapshots: Vec<Snapshot>,
    limit: Option<usize>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` snapshots, dropping the oldest.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            snapshots: Vec::new(),
            limit,
        }
    }

    /// Record the state that `command` is about to replace.
    pub fn push(&mut self, command: Command, state: GameState) {
        self.snapshots.push(Snapshot {
            command,
            taken_at: Utc::now(),
            state,
        });

        if let Some(limit) = self.limit {
            let excess = self.snapshots.len().saturating_sub(limit);
            if excess > 0 {
                self.snapshots.drain(..excess);
            }
        }
    }

    /// Pop the newest snapshot and return the state it holds.
    pub fn undo(&mut self) -> Result<GameState, GameError> {
        self.snapshots
            .pop()
            .map(|snapshot| snapshot.state)
            .ok_or(GameError::EmptyHistory)
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// The command an undo would revert.
    pub fn last_command(&self) -> Option<&Command> {
        self.snapshots.last().map(|s| &s.command)
    }

    /// All snapshots, oldest first.
    pub fn entries(&self) -> &[Snapshot] {
        &self.snapshots
    }
}
