//! Player roster and banked scores.
//!
//! The registry owns players in turn order. It knows nothing about whose
//! turn it is; the engine resolves indices against it at the moment of use.

use super::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable player identifier, assigned once at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A seated player and their banked score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    /// Display label for the most recent thing this player did.
    pub last_action: Option<String>,
}

/// Ordered roster. Insertion order is turn order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a player with a zero score.
    ///
    /// The name is trimmed; an empty result is rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use farkle_house::core::{GameError, PlayerRegistry};
    ///
    /// let mut roster = PlayerRegistry::new();
    /// let id = roster.add("  Ada ").unwrap();
    /// assert_eq!(roster.get(0).unwrap().name, "Ada");
    /// assert_eq!(roster.index_of(id), Some(0));
    /// assert_eq!(roster.add("   "), Err(GameError::EmptyName));
    /// ```
    pub fn add(&mut self, name: &str) -> Result<PlayerId, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        let id = PlayerId::fresh();
        self.players.push(Player {
            id,
            name: name.to_string(),
            score: 0,
            last_action: None,
        });
        Ok(id)
    }

    /// Remove a player by id, returning the index they occupied.
    pub fn remove(&mut self, id: PlayerId) -> Result<(usize, Player), GameError> {
        let index = self.index_of(id).ok_or_else(|| GameError::UnknownPlayer {
            id: id.to_string(),
        })?;
        Ok((index, self.players.remove(index)))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Score of the player at `index`, or 0 if the seat is empty.
    pub fn score(&self, index: usize) -> u32 {
        self.players.get(index).map_or(0, |p| p.score)
    }

    /// Seat after `index`, wrapping around the table.
    pub fn next_index(&self, index: usize) -> usize {
        if self.players.is_empty() {
            0
        } else {
            (index + 1) % self.players.len()
        }
    }

    /// Index of the highest score. Ties go to the earliest seat.
    pub fn leader(&self) -> Option<usize> {
        self.players
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, u32)>, (i, p)| match best {
                Some((_, top)) if top >= p.score => best,
                _ => Some((i, p.score)),
            })
            .map(|(i, _)| i)
    }

    /// Add `amount` to a player's banked score and return the new total.
    pub(crate) fn credit(&mut self, index: usize, amount: u32) -> u32 {
        match self.players.get_mut(index) {
            Some(player) => {
                player.score = player.score.saturating_add(amount);
                player.score
            }
            None => 0,
        }
    }

    pub(crate) fn note(&mut self, index: usize, action: impl Into<String>) {
        if let Some(player) = self.players.get_mut(index) {
            player.last_action = Some(action.into());
        }
    }

    /// Zero every score and clear action labels, keeping the seating.
    pub(crate) fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.score = 0;
            player.last_action = None;
        }
    }
}
