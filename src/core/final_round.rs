//! Final round scheduling.
//!
//! Once a bank carries a player past the winning threshold, every other
//! player is owed exactly one more turn. The queue holds those players in
//! seat order; the head of the queue is the player currently taking their
//! last turn and is popped when that turn concludes.

use super::player::PlayerRegistry;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Queue of players still owed a final turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalRound {
    starter: usize,
    remaining: VecDeque<usize>,
}

/// What happens after a final-round turn concludes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundProgress {
    /// The next queued player takes their turn.
    Next(usize),
    /// Everyone has had their turn.
    Finished,
}

impl FinalRound {
    /// Whether a freshly banked score crosses the threshold.
    pub fn triggered_by(score: u32, threshold: u32) -> bool {
        score >= threshold
    }

    /// Queue every seat except `scorer`, starting with the seat after them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use farkle_house::core::FinalRound;
    ///
    /// let round = FinalRound::start(1, 4);
    /// assert_eq!(round.remaining().iter().copied().collect::<Vec<_>>(), vec![2, 3, 0]);
    /// assert_eq!(round.current(), Some(2));
    /// ```
    pub fn start(scorer: usize, player_count: usize) -> Self {
        let remaining = (1..player_count)
            .map(|offset| (scorer + offset) % player_count)
            .collect();
        Self {
            starter: scorer,
            remaining,
        }
    }

    pub fn starter(&self) -> usize {
        self.starter
    }

    pub fn remaining(&self) -> &VecDeque<usize> {
        &self.remaining
    }

    /// Player taking their final turn right now.
    pub fn current(&self) -> Option<usize> {
        self.remaining.front().copied()
    }

    /// True while the last queued player is taking their turn.
    pub fn is_last_turn(&self) -> bool {
        self.remaining.len() == 1
    }

    pub fn is_finished(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Conclude the head player's turn.
    pub fn advance(&mut self) -> RoundProgress {
        self.remaining.pop_front();
        match self.remaining.front() {
            Some(&next) => RoundProgress::Next(next),
            None => RoundProgress::Finished,
        }
    }

    /// Highest score wins; ties go to the earliest seat.
    pub fn winner(players: &PlayerRegistry) -> Option<usize> {
        players.leader()
    }
}
