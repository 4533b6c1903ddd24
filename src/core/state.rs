//! The game state aggregate.
//!
//! `GameState` is a plain value: cloning it is a complete snapshot, and
//! comparing two of them is a structural comparison. Only the engine
//! mutates it.

use super::final_round::FinalRound;
use super::player::{Player, PlayerRegistry};
use super::steal::StealChain;
use serde::{Deserialize, Serialize};

/// Which sub-machine is driving the game.
///
/// The final round is not a mode of its own; it is carried alongside
/// `Normal` or `Steal` in [`GameState::final_round`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum Mode {
    /// Ordinary turn: roll, add points, bank or farkle.
    Normal,
    /// A farkled pool is being offered around the table.
    Steal(StealChain),
    /// Terminal. The winner is a roster index.
    GameOver { winner: usize },
}

impl Mode {
    pub fn name(&self) -> &str {
        match self {
            Self::Normal => "Normal",
            Self::Steal(_) => "Steal",
            Self::GameOver { .. } => "GameOver",
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}

/// Everything needed to render or resume a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: PlayerRegistry,
    pub(crate) current_turn: usize,
    pub(crate) turn_points: u32,
    pub(crate) mode: Mode,
    pub(crate) final_round: Option<FinalRound>,
    pub(crate) started: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            players: PlayerRegistry::new(),
            current_turn: 0,
            turn_points: 0,
            mode: Mode::Normal,
            final_round: None,
            started: false,
        }
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Seat whose turn it is. Meaningless while the roster is empty.
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.current_turn)
    }

    /// Unbanked points of the active turn, or of the stealer's attempt.
    pub fn turn_points(&self) -> u32 {
        self.turn_points
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn steal(&self) -> Option<&StealChain> {
        match &self.mode {
            Mode::Steal(chain) => Some(chain),
            _ => None,
        }
    }

    pub fn in_steal_phase(&self) -> bool {
        self.steal().is_some()
    }

    pub fn final_round(&self) -> Option<&FinalRound> {
        self.final_round.as_ref()
    }

    pub fn in_final_round(&self) -> bool {
        self.final_round.is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.mode.is_final()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.mode {
            Mode::GameOver { winner } => self.players.get(winner),
            _ => None,
        }
    }

    pub fn winner_index(&self) -> Option<usize> {
        match self.mode {
            Mode::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Whether any points have been banked or stolen since the last restart.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// The seat the steal offer is on while stealing, otherwise the active seat.
    pub fn acting_seat(&self) -> usize {
        self.steal().map_or(self.current_turn, StealChain::stealer)
    }
}
