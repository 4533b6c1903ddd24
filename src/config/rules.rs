//! House rules consumed by the engine.

use super::builder::RulesBuilder;
use super::catalog::ScoringCatalog;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINNING_THRESHOLD: u32 = 10_000;
pub const DEFAULT_MINIMUM_OPENING: u32 = 500;

/// What a farkle on the last turn of the final round does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastTurnFarkle {
    /// The steal chain runs as usual; resolving it ends the game.
    ///
    /// A claim credits the stealer before the winner is picked, so the
    /// claim can change who wins.
    #[default]
    Steal,
    /// The farkle is rejected with `NoStealOnLastTurn`.
    Reject,
}

/// What happens to points a stealer added before passing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassedPoints {
    /// They join the pool offered to the next seat.
    #[default]
    JoinPool,
    /// They are lost.
    Discard,
}

/// Validated house rules. Build them with [`Rules::builder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub(crate) winning_threshold: u32,
    pub(crate) minimum_opening: u32,
    pub(crate) last_turn_farkle: LastTurnFarkle,
    pub(crate) passed_points: PassedPoints,
    pub(crate) allow_decline: bool,
    pub(crate) history_limit: Option<usize>,
    pub(crate) catalog: ScoringCatalog,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            winning_threshold: DEFAULT_WINNING_THRESHOLD,
            minimum_opening: DEFAULT_MINIMUM_OPENING,
            last_turn_farkle: LastTurnFarkle::default(),
            passed_points: PassedPoints::default(),
            allow_decline: true,
            history_limit: None,
            catalog: ScoringCatalog::house(),
        }
    }
}

impl Rules {
    pub fn builder() -> RulesBuilder {
        RulesBuilder::new()
    }

    /// Score that starts the final round.
    pub fn winning_threshold(&self) -> u32 {
        self.winning_threshold
    }

    /// Points a player with no score must reach before their first bank.
    pub fn minimum_opening(&self) -> u32 {
        self.minimum_opening
    }

    pub fn last_turn_farkle(&self) -> LastTurnFarkle {
        self.last_turn_farkle
    }

    pub fn passed_points(&self) -> PassedPoints {
        self.passed_points
    }

    pub fn allow_decline(&self) -> bool {
        self.allow_decline
    }

    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    pub fn catalog(&self) -> &ScoringCatalog {
        &self.catalog
    }
}
