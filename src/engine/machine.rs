//! Turn engine: the only component callers drive directly.

use crate::config::{LastTurnFarkle, PassedPoints, Rules};
use crate::core::{
    ChainStep, Command, FinalRound, GameError, GameState, HistoryStack, Mode, Player, PlayerId,
    RoundProgress, StealChain,
};
use std::mem;
use tracing::{debug, info};

/// Orchestrates turns, steals, the final round and undo.
///
/// Every command is atomic: it is applied to a copy of the state and only
/// committed, with a snapshot of the previous state, if it succeeds.
///
/// # Example
///
/// ```rust
/// use farkle_house::TurnEngine;
///
/// let mut engine = TurnEngine::default();
/// engine.add_player("Ada").unwrap();
/// engine.add_player("Bo").unwrap();
///
/// engine.add_scoring("3 x 5s").unwrap();
/// engine.add_scoring("1 x (5)").unwrap();
/// let state = engine.bank_turn().unwrap();
///
/// assert_eq!(state.players().score(0), 550);
/// assert_eq!(state.current_turn(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine {
    state: GameState,
    history: HistoryStack,
    rules: Rules,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl TurnEngine {
    pub fn new(rules: Rules) -> Self {
        Self {
            state: GameState::new(),
            history: HistoryStack::with_limit(rules.history_limit()),
            rules,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.state.active_player()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.state.winner()
    }

    /// Render the current state as JSON for a presentation layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state)
    }

    pub fn add_player(&mut self, name: &str) -> Result<&GameState, GameError> {
        let command = Command::AddPlayer {
            name: name.trim().to_string(),
        };
        self.execute(command, |state, _| {
            ensure_live(state)?;
            if state.in_final_round() {
                return Err(GameError::GameInProgress);
            }
            state.players.add(name)?;
            Ok(())
        })
    }

    /// Remove a player. Only allowed before anyone has banked.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<&GameState, GameError> {
        self.execute(Command::RemovePlayer { id }, |state, _| {
            let pre_game = !state.started
                && state.mode == Mode::Normal
                && state.final_round.is_none();
            if !pre_game {
                return Err(GameError::GameInProgress);
            }

            let (index, _) = state.players.remove(id)?;
            if index == state.current_turn || state.players.is_empty() {
                state.current_turn = 0;
                state.turn_points = 0;
            } else if index < state.current_turn {
                state.current_turn -= 1;
            }
            Ok(())
        })
    }

    pub fn add_points(&mut self, amount: u32) -> Result<&GameState, GameError> {
        self.execute(Command::AddPoints { amount }, |state, _| {
            accumulate(state, amount)
        })
    }

    /// Add the value of a catalog entry to the running turn.
    pub fn add_scoring(&mut self, label: &str) -> Result<&GameState, GameError> {
        ensure_live(&self.state)?;
        let amount = self
            .rules
            .catalog()
            .value_of(label)
            .ok_or_else(|| GameError::UnknownScoringOption {
                label: label.to_string(),
            })?;
        let command = Command::AddScoring {
            label: label.to_string(),
            amount,
        };
        self.execute(command, |state, _| accumulate(state, amount))
    }

    pub fn bank_turn(&mut self) -> Result<&GameState, GameError> {
        self.execute(Command::BankTurn, |state, rules| {
            ensure_live(state)?;
            ensure_players(state)?;
            if state.in_steal_phase() {
                return Err(GameError::StealInProgress);
            }

            let seat = state.current_turn;
            if state.players.score(seat) == 0 && state.turn_points < rules.minimum_opening() {
                return Err(GameError::BelowMinimumOpeningScore {
                    required: rules.minimum_opening(),
                    offered: state.turn_points,
                });
            }

            let banked = mem::take(&mut state.turn_points);
            let total = state.players.credit(seat, banked);
            state.players.note(seat, format!("Banked {banked}"));
            state.started = true;
            debug!(seat = seat, banked = banked, total = total, "turn banked");

            if !after_bank(state, rules, seat, total) {
                state.current_turn = state.players.next_index(seat);
            }
            Ok(())
        })
    }

    pub fn declare_farkle(&mut self) -> Result<&GameState, GameError> {
        self.execute(Command::DeclareFarkle, |state, rules| {
            ensure_live(state)?;
            if state.in_steal_phase() {
                return Err(GameError::StealInProgress);
            }
            if state.turn_points == 0 {
                return Err(GameError::NoUnbankedPoints);
            }
            if state.players.len() < 2 {
                return Err(GameError::InsufficientPlayers {
                    count: state.players.len(),
                });
            }
            if let Some(round) = &state.final_round {
                if round.is_last_turn() && rules.last_turn_farkle() == LastTurnFarkle::Reject {
                    return Err(GameError::NoStealOnLastTurn);
                }
            }

            let farkler = state.current_turn;
            let pool = mem::take(&mut state.turn_points);
            let chain = StealChain::begin(farkler, pool, state.players.len());
            state.players.note(farkler, format!("Farkled {pool}"));
            state.mode = Mode::Steal(chain);
            info!(
                farkler = farkler,
                pool = pool,
                stealer = chain.stealer(),
                "steal chain opened"
            );
            Ok(())
        })
    }

    /// The current stealer takes the pool plus whatever they added.
    pub fn claim_steal(&mut self) -> Result<&GameState, GameError> {
        self.execute(Command::ClaimSteal, |state, rules| {
            ensure_live(state)?;
            let chain = active_chain(state)?;

            let stealer = chain.stealer();
            let amount = chain.claim_total(mem::take(&mut state.turn_points));
            let total = state.players.credit(stealer, amount);
            state.players.note(stealer, format!("Stole {amount}"));
            state.started = true;
            state.mode = Mode::Normal;
            state.current_turn = stealer;
            info!(stealer = stealer, amount = amount, total = total, "steal claimed");

            after_bank(state, rules, stealer, total);
            Ok(())
        })
    }

    /// The current stealer busts; the offer moves on or is forfeited.
    pub fn pass_farkle(&mut self) -> Result<&GameState, GameError> {
        self.execute(Command::PassFarkle, |state, rules| {
            ensure_live(state)?;
            let chain = active_chain(state)?;

            let attempt = mem::take(&mut state.turn_points);
            let carried = match rules.passed_points() {
                PassedPoints::JoinPool => attempt,
                PassedPoints::Discard => 0,
            };
            state.players.note(chain.stealer(), "Passed");

            match chain.pass(carried, state.players.len()) {
                ChainStep::Offered(next) => {
                    debug!(stealer = next.stealer(), pool = next.pool(), "steal passed on");
                    state.mode = Mode::Steal(next);
                }
                ChainStep::Exhausted { forfeited, farkler } => {
                    info!(farkler = farkler, forfeited = forfeited, "steal pool forfeited");
                    state.mode = Mode::Normal;
                    state.current_turn = farkler;
                    if state.in_final_round() {
                        conclude_final_turn(state);
                    }
                }
            }
            Ok(())
        })
    }

    /// The current stealer lets the pool go and starts an ordinary turn.
    pub fn decline_steal(&mut self) -> Result<&GameState, GameError> {
        self.execute(Command::DeclineSteal, |state, rules| {
            ensure_live(state)?;
            let chain = active_chain(state)?;
            if !rules.allow_decline() {
                return Err(GameError::DeclineDisabled);
            }

            let stealer = chain.stealer();
            state.turn_points = 0;
            state.mode = Mode::Normal;
            state.current_turn = stealer;
            state.players.note(stealer, "Declined");
            info!(stealer = stealer, discarded = chain.pool(), "steal declined");

            if state.in_final_round() {
                conclude_final_turn(state);
            }
            Ok(())
        })
    }

    /// Revert the most recent accepted command.
    pub fn undo(&mut self) -> Result<&GameState, GameError> {
        let previous = self.history.undo()?;
        self.state = previous;
        debug!(remaining = self.history.len(), "undo");
        Ok(&self.state)
    }

    /// Zero every score and start over with the same players.
    pub fn restart_game(&mut self) -> &GameState {
        let mut players = mem::take(&mut self.state.players);
        players.reset_scores();
        self.state = GameState {
            players,
            ..GameState::new()
        };
        self.history.clear();
        info!(players = self.state.players.len(), "game restarted");
        &self.state
    }

    /// Clear the roster and all progress.
    pub fn new_game(&mut self) -> &GameState {
        self.state = GameState::new();
        self.history.clear();
        info!("new game");
        &self.state
    }

    fn execute<F>(&mut self, command: Command, apply: F) -> Result<&GameState, GameError>
    where
        F: FnOnce(&mut GameState, &Rules) -> Result<(), GameError>,
    {
        let mut next = self.state.clone();
        if let Err(err) = apply(&mut next, &self.rules) {
            debug!(command = %command, error = %err, "command rejected");
            return Err(err);
        }

        debug!(command = %command, mode = next.mode.name(), "command applied");
        let previous = mem::replace(&mut self.state, next);
        self.history.push(command, previous);
        Ok(&self.state)
    }
}

fn ensure_live(state: &GameState) -> Result<(), GameError> {
    if state.is_game_over() {
        Err(GameError::GameOver)
    } else {
        Ok(())
    }
}

fn ensure_players(state: &GameState) -> Result<(), GameError> {
    if state.players.is_empty() {
        Err(GameError::NoPlayers)
    } else {
        Ok(())
    }
}

fn active_chain(state: &GameState) -> Result<StealChain, GameError> {
    state.steal().copied().ok_or(GameError::NotInStealPhase)
}

fn accumulate(state: &mut GameState, amount: u32) -> Result<(), GameError> {
    ensure_live(state)?;
    ensure_players(state)?;
    state.turn_points = state.turn_points.saturating_add(amount);
    Ok(())
}

/// Final-round bookkeeping after `scorer` banked up to `total`.
///
/// Returns true if the final round decided who plays next.
fn after_bank(state: &mut GameState, rules: &Rules, scorer: usize, total: u32) -> bool {
    if state.in_final_round() {
        conclude_final_turn(state);
        return true;
    }
    if FinalRound::triggered_by(total, rules.winning_threshold()) {
        start_final_round(state, scorer);
        return true;
    }
    false
}

fn start_final_round(state: &mut GameState, scorer: usize) {
    let round = FinalRound::start(scorer, state.players.len());
    info!(
        starter = scorer,
        queued = round.remaining().len(),
        "final round started"
    );

    let next = round.current();
    state.final_round = Some(round);
    match next {
        Some(seat) => state.current_turn = seat,
        None => finish_game(state),
    }
}

/// The queued player at the head of the final round is done.
fn conclude_final_turn(state: &mut GameState) {
    let Some(round) = state.final_round.as_mut() else {
        return;
    };
    match round.advance() {
        RoundProgress::Next(seat) => state.current_turn = seat,
        RoundProgress::Finished => finish_game(state),
    }
}

fn finish_game(state: &mut GameState) {
    let winner = FinalRound::winner(&state.players).unwrap_or(0);
    state.turn_points = 0;
    state.mode = Mode::GameOver { winner };
    state.players.note(winner, "Winner");
    info!(
        winner = winner,
        score = state.players.score(winner),
        "game over"
    );
}
